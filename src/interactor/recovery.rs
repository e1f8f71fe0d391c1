use lazy_static::lazy_static;
use regex::Regex;
use solana_sdk::signature::Signature;
use std::str::FromStr;

/// Prefix of the error raised when a sent transaction was not seen confirmed in time.
pub const EXPIRED_TIMEOUT_MARKER: &str = "TransactionExpiredTimeoutError";

lazy_static! {
    static ref CHECK_SIGNATURE_RE: Regex = Regex::new(r"Check signature (\w+) using").unwrap();
}

/// How an error message relates to an expired transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpiryMatch {
    /// Not an expiry error; propagate it as is.
    Unrelated,
    /// Expired; carries the signature to re-check when the message names one.
    Expired(Option<Signature>),
}

/// Decides whether a failed swap may have landed anyway.
pub type ExpiryPolicy = fn(&str) -> ExpiryMatch;

/// Matches the `TransactionExpiredTimeoutError ... Check signature <sig> using ...` message.
pub fn expired_transaction_signature(message: &str) -> ExpiryMatch {
    if !message.starts_with(EXPIRED_TIMEOUT_MARKER) {
        return ExpiryMatch::Unrelated;
    }

    let signature = CHECK_SIGNATURE_RE
        .captures(message)
        .and_then(|captures| captures.get(1))
        .and_then(|m| Signature::from_str(m.as_str()).ok());

    ExpiryMatch::Expired(signature)
}

/// Policy that never attempts recovery.
pub fn no_recovery(_message: &str) -> ExpiryMatch {
    ExpiryMatch::Unrelated
}
