/// How much of a token a sell order should dispose of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SellAmount {
    /// Whatever the wallet holds at the time of the call.
    All,
    Exact(f64),
}

/// Spend `sol_amount` SOL on `token_address`.
#[derive(Debug, Clone, PartialEq)]
pub struct BuyOrder {
    pub token_address: String,
    pub sol_amount: f64,
    /// Percent, e.g. `1.0` for 1%.
    pub slippage: f64,
    pub compute_unit_limit: Option<u32>,
}

/// Sell `amount` of `token_address` for SOL.
#[derive(Debug, Clone, PartialEq)]
pub struct SellOrder {
    pub token_address: String,
    pub amount: SellAmount,
    /// Percent, e.g. `1.0` for 1%.
    pub slippage: f64,
    pub compute_unit_limit: Option<u32>,
}
