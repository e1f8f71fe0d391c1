use log::warn;
use tokio::task::JoinHandle;

/// A broadcast swap and, when one was started, its confirmation listener.
#[derive(Debug)]
pub struct SwapReceipt {
    pub signature: String,
    confirmation: Option<JoinHandle<()>>,
}

impl SwapReceipt {
    pub fn new(signature: String, confirmation: Option<JoinHandle<()>>) -> Self {
        Self {
            signature,
            confirmation,
        }
    }

    pub fn is_watched(&self) -> bool {
        self.confirmation.is_some()
    }

    /// Wait for the listener to log the outcome; it is bounded by its own timeout.
    pub async fn wait_for_confirmation(self) {
        if let Some(confirmation) = self.confirmation {
            if let Err(e) = confirmation.await {
                warn!("Confirmation listener for {} did not finish: {}", self.signature, e);
            }
        }
    }
}
