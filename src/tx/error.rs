use thiserror::Error;

pub const UNEXPECTED_ERROR: &str = "An unexpected error has occured";

/// Why a submission ended in `Failed`. Display is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxError {
    #[error("Wallet not connected")]
    WalletNotConnected,
    #[error("{0}")]
    Signing(String),
    #[error("{0}")]
    Broadcast(String),
    #[error("{raw_log}")]
    Rejected { code: u32, raw_log: String },
}

impl TxError {
    /// Fee, client acquisition or sign failure; an empty message becomes the generic one
    pub fn signing(err: anyhow::Error) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            TxError::Signing(UNEXPECTED_ERROR.to_string())
        } else {
            TxError::Signing(message)
        }
    }

    pub fn broadcast(err: anyhow::Error) -> Self {
        TxError::Broadcast(err.to_string())
    }

    pub fn rejected(code: u32, raw_log: &str) -> Self {
        let raw_log = if raw_log.is_empty() {
            format!("Transaction failed with code {}", code)
        } else {
            raw_log.to_string()
        };
        TxError::Rejected { code, raw_log }
    }
}
