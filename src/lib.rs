// Library exports for quicksilver_tx

pub mod chain;
pub mod config;
pub mod notify;
pub mod tx;

// Re-export main types for convenience
pub use chain::{ChainClient, ChainInfo, ChainRegistry, CosmosWallet, Msg};
pub use config::Config;
pub use notify::{Notifier, Toast, ToastHandle, ToastKind, TracingNotifier};
pub use tx::{FeeEstimator, StdFee, TxContext, TxError, TxOptions, TxResult};
