pub mod wallet;
pub mod messages;
pub mod client;
pub mod proto;
pub mod registry;
pub mod signing;
pub mod tx_builder;

pub use wallet::{CosmosWallet, TransactionSigner};
pub use client::{AccountInfo, ChainClient, ClientConfig};
pub use registry::{ChainInfo, ChainRegistry};
pub use signing::{
    DeliverTxResponse, DirectSigningClient, Disconnected, LocalWalletConnection, SigningClient,
    TxEvent, WalletConnection,
};
pub use tx_builder::TxBuilder;
pub use messages::{Msg, ComposeError};
pub use proto::Coin;
