mod keys;
mod signer;

pub use keys::{account_address, decode_address, encode_address, CosmosWallet, QUICKSILVER_PREFIX};
pub use signer::TransactionSigner;
