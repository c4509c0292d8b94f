/// SIGN_MODE_DIRECT transaction builder for arbitrary message batches

use anyhow::Result;
use prost::Message;
use sha2::{Digest, Sha256};

use crate::chain::proto::cosmos::crypto::secp256k1::PubKey;
use crate::chain::proto::cosmos::tx::v1beta1::mode_info;
use crate::chain::proto::{
    Any, AuthInfo, Fee, ModeInfo, SignDoc, SignMode, SignerInfo, TxBody, TxRaw,
};
use crate::chain::wallet::{CosmosWallet, TransactionSigner};

pub const SECP256K1_PUBKEY_TYPE_URL: &str = "/cosmos.crypto.secp256k1.PubKey";

/// Builds and signs transactions for one account at one sequence
pub struct TxBuilder<'a> {
    chain_id: String,
    account_number: u64,
    sequence: u64,
    wallet: &'a CosmosWallet,
    signer: TransactionSigner,
}

impl<'a> TxBuilder<'a> {
    pub fn new(
        chain_id: String,
        account_number: u64,
        sequence: u64,
        wallet: &'a CosmosWallet,
    ) -> Self {
        Self {
            chain_id,
            account_number,
            sequence,
            wallet,
            signer: TransactionSigner::new(),
        }
    }

    /// Build and sign a transaction carrying `messages`
    pub fn build_signed(&self, messages: Vec<Any>, fee: Fee, memo: &str) -> Result<TxRaw> {
        let body_bytes = encode_body(messages, memo)?;
        let auth_info_bytes = self.encode_auth_info(fee)?;

        let sign_doc = SignDoc {
            body_bytes: body_bytes.clone(),
            auth_info_bytes: auth_info_bytes.clone(),
            chain_id: self.chain_id.clone(),
            account_number: self.account_number,
        };

        let private_key = self.wallet.private_key()?;
        let signature = self.signer.sign_doc(&sign_doc.encode_to_vec(), &private_key)?;

        Ok(TxRaw {
            body_bytes,
            auth_info_bytes,
            signatures: vec![signature],
        })
    }

    /// Build the unsigned transaction the simulate endpoint expects: real signer info
    /// and sequence, one empty signature.
    pub fn build_for_simulation(&self, messages: Vec<Any>, memo: &str) -> Result<TxRaw> {
        let body_bytes = encode_body(messages, memo)?;
        let auth_info_bytes = self.encode_auth_info(Fee::default())?;

        Ok(TxRaw {
            body_bytes,
            auth_info_bytes,
            signatures: vec![Vec::new()],
        })
    }

    fn encode_auth_info(&self, fee: Fee) -> Result<Vec<u8>> {
        let pub_key = PubKey {
            key: self.wallet.public_key_compressed().to_vec(),
        };

        let signer_info = SignerInfo {
            public_key: Some(Any {
                type_url: SECP256K1_PUBKEY_TYPE_URL.to_string(),
                value: pub_key.encode_to_vec(),
            }),
            mode_info: Some(ModeInfo {
                sum: Some(mode_info::Sum::Single(mode_info::Single {
                    mode: SignMode::Direct as i32,
                })),
            }),
            sequence: self.sequence,
        };

        let auth_info = AuthInfo {
            signer_infos: vec![signer_info],
            fee: Some(fee),
        };

        let mut bytes = Vec::new();
        auth_info.encode(&mut bytes)?;
        Ok(bytes)
    }
}

fn encode_body(messages: Vec<Any>, memo: &str) -> Result<Vec<u8>> {
    let body = TxBody {
        messages,
        memo: memo.to_string(),
        timeout_height: 0,
    };

    let mut bytes = Vec::new();
    body.encode(&mut bytes)?;
    Ok(bytes)
}

/// Uppercase hex sha256 of the broadcast bytes, the hash explorers index by
pub fn tx_hash(tx_bytes: &[u8]) -> String {
    hex::encode_upper(Sha256::digest(tx_bytes))
}
