use anyhow::Result;
use secp256k1::{Message, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};

/// SIGN_MODE_DIRECT signer: sha256 over the encoded SignDoc, 64-byte compact signature
pub struct TransactionSigner {
    secp: Secp256k1<secp256k1::All>,
}

impl TransactionSigner {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }

    /// Sign encoded SignDoc bytes
    pub fn sign_doc(&self, sign_doc_bytes: &[u8], private_key: &SecretKey) -> Result<Vec<u8>> {
        let hash: [u8; 32] = Sha256::digest(sign_doc_bytes).into();
        self.sign_hash(&hash, private_key)
    }

    /// Sign a pre-computed digest. RFC6979 nonces keep this deterministic and
    /// libsecp256k1 always emits low-S signatures, which the SDK ante handler requires.
    pub fn sign_hash(&self, message_hash: &[u8; 32], private_key: &SecretKey) -> Result<Vec<u8>> {
        let message = Message::from_digest_slice(message_hash)?;
        let signature = self.secp.sign_ecdsa(&message, private_key);
        Ok(signature.serialize_compact().to_vec())
    }
}

impl Default for TransactionSigner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::wallet::CosmosWallet;
    use secp256k1::ecdsa::Signature;
    use secp256k1::PublicKey;

    #[test]
    fn test_sign_doc_verifies() {
        let wallet = CosmosWallet::quicksilver(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        )
        .unwrap();
        let signer = TransactionSigner::new();
        let key = wallet.private_key().unwrap();

        let doc = b"sign doc bytes";
        let sig = signer.sign_doc(doc, &key).unwrap();
        assert_eq!(sig.len(), 64);
        assert_eq!(sig, signer.sign_doc(doc, &key).unwrap());

        let secp = Secp256k1::verification_only();
        let hash: [u8; 32] = Sha256::digest(doc).into();
        let msg = Message::from_digest_slice(&hash).unwrap();
        let parsed = Signature::from_compact(&sig).unwrap();
        let pubkey = PublicKey::from_slice(&wallet.public_key_compressed()).unwrap();
        assert!(secp.verify_ecdsa(&msg, &parsed, &pubkey).is_ok());
    }
}
