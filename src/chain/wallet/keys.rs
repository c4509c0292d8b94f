use anyhow::{anyhow, bail, Result};
use bech32::{self, Hrp};
use bip32::{ChildNumber, XPrv};
use bip39::Mnemonic;
use ripemd::Ripemd160;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Cosmos coin type used by Quicksilver and the host zones it stakes on.
const COSMOS_COIN_TYPE: u32 = 118;
pub const QUICKSILVER_PREFIX: &str = "quick";

/// Secp256k1 account derived from a BIP39 mnemonic along m/44'/118'/0'/0/0.
/// Private material is wiped on drop.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct CosmosWallet {
    #[zeroize(skip)]
    pub address: String,

    private_key_bytes: [u8; 32],
    public_key_bytes: [u8; 33],
}

impl CosmosWallet {
    /// Create a wallet from a BIP39 mnemonic phrase with optional passphrase
    pub fn from_mnemonic(mnemonic_str: &str, passphrase: &str, prefix: &str) -> Result<Self> {
        let mnemonic = Mnemonic::parse(mnemonic_str)?;
        let seed = mnemonic.to_seed(passphrase);

        let mut private_key = derive_private_key_bip32(&seed, 0)?;

        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(&private_key)?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);

        let address = account_address(&public_key, prefix)?;

        let mut private_key_bytes = [0u8; 32];
        private_key_bytes.copy_from_slice(&private_key);
        private_key.zeroize();

        Ok(Self {
            address,
            private_key_bytes,
            public_key_bytes: public_key.serialize(),
        })
    }

    /// Quicksilver wallet (`quick1...`) with no passphrase
    pub fn quicksilver(mnemonic_str: &str) -> Result<Self> {
        Self::from_mnemonic(mnemonic_str, "", QUICKSILVER_PREFIX)
    }

    /// Get the private key as a SecretKey (for signing)
    pub fn private_key(&self) -> Result<SecretKey> {
        SecretKey::from_slice(&self.private_key_bytes)
            .map_err(|e| anyhow!("Invalid private key: {}", e))
    }

    /// Compressed public key (33 bytes), as carried in `/cosmos.crypto.secp256k1.PubKey`
    pub fn public_key_compressed(&self) -> [u8; 33] {
        self.public_key_bytes
    }
}

fn derive_private_key_bip32(seed: &[u8], index: u32) -> Result<[u8; 32]> {
    let xprv = XPrv::new(seed)
        .map_err(|e| anyhow!("Failed to create XPrv from seed: {}", e))?;

    let derived = xprv
        .derive_child(ChildNumber::new(44, true)?)
        .and_then(|k| k.derive_child(ChildNumber::new(COSMOS_COIN_TYPE, true)?))
        .and_then(|k| k.derive_child(ChildNumber::new(0, true)?))
        .and_then(|k| k.derive_child(ChildNumber::new(0, false)?))
        .and_then(|k| k.derive_child(ChildNumber::new(index, false)?))
        .map_err(|e| anyhow!("Failed to derive key: {}", e))?;

    Ok(derived.to_bytes())
}

/// bech32(prefix, ripemd160(sha256(compressed_pubkey)))
pub fn account_address(public_key: &PublicKey, prefix: &str) -> Result<String> {
    let sha = Sha256::digest(public_key.serialize());
    let ripe = Ripemd160::digest(sha);

    encode_address(prefix, &ripe)
}

/// Encode raw address bytes with the given human readable part
pub fn encode_address(prefix: &str, bytes: &[u8]) -> Result<String> {
    let hrp = Hrp::parse(prefix)?;
    Ok(bech32::encode::<bech32::Bech32>(hrp, bytes)?)
}

/// Decode a bech32 address into its prefix and raw bytes
pub fn decode_address(address: &str) -> Result<(String, Vec<u8>)> {
    let (hrp, data) = bech32::decode(address)
        .map_err(|e| anyhow!("Invalid bech32 address {}: {}", address, e))?;
    if data.is_empty() {
        bail!("Address {} carries no data", address);
    }
    Ok((hrp.to_string(), data))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_cosmos_test_vector() {
        // Well known cosmoshub address for the BIP39 "abandon ... about" vector.
        let wallet = CosmosWallet::from_mnemonic(MNEMONIC, "", "cosmos").unwrap();
        assert_eq!(wallet.address, "cosmos19rl4cm2hmr8afy4kldpxz3fka4jguq0auqdal4");
    }

    #[test]
    fn test_quicksilver_prefix() {
        let wallet = CosmosWallet::quicksilver(MNEMONIC).unwrap();
        assert!(wallet.address.starts_with("quick1"));

        let (hrp, bytes) = decode_address(&wallet.address).unwrap();
        assert_eq!(hrp, "quick");
        assert_eq!(bytes.len(), 20);
        assert_eq!(wallet.public_key_compressed().len(), 33);
    }

    #[test]
    fn test_same_key_across_prefixes() {
        let cosmos = CosmosWallet::from_mnemonic(MNEMONIC, "", "cosmos").unwrap();
        let quick = CosmosWallet::quicksilver(MNEMONIC).unwrap();

        let (_, a) = decode_address(&cosmos.address).unwrap();
        let (_, b) = decode_address(&quick.address).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wallet_with_passphrase() {
        let wallet1 = CosmosWallet::from_mnemonic(MNEMONIC, "", "quick").unwrap();
        let wallet2 = CosmosWallet::from_mnemonic(MNEMONIC, "test123", "quick").unwrap();
        assert_ne!(wallet1.address, wallet2.address);

        let wallet3 = CosmosWallet::from_mnemonic(MNEMONIC, "test123", "quick").unwrap();
        assert_eq!(wallet2.address, wallet3.address);
    }

    #[test]
    fn test_encode_decode_address() {
        let bytes = [7u8; 20];
        let addr = encode_address("quickvaloper", &bytes).unwrap();
        let (hrp, decoded) = decode_address(&addr).unwrap();
        assert_eq!(hrp, "quickvaloper");
        assert_eq!(decoded, bytes.to_vec());

        assert!(decode_address("not-an-address").is_err());
    }
}
