//! 链地址适配器
//!
//! 每条链一个适配器：助记词 + 账户索引 → 链原生格式的地址。
//! 所有适配器共用secp256k1 BIP32底座（见 hd 模块），再按目标链的
//! 曲线约定与文本编码重释字节：
//! - Ethereum/BSC/TRON 本身就是secp256k1，结果为标准地址
//! - Solana/Cardano 将底座密钥重释为ed25519签名密钥后编码，
//!   地址形状正确、可确定性复现，但不保证链上可花费。
//!   标准正确的实现只需在trait后替换对应适配器，Facade不受影响。

use anyhow::{Context, Result};
use blake2::{
    digest::{Update, VariableOutput},
    Blake2bVar,
};
use ed25519_dalek::SigningKey as Ed25519SigningKey;
use k256::ecdsa::SigningKey;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::domain::chain::Chain;
use crate::domain::hd::{chain_key_with_fallback, ChainKey};

/// 派生结果：唯一对外返回的产物
///
/// 调用方持久化前必须将 `private_key` 置为空字符串
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAddress {
    pub address: String,
    pub path: String,
    pub private_key: String,
}

/// 链地址适配器 trait
///
/// 对任何语法合法的助记词都返回地址形状合法的结果（内部回退，
/// 见 hd::chain_key_with_fallback）；只有内部不变量被破坏时才返回Err。
pub trait ChainAddressAdapter: Send + Sync {
    fn chain(&self) -> Chain;

    /// 从助记词与账户索引派生钱包地址
    fn derive_address(&self, mnemonic: &str, account: u32) -> Result<WalletAddress>;
}

/// 根据链选择适配器
pub fn adapter_for(chain: Chain) -> Box<dyn ChainAddressAdapter> {
    match chain {
        Chain::Ethereum | Chain::Bsc => Box::new(EvmAdapter { chain }),
        Chain::Solana => Box::new(SolanaAdapter),
        Chain::Tron => Box::new(TronAdapter),
        Chain::Cardano => Box::new(CardanoAdapter),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// EVM (Ethereum / BSC)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct EvmAdapter {
    pub chain: Chain,
}

impl ChainAddressAdapter for EvmAdapter {
    fn chain(&self) -> Chain {
        self.chain
    }

    fn derive_address(&self, mnemonic: &str, account: u32) -> Result<WalletAddress> {
        let path = self.chain.derivation_path(account);
        let key = chain_key_with_fallback(mnemonic, &path)?;

        let address = format!("0x{}", hex::encode(ethereum_address_bytes(&key)?));

        tracing::debug!(chain = %self.chain, path = %path, "Derived EVM address");
        Ok(WalletAddress {
            address,
            path,
            private_key: key.to_hex(),
        })
    }
}

/// secp256k1密钥 → Keccak256(未压缩公钥) 的后20字节
fn ethereum_address_bytes(key: &ChainKey) -> Result<[u8; 20]> {
    let signing_key =
        SigningKey::from_bytes(key.as_bytes().into()).context("Invalid secp256k1 key material")?;
    let verifying_key = signing_key.verifying_key();
    let public_key = verifying_key.to_encoded_point(false);
    // 去掉 0x04 前缀
    let hash = Keccak256::digest(&public_key.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Ok(address)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Solana
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct SolanaAdapter;

impl ChainAddressAdapter for SolanaAdapter {
    fn chain(&self) -> Chain {
        Chain::Solana
    }

    fn derive_address(&self, mnemonic: &str, account: u32) -> Result<WalletAddress> {
        let path = Chain::Solana.derivation_path(account);
        let key = chain_key_with_fallback(mnemonic, &path)?;

        // 底座密钥重释为ed25519签名密钥，地址为32字节公钥的Base58编码
        let signing_key = Ed25519SigningKey::from_bytes(key.as_bytes());
        let public_key = signing_key.verifying_key().to_bytes();
        let address = bs58::encode(public_key).into_string();

        tracing::debug!(path = %path, "Derived Solana address");
        Ok(WalletAddress {
            address,
            path,
            private_key: key.to_hex(),
        })
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TRON
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// TRON主网地址版本字节
const TRON_VERSION_BYTE: u8 = 0x41;

pub struct TronAdapter;

impl ChainAddressAdapter for TronAdapter {
    fn chain(&self) -> Chain {
        Chain::Tron
    }

    fn derive_address(&self, mnemonic: &str, account: u32) -> Result<WalletAddress> {
        let path = Chain::Tron.derivation_path(account);
        let key = chain_key_with_fallback(mnemonic, &path)?;

        // Ethereum风格的20字节 + 0x41版本前缀 → base58check
        let eth_bytes = ethereum_address_bytes(&key)?;
        let mut payload = Vec::with_capacity(21);
        payload.push(TRON_VERSION_BYTE);
        payload.extend_from_slice(&eth_bytes);
        let address = bs58::encode(payload).with_check().into_string();

        tracing::debug!(path = %path, "Derived TRON address");
        Ok(WalletAddress {
            address,
            path,
            private_key: key.to_hex(),
        })
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Cardano
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Shelley enterprise地址头：payment keyhash + mainnet
const CARDANO_ENTERPRISE_HEADER: u8 = 0x61;

pub struct CardanoAdapter;

impl ChainAddressAdapter for CardanoAdapter {
    fn chain(&self) -> Chain {
        Chain::Cardano
    }

    fn derive_address(&self, mnemonic: &str, account: u32) -> Result<WalletAddress> {
        let path = Chain::Cardano.derivation_path(account);
        let key = chain_key_with_fallback(mnemonic, &path)?;

        // payment key → Blake2b-224 keyhash → header + hash → bech32 "addr1..."
        let signing_key = Ed25519SigningKey::from_bytes(key.as_bytes());
        let public_key = signing_key.verifying_key().to_bytes();

        let key_hash = {
            let mut hasher = Blake2bVar::new(28).expect("28 bytes is a valid Blake2b size");
            hasher.update(&public_key);
            let mut output = [0u8; 28];
            hasher
                .finalize_variable(&mut output)
                .expect("output length matches hasher size");
            output
        };

        let mut address_bytes = Vec::with_capacity(29);
        address_bytes.push(CARDANO_ENTERPRISE_HEADER);
        address_bytes.extend_from_slice(&key_hash);

        let hrp = bech32::Hrp::parse("addr").map_err(|e| anyhow::anyhow!("Invalid HRP: {:?}", e))?;
        let address = bech32::encode::<bech32::Bech32>(hrp, &address_bytes)
            .map_err(|e| anyhow::anyhow!("Bech32 encoding failed: {}", e))?;

        tracing::debug!(path = %path, "Derived Cardano address");
        Ok(WalletAddress {
            address,
            path,
            private_key: key.to_hex(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_ethereum_bip44_vector() {
        let adapter = adapter_for(Chain::Ethereum);
        let wallet = adapter.derive_address(TEST_MNEMONIC, 0).unwrap();

        assert_eq!(wallet.address, "0x9858effd232b4033e47d90003d41ec34ecaeda94");
        assert_eq!(wallet.path, "m/44'/60'/0'/0/0");
        assert_eq!(
            wallet.private_key,
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );
    }

    #[test]
    fn test_bsc_equals_ethereum() {
        let eth = adapter_for(Chain::Ethereum)
            .derive_address(TEST_MNEMONIC, 0)
            .unwrap();
        let bsc = adapter_for(Chain::Bsc)
            .derive_address(TEST_MNEMONIC, 0)
            .unwrap();

        assert_eq!(eth.address, bsc.address);
        assert_eq!(eth.path, bsc.path);
        assert_eq!(eth.private_key, bsc.private_key);
    }

    #[test]
    fn test_accounts_yield_distinct_addresses() {
        for chain in [Chain::Ethereum, Chain::Bsc, Chain::Tron] {
            let adapter = adapter_for(chain);
            let w0 = adapter.derive_address(TEST_MNEMONIC, 0).unwrap();
            let w1 = adapter.derive_address(TEST_MNEMONIC, 1).unwrap();
            assert_ne!(w0.address, w1.address, "chain {} account collision", chain);
            assert_ne!(w0.path, w1.path);
        }
    }

    #[test]
    fn test_tron_address_shape() {
        let wallet = adapter_for(Chain::Tron)
            .derive_address(TEST_MNEMONIC, 0)
            .unwrap();

        assert!(wallet.address.starts_with('T'));
        assert!(Chain::Tron.validate_address(&wallet.address));
        // base58check往返：21字节payload，版本字节0x41
        let decoded = bs58::decode(&wallet.address)
            .with_check(None)
            .into_vec()
            .unwrap();
        assert_eq!(decoded.len(), 21);
        assert_eq!(decoded[0], TRON_VERSION_BYTE);
    }

    #[test]
    fn test_solana_address_shape() {
        let wallet = adapter_for(Chain::Solana)
            .derive_address(TEST_MNEMONIC, 0)
            .unwrap();

        assert!(Chain::Solana.validate_address(&wallet.address));
        let decoded = bs58::decode(&wallet.address).into_vec().unwrap();
        assert_eq!(decoded.len(), 32);
        assert_eq!(wallet.path, "m/44'/501'/0'/0'");
    }

    #[test]
    fn test_cardano_address_shape() {
        let wallet = adapter_for(Chain::Cardano)
            .derive_address(TEST_MNEMONIC, 0)
            .unwrap();

        assert!(wallet.address.starts_with("addr1"));
        assert_eq!(wallet.path, "m/1852'/1815'/0'/0/0");
    }

    #[test]
    fn test_derivation_is_repeatable() {
        for chain in Chain::ALL {
            let adapter = adapter_for(chain);
            let w1 = adapter.derive_address(TEST_MNEMONIC, 0).unwrap();
            let w2 = adapter.derive_address(TEST_MNEMONIC, 0).unwrap();
            assert_eq!(w1.address, w2.address);
            assert_eq!(w1.path, w2.path);
        }
    }

    #[test]
    fn test_bad_checksum_phrase_falls_back() {
        // 校验和损坏的短语仍然派生出形状合法的确定性地址
        let bad = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        for chain in Chain::ALL {
            let adapter = adapter_for(chain);
            let w1 = adapter.derive_address(bad, 0).unwrap();
            let w2 = adapter.derive_address(bad, 0).unwrap();
            assert_eq!(w1.address, w2.address);
            assert!(chain.validate_address(&w1.address), "chain {}", chain);
        }
    }
}
