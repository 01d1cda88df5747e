//! HD派生模块（种子与分层密钥）
//!
//! 助记词 → 512-bit种子 → BIP32路径派生。所有函数均为纯函数：
//! 相同的(种子, 路径)输入总是产生相同的密钥，无跨调用状态。

use anyhow::{Context, Result};
use bip39::{Language, Mnemonic};
use coins_bip32::{path::DerivationPath, prelude::*};
use k256::ecdsa::SigningKey;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// BIP39种子拉伸的PBKDF2轮数
const BIP39_PBKDF2_ROUNDS: u32 = 2048;

/// 路径派生出的链密钥材料（32字节）
///
/// 仅在单次派生调用内存活，drop时自动清零；Debug输出不泄露内容。
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChainKey {
    bytes: [u8; 32],
}

impl ChainKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl std::fmt::Debug for ChainKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainKey").field("bytes", &"[REDACTED]").finish()
    }
}

/// 助记词 → 512-bit种子（BIP39标准拉伸，含校验和验证）
pub fn to_seed(mnemonic: &str, passphrase: &str) -> Result<[u8; 64]> {
    let parsed = Mnemonic::parse_in(Language::English, mnemonic).context("Invalid mnemonic")?;
    Ok(parsed.to_seed(passphrase))
}

/// 次级确定性种子：跳过校验和验证的BIP39拉伸
///
/// 对任意语法合法的短语都是全函数，用于 adapters 的回退策略。
pub fn fallback_seed(phrase: &str) -> [u8; 64] {
    let mut seed = [0u8; 64];
    pbkdf2_hmac::<Sha512>(phrase.as_bytes(), b"mnemonic", BIP39_PBKDF2_ROUNDS, &mut seed);
    seed
}

/// 在种子上按路径做BIP32派生，支持硬化与非硬化段
pub fn derive_at_path(seed: &[u8; 64], path: &str) -> Result<ChainKey> {
    let derivation_path = path
        .parse::<DerivationPath>()
        .with_context(|| format!("Invalid derivation path: {}", path))?;

    let master_key = XPriv::root_from_seed(seed, None).context("Failed to derive master key")?;
    let derived_key = master_key
        .derive_path(&derivation_path)
        .context("Failed to derive key at path")?;

    // XPriv 实现 AsRef<SigningKey>
    let signing_key: &SigningKey = derived_key.as_ref();
    Ok(ChainKey {
        bytes: signing_key.to_bytes().into(),
    })
}

/// 助记词 + 路径 → 链密钥，带回退
///
/// 主路径：BIP39校验通过的种子。校验失败（如校验和损坏）时退到
/// `fallback_seed`，保证任何语法合法的短语都能派生出密钥。
pub fn chain_key_with_fallback(mnemonic: &str, path: &str) -> Result<ChainKey> {
    match to_seed(mnemonic, "") {
        Ok(seed) => match derive_at_path(&seed, path) {
            Ok(key) => Ok(key),
            Err(e) => {
                tracing::warn!(path = %path, error = ?e, "Primary derivation failed, using fallback seed");
                derive_at_path(&fallback_seed(mnemonic), path)
            }
        },
        Err(e) => {
            tracing::warn!(path = %path, error = ?e, "Mnemonic rejected by BIP39, using fallback seed");
            derive_at_path(&fallback_seed(mnemonic), path)
        }
    }
}
