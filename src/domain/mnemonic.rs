//! 助记词管理模块
//!
//! BIP39助记词的生成与校验。生成使用CSPRNG熵，校验包含词数、
//! 词表成员与校验和三项检查。

use bip39::{Language, Mnemonic};
use rand::RngCore;

/// 助记词强度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MnemonicStrength {
    /// 128位熵 = 12 words
    Bits128,
    /// 256位熵 = 24 words
    Bits256,
}

impl MnemonicStrength {
    /// 熵字节数
    pub const fn entropy_bytes(self) -> usize {
        match self {
            MnemonicStrength::Bits128 => 16,
            MnemonicStrength::Bits256 => 32,
        }
    }

    /// 对应的词数
    pub const fn word_count(self) -> usize {
        match self {
            MnemonicStrength::Bits128 => 12,
            MnemonicStrength::Bits256 => 24,
        }
    }
}

/// 生成新的BIP39助记词（English词表，校验和始终有效）
pub fn generate_mnemonic(strength: MnemonicStrength) -> String {
    let mut entropy = [0u8; 32];
    let n = strength.entropy_bytes();
    rand::thread_rng().fill_bytes(&mut entropy[..n]);

    // 熵长度固定为16/32字节，from_entropy_in 不会失败
    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy[..n])
        .expect("entropy length is always valid");
    mnemonic.to_string()
}

/// 校验助记词（词数、词表、校验和）
///
/// 失败关闭：任何不合法输入返回false，从不panic
pub fn validate_mnemonic(phrase: &str) -> bool {
    Mnemonic::parse_in(Language::English, phrase).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_12_words() {
        let phrase = generate_mnemonic(MnemonicStrength::Bits128);
        assert_eq!(phrase.split_whitespace().count(), 12);
        assert!(validate_mnemonic(&phrase));
    }

    #[test]
    fn test_generate_24_words() {
        let phrase = generate_mnemonic(MnemonicStrength::Bits256);
        assert_eq!(phrase.split_whitespace().count(), 24);
        assert!(validate_mnemonic(&phrase));
    }

    #[test]
    fn test_validate_bip39_vector() {
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        assert!(validate_mnemonic(phrase));
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(!validate_mnemonic(""));
    }

    #[test]
    fn test_validate_rejects_wrong_word_count() {
        assert!(!validate_mnemonic("abandon abandon abandon"));
    }

    #[test]
    fn test_validate_rejects_non_wordlist_words() {
        assert!(!validate_mnemonic(
            "zzzzz abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
        ));
    }

    #[test]
    fn test_validate_rejects_bad_checksum() {
        // 12个abandon：词表合法但校验和错误
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";
        assert!(!validate_mnemonic(phrase));
    }
}
