//! 链配置模块
//!
//! 五条支持链的全部常量：曲线、coin type、派生路径模板、显示精度、
//! 余额回退值与地址形状校验。单一事实来源，领域层与服务层共用。

use serde::{Deserialize, Serialize};

/// 加密曲线类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    /// secp256k1 曲线 (Ethereum, BSC, TRON)
    Secp256k1,
    /// ed25519 曲线 (Solana, Cardano)
    ///
    /// 注意：当前实现以secp256k1为通用底座再重释字节（见 adapters 模块），
    /// 地址形状正确但不保证链上可花费。
    Ed25519,
}

/// 支持的链
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Bsc,
    Solana,
    Tron,
    Cardano,
}

impl Chain {
    pub const ALL: [Chain; 5] = [
        Chain::Ethereum,
        Chain::Bsc,
        Chain::Solana,
        Chain::Tron,
        Chain::Cardano,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Bsc => "BNB Smart Chain",
            Chain::Solana => "Solana",
            Chain::Tron => "TRON",
            Chain::Cardano => "Cardano",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Chain::Ethereum => "ETH",
            Chain::Bsc => "BNB",
            Chain::Solana => "SOL",
            Chain::Tron => "TRX",
            Chain::Cardano => "ADA",
        }
    }

    pub fn curve_type(self) -> CurveType {
        match self {
            Chain::Ethereum | Chain::Bsc | Chain::Tron => CurveType::Secp256k1,
            Chain::Solana | Chain::Cardano => CurveType::Ed25519,
        }
    }

    /// SLIP-44 coin type（BSC与Ethereum共用60）
    pub fn coin_type(self) -> u32 {
        match self {
            Chain::Ethereum | Chain::Bsc => 60,
            Chain::Solana => 501,
            Chain::Tron => 195,
            Chain::Cardano => 1815,
        }
    }

    /// 最小单位相对显示单位的小数位数 (wei=18, lamports=9, sun=6, lovelace=6)
    pub fn decimals(self) -> u32 {
        match self {
            Chain::Ethereum | Chain::Bsc => 18,
            Chain::Solana => 9,
            Chain::Tron | Chain::Cardano => 6,
        }
    }

    /// 余额查询失败时的固定回退值
    pub fn fallback_balance(self) -> f64 {
        match self {
            Chain::Ethereum => 0.05,
            Chain::Bsc => 1.25,
            Chain::Solana => 0.75,
            Chain::Tron => 210.5,
            Chain::Cardano => 165.25,
        }
    }

    /// 生成账户索引对应的派生路径
    ///
    /// 不变量：相同的(链, account)总是产生相同路径
    pub fn derivation_path(self, account: u32) -> String {
        match self {
            // EVM系列：BIP44，account落在address index段
            Chain::Ethereum | Chain::Bsc => format!("m/44'/60'/0'/0/{}", account),
            // Solana：SLIP-0010风格全硬化路径
            Chain::Solana => format!("m/44'/501'/{}'/0'", account),
            Chain::Tron => format!("m/44'/195'/{}'/0/0", account),
            // Cardano：CIP-1852 (Shelley era)
            Chain::Cardano => format!("m/1852'/1815'/{}'/0/0", account),
        }
    }

    /// 地址形状校验（格式检查，不验证链上存在性）
    pub fn validate_address(self, address: &str) -> bool {
        match self {
            Chain::Ethereum | Chain::Bsc => {
                address.starts_with("0x")
                    && address.len() == 42
                    && address[2..].chars().all(|c| c.is_ascii_hexdigit())
            }
            Chain::Solana => {
                (32..=44).contains(&address.len())
                    && bs58::decode(address).into_vec().is_ok()
            }
            Chain::Tron => {
                address.starts_with('T')
                    && bs58::decode(address)
                        .with_check(None)
                        .into_vec()
                        .map(|bytes| bytes.first() == Some(&0x41))
                        .unwrap_or(false)
            }
            Chain::Cardano => address.starts_with("addr1"),
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_paths() {
        assert_eq!(Chain::Ethereum.derivation_path(0), "m/44'/60'/0'/0/0");
        assert_eq!(Chain::Bsc.derivation_path(3), "m/44'/60'/0'/0/3");
        assert_eq!(Chain::Solana.derivation_path(0), "m/44'/501'/0'/0'");
        assert_eq!(Chain::Tron.derivation_path(1), "m/44'/195'/1'/0/0");
        assert_eq!(Chain::Cardano.derivation_path(0), "m/1852'/1815'/0'/0/0");
    }

    #[test]
    fn test_evm_chains_share_path() {
        assert_eq!(
            Chain::Ethereum.derivation_path(7),
            Chain::Bsc.derivation_path(7)
        );
        assert_eq!(Chain::Ethereum.coin_type(), Chain::Bsc.coin_type());
    }

    #[test]
    fn test_curve_grouping() {
        assert_eq!(Chain::Tron.curve_type(), CurveType::Secp256k1);
        assert_eq!(Chain::Solana.curve_type(), CurveType::Ed25519);
        assert_eq!(Chain::Cardano.curve_type(), CurveType::Ed25519);
    }

    #[test]
    fn test_validate_evm_address() {
        assert!(Chain::Ethereum.validate_address("0x9858effd232b4033e47d90003d41ec34ecaeda94"));
        assert!(!Chain::Ethereum.validate_address("invalid"));
        assert!(!Chain::Ethereum.validate_address("0x123"));
    }

    #[test]
    fn test_fallback_balances_are_nonzero_finite() {
        for chain in Chain::ALL {
            let fallback = chain.fallback_balance();
            assert!(fallback.is_finite());
            assert!(fallback > 0.0);
        }
    }
}
