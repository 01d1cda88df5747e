//! WalletCore - 多链HD钱包核心库
//!
//! 从单个BIP39助记词确定性派生五条链（Ethereum、BSC、Solana、TRON、Cardano）
//! 的地址，并按链查询原生余额。纯计算库：不持久化、不签名、不广播。

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod service;
pub mod utils;

// 重新导出常用类型
pub use error::WalletError;

// 统一模块导出
pub mod prelude {
    pub use crate::{
        config::OracleConfig,
        domain::{
            adapters::{adapter_for, ChainAddressAdapter, WalletAddress},
            chain::{Chain, CurveType},
            mnemonic::{generate_mnemonic, validate_mnemonic, MnemonicStrength},
        },
        error::WalletError,
        service::{balance_oracle::BalanceOracle, wallet_service::WalletService},
    };
}
