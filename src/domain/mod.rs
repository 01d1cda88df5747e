//! 领域模块：助记词、HD派生、链配置与地址适配器

pub mod adapters;
pub mod chain;
pub mod hd;
pub mod mnemonic;

pub use adapters::{adapter_for, ChainAddressAdapter, WalletAddress};
pub use chain::{Chain, CurveType};
