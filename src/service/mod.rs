//! 服务层：余额Oracle与钱包地址Facade

pub mod balance_oracle;
pub mod wallet_service;

pub use balance_oracle::BalanceOracle;
pub use wallet_service::WalletService;
