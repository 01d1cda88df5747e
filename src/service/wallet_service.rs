//! 钱包地址Facade
//!
//! 外部调用方的唯一入口：按币种标识符分发到对应的适配器与Oracle。
//! 地址派生是(助记词, 链, 账户索引)的纯函数，仅凭助记词即可恢复钱包。

use crate::config::OracleConfig;
use crate::domain::adapters::{adapter_for, WalletAddress};
use crate::error::WalletError;
use crate::service::balance_oracle::BalanceOracle;
use crate::utils::currency::parse_currency;

pub struct WalletService {
    oracle: BalanceOracle,
}

impl WalletService {
    pub fn new(config: OracleConfig) -> Self {
        Self {
            oracle: BalanceOracle::new(config),
        }
    }

    /// 为指定币种派生钱包地址
    ///
    /// 标识符别名见 utils::currency；未知标识符 → `UnsupportedCurrency`。
    /// 调用方持久化前必须清空返回值中的 `private_key`。
    pub fn generate_wallet_address(
        &self,
        mnemonic: &str,
        currency: &str,
        account: u32,
    ) -> Result<WalletAddress, WalletError> {
        let chain = parse_currency(currency)?;
        adapter_for(chain)
            .derive_address(mnemonic, account)
            .map_err(WalletError::Derivation)
    }

    /// 查询指定币种的地址余额（显示单位）
    ///
    /// 网络失败在Oracle层回退为固定常量，此处唯一的错误是未知币种
    pub async fn get_wallet_balance(
        &self,
        address: &str,
        currency: &str,
    ) -> Result<f64, WalletError> {
        let chain = parse_currency(currency)?;
        Ok(self.oracle.get_balance(address, chain).await)
    }
}

impl Default for WalletService {
    fn default() -> Self {
        Self::new(OracleConfig::default())
    }
}
