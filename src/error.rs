//! 错误类型定义
//!
//! 传播策略：派生路径优先返回"地址形状"的结果而非快速失败（见 domain::adapters
//! 的回退逻辑）。唯一硬错误是币种标识符误用。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    /// 未知的币种标识符（Facade层唯一向调用方暴露的错误）
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// 派生失败（主路径与回退路径均失败，正常情况下不可达）
    #[error("address derivation failed: {0}")]
    Derivation(anyhow::Error),
}
