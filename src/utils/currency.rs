//! 币种标识符标准化模块
//!
//! 统一外部调用方传入的币种标识符：别名、大小写、空白都在这里收敛。
//! 未知标识符是整个库唯一的硬错误，绝不静默派生错误的链。

use crate::domain::chain::Chain;
use crate::error::WalletError;

/// 解析币种标识符为链
///
/// 接受的别名（大小写不敏感，首尾空白忽略）：
/// - `eth` / `ethereum`
/// - `bnb` / `bsc` / `binance`
/// - `sol` / `solana`
/// - `trx` / `tron`
/// - `ada` / `cardano`
pub fn parse_currency(input: &str) -> Result<Chain, WalletError> {
    match input.trim().to_lowercase().as_str() {
        "eth" | "ethereum" => Ok(Chain::Ethereum),
        "bnb" | "bsc" | "binance" => Ok(Chain::Bsc),
        "sol" | "solana" => Ok(Chain::Solana),
        "trx" | "tron" => Ok(Chain::Tron),
        "ada" | "cardano" => Ok(Chain::Cardano),
        _ => Err(WalletError::UnsupportedCurrency(input.to_string())),
    }
}
