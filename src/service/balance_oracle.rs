//! 余额Oracle服务
//!
//! 每链一次只读请求，把最小单位换算为显示单位。失败语义：任何网络
//! 错误、非2xx响应或字段缺失都记日志并返回该链的固定非零回退值，
//! 绝不向调用方抛错、绝不返回NaN。不重试、不缓存、不保持跨调用状态；
//! 轮询与超时包裹由调用方负责。

use std::time::Duration;

use anyhow::{Context, Result};
use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::config::OracleConfig;
use crate::domain::chain::Chain;

pub struct BalanceOracle {
    http_client: reqwest::Client,
    config: OracleConfig,
}

impl BalanceOracle {
    pub fn new(config: OracleConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http_client: client,
            config,
        }
    }

    /// 查询链上原生余额（显示单位）
    ///
    /// 单次尝试；失败回退到 `chain.fallback_balance()`
    pub async fn get_balance(&self, address: &str, chain: Chain) -> f64 {
        let result = match chain {
            Chain::Ethereum => self.fetch_evm_balance(&self.config.eth_rpc_url, address).await,
            Chain::Bsc => self.fetch_evm_balance(&self.config.bsc_rpc_url, address).await,
            Chain::Solana => self.fetch_solana_balance(address).await,
            Chain::Tron => self.fetch_tron_balance(address).await,
            Chain::Cardano => self.fetch_cardano_balance(address).await,
        };

        match result {
            Ok(balance) if balance.is_finite() && balance >= 0.0 => {
                tracing::debug!(chain = %chain, balance = balance, "Balance fetched");
                balance
            }
            Ok(balance) => {
                tracing::warn!(chain = %chain, balance = balance, "Balance out of range, using fallback");
                chain.fallback_balance()
            }
            Err(e) => {
                tracing::warn!(chain = %chain, error = ?e, "Balance fetch failed, using fallback");
                chain.fallback_balance()
            }
        }
    }

    /// EVM链：JSON-RPC eth_getBalance，wei → ETH/BNB
    async fn fetch_evm_balance(&self, rpc_url: &str, address: &str) -> Result<f64> {
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "method": "eth_getBalance",
            "params": [address, "latest"],
            "id": 1
        });

        let response = self
            .http_client
            .post(rpc_url)
            .json(&payload)
            .send()
            .await
            .context("Failed to send eth_getBalance request")?;

        if !response.status().is_success() {
            anyhow::bail!("RPC returned status {}", response.status());
        }

        let json: serde_json::Value = response.json().await.context("Failed to parse RPC response")?;
        if let Some(error) = json.get("error") {
            anyhow::bail!("RPC error: {:?}", error);
        }

        let hex_balance = json
            .get("result")
            .and_then(|r| r.as_str())
            .context("Missing result in RPC response")?;
        let wei = u128::from_str_radix(hex_balance.trim_start_matches("0x"), 16)
            .context("Invalid balance hex")?;
        let wei = i128::try_from(wei).context("Balance exceeds representable range")?;

        to_display_units(wei, 18)
    }

    /// Solana：Solscan账户接口，lamports → SOL
    async fn fetch_solana_balance(&self, address: &str) -> Result<f64> {
        let url = format!("{}/account/{}", self.config.solscan_api_url, address);

        let json = self.get_json(&url).await?;
        let lamports = json
            .get("lamports")
            .and_then(|v| v.as_u64())
            .context("Missing lamports field in Solscan response")?;

        to_display_units(lamports as i128, 9)
    }

    /// TRON：Tronscan账户接口，sun → TRX
    async fn fetch_tron_balance(&self, address: &str) -> Result<f64> {
        let url = format!(
            "{}/api/account?address={}",
            self.config.tronscan_api_url, address
        );

        let json = self.get_json(&url).await?;
        let sun = json
            .get("balance")
            .and_then(|v| v.as_u64())
            .context("Missing balance field in Tronscan response")?;

        to_display_units(sun as i128, 6)
    }

    /// Cardano：区块浏览器地址接口，lovelace → ADA
    async fn fetch_cardano_balance(&self, address: &str) -> Result<f64> {
        // 浏览器接口按地址前缀检索
        let prefix: String = address.chars().take(8).collect();
        let url = format!(
            "{}/api/addresses/{}",
            self.config.cardano_explorer_url, prefix
        );

        let json = self.get_json(&url).await?;
        // amount 字段可能是字符串或数值
        let lovelace = match json.get("amount") {
            Some(v) if v.is_string() => v
                .as_str()
                .and_then(|s| s.parse::<u64>().ok())
                .context("Invalid amount string in explorer response")?,
            Some(v) => v.as_u64().context("Invalid amount in explorer response")?,
            None => anyhow::bail!("Missing amount field in explorer response"),
        };

        to_display_units(lovelace as i128, 6)
    }

    async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        let response = self
            .http_client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            anyhow::bail!("API returned status {}", response.status());
        }

        response.json().await.context("Failed to parse API response")
    }
}

impl Default for BalanceOracle {
    fn default() -> Self {
        Self::new(OracleConfig::default())
    }
}

/// 最小单位 → 显示单位，Decimal保证换算精度后转f64
fn to_display_units(amount: i128, scale: u32) -> Result<f64> {
    let decimal = Decimal::try_from_i128_with_scale(amount, scale)
        .context("Balance exceeds representable range")?;
    decimal.to_f64().context("Balance not representable as f64")
}
