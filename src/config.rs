//! 配置管理模块
//! 余额查询端点支持从环境变量覆盖，未设置时使用公共端点默认值

use serde::{Deserialize, Serialize};

/// 余额Oracle配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    pub eth_rpc_url: String,
    pub bsc_rpc_url: String,
    pub solscan_api_url: String,
    pub tronscan_api_url: String,
    pub cardano_explorer_url: String,
    /// 单次请求超时（秒）。调用方如需更严格的超时应在外层包裹。
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            eth_rpc_url: std::env::var("ETH_RPC_URL")
                .unwrap_or_else(|_| "https://eth.llamarpc.com".into()),
            bsc_rpc_url: std::env::var("BSC_RPC_URL")
                .unwrap_or_else(|_| "https://bsc-dataseed.binance.org".into()),
            solscan_api_url: std::env::var("SOLSCAN_API_URL")
                .unwrap_or_else(|_| "https://public-api.solscan.io".into()),
            tronscan_api_url: std::env::var("TRONSCAN_API_URL")
                .unwrap_or_else(|_| "https://apilist.tronscan.org".into()),
            cardano_explorer_url: std::env::var("CARDANO_EXPLORER_URL")
                .unwrap_or_else(|_| "https://explorer.cardano.org".into()),
            timeout_secs: std::env::var("ORACLE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl OracleConfig {
    /// 从环境变量加载配置（先加载 .env 文件，若存在）
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_endpoints() {
        let config = OracleConfig::default();
        assert!(config.eth_rpc_url.starts_with("https://"));
        assert!(config.bsc_rpc_url.starts_with("https://"));
        assert!(config.timeout_secs > 0);
    }
}
