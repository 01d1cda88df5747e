//! 日志系统配置模块
//! 支持结构化日志与日志级别配置（RUST_LOG环境变量优先）

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// 初始化日志系统
///
/// `format` 为 "json" 时输出结构化日志，否则输出文本格式
pub fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if format == "json" {
        Registry::default()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        Registry::default()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// 简化初始化（使用默认配置）
pub fn init_default_logging() {
    init_logging("info", "text");
}
