// ==========================================
// 跨境电商库存利润分析系统 - 日志系统
// ==========================================
// 基于 tracing / tracing-subscriber
// 级别由 RUST_LOG 环境变量控制,默认 info
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统 (人类可读格式)
///
/// # 环境变量
/// - RUST_LOG: 例如 RUST_LOG=debug 或 RUST_LOG=nebula_inventory=trace
///
/// # 示例
/// ```no_run
/// use nebula_inventory::logging;
/// logging::init();
/// ```
pub fn init() {
    fmt()
        .with_env_filter(default_filter())
        .with_target(true)
        .init();
}

/// 初始化日志系统 (JSON 行格式,供日志采集侧消费)
pub fn init_json() {
    fmt()
        .json()
        .with_env_filter(default_filter())
        .with_current_span(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 输出重定向到测试捕获器,重复初始化不报错。
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
