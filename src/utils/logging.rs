/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化全局日志
///
/// `RUST_LOG` 优先；未设置时根据 `verbose` 选择 debug 或 info
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - AI 电子书写作助手");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🤖 模型: {} (温度 {})", config.llm_model_name, config.llm_temperature);
    info!("📁 输出目录: {}", config.output_dir);
    if config.llm_api_key.is_none() {
        info!("💡 未设置 LLM_API_KEY，生成大纲或章节时会报错");
    }
    info!("{}", "=".repeat(60));
}

/// 打印会话结束统计
///
/// # 参数
/// - `done`: 已完成章节数
/// - `total`: 候选章节总数
/// - `exported`: 导出的文件路径（如果有）
pub fn print_session_summary(done: usize, total: usize, exported: Option<&str>) {
    info!("\n{}", "=".repeat(60));
    info!("📊 会话结束");
    info!(
        "结束时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 已完成章节: {}/{}", done, total);
    match exported {
        Some(path) => info!("📄 文档已保存至: {}", path),
        None => info!("📄 本次未导出文档"),
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
