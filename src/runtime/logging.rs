use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// 解析日志级别，无法解析时回退到 info
pub fn log_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("Invalid log level '{level}': {e}, falling back to info");
        EnvFilter::new("info")
    })
}

/// 初始化 tracing 订阅者
///
/// 开发环境输出带文件与行号的文本日志，其余环境输出 JSON。
/// 返回的 guard 需要持有到进程退出，否则缓冲中的日志会丢失。
pub fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(config.is_development());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(&config.app.log_level))
        .with_writer(writer)
        .event_format(format);

    if config.is_development() {
        builder.with_file(true).with_line_number(true).init();
    } else {
        builder.json().init();
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_accepts_directives() {
        let filter = log_filter("classy_portal=debug,actix_web=info");
        assert!(filter.to_string().contains("classy_portal=debug"));
    }
}
