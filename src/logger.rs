use tracing_subscriber::{EnvFilter, fmt};

/// 初始化日志系统
///
/// 支持通过 RUST_LOG 环境变量控制日志级别
/// 默认级别: info
///
/// 示例:
/// - RUST_LOG=debug
/// - RUST_LOG=streamcap=trace
///
/// 重复调用时不会 panic（已存在的全局 subscriber 会被保留）
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Logger initialized");
    }
}

/// 采集任务使用的日志能力
///
/// 调用方可以注入自己的实现；未提供时使用 [`TracingLogger`]。
pub trait CaptureLogger: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// 默认日志实现，转发到 `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl CaptureLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "streamcap", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "streamcap", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice() {
        init_logger();
        init_logger();
    }

    #[test]
    fn test_tracing_logger_as_trait_object() {
        let logger: Box<dyn CaptureLogger> = Box::new(TracingLogger);
        logger.info("hello");
        logger.error("oops");
    }
}
