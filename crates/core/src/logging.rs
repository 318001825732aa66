use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber for a loader process.
///
/// Logs roll daily under `$HOME/.weave/logs`, prefixed by `component`.
/// The returned guard flushes the file writer when dropped.
pub fn init_logging(component: &str, to_stderr: bool) -> io::Result<WorkerGuard> {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    init_logging_in(&Path::new(&home).join(".weave/logs"), component, to_stderr)
}

pub fn init_logging_in(log_dir: &Path, component: &str, to_stderr: bool) -> io::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    Ok(guard)
}
