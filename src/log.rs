use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::JsonFields;
use tracing_subscriber::prelude::*;

use crate::config::LogConfig;

/// Installs the global subscriber.
///
/// Logs go to stderr, or as JSON lines to `config.file`. The returned guard
/// flushes the file writer on drop and must be held until exit.
pub fn init(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    // Use RUST_LOG if set, otherwise the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL));

    let Some(log_path) = &config.file else {
        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .try_init()?;
        return Ok(None);
    };

    let (dir, file_name) = split_log_path(log_path)?;
    std::fs::create_dir_all(dir).inspect_err(|e| {
        eprintln!("Failed to create log directory {:?}: {}", dir, e);
    })?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(writer)
        .fmt_fields(JsonFields::default());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .try_init()?;

    Ok(Some(guard))
}

fn split_log_path(path: &Path) -> anyhow::Result<(&Path, &std::ffi::OsStr)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Log path {:?} has no file name", path))?;
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn split_log_path_separates_directory() {
        let (dir, name) = split_log_path(Path::new("/var/log/lsp-model.log")).unwrap();
        assert_eq!(dir, Path::new("/var/log"));
        assert_eq!(name, OsStr::new("lsp-model.log"));
    }

    #[test]
    fn split_log_path_defaults_to_current_dir() {
        let (dir, _) = split_log_path(Path::new("lsp-model.log")).unwrap();
        assert_eq!(dir, Path::new("."));
    }

    #[test]
    fn split_log_path_rejects_directory_only() {
        assert!(split_log_path(Path::new("/")).is_err());
    }
}
