use crate::config::LoggingConfig;
use anyhow::Context;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber that appends to the log file named in
/// `config`.  The terminal is in use by the game, so nothing is logged unless
/// a file is configured.
///
/// Returns `true` if a subscriber was installed.
pub(crate) fn init(config: &LoggingConfig) -> anyhow::Result<bool> {
    let Some(ref path) = config.file else {
        return Ok(false);
    };
    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("invalid log level {:?}", config.level))?;
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install logger")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn no_log_file() {
        let config = LoggingConfig::default();
        assert!(!init(&config).expect("nothing to fail"));
    }

    #[test]
    fn invalid_level() {
        let tmpdir = tempfile::tempdir().expect("creating temporary directory");
        let config = LoggingConfig {
            file: Some(tmpdir.path().join("snake.log")),
            level: String::from("gridsnake=loudly"),
        };
        assert!(init(&config).is_err());
    }

    #[test]
    fn unwritable_log_file() {
        let config = LoggingConfig {
            file: Some(PathBuf::from("/nonexistent/directory/snake.log")),
            level: String::from("info"),
        };
        assert!(init(&config).is_err());
    }
}
