use crate::consts;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Where & how much to log
    #[serde(default)]
    pub(crate) logging: LoggingConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Number of snake movements per second
    pub(crate) tick_rate: NonZeroU32,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            tick_rate: consts::DEFAULT_TICK_RATE,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LoggingConfig {
    /// File to append log messages to.  Nothing is logged when this is unset.
    pub(crate) file: Option<PathBuf>,

    /// `tracing` filter directives, e.g. `"debug"` or `"gridsnake=trace"`
    pub(crate) level: String,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            file: None,
            level: String::from("info"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(src: &str) -> NamedTempFile {
        let mut tmpfile = NamedTempFile::new().expect("creating temporary file");
        tmpfile
            .write_all(src.as_bytes())
            .expect("writing temporary file");
        tmpfile
    }

    #[test]
    fn empty_config() {
        let tmpfile = config_file("");
        let cfg = Config::load(tmpfile.path(), false).expect("loading config");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.game.tick_rate.get(), 20);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.file, None);
    }

    #[test]
    fn full_config() {
        let tmpfile = config_file(concat!(
            "[game]\n",
            "tick-rate = 5\n",
            "\n",
            "[logging]\n",
            "file = \"/var/tmp/gridsnake.log\"\n",
            "level = \"gridsnake=debug\"\n",
        ));
        let cfg = Config::load(tmpfile.path(), false).expect("loading config");
        assert_eq!(
            cfg,
            Config {
                game: GameConfig {
                    tick_rate: NonZeroU32::new(5).expect("5 is nonzero"),
                },
                logging: LoggingConfig {
                    file: Some(PathBuf::from("/var/tmp/gridsnake.log")),
                    level: String::from("gridsnake=debug"),
                },
            }
        );
    }

    #[test]
    fn partial_logging_config() {
        let tmpfile = config_file("[logging]\nfile = \"snake.log\"\n");
        let cfg = Config::load(tmpfile.path(), false).expect("loading config");
        assert_eq!(cfg.game, GameConfig::default());
        assert_eq!(cfg.logging.file, Some(PathBuf::from("snake.log")));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn zero_tick_rate() {
        let tmpfile = config_file("[game]\ntick-rate = 0\n");
        let r = Config::load(tmpfile.path(), false);
        assert!(matches!(r, Err(ConfigError::Parse(_))), "{r:?}");
    }

    #[test]
    fn missing_file() {
        let tmpdir = tempfile::tempdir().expect("creating temporary directory");
        let path = tmpdir.path().join("config.toml");
        assert_eq!(
            Config::load(&path, true).expect("missing file should be allowed"),
            Config::default()
        );
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Read(_))), "{r:?}");
    }
}
