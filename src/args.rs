use crate::config::{Config, ConfigError};
use lexopt::{Arg, Parser, ValueExt};
use std::num::NonZeroU32;
use std::path::PathBuf;

pub(crate) const USAGE: &str = "\
Usage: gridsnake [<options>]

Options:
  -c, --config <FILE>     Read configuration from FILE
  -s, --speed <N>         Move the snake N times per second
      --log-file <FILE>   Append log messages to FILE
  -h, --help              Show this help and exit
  -V, --version           Show the program version and exit
";

/// What the user asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Invocation {
    Run(Arguments),
    Help,
    Version,
}

impl Invocation {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('s') | Arg::Long("speed") => {
                    args.speed = Some(parser.value()?.parse::<NonZeroU32>()?);
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run(args))
    }
}

/// Command-line settings for a game
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) speed: Option<NonZeroU32>,
    pub(crate) log_file: Option<PathBuf>,
}

impl Arguments {
    /// Load the configuration file, falling back to defaults if no file was
    /// given on the command line and the default file does not exist, and
    /// apply any command-line overrides
    pub(crate) fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path, false)?,
            None => Config::load(&Config::default_path()?, true)?,
        };
        if let Some(speed) = self.speed {
            config.game.tick_rate = speed;
        }
        if let Some(ref path) = self.log_file {
            config.logging.file = Some(path.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn parse(args: &[&str]) -> Result<Invocation, lexopt::Error> {
        Invocation::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn no_arguments() {
        assert_eq!(
            parse(&[]).expect("parsing arguments"),
            Invocation::Run(Arguments::default())
        );
    }

    #[test]
    fn all_options() {
        assert_eq!(
            parse(&["--config", "snake.toml", "-s", "8", "--log-file=snake.log"])
                .expect("parsing arguments"),
            Invocation::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                speed: NonZeroU32::new(8),
                log_file: Some(PathBuf::from("snake.log")),
            })
        );
    }

    #[rstest]
    #[case(&["-h"], Invocation::Help)]
    #[case(&["--help"], Invocation::Help)]
    #[case(&["-s", "5", "--help"], Invocation::Help)]
    #[case(&["-V"], Invocation::Version)]
    #[case(&["--version"], Invocation::Version)]
    fn info_flags(#[case] args: &[&str], #[case] r: Invocation) {
        assert_eq!(parse(args).expect("parsing arguments"), r);
    }

    #[rstest]
    #[case(&["--speed", "0"])]
    #[case(&["--speed", "fast"])]
    #[case(&["--speed"])]
    #[case(&["--colour"])]
    #[case(&["extra"])]
    fn bad_arguments(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn overrides_apply_to_config_file() {
        let mut tmpfile = tempfile::NamedTempFile::new().expect("creating temporary file");
        tmpfile
            .write_all(b"[game]\ntick-rate = 5\n[logging]\nlevel = \"debug\"\n")
            .expect("writing temporary file");
        let args = Arguments {
            config: Some(tmpfile.path().to_path_buf()),
            speed: NonZeroU32::new(12),
            log_file: Some(PathBuf::from("snake.log")),
        };
        let config = args.load_config().expect("loading config");
        assert_eq!(config.game.tick_rate.get(), 12);
        assert_eq!(config.logging.file, Some(PathBuf::from("snake.log")));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn explicit_config_must_exist() {
        let tmpdir = tempfile::tempdir().expect("creating temporary directory");
        let args = Arguments {
            config: Some(tmpdir.path().join("nope.toml")),
            ..Arguments::default()
        };
        assert!(matches!(args.load_config(), Err(ConfigError::Read(_))));
    }
}
