// SPDX-License-Identifier: GPL-3.0-only

use carousel::Config;
use carousel::constants::{CONFIG_DIR_NAME, LOG_FILE_NAME};
use carousel::rotation::RotationInterval;
use carousel::terminal::{ConfigSource, TerminalOptions};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

mod cli;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(about = "Timed partner carousel for the terminal")]
#[command(version = env!("GIT_VERSION"))]
#[command(subcommand_required = false)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    show: ShowArgs,

    /// Write logs to this file (the carousel defaults to the user cache dir)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the carousel (default)
    Show(ShowArgs),

    /// List the partners in display order
    List(SourceArgs),

    /// Load and validate a config file
    Check {
        /// Config file (default: ~/.config/carousel/partners.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Clone)]
struct SourceArgs {
    /// Config file (default: ~/.config/carousel/partners.json)
    #[arg(short, long, conflicts_with = "demo")]
    config: Option<PathBuf>,

    /// Use the bundled demo partners
    #[arg(long)]
    demo: bool,
}

#[derive(Args, Clone)]
struct ShowArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Milliseconds between slides, overrides the config file
    #[arg(short, long, allow_negative_numbers = true)]
    interval: Option<i64>,
}

impl SourceArgs {
    fn resolve(self) -> Result<ConfigSource, Box<dyn std::error::Error>> {
        if self.demo {
            return Ok(ConfigSource::Demo);
        }
        let path = match self.config {
            Some(path) => path,
            None => Config::default_path()?,
        };
        Ok(ConfigSource::File(path))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=carousel=debug, RUST_LOG=info
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let interactive = !matches!(
        cli.command,
        Some(Commands::List(_)) | Some(Commands::Check { .. })
    );
    match log_sink(cli.log_file.clone(), interactive, default_log_path()) {
        LogSink::File(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(File::create(path)?))
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .init()
        }
        LogSink::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .init(),
        LogSink::Off => {}
    }

    match cli.command {
        Some(Commands::Show(args)) => run_show(args),
        Some(Commands::List(args)) => cli::list_partners(&args.resolve()?),
        Some(Commands::Check { config }) => {
            let path = match config {
                Some(path) => path,
                None => Config::default_path()?,
            };
            cli::check_config(&path)
        }
        None => run_show(cli.show),
    }
}

/// Where log output goes
#[derive(Debug, PartialEq, Eq)]
enum LogSink {
    Stderr,
    File(PathBuf),
    Off,
}

/// The carousel owns the terminal, so it never logs to stderr. Without an
/// explicit `--log-file` it logs to `fallback`, or not at all.
fn log_sink(log_file: Option<PathBuf>, interactive: bool, fallback: Option<PathBuf>) -> LogSink {
    match (log_file, interactive) {
        (Some(path), _) => LogSink::File(path),
        (None, false) => LogSink::Stderr,
        (None, true) => fallback.map_or(LogSink::Off, LogSink::File),
    }
}

/// `<user cache dir>/carousel/carousel.log`
fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
}

fn run_show(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = TerminalOptions {
        source: args.source.resolve()?,
        interval: args.interval.map(RotationInterval::from_millis),
    };
    carousel::terminal::run(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_never_logs_to_stderr() {
        let fallback = Some(PathBuf::from("/cache/carousel/carousel.log"));
        assert_eq!(
            log_sink(None, true, fallback.clone()),
            LogSink::File(PathBuf::from("/cache/carousel/carousel.log"))
        );
        assert_eq!(log_sink(None, true, None), LogSink::Off);
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let path = PathBuf::from("/tmp/run.log");
        assert_eq!(
            log_sink(Some(path.clone()), true, None),
            LogSink::File(path.clone())
        );
        assert_eq!(log_sink(Some(path.clone()), false, None), LogSink::File(path));
    }

    #[test]
    fn test_one_shot_commands_log_to_stderr() {
        assert_eq!(
            log_sink(None, false, Some(PathBuf::from("/cache/x.log"))),
            LogSink::Stderr
        );
    }

    #[test]
    fn test_default_command_is_show() {
        let cli = Cli::parse_from(["carousel", "--demo"]);
        assert!(cli.command.is_none());
        assert!(cli.show.source.demo);

        let cli = Cli::parse_from(["carousel", "check"]);
        assert!(matches!(cli.command, Some(Commands::Check { .. })));
    }
}
