//! Company discovery CLI.

use clap::{ColorChoice, Parser};
use discovery_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{print_discover, run_discover, run_options};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Discover(args) => {
            match run_discover(&args, cli.config.as_deref())
                .and_then(|report| print_discover(&report, args.format).map(|()| report))
            {
                Ok(report) => {
                    if report.blocked_before_results() { 1 } else { 0 }
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Command::Options => match run_options() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default().with_level_filter(cli.verbosity.tracing_level_filter());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    let show_target = config.level_filter >= LevelFilter::DEBUG;
    config = config
        .with_format(match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        })
        .with_log_file(cli.log_file.clone())
        .with_timestamps(cli.log_timestamps || cli.log_file.is_some())
        .with_target(show_target);
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> LogConfig {
        let cli = Cli::try_parse_from(args).expect("parse args");
        log_config_from_cli(&cli)
    }

    #[test]
    fn timestamps_follow_flag_or_log_file() {
        assert!(!config_for(&["discovery", "options"]).with_timestamps);
        assert!(config_for(&["discovery", "options", "--log-timestamps"]).with_timestamps);
        assert!(config_for(&["discovery", "options", "--log-file", "run.log"]).with_timestamps);
    }

    #[test]
    fn explicit_level_disables_env_filter_and_shows_targets() {
        let config = config_for(&["discovery", "options", "--log-level", "debug"]);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert!(config.with_target);
        assert!(!config_for(&["discovery", "options"]).with_target);
    }
}
