//! CSV column profiler CLI.

use clap::{ColorChoice, Parser};
use csvprof_cli::commands::{OutputFormat, ProfileArgs, TableStyling, run_profile};
use csvprof_cli::logging::{LogConfig, LogFormat, init_logging};
use csvprof_model::{MissingTokenSet, ProfileOptions};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, OutputFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let args = profile_args_from_cli(&cli);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let exit_code = match run_profile(&args, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(_) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Off => LevelFilter::OFF,
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

/// Build the profile run from CLI flags.
fn profile_args_from_cli(cli: &Cli) -> ProfileArgs {
    let missing_tokens = if cli.strict_missing {
        MissingTokenSet::strict()
    } else if cli.missing_tokens.is_empty() {
        MissingTokenSet::default()
    } else {
        MissingTokenSet::from_tokens(&cli.missing_tokens)
    };
    ProfileArgs {
        path: cli.path.clone(),
        options: ProfileOptions::new()
            .with_missing_tokens(missing_tokens)
            .with_top_n(cli.top),
        format: match cli.format {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Table => OutputFormat::Table,
            OutputFormatArg::Json => OutputFormat::Json,
        },
        table_styling: match cli.color.color {
            ColorChoice::Always => TableStyling::Always,
            ColorChoice::Never => TableStyling::Never,
            ColorChoice::Auto => TableStyling::Auto,
        },
    }
}
