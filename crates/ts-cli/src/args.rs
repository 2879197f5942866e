use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simplify")]
#[command(about = "Send text to a simplification service and show what was kept", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides client.base_url from the config
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simplify a file (or stdin) once and print the result
    Run {
        /// Input file; reads stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Re-simplify a file whenever it changes
    Watch {
        #[arg(long)]
        file: PathBuf,

        #[command(flatten)]
        options: OptionArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// Percentage of text to remove (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub ratio: Option<u8>,

    /// Duplicate threshold in hundredths (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub threshold: Option<u8>,

    /// Named preset; applied before --ratio
    #[arg(long)]
    pub preset: Option<String>,

    #[arg(long)]
    pub no_dedupe: bool,

    #[arg(long)]
    pub no_clean_fillers: bool,

    #[arg(long)]
    pub no_preserve_order: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
