//! `simplify` command-line front end.

mod args;
mod terminal;
mod watch;

use anyhow::{bail, Context, Result};
use args::{Cli, Commands, OptionArgs};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use terminal::{Format, TerminalSurface};
use tokio::io::AsyncReadExt;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use ts_client::HttpTransport;
use ts_core::SimplifierConfig;
use ts_session::SimplifierSession;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &cli.config {
        Some(path) => SimplifierConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => SimplifierConfig::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.client.base_url = base_url;
        config.validate()?;
    }

    let transport = Arc::new(HttpTransport::from_config(&config.client));
    info!(endpoint = transport.endpoint(), "using simplify endpoint");

    match cli.command {
        Commands::Run { file, options, json } => {
            let format = if json { Format::Json } else { Format::Plain };
            let surface = Arc::new(TerminalSurface::one_shot(format));
            let session = SimplifierSession::new(&config, transport, surface.clone());
            apply_options(&session, &config, &options)?;
            run(&session, &surface, file).await
        }
        Commands::Watch { file, options } => {
            let session = SimplifierSession::new(
                &config,
                transport,
                Arc::new(TerminalSurface::follow(Format::Plain)),
            );
            apply_options(&session, &config, &options)?;
            watch::watch(&session, &file).await
        }
    }
}

/// Trigger once and print the applied view.
///
/// Failures have already been alerted on the surface, so the returned errors
/// only carry the exit status and do not repeat the alert text.
async fn run(session: &SimplifierSession, surface: &TerminalSurface, file: Option<PathBuf>) -> Result<()> {
    let outcome = match file {
        Some(path) => match session.import_file(Some(&path)).await {
            Ok(outcome) => outcome,
            Err(_) => bail!("input could not be loaded"),
        },
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read stdin")?;
            session.set_input(text);
            session.simplify_now().await
        }
    };
    if !outcome.is_applied() {
        bail!("simplify request did not complete");
    }
    surface.print(&session.snapshot());
    Ok(())
}

fn apply_options(session: &SimplifierSession, config: &SimplifierConfig, options: &OptionArgs) -> Result<()> {
    if let Some(name) = &options.preset {
        let index = config.preset_index(name).with_context(|| {
            let names: Vec<&str> = config.presets.iter().map(|p| p.label.as_str()).collect();
            format!("Unknown preset {name}; available: {}", names.join(", "))
        })?;
        session.select_preset(index);
    }
    if let Some(ratio) = options.ratio {
        session.set_ratio(ratio);
    }
    if let Some(threshold) = options.threshold {
        session.set_threshold(threshold);
    }
    if options.no_dedupe {
        session.set_dedupe(false);
    }
    if options.no_clean_fillers {
        session.set_clean_fillers(false);
    }
    if options.no_preserve_order {
        session.set_preserve_order(false);
    }
    Ok(())
}
