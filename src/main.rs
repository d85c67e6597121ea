//! Binary entry point.

use anyhow::Result;
use clap::Parser;
use termtactoe::{App, Cli, Console, locale, splash};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Silent unless RUST_LOG is set, so logs never scribble over the
    // game screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let language = cli
        .language
        .unwrap_or_else(|| locale::load_preference(&cli.prefs_file));
    info!(%language, "starting termtactoe");

    let console = Console::new();
    if !cli.no_splash {
        splash::show(&console).await?;
    }

    App::new(console, language, cli.prefs_file).run().await
}
