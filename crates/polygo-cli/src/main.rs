use std::io::IsTerminal;

use clap::Parser;
use polygo_core::Config;
use tracing::info;

mod app;
mod keys;
mod logging;
mod render;

#[derive(Parser)]
#[command(
    name = "polygo",
    version,
    about = "Timed brainstorming: capture ideas against a countdown, then sort them"
)]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    if !std::io::stdout().is_terminal() {
        return Err("polygo needs an interactive terminal".into());
    }

    let config = Config::load()?;
    if let Some(log_path) = logging::init(&config.log) {
        info!(log = %log_path.display(), "logging initialised");
    }

    app::run(config).await
}
