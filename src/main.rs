use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pilot_registry::display::{self, Styler};
use pilot_registry::{Application, Pilot, Settings};

mod cli;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let styler = Styler::new(display::use_colors());
    let settings = Settings {
        capacity: cli.capacity,
        expansion_limit: cli.expansion_limit,
        styler,
    };

    styler.banner(&mut io::stdout().lock(), "PILOT REGISTRY")?;

    let mut app = Application::new(io::stdin().lock(), io::stdout().lock(), settings)
        .context("failed to set up the menu")?;

    if let Some(path) = &cli.seed {
        let pilots = load_seed(path)?;
        let added = app.seed(pilots).context("failed to seed pilots")?;
        info!(added, path = %path.display(), "loaded seed file");
    }

    info!(
        capacity = cli.capacity,
        expansion_limit = cli.expansion_limit,
        "starting menu"
    );
    app.run().context("menu loop failed")?;
    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install the log subscriber")?;
    Ok(())
}

/// Read a JSON array of pilots.
fn load_seed(path: &Path) -> Result<Vec<Pilot>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid pilot list in {}", path.display()))
}
