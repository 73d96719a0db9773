mod config;
mod export;
mod render;

use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use export::{export_json, export_pngs};
use render::render;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stdout().is_terminal());
    Registry::default().with(filter).with(fmt_layer).init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Usage: fractal-field [render.json]
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = config::load(config_path.as_deref())?;
    let seed = config.seed.unwrap_or_else(rand::random);

    let fields = render(&config, seed)?;

    let dir = config.output_dir.join(seed.to_string());
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    export_pngs(&fields, &dir)?;
    export_json(&fields, &dir.join("fields.json"))?;

    info!(seed, dir = %dir.display(), "fields generated");
    Ok(())
}
