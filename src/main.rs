use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tundra::Config;
use tundra::assets::SpriteSource;

#[derive(Parser, Debug)]
#[command(name = "tundra", about = "Survive the tundra: hunt, chop, trade with the wizard")]
struct Args {
    /// JSON file overriding window and gameplay constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for spawn positions. Defaults to the system clock.
    #[arg(long)]
    seed: Option<u64>,

    /// Folder of PNG sprites, one file per sprite name. Defaults to
    /// `resources/sprites` if present, else the built-in placeholders.
    #[arg(long)]
    sprites: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tundra=info")),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = launch(args) {
        tracing::error!("{e}");
        eprintln!("tundra: {e}");
        std::process::exit(1);
    }
}

fn launch(args: Args) -> tundra::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    let sprites = SpriteSource::resolve(args.sprites, &std::env::current_dir()?);
    tundra::run(config, &sprites, seed)
}
