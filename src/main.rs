use std::process;

use anyhow::{bail, Context, Result};
use log::error;

use bounce_scene::EngineBuilder;

const USAGE: &str = "bounce_scene [CONFIG]";
const DEFAULT_CONFIG: &str = "config.txt";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG.to_owned());

    if args.next().is_some() {
        bail!("Too many arguments\n\nUsage:\n  {USAGE}");
    }

    EngineBuilder::new(&config_path)
        .build()
        .run()
        .with_context(|| format!("Failed to run scene from {config_path}"))
}
