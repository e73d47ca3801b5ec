mod animation;
mod animation_loop;
mod animations;
mod app;
mod assets;
mod config;
mod input;
mod model;
mod render;
mod scheduler;
mod sequencer;
mod sim;
mod sprite;
#[cfg(test)]
mod testutils;
mod timers;

use anyhow::{Context, Result};
use clap::Parser;
use config::{load_settings, project_paths, Cli};
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = project_paths()?;

    // the terminal is in raw mode, so logs go to a file
    let log_file = File::create(&paths.log_path)
        .with_context(|| format!("could not open {}", paths.log_path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let stored = load_settings(&paths.settings_path);
    let mut settings = stored.clone();
    settings.apply_cli(&cli);
    app::run(stored, settings, paths)
}
