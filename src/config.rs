use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Parser, Debug, Clone)]
#[command(name = "babytchi")]
#[command(about = "A three-button virtual pet on a tiny terminal LCD")]
pub(crate) struct Cli {
    /// RNG seed for gender and game rolls (random when unset)
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// Clock multiplier, e.g. 60 makes a minute pass every second
    #[arg(long)]
    pub(crate) speed: Option<u32>,

    /// Frame cap
    #[arg(long)]
    pub(crate) fps: Option<u32>,

    /// Plain white-on-black output
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Hide the LCD pixel grid
    #[arg(long)]
    pub(crate) no_grid: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) fps_cap: u32,
    pub(crate) enable_color: bool,
    pub(crate) lcd_grid: bool,
    pub(crate) speed: u32,
    pub(crate) seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps_cap: 30,
            enable_color: true,
            lcd_grid: true,
            speed: 1,
            seed: None,
        }
    }
}

impl Settings {
    /// Flags given on the command line win over the file. Apply them to a
    /// copy: the file keeps its own values.
    pub(crate) fn apply_cli(&mut self, cli: &Cli) {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(speed) = cli.speed {
            self.speed = speed;
        }
        if let Some(fps) = cli.fps {
            self.fps_cap = fps;
        }
        if cli.no_color {
            self.enable_color = false;
        }
        if cli.no_grid {
            self.lcd_grid = false;
        }
        self.speed = self.speed.clamp(1, 3600);
        self.fps_cap = self.fps_cap.clamp(5, 120);
    }
}

pub(crate) struct Paths {
    pub(crate) settings_path: PathBuf,
    pub(crate) log_path: PathBuf,
}

pub(crate) fn project_paths() -> Result<Paths> {
    let proj = ProjectDirs::from("com", "babytchi", "Babytchi")
        .context("could not resolve project directories")?;
    let dir = proj.data_local_dir().to_path_buf();
    fs::create_dir_all(&dir)
        .with_context(|| format!("could not create {}", dir.display()))?;
    Ok(Paths {
        settings_path: dir.join("settings.json"),
        log_path: dir.join("babytchi.log"),
    })
}

/// Missing or unreadable settings fall back to the defaults.
pub(crate) fn load_settings(path: &Path) -> Settings {
    if let Ok(s) = fs::read_to_string(path) {
        if let Ok(v) = serde_json::from_str::<Settings>(&s) {
            return v;
        }
    }
    Settings::default()
}

pub(crate) fn save_settings_atomic(path: &Path, s: &Settings) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let data = serde_json::to_vec_pretty(s)?;
    fs::write(&tmp, data).with_context(|| format!("writing {}", tmp.display()))?;
    atomic_rename(&tmp, path)?;
    Ok(())
}

fn atomic_rename(from: &Path, to: &Path) -> Result<()> {
    if to.exists() {
        let _ = fs::remove_file(to);
    }
    fs::rename(from, to)?;
    Ok(())
}
