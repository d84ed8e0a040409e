use crate::model::pane::{PaneBounds, PaneSide};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// User configuration, stored as JSON in the config directory.
///
/// Every field is optional in the file; missing fields take the defaults
/// below. `max_*_width` may be `null` to leave a pane unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub initial_left_width: u32,
    pub initial_right_width: u32,
    pub min_left_width: u32,
    pub min_right_width: u32,
    pub max_left_width: Option<u32>,
    pub max_right_width: Option<u32>,
    /// Start with the left pane hidden
    pub left_collapsed: bool,
    /// Start with the right pane hidden
    pub right_collapsed: bool,
    /// Pixels per terminal column
    pub cell_width_px: u32,
    /// Columns the manuscript pane keeps when side panes crowd it
    pub min_center_cols: u16,
    /// Projects listed in the navigator
    pub projects: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_left_width: 256,
            initial_right_width: 288,
            min_left_width: 200,
            min_right_width: 250,
            max_left_width: Some(600),
            max_right_width: Some(600),
            left_collapsed: false,
            right_collapsed: false,
            cell_width_px: 8,
            min_center_cols: 10,
            projects: Vec::new(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".quill-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Path of the key-value file holding persisted pane widths
    pub fn storage_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("storage.json"))
    }

    /// Default log file location
    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("quill-tui.log"))
    }

    /// Load the config file, or `None` if it is absent or unreadable
    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "failed to read config");
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(path = %config_path.display(), error = %e, "invalid config, using defaults");
                None
            }
        }
    }

    /// Load the config, writing a default file on first run.
    ///
    /// An existing but invalid file is left alone so it can be fixed by hand.
    pub fn load_or_init() -> Config {
        if let Some(config) = Self::load() {
            return config;
        }
        let config = Config::default();
        let first_run = Self::config_path().is_some_and(|path| !path.exists());
        if first_run {
            if let Err(e) = config.save() {
                warn!(error = %e, "could not write default config");
            }
        }
        config
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn bounds(&self, side: PaneSide) -> PaneBounds {
        match side {
            PaneSide::Left => PaneBounds {
                initial: self.initial_left_width,
                min: self.min_left_width,
                max: self.max_left_width,
            },
            PaneSide::Right => PaneBounds {
                initial: self.initial_right_width,
                min: self.min_right_width,
                max: self.max_right_width,
            },
        }
    }

    pub fn starts_collapsed(&self, side: PaneSide) -> bool {
        match side {
            PaneSide::Left => self.left_collapsed,
            PaneSide::Right => self.right_collapsed,
        }
    }
}
