//! Configuration for liftoff-demo
//!
//! Configuration is stored as YAML.
//! Default location: ~/.config/liftoff/config.yaml

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Modal widget settings
    pub modal: ModalConfig,
    /// Window settings
    pub window: WindowConfig,
}

/// Modal configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Dialog title; empty string hides the heading
    pub title: String,
    /// Show the modal as soon as the window opens
    pub start_open: bool,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            title: String::from("Confirm"),
            start_open: false,
        }
    }
}

/// Window configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl WindowConfig {
    /// Clamp to a usable window size
    pub fn validate(&mut self) {
        self.width = self.width.clamp(320.0, 7680.0);
        self.height = self.height.clamp(240.0, 4320.0);
    }
}

/// Command line overrides applied on top of the config file
#[derive(Debug, Clone, Default, PartialEq, Parser)]
#[command(name = "liftoff-demo", about = "Demo host for the liftoff modal widget")]
pub struct Cli {
    /// Start with the modal shown
    #[arg(long)]
    pub open: bool,

    /// Override the configured dialog title (empty hides the heading)
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,
}

impl Cli {
    /// Apply overrides on top of a loaded config
    pub fn apply(&self, config: &mut Config) {
        if self.open {
            config.modal.start_open = true;
        }
        if let Some(title) = &self.title {
            config.modal.title = title.clone();
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/liftoff/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("liftoff")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> Config {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<Config>(&contents) {
            Ok(mut config) => {
                config.window.validate();
                log::info!(
                    "load_config: Loaded config - title: {:?}, start_open: {}",
                    config.modal.title,
                    config.modal.start_open
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            log::warn!("load_config: Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved successfully");
    Ok(())
}
