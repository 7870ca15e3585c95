use crate::constants::icon_sets;
use crate::status::Status;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Which icons to generate and at which sizes
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub status_bar: StatusBarConfig,
    #[serde(default)]
    pub app_icon: AppIconConfig,
}

/// A named status bar icon, e.g. `wifi-error` drawn with `Status::Error`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IconSpec {
    pub name: String,
    pub status: Status,
}

impl IconSpec {
    pub fn new(name: &str, status: Status) -> Self {
        IconSpec {
            name: name.to_string(),
            status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StatusBarConfig {
    #[serde(default = "default_status_bar_icons")]
    pub icons: Vec<IconSpec>,
    #[serde(default = "default_status_bar_sizes")]
    pub sizes: Vec<u32>,
    #[serde(default = "default_triple_scale_max_size")]
    pub triple_scale_max_size: u32,
}

fn default_status_bar_icons() -> Vec<IconSpec> {
    vec![
        IconSpec::new("wifi-connected", Status::Connected),
        IconSpec::new("wifi-disconnected", Status::Disconnected),
        IconSpec::new("wifi-error", Status::Error),
        IconSpec::new("wifi-connecting", Status::Connecting),
    ]
}

fn default_status_bar_sizes() -> Vec<u32> {
    icon_sets::STATUS_BAR_SIZES.to_vec()
}

fn default_triple_scale_max_size() -> u32 {
    icon_sets::TRIPLE_SCALE_MAX_SIZE
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        StatusBarConfig {
            icons: default_status_bar_icons(),
            sizes: default_status_bar_sizes(),
            triple_scale_max_size: default_triple_scale_max_size(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppIconConfig {
    #[serde(default = "default_app_icon_name")]
    pub name: String,
    #[serde(default = "default_app_icon_sizes")]
    pub sizes: Vec<u32>,
    #[serde(default = "default_app_icon_status")]
    pub status: Status,
}

fn default_app_icon_name() -> String {
    icon_sets::APP_ICON_NAME.to_string()
}

fn default_app_icon_sizes() -> Vec<u32> {
    icon_sets::APP_ICON_SIZES.to_vec()
}

fn default_app_icon_status() -> Status {
    Status::Connected
}

impl Default for AppIconConfig {
    fn default() -> Self {
        AppIconConfig {
            name: default_app_icon_name(),
            sizes: default_app_icon_sizes(),
            status: default_app_icon_status(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            status_bar: StatusBarConfig::default(),
            app_icon: AppIconConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Load `explicit` if given, otherwise the built-in icon sets.
    ///
    /// Nothing is read from the environment, so a run without a config file
    /// always produces the same icons.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using icon config");
                Self::load(path)
            }
            None => Ok(Config::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.status_bar.icons.is_empty() {
            bail!("status_bar.icons cannot be empty");
        }

        let mut names = HashSet::new();
        for icon in &self.status_bar.icons {
            if icon.name.trim().is_empty() {
                bail!("status bar icon name cannot be empty");
            }
            if !names.insert(icon.name.as_str()) {
                bail!("duplicate status bar icon name: {}", icon.name);
            }
        }

        if self.app_icon.name.trim().is_empty() {
            bail!("app_icon.name cannot be empty");
        }
        if names.contains(self.app_icon.name.as_str()) {
            bail!("app_icon.name clashes with a status bar icon: {}", self.app_icon.name);
        }

        validate_sizes("status_bar.sizes", &self.status_bar.sizes)?;
        validate_sizes("app_icon.sizes", &self.app_icon.sizes)?;

        Ok(())
    }
}

fn validate_sizes(field: &str, sizes: &[u32]) -> Result<()> {
    if sizes.is_empty() {
        bail!("{} cannot be empty", field);
    }
    for &size in sizes {
        if size == 0 {
            bail!("{} must be greater than 0", field);
        }
        if size > icon_sets::MAX_BASE_SIZE {
            bail!("{} must be <= {} (got {})", field, icon_sets::MAX_BASE_SIZE, size);
        }
    }
    Ok(())
}
