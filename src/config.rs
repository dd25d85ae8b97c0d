// SPDX-License-Identifier: GPL-3.0-only

//! Carousel configuration: section text, partner list, and rotation cadence
//!
//! Every field is optional in the JSON file. The interval is read leniently
//! (see [`RotationInterval`]) so a bad value never prevents the carousel
//! from starting.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_SECTION_SUBTITLE, DEFAULT_SECTION_TITLE,
    DEMO_CONFIG_ASSET,
};
use crate::errors::ConfigError;
use crate::partners::{Partner, PartnerWarning};
use crate::rotation::{RotationInterval, TickPolicy};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Files compiled into the binary
#[derive(RustEmbed)]
#[folder = "assets/"]
struct BundledAssets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Heading above the carousel
    pub section_title: String,
    /// Line under the heading
    pub section_subtitle: String,
    /// Items to rotate through, in display order
    pub partners: Vec<Partner>,
    /// Time between automatic advances
    #[serde(rename = "interval_ms")]
    pub interval: RotationInterval,
    /// Whether automatic advances count from manual selections
    pub tick_policy: TickPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            section_title: DEFAULT_SECTION_TITLE.to_string(),
            section_subtitle: DEFAULT_SECTION_SUBTITLE.to_string(),
            partners: Vec::new(),
            interval: RotationInterval::default(),
            tick_policy: TickPolicy::default(),
        }
    }
}

impl Config {
    /// `<user config dir>/carousel/partners.json`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Read and parse a config file
    ///
    /// Relative image paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        })?;

        let mut config = Self::parse(&json, path)?;
        if let Some(base) = path.parent() {
            config.resolve_images(base);
        }

        info!(
            path = %path.display(),
            partners = config.partners.len(),
            interval = %config.interval,
            "Loaded carousel config"
        );
        Ok(config)
    }

    /// The demo partner list bundled with the binary
    pub fn demo() -> Result<Self, ConfigError> {
        let file = BundledAssets::get(DEMO_CONFIG_ASSET).ok_or(ConfigError::MissingDemo)?;
        let json = String::from_utf8_lossy(&file.data);
        let config = Self::parse(&json, Path::new(DEMO_CONFIG_ASSET))?;
        debug!(partners = config.partners.len(), "Loaded bundled demo config");
        Ok(config)
    }

    /// Parse JSON text; `origin` is only used in error messages
    pub fn parse(json: &str, origin: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn resolve_images(&mut self, base: &Path) {
        for partner in &mut self.partners {
            partner.resolve_image(base);
        }
    }

    /// Warnings for every partner, tagged with the partner's position
    pub fn validate(&self, current_year: i32) -> Vec<(usize, PartnerWarning)> {
        self.partners
            .iter()
            .enumerate()
            .flat_map(|(index, partner)| {
                partner
                    .validate(current_year)
                    .into_iter()
                    .map(move |warning| (index, warning))
            })
            .collect()
    }
}
