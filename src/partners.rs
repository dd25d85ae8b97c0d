// SPDX-License-Identifier: GPL-3.0-only

//! Partner records shown by the carousel

use crate::constants::{INDUSTRIAL_PARTNER_LABEL, TRAINING_PARTNER_LABEL};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of partnership, shown as the first badge on a slide
///
/// Parsing is total: any label that is not a known category is kept
/// verbatim as [`PartnerCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PartnerCategory {
    Industrial,
    Training,
    Other(String),
}

impl PartnerCategory {
    /// Text shown in the badge
    pub fn label(&self) -> &str {
        match self {
            PartnerCategory::Industrial => INDUSTRIAL_PARTNER_LABEL,
            PartnerCategory::Training => TRAINING_PARTNER_LABEL,
            PartnerCategory::Other(label) => label,
        }
    }
}

impl Default for PartnerCategory {
    fn default() -> Self {
        PartnerCategory::Other(String::new())
    }
}

impl From<String> for PartnerCategory {
    fn from(label: String) -> Self {
        match label.as_str() {
            INDUSTRIAL_PARTNER_LABEL => PartnerCategory::Industrial,
            TRAINING_PARTNER_LABEL => PartnerCategory::Training,
            _ => PartnerCategory::Other(label),
        }
    }
}

impl From<&str> for PartnerCategory {
    fn from(label: &str) -> Self {
        PartnerCategory::from(label.to_string())
    }
}

impl From<PartnerCategory> for String {
    fn from(category: PartnerCategory) -> Self {
        match category {
            PartnerCategory::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for PartnerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One item in the carousel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partner {
    /// Partnership category (`type` in the JSON data)
    #[serde(rename = "type")]
    pub category: PartnerCategory,
    pub name: String,
    pub description: String,
    /// Year the partnership started
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_year"
    )]
    pub year: Option<u16>,
    /// Logo or picture; relative paths are resolved against the config file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

/// Accept `2019`, `"2019"`, or nothing; anything unparseable is dropped
///
/// Year 0 means "unknown" and is dropped too.
fn deserialize_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u16>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let year: Option<u16> = match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().and_then(|y| u16::try_from(y).ok()),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(year.filter(|&y| y != 0))
}

/// Problems worth reporting about a partner record. None of them stop the
/// carousel from showing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartnerWarning {
    EmptyName,
    YearInFuture { year: u16, current_year: i32 },
    ImageMissing(PathBuf),
}

impl fmt::Display for PartnerWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartnerWarning::EmptyName => write!(f, "partner has no name"),
            PartnerWarning::YearInFuture { year, current_year } => {
                write!(f, "year {} is after the current year {}", year, current_year)
            }
            PartnerWarning::ImageMissing(path) => {
                write!(f, "image not found: {}", path.display())
            }
        }
    }
}

impl Partner {
    /// Text for the secondary badge, if a year is known
    pub fn since_label(&self) -> Option<String> {
        self.year
            .filter(|&year| year != 0)
            .map(|year| format!("Since {}", year))
    }

    /// Make a relative image path absolute against `base`
    ///
    /// An empty path is treated as no image.
    pub fn resolve_image(&mut self, base: &Path) {
        if self.image.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            self.image = None;
        }
        if let Some(image) = &self.image
            && image.is_relative()
        {
            self.image = Some(base.join(image));
        }
    }

    /// Check the record for suspicious values
    pub fn validate(&self, current_year: i32) -> Vec<PartnerWarning> {
        let mut warnings = Vec::new();

        if self.name.trim().is_empty() {
            warnings.push(PartnerWarning::EmptyName);
        }
        if let Some(year) = self.year
            && i32::from(year) > current_year
        {
            warnings.push(PartnerWarning::YearInFuture { year, current_year });
        }
        if let Some(image) = &self.image
            && !image.exists()
        {
            warnings.push(PartnerWarning::ImageMissing(image.clone()));
        }

        warnings
    }
}
