// SPDX-License-Identifier: MPL-2.0

//! Error types for the carousel application
//!
//! The rotation controller itself never fails; degenerate input is
//! normalised where it is read. These types cover the edges: reading the
//! partner list, decoding images, and driving the terminal.

use std::fmt;
use std::path::PathBuf;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Partner list could not be loaded
    Config(ConfigError),
    /// Image could not be loaded
    Asset(AssetError),
    /// Terminal or other I/O failure
    Io(String),
}

/// Errors while loading the partner list
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// No config file at the given path
    NotFound(PathBuf),
    /// File exists but could not be read
    Read { path: PathBuf, message: String },
    /// File is not valid JSON for a config
    Parse { path: PathBuf, message: String },
    /// The platform has no user config directory
    NoConfigDir,
    /// Bundled demo data is missing from the binary
    MissingDemo,
}

/// Errors while preloading an image
#[derive(Debug, Clone)]
pub enum AssetError {
    /// Could not read the image file
    Read { path: PathBuf, message: String },
    /// File was read but is not a decodable image
    Decode { path: PathBuf, message: String },
    /// Background decode task failed
    Task(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Asset(e) => write!(f, "Asset error: {}", e),
            AppError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound(path) => write!(f, "No config file at {}", path.display()),
            ConfigError::Read { path, message } => {
                write!(f, "Failed to read {}: {}", path.display(), message)
            }
            ConfigError::Parse { path, message } => {
                write!(f, "Failed to parse {}: {}", path.display(), message)
            }
            ConfigError::NoConfigDir => write!(f, "No user config directory available"),
            ConfigError::MissingDemo => write!(f, "Bundled demo data is missing"),
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Read { path, message } => {
                write!(f, "Failed to read image {}: {}", path.display(), message)
            }
            AssetError::Decode { path, message } => {
                write!(f, "Failed to decode image {}: {}", path.display(), message)
            }
            AssetError::Task(msg) => write!(f, "Image task failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for AssetError {}

// Conversions from sub-errors to AppError
impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<AssetError> for AppError {
    fn from(err: AssetError) -> Self {
        AppError::Asset(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}
