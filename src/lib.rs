//! docsite-config: configuration loader for versioned documentation sites
//!
//! This crate turns the declarative description of a documentation website
//! (site metadata, broken-link policies, locales, document versions, sidebars,
//! navbar, footer and code themes) into a validated, immutable [`Config`]
//! that a site-building framework can consume.

pub mod config;
pub mod url;

use thiserror::Error;

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read sidebar file {path}: {source}")]
    SidebarFile {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error(
        "Invalid value '{value}' for {field}, expected one of: {}",
        .allowed.join(", ")
    )]
    InvalidEnum {
        field: String,
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("Version policy violated: {0}")]
    VersionPolicy(String),

    #[error("Navbar references unknown sidebar '{0}'")]
    UnresolvedSidebar(String),

    #[error(
        "Default locale '{default}' is not one of the configured locales [{}]",
        .locales.join(", ")
    )]
    LocaleMismatch {
        default: String,
        locales: Vec<String>,
    },

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{load, load_config, Config, RawConfig};
pub use crate::url::{normalize_base_url, site_root};
