use crate::config::raw::{RawConfig, RawSidebars};
use crate::config::types::Config;
use crate::config::validation::load;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;

/// Serialization format of a configuration or sidebar file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Picks the format from the file extension; anything but `.json` is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Parses configuration text into an unvalidated declaration
///
/// # Arguments
///
/// * `content` - The file content
/// * `format` - How to interpret `content`
///
/// # Returns
///
/// * `Ok(RawConfig)` - Successfully parsed declaration
/// * `Err(ConfigError)` - Syntax error or a value of the wrong type
pub fn parse_config_str(content: &str, format: ConfigFormat) -> Result<RawConfig, ConfigError> {
    let raw = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(raw)
}

/// Parses a sidebar file: a table of sidebar id to ordered document ids
pub fn parse_sidebars_str(
    content: &str,
    format: ConfigFormat,
) -> Result<BTreeMap<String, Vec<String>>, ConfigError> {
    let RawSidebars(sidebars) = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(sidebars)
}

/// Loads, parses and validates a configuration file from the given path
///
/// The format is chosen by extension (see [`ConfigFormat::from_path`]). When
/// the declaration has no inline `sidebars` but names a `docs.sidebarPath`,
/// that file is read relative to the configuration file's directory.
///
/// # Arguments
///
/// * `path` - Path to the TOML or JSON configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use docsite_config::config::load_config;
///
/// let config = load_config(Path::new("docusaurus.toml")).unwrap();
/// println!("Site root: {}", config.site_root().unwrap());
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    let mut raw = parse_config_str(&content, ConfigFormat::from_path(path))?;
    tracing::debug!("Parsed configuration file {}", path.display());

    resolve_sidebar_file(&mut raw, path)?;

    // Validate the configuration
    load(&raw)
}

/// Fills `raw.sidebars` from `docs.sidebarPath` when no sidebars are inline
fn resolve_sidebar_file(raw: &mut RawConfig, config_path: &Path) -> Result<(), ConfigError> {
    let Some(sidebar_path) = raw.docs.sidebar_path.as_deref() else {
        return Ok(());
    };

    if !raw.sidebars.is_empty() {
        tracing::debug!(
            "Inline sidebars present, not reading sidebar file {}",
            sidebar_path
        );
        return Ok(());
    }

    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let full_path = base_dir.join(sidebar_path);

    let content =
        std::fs::read_to_string(&full_path).map_err(|source| ConfigError::SidebarFile {
            path: full_path.display().to_string(),
            source,
        })?;

    raw.sidebars = parse_sidebars_str(&content, ConfigFormat::from_path(&full_path))?;
    tracing::debug!(
        "Loaded {} sidebars from {}",
        raw.sidebars.len(),
        full_path.display()
    );

    Ok(())
}

/// Computes a SHA-256 hash of the configuration file content
///
/// This is used to detect if the configuration has changed between builds.
///
/// # Arguments
///
/// * `path` - Path to the configuration file
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}
