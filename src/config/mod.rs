//! Configuration module for docsite-config
//!
//! This module turns a raw site declaration into a validated [`Config`].
//! [`load`] is the pure validation step; [`load_config`] adds reading a TOML
//! or JSON file and resolving an external sidebar file.
//!
//! # Example
//!
//! ```no_run
//! use docsite_config::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("docusaurus.toml")).unwrap();
//! println!("Current docs: {}", config.docs.current().unwrap().label);
//! ```

mod choice;
mod parser;
mod raw;
mod types;
mod validation;

// Re-export types
pub use choice::{
    parse_choice, Choice, CodeTheme, FooterStyle, LinkPolicy, NavbarItemKind, NavbarPosition,
    NavbarStyle,
};
pub use raw::{
    RawConfig, RawDocVersion, RawDocs, RawFooter, RawFooterLink, RawFooterSection, RawI18n,
    RawLogo, RawNavbar, RawNavbarItem, RawPrism, RawTheme, RawThemeConfig,
};
pub use types::{
    Config, DocVersion, DocsConfig, Footer, FooterLink, FooterSection, LocaleSet, Logo, Navbar,
    NavbarItem, Sidebar, SiteMetadata, ThemeChoice, CURRENT_VERSION_KEY, YEAR_PLACEHOLDER,
};

// Re-export loader functions
pub use parser::{
    compute_config_hash, load_config, load_config_with_hash, parse_config_str,
    parse_sidebars_str, ConfigFormat,
};
pub use validation::load;
