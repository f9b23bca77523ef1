//! Closed sets of recognized values for enum-like configuration fields
//!
//! Every field that only accepts a fixed set of names (link policies, navbar
//! positions and styles, footer styles, code themes) is modeled as a Rust enum
//! implementing [`Choice`]. Raw strings are resolved with [`parse_choice`],
//! which rejects anything outside the set with [`ConfigError::InvalidEnum`].

use crate::ConfigError;
use serde::Serialize;
use std::fmt;

/// An enum whose variants are selected by name in the configuration
pub trait Choice: Copy + PartialEq + 'static {
    /// Every accepted name paired with its variant
    const VARIANTS: &'static [(&'static str, Self)];

    /// Looks up a variant by its configuration name (case-sensitive)
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, variant)| *variant)
    }

    /// Returns the configuration name of this variant
    fn name(self) -> &'static str {
        Self::VARIANTS
            .iter()
            .find(|(_, variant)| *variant == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    /// Returns all accepted names, in declaration order
    fn allowed() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|(name, _)| *name).collect()
    }
}

/// Resolves a raw value into a variant of `T`
///
/// # Arguments
///
/// * `field` - Dotted path of the field, used in the error message
/// * `value` - The raw value as written in the configuration
///
/// # Returns
///
/// * `Ok(T)` - The matching variant
/// * `Err(ConfigError::InvalidEnum)` - The value is not one of `T::allowed()`
pub fn parse_choice<T: Choice>(field: &str, value: &str) -> Result<T, ConfigError> {
    T::from_name(value).ok_or_else(|| ConfigError::InvalidEnum {
        field: field.to_string(),
        value: value.to_string(),
        allowed: T::allowed(),
    })
}

/// Like [`parse_choice`], falling back to `default` when the field is absent
pub fn parse_optional_choice<T: Choice>(
    field: &str,
    value: Option<&str>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => parse_choice(field, value),
        None => Ok(default),
    }
}

/// Build-time behavior when a link target cannot be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Silently accept the broken link
    Ignore,
    /// Report the broken link and keep building
    Warn,
    /// Abort the build
    Throw,
}

impl Choice for LinkPolicy {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("ignore", Self::Ignore),
        ("warn", Self::Warn),
        ("throw", Self::Throw),
    ];
}

impl fmt::Display for LinkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Side of the navbar an item is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    Left,
    Right,
}

impl Choice for NavbarPosition {
    const VARIANTS: &'static [(&'static str, Self)] =
        &[("left", Self::Left), ("right", Self::Right)];
}

/// Discriminant of a raw navbar item (its `type` field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavbarItemKind {
    /// Reference to a declared sidebar
    DocSidebar,
    /// Plain link, the kind used when `type` is omitted
    Default,
}

impl Choice for NavbarItemKind {
    const VARIANTS: &'static [(&'static str, Self)] =
        &[("docSidebar", Self::DocSidebar), ("default", Self::Default)];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarStyle {
    Primary,
    Dark,
}

impl Choice for NavbarStyle {
    const VARIANTS: &'static [(&'static str, Self)] =
        &[("primary", Self::Primary), ("dark", Self::Dark)];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    Light,
    Dark,
}

impl Choice for FooterStyle {
    const VARIANTS: &'static [(&'static str, Self)] =
        &[("light", Self::Light), ("dark", Self::Dark)];
}

/// Syntax-highlighting theme from the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CodeTheme {
    Dracula,
    DuotoneDark,
    DuotoneLight,
    Github,
    GruvboxMaterialDark,
    GruvboxMaterialLight,
    JettwaveDark,
    JettwaveLight,
    NightOwl,
    NightOwlLight,
    OceanicNext,
    Okaidia,
    OneDark,
    OneLight,
    Palenight,
    ShadesOfPurple,
    Synthwave84,
    Ultramin,
    VsDark,
    VsLight,
}

impl Choice for CodeTheme {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("dracula", Self::Dracula),
        ("duotoneDark", Self::DuotoneDark),
        ("duotoneLight", Self::DuotoneLight),
        ("github", Self::Github),
        ("gruvboxMaterialDark", Self::GruvboxMaterialDark),
        ("gruvboxMaterialLight", Self::GruvboxMaterialLight),
        ("jettwaveDark", Self::JettwaveDark),
        ("jettwaveLight", Self::JettwaveLight),
        ("nightOwl", Self::NightOwl),
        ("nightOwlLight", Self::NightOwlLight),
        ("oceanicNext", Self::OceanicNext),
        ("okaidia", Self::Okaidia),
        ("oneDark", Self::OneDark),
        ("oneLight", Self::OneLight),
        ("palenight", Self::Palenight),
        ("shadesOfPurple", Self::ShadesOfPurple),
        ("synthwave84", Self::Synthwave84),
        ("ultramin", Self::Ultramin),
        ("vsDark", Self::VsDark),
        ("vsLight", Self::VsLight),
    ];
}

impl fmt::Display for CodeTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
