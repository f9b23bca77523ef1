use crate::config::choice::{CodeTheme, FooterStyle, LinkPolicy, NavbarPosition, NavbarStyle};
use crate::UrlResult;
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

/// Key of the version that is current unless flagged otherwise
pub const CURRENT_VERSION_KEY: &str = "current";

/// Placeholder replaced by the year when rendering the footer copyright
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Validated documentation-site configuration
///
/// Built once by [`crate::config::load`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub site: SiteMetadata,
    pub on_broken_links: LinkPolicy,
    pub on_broken_markdown_links: LinkPolicy,
    pub locales: LocaleSet,
    pub docs: DocsConfig,
    pub sidebars: BTreeMap<String, Sidebar>,
    pub navbar: Navbar,
    pub footer: Footer,
    pub themes: ThemeChoice,
    pub custom_css: Option<String>,
}

impl Config {
    /// Absolute URL of the site root (`url` joined with `baseUrl`)
    pub fn site_root(&self) -> UrlResult<Url> {
        crate::url::site_root(&self.site.url, &self.site.base_url)
    }

    /// Looks up a sidebar by id
    pub fn sidebar(&self, id: &str) -> Option<&Sidebar> {
        self.sidebars.get(id)
    }
}

/// Site identity and deployment location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub title: String,
    pub tagline: String,
    pub favicon: String,

    /// Canonical URL as written in the configuration
    pub url: String,

    /// Base path, normalized to start and end with `/`
    pub base_url: String,

    pub organization_name: String,
    pub project_name: String,
}

/// Default locale plus every supported locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleSet {
    pub default_locale: String,
    pub locales: Vec<String>,
}

impl LocaleSet {
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }
}

impl Default for LocaleSet {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locales: vec!["en".to_string()],
        }
    }
}

/// Versioned documentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsConfig {
    pub sidebar_path: Option<String>,
    pub last_version: Option<String>,

    /// Declared versions by key
    pub versions: BTreeMap<String, DocVersion>,

    /// Key of the single current version
    pub current_version: String,
}

impl DocsConfig {
    /// The version shown when no version is present in the URL
    pub fn current(&self) -> Option<&DocVersion> {
        self.versions.get(&self.current_version)
    }

    /// The version the site defaults to: `lastVersion` if set, otherwise the current one
    pub fn default_version(&self) -> Option<&DocVersion> {
        match &self.last_version {
            Some(key) => self.versions.get(key),
            None => self.current(),
        }
    }
}

/// Metadata of one documentation version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocVersion {
    pub label: String,
    pub path: String,
    pub badge: bool,
}

/// Ordered list of document ids
pub type Sidebar = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navbar {
    pub style: NavbarStyle,
    pub title: Option<String>,
    pub logo: Option<Logo>,
    pub items: Vec<NavbarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Logo {
    pub alt: String,
    pub src: String,
}

/// A resolved navbar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum NavbarItem {
    /// Link to the first document of a declared sidebar
    #[serde(rename = "docSidebar")]
    DocSidebar {
        #[serde(rename = "sidebarId")]
        sidebar_id: String,
        label: String,
        position: NavbarPosition,
    },

    /// Plain link to an arbitrary target
    #[serde(rename = "default")]
    Link {
        href: String,
        label: String,
        position: NavbarPosition,
    },
}

impl NavbarItem {
    pub fn label(&self) -> &str {
        match self {
            Self::DocSidebar { label, .. } | Self::Link { label, .. } => label,
        }
    }

    pub fn position(&self) -> NavbarPosition {
        match self {
            Self::DocSidebar { position, .. } | Self::Link { position, .. } => *position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub style: FooterStyle,
    pub links: Vec<FooterSection>,

    /// Copyright template; `{year}` is substituted when rendered
    pub copyright: Option<String>,
}

impl Footer {
    /// Renders the copyright line for the given year
    ///
    /// # Examples
    ///
    /// ```
    /// use docsite_config::config::{Footer, FooterStyle};
    ///
    /// let footer = Footer {
    ///     style: FooterStyle::Dark,
    ///     links: vec![],
    ///     copyright: Some("Copyright © {year} Topl".to_string()),
    /// };
    /// assert_eq!(footer.render_copyright(2024).unwrap(), "Copyright © 2024 Topl");
    /// ```
    pub fn render_copyright(&self, year: i32) -> Option<String> {
        self.copyright
            .as_ref()
            .map(|template| template.replace(YEAR_PLACEHOLDER, &year.to_string()))
    }

    /// Renders the copyright line for the current UTC year
    pub fn current_copyright(&self) -> Option<String> {
        self.render_copyright(chrono::Utc::now().year())
    }
}

/// Footer column: a title over an ordered list of links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterSection {
    pub title: String,
    pub items: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

/// Light and dark syntax-highlighting themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeChoice {
    pub light: CodeTheme,
    pub dark: CodeTheme,
}

impl Default for ThemeChoice {
    fn default() -> Self {
        Self {
            light: CodeTheme::Github,
            dark: CodeTheme::Dracula,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(last_version: Option<&str>) -> DocsConfig {
        let mut versions = BTreeMap::new();
        versions.insert(
            "current".to_string(),
            DocVersion {
                label: "2.0.0".to_string(),
                path: "2.0.0".to_string(),
                badge: true,
            },
        );
        versions.insert(
            "1.0.0".to_string(),
            DocVersion {
                label: "1.0.0".to_string(),
                path: "1.0.0".to_string(),
                badge: false,
            },
        );
        DocsConfig {
            sidebar_path: None,
            last_version: last_version.map(str::to_string),
            versions,
            current_version: "current".to_string(),
        }
    }

    #[test]
    fn test_current_version() {
        let docs = docs(None);
        assert_eq!(docs.current().unwrap().label, "2.0.0");
        assert_eq!(docs.default_version().unwrap().label, "2.0.0");
    }

    #[test]
    fn test_last_version_overrides_default() {
        let docs = docs(Some("1.0.0"));
        assert_eq!(docs.current().unwrap().label, "2.0.0");
        assert_eq!(docs.default_version().unwrap().label, "1.0.0");
    }

    #[test]
    fn test_render_copyright() {
        let footer = Footer {
            style: FooterStyle::Dark,
            links: vec![],
            copyright: Some("Copyright © {year} Topl, Built with Docusaurus.".to_string()),
        };
        assert_eq!(
            footer.render_copyright(2023).unwrap(),
            "Copyright © 2023 Topl, Built with Docusaurus."
        );
    }

    #[test]
    fn test_render_copyright_without_placeholder() {
        let footer = Footer {
            style: FooterStyle::Light,
            links: vec![],
            copyright: Some("All rights reserved".to_string()),
        };
        assert_eq!(footer.render_copyright(2023).unwrap(), "All rights reserved");
    }

    #[test]
    fn test_no_copyright() {
        let footer = Footer {
            style: FooterStyle::Light,
            links: vec![],
            copyright: None,
        };
        assert!(footer.current_copyright().is_none());
    }

    #[test]
    fn test_navbar_item_accessors() {
        let item = NavbarItem::Link {
            href: "https://github.com/Topl/BramblDart".to_string(),
            label: "GitHub".to_string(),
            position: NavbarPosition::Right,
        };
        assert_eq!(item.label(), "GitHub");
        assert_eq!(item.position(), NavbarPosition::Right);
    }

    #[test]
    fn test_navbar_item_serializes_with_type_tag() {
        let item = NavbarItem::DocSidebar {
            sidebar_id: "referenceSidebar".to_string(),
            label: "Reference".to_string(),
            position: NavbarPosition::Left,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "docSidebar");
        assert_eq!(json["sidebarId"], "referenceSidebar");
        assert_eq!(json["position"], "left");
    }

    #[test]
    fn test_default_locale_set() {
        let locales = LocaleSet::default();
        assert!(locales.contains("en"));
        assert!(!locales.contains("fr"));
    }
}
