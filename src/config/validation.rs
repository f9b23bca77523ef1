use crate::config::choice::{
    parse_optional_choice, Choice, CodeTheme, FooterStyle, LinkPolicy, NavbarItemKind,
    NavbarPosition, NavbarStyle,
};
use crate::config::raw::{
    RawConfig, RawDocs, RawFooter, RawI18n, RawNavbar, RawNavbarItem, RawPrism,
};
use crate::config::types::{
    Config, DocVersion, DocsConfig, Footer, FooterLink, FooterSection, LocaleSet, Logo, Navbar,
    NavbarItem, Sidebar, SiteMetadata, ThemeChoice, CURRENT_VERSION_KEY,
};
use crate::ConfigError;
use std::collections::{BTreeMap, HashSet};

/// Validates a raw declaration and builds the immutable configuration
///
/// Checks run in a fixed order and the first failure is returned; there is
/// no partial result. The function performs no I/O, so calling it twice on
/// the same input yields equal values.
///
/// # Arguments
///
/// * `raw` - The unvalidated declaration
///
/// # Returns
///
/// * `Ok(Config)` - Every check passed
/// * `Err(ConfigError)` - The first violated rule
///
/// # Example
///
/// ```
/// use docsite_config::config::{load, RawConfig};
///
/// let raw: RawConfig = toml::from_str(r#"
/// title = "X"
/// url = "https://e.com"
/// baseUrl = "/x/"
/// organizationName = "O"
/// projectName = "P"
/// "#).unwrap();
///
/// let config = load(&raw).unwrap();
/// assert_eq!(config.site.base_url, "/x/");
/// ```
pub fn load(raw: &RawConfig) -> Result<Config, ConfigError> {
    let site = validate_site(raw)?;

    let on_broken_links =
        parse_optional_choice("onBrokenLinks", raw.on_broken_links.as_deref(), LinkPolicy::Throw)?;
    let on_broken_markdown_links = parse_optional_choice(
        "onBrokenMarkdownLinks",
        raw.on_broken_markdown_links.as_deref(),
        LinkPolicy::Warn,
    )?;

    let locales = validate_locales(raw.i18n.as_ref())?;
    let docs = validate_docs(&raw.docs)?;
    let sidebars = validate_sidebars(&raw.sidebars)?;
    let navbar = validate_navbar(&raw.theme_config.navbar, &sidebars)?;
    let footer = validate_footer(&raw.theme_config.footer)?;
    let themes = validate_prism(&raw.theme_config.prism)?;

    tracing::debug!(
        "Validated configuration for '{}' ({} versions, {} sidebars, {} navbar items)",
        site.title,
        docs.versions.len(),
        sidebars.len(),
        navbar.items.len()
    );

    Ok(Config {
        site,
        on_broken_links,
        on_broken_markdown_links,
        locales,
        docs,
        sidebars,
        navbar,
        footer,
        themes,
        custom_css: raw.theme.custom_css.clone(),
    })
}

/// Returns the value of a required field, treating blank strings as missing
fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, ConfigError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingField(field.to_string())),
    }
}

/// Validates site metadata and the url/baseUrl pair
fn validate_site(raw: &RawConfig) -> Result<SiteMetadata, ConfigError> {
    let title = required(&raw.title, "title")?;
    let url = required(&raw.url, "url")?;
    let base_url = required(&raw.base_url, "baseUrl")?;
    let organization_name = required(&raw.organization_name, "organizationName")?;
    let project_name = required(&raw.project_name, "projectName")?;

    let root = crate::url::site_root(url, base_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("url '{}' with baseUrl '{}': {}", url, base_url, e))
    })?;

    let base_url = crate::url::normalize_base_url(base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid baseUrl: {}", e)))?;

    if let Ok(parsed) = url::Url::parse(url.trim()) {
        if parsed.path() != "/" {
            tracing::warn!("url '{}' carries a path, it will prefix baseUrl", url);
        }
    }

    tracing::debug!("Site root resolved to {}", root);

    Ok(SiteMetadata {
        title: title.to_string(),
        tagline: raw.tagline.clone().unwrap_or_default(),
        favicon: raw.favicon.clone().unwrap_or_default(),
        url: url.to_string(),
        base_url,
        organization_name: organization_name.to_string(),
        project_name: project_name.to_string(),
    })
}

/// Validates the locale set; an absent `i18n` section means English only
fn validate_locales(i18n: Option<&RawI18n>) -> Result<LocaleSet, ConfigError> {
    let Some(i18n) = i18n else {
        return Ok(LocaleSet::default());
    };

    let default_locale = required(&i18n.default_locale, "i18n.defaultLocale")?;

    if i18n.locales.is_empty() {
        return Err(ConfigError::MissingField("i18n.locales".to_string()));
    }

    let mut seen = HashSet::new();
    for locale in &i18n.locales {
        if locale.trim().is_empty() {
            return Err(ConfigError::Validation(
                "i18n.locales cannot contain an empty locale code".to_string(),
            ));
        }
        if !seen.insert(locale.as_str()) {
            return Err(ConfigError::Validation(format!(
                "i18n.locales lists '{}' more than once",
                locale
            )));
        }
    }

    if !seen.contains(default_locale) {
        return Err(ConfigError::LocaleMismatch {
            default: default_locale.to_string(),
            locales: i18n.locales.clone(),
        });
    }

    Ok(LocaleSet {
        default_locale: default_locale.to_string(),
        locales: i18n.locales.clone(),
    })
}

/// Validates document versions; exactly one must be current
fn validate_docs(docs: &RawDocs) -> Result<DocsConfig, ConfigError> {
    let Some(raw_versions) = &docs.versions else {
        if let Some(last) = &docs.last_version {
            if last != CURRENT_VERSION_KEY {
                return Err(ConfigError::VersionPolicy(format!(
                    "lastVersion '{}' does not name a declared version",
                    last
                )));
            }
        }

        let mut versions = BTreeMap::new();
        versions.insert(
            CURRENT_VERSION_KEY.to_string(),
            DocVersion {
                label: "Next".to_string(),
                path: String::new(),
                badge: false,
            },
        );
        return Ok(DocsConfig {
            sidebar_path: docs.sidebar_path.clone(),
            last_version: docs.last_version.clone(),
            versions,
            current_version: CURRENT_VERSION_KEY.to_string(),
        });
    };

    let mut versions = BTreeMap::new();
    let mut current = Vec::new();
    let mut paths: BTreeMap<&str, &str> = BTreeMap::new();

    for (key, raw) in raw_versions {
        if key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "docs.versions cannot contain an empty version key".to_string(),
            ));
        }

        let is_current = raw.current.unwrap_or(key == CURRENT_VERSION_KEY);
        if is_current {
            current.push(key.as_str());
        }

        let label = match &raw.label {
            Some(label) if label.trim().is_empty() => {
                return Err(ConfigError::Validation(format!(
                    "docs.versions.{}.label cannot be empty",
                    key
                )))
            }
            Some(label) => label.clone(),
            None if key == CURRENT_VERSION_KEY => "Next".to_string(),
            None => key.clone(),
        };

        let path = match &raw.path {
            Some(path) => path.clone(),
            None if key == CURRENT_VERSION_KEY => String::new(),
            None => key.clone(),
        };

        if path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "docs.versions.{}.path must be relative to baseUrl, got '{}'",
                key, path
            )));
        }

        versions.insert(
            key.clone(),
            DocVersion {
                label,
                path,
                badge: raw.badge,
            },
        );
    }

    for (key, version) in &versions {
        if let Some(other) = paths.insert(version.path.as_str(), key.as_str()) {
            return Err(ConfigError::VersionPolicy(format!(
                "versions '{}' and '{}' are both served at path '{}'",
                other, key, version.path
            )));
        }
    }

    let current_version = match current.as_slice() {
        [] => {
            return Err(ConfigError::VersionPolicy(
                "no document version is marked current".to_string(),
            ))
        }
        [key] => key.to_string(),
        keys => {
            return Err(ConfigError::VersionPolicy(format!(
                "exactly one document version may be current, found {}: {}",
                keys.len(),
                keys.join(", ")
            )))
        }
    };

    if let Some(last) = &docs.last_version {
        if !versions.contains_key(last) {
            return Err(ConfigError::VersionPolicy(format!(
                "lastVersion '{}' does not name a declared version",
                last
            )));
        }
    }

    Ok(DocsConfig {
        sidebar_path: docs.sidebar_path.clone(),
        last_version: docs.last_version.clone(),
        versions,
        current_version,
    })
}

/// Validates sidebar ids and their document references
fn validate_sidebars(
    sidebars: &BTreeMap<String, Vec<String>>,
) -> Result<BTreeMap<String, Sidebar>, ConfigError> {
    for (id, docs) in sidebars {
        if id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "sidebar ids cannot be empty".to_string(),
            ));
        }

        if let Some(index) = docs.iter().position(|doc| doc.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "sidebars.{}[{}] is an empty document id",
                id, index
            )));
        }
    }

    Ok(sidebars.clone())
}

/// Validates the navbar, resolving each item's `type` discriminant
fn validate_navbar(
    navbar: &RawNavbar,
    sidebars: &BTreeMap<String, Sidebar>,
) -> Result<Navbar, ConfigError> {
    let style = parse_optional_choice(
        "themeConfig.navbar.style",
        navbar.style.as_deref(),
        NavbarStyle::Primary,
    )?;

    let logo = match &navbar.logo {
        Some(logo) => Some(Logo {
            alt: logo.alt.clone().unwrap_or_default(),
            src: required(&logo.src, "themeConfig.navbar.logo.src")?.to_string(),
        }),
        None => None,
    };

    let items = navbar
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            validate_navbar_item(item, &format!("themeConfig.navbar.items[{}]", index), sidebars)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Navbar {
        style,
        title: navbar.title.clone().filter(|t| !t.is_empty()),
        logo,
        items,
    })
}

fn validate_navbar_item(
    item: &RawNavbarItem,
    field: &str,
    sidebars: &BTreeMap<String, Sidebar>,
) -> Result<NavbarItem, ConfigError> {
    let kind = parse_optional_choice(
        &format!("{}.type", field),
        item.kind.as_deref(),
        NavbarItemKind::Default,
    )?;
    let position = parse_optional_choice(
        &format!("{}.position", field),
        item.position.as_deref(),
        NavbarPosition::Left,
    )?;

    match kind {
        NavbarItemKind::DocSidebar => {
            let sidebar_id = required(&item.sidebar_id, &format!("{}.sidebarId", field))?;

            if !sidebars.contains_key(sidebar_id) {
                return Err(ConfigError::UnresolvedSidebar(sidebar_id.to_string()));
            }

            if item.href.is_some() {
                tracing::warn!(
                    "{}: href is ignored on {} items",
                    field,
                    NavbarItemKind::DocSidebar.name()
                );
            }

            Ok(NavbarItem::DocSidebar {
                sidebar_id: sidebar_id.to_string(),
                label: item
                    .label
                    .clone()
                    .filter(|l| !l.trim().is_empty())
                    .unwrap_or_else(|| sidebar_id.to_string()),
                position,
            })
        }
        NavbarItemKind::Default => {
            let href = required(&item.href, &format!("{}.href", field))?;
            let label = required(&item.label, &format!("{}.label", field))?;

            Ok(NavbarItem::Link {
                href: href.to_string(),
                label: label.to_string(),
                position,
            })
        }
    }
}

fn validate_footer(footer: &RawFooter) -> Result<Footer, ConfigError> {
    let style = parse_optional_choice(
        "themeConfig.footer.style",
        footer.style.as_deref(),
        FooterStyle::Light,
    )?;

    let mut links = Vec::with_capacity(footer.links.len());
    for (index, section) in footer.links.iter().enumerate() {
        let field = format!("themeConfig.footer.links[{}]", index);
        let title = required(&section.title, &format!("{}.title", field))?;

        let mut items = Vec::with_capacity(section.items.len());
        for (item_index, link) in section.items.iter().enumerate() {
            let item_field = format!("{}.items[{}]", field, item_index);
            items.push(FooterLink {
                label: required(&link.label, &format!("{}.label", item_field))?.to_string(),
                href: required(&link.href, &format!("{}.href", item_field))?.to_string(),
            });
        }

        links.push(FooterSection {
            title: title.to_string(),
            items,
        });
    }

    Ok(Footer {
        style,
        links,
        copyright: footer.copyright.clone(),
    })
}

fn validate_prism(prism: &RawPrism) -> Result<ThemeChoice, ConfigError> {
    let defaults = ThemeChoice::default();

    Ok(ThemeChoice {
        light: parse_optional_choice::<CodeTheme>(
            "themeConfig.prism.theme",
            prism.theme.as_deref(),
            defaults.light,
        )?,
        dark: parse_optional_choice::<CodeTheme>(
            "themeConfig.prism.darkTheme",
            prism.dark_theme.as_deref(),
            defaults.dark,
        )?,
    })
}
