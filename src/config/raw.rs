use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Unvalidated site declaration, as written in the configuration file
///
/// Every field is optional here so that a missing value is reported by name
/// during validation instead of as an opaque parse failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub favicon: Option<String>,

    /// Production URL of the site, without the base path
    pub url: Option<String>,

    /// Path under which the site is served
    pub base_url: Option<String>,

    pub organization_name: Option<String>,
    pub project_name: Option<String>,

    pub on_broken_links: Option<String>,
    pub on_broken_markdown_links: Option<String>,

    pub i18n: Option<RawI18n>,

    #[serde(default)]
    pub docs: RawDocs,

    /// Inline sidebars: sidebar id to ordered document ids
    #[serde(default, deserialize_with = "unique_keys")]
    pub sidebars: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub theme: RawTheme,

    #[serde(default)]
    pub theme_config: RawThemeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct RawI18n {
    pub default_locale: Option<String>,
    #[serde(default)]
    pub locales: Vec<String>,
}

/// Documentation plugin settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct RawDocs {
    /// Separate sidebar file, relative to the configuration file
    pub sidebar_path: Option<String>,

    /// Version shown by default
    pub last_version: Option<String>,

    /// Version key to version metadata; `None` when the table is absent
    #[serde(default, deserialize_with = "optional_unique_keys")]
    pub versions: Option<BTreeMap<String, RawDocVersion>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawDocVersion {
    pub label: Option<String>,
    pub path: Option<String>,
    #[serde(default)]
    pub badge: bool,

    /// Explicit current flag; the `current` key is current unless this is `false`
    pub current: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct RawTheme {
    pub custom_css: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawThemeConfig {
    #[serde(default)]
    pub navbar: RawNavbar,
    #[serde(default)]
    pub footer: RawFooter,
    #[serde(default)]
    pub prism: RawPrism,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawNavbar {
    pub style: Option<String>,
    pub title: Option<String>,
    pub logo: Option<RawLogo>,
    #[serde(default)]
    pub items: Vec<RawNavbarItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawLogo {
    pub alt: Option<String>,
    pub src: Option<String>,
}

/// Navbar entry before its `type` discriminant is resolved
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct RawNavbarItem {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sidebar_id: Option<String>,
    pub href: Option<String>,
    pub label: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawFooter {
    pub style: Option<String>,
    #[serde(default)]
    pub links: Vec<RawFooterSection>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawFooterSection {
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<RawFooterLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawFooterLink {
    pub label: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct RawPrism {
    pub theme: Option<String>,
    pub dark_theme: Option<String>,
}

/// Contents of a standalone sidebar file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawSidebars(
    #[serde(deserialize_with = "unique_keys")] pub BTreeMap<String, Vec<String>>,
);

/// Deserializes a table into a map, rejecting a key that appears twice
///
/// TOML already refuses duplicate keys, but JSON objects would otherwise
/// keep the last entry silently.
pub fn unique_keys<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct UniqueKeys<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeys<V> {
        type Value = BTreeMap<String, V>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a table with unique keys")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut map = BTreeMap::new();
            while let Some(key) = access.next_key::<String>()? {
                match map.entry(key) {
                    Entry::Occupied(entry) => {
                        return Err(de::Error::custom(format!(
                            "duplicate key `{}`",
                            entry.key()
                        )));
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(access.next_value()?);
                    }
                }
            }
            Ok(map)
        }
    }

    deserializer.deserialize_map(UniqueKeys(PhantomData))
}

fn optional_unique_keys<'de, D, V>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, V>>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    unique_keys(deserializer).map(Some)
}
