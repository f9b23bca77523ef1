//! End-to-end loading of the fixture site declarations
//!
//! These tests read the files under `test-fixtures/` and check the full
//! validated configuration, including the external sidebar file.

use docsite_config::config::{
    compute_config_hash, load, load_config, parse_config_str, CodeTheme, ConfigFormat,
    FooterStyle, LinkPolicy, NavbarItem, NavbarPosition, NavbarStyle, RawConfig,
};
use docsite_config::ConfigError;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-fixtures")
        .join(name)
}

fn fixture_raw(name: &str) -> RawConfig {
    let content = std::fs::read_to_string(fixture(name)).expect("Failed to read fixture");
    parse_config_str(&content, ConfigFormat::from_path(Path::new(name)))
        .expect("Failed to parse fixture")
}

#[test]
fn test_full_site_config() {
    let config = load_config(&fixture("brambl-docs.toml")).unwrap();

    assert_eq!(config.site.title, "BramblDart");
    assert_eq!(config.site.base_url, "/BramblDart/");
    assert_eq!(
        config.site_root().unwrap().as_str(),
        "https://topl.github.io/BramblDart/"
    );
    assert_eq!(config.on_broken_links, LinkPolicy::Throw);
    assert_eq!(config.on_broken_markdown_links, LinkPolicy::Warn);
    assert_eq!(config.custom_css.as_deref(), Some("src/css/custom.css"));

    let current = config.docs.current().unwrap();
    assert_eq!(current.label, "2.0.0");
    assert_eq!(current.path, "2.0.0");
    assert!(current.badge);
    assert_eq!(config.docs.default_version(), Some(current));

    assert_eq!(config.sidebars.len(), 3);
    assert_eq!(
        config.sidebar("tutorialsSidebar").unwrap()[0],
        "tutorials/getting-started"
    );
}

#[test]
fn test_navbar_resolved() {
    let config = load_config(&fixture("brambl-docs.toml")).unwrap();
    let navbar = &config.navbar;

    assert_eq!(navbar.style, NavbarStyle::Dark);
    assert!(navbar.title.is_none());
    assert_eq!(navbar.logo.as_ref().unwrap().src, "img/logo.svg");

    let labels: Vec<_> = navbar.items.iter().map(|i| i.label()).collect();
    assert_eq!(labels, vec!["Reference", "Tutorials", "Concepts", "GitHub"]);

    assert!(matches!(
        &navbar.items[1],
        NavbarItem::DocSidebar { sidebar_id, .. } if sidebar_id == "tutorialsSidebar"
    ));
    assert_eq!(
        navbar.items[3],
        NavbarItem::Link {
            href: "https://github.com/Topl/BramblDart".to_string(),
            label: "GitHub".to_string(),
            position: NavbarPosition::Right,
        }
    );
}

#[test]
fn test_footer_and_themes() {
    let config = load_config(&fixture("brambl-docs.toml")).unwrap();

    assert_eq!(config.footer.style, FooterStyle::Dark);
    assert_eq!(config.footer.links.len(), 2);
    assert_eq!(config.footer.links[0].title, "Community");
    assert_eq!(config.footer.links[0].items[1].label, "Discord");
    assert_eq!(config.footer.links[1].items[0].href, "https://github.com/Topl/BramblDart");
    assert_eq!(
        config.footer.render_copyright(2023).unwrap(),
        "Copyright © 2023 Topl, Built with Docusaurus."
    );

    assert_eq!(config.themes.light, CodeTheme::Github);
    assert_eq!(config.themes.dark, CodeTheme::Dracula);
}

#[test]
fn test_json_and_toml_fixtures_agree() {
    let from_toml = load_config(&fixture("brambl-docs.toml")).unwrap();
    let from_json = load_config(&fixture("brambl-docs.json")).unwrap();

    assert_eq!(from_toml.docs.sidebar_path.as_deref(), Some("sidebars.toml"));
    assert_eq!(from_json.docs.sidebar_path.as_deref(), Some("sidebars.json"));

    let mut from_toml = from_toml;
    let mut from_json = from_json;
    from_toml.docs.sidebar_path = None;
    from_json.docs.sidebar_path = None;
    assert_eq!(from_toml, from_json);
}

#[test]
fn test_pure_load_without_sidebar_file_fails_to_resolve() {
    // Without the file front-end, docs.sidebarPath is not read
    let raw = fixture_raw("brambl-docs.toml");
    assert!(matches!(
        load(&raw),
        Err(ConfigError::UnresolvedSidebar(id)) if id == "referenceSidebar"
    ));
}

#[test]
fn test_load_is_idempotent_on_fixture() {
    let mut raw = fixture_raw("brambl-docs.toml");
    raw.sidebars.insert("referenceSidebar".to_string(), vec!["a".to_string()]);
    raw.sidebars.insert("tutorialsSidebar".to_string(), vec!["b".to_string()]);
    raw.sidebars.insert("conceptsSidebar".to_string(), vec!["c".to_string()]);

    let first = load(&raw).unwrap();
    let second = load(&raw).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_scenario_minimal_declaration() {
    let raw = parse_config_str(
        r#"
title = "X"
url = "https://e.com"
baseUrl = "/x/"
organizationName = "O"
projectName = "P"
onBrokenLinks = "throw"

[i18n]
defaultLocale = "en"
locales = ["en"]

[docs.versions.current]
label = "1.0"
path = "1.0"
badge = true
"#,
        ConfigFormat::Toml,
    )
    .unwrap();

    let config = load(&raw).unwrap();
    assert_eq!(config.site.title, "X");
    assert_eq!(config.site.url, "https://e.com");
    assert_eq!(config.site.base_url, "/x/");
    assert_eq!(config.site.organization_name, "O");
    assert_eq!(config.site.project_name, "P");
    assert_eq!(config.on_broken_links, LinkPolicy::Throw);
    assert_eq!(config.locales.default_locale, "en");

    let current = config.docs.current().unwrap();
    assert_eq!(
        (current.label.as_str(), current.path.as_str(), current.badge),
        ("1.0", "1.0", true)
    );
}

#[test]
fn test_validated_config_serializes_with_config_names() {
    let config = load_config(&fixture("brambl-docs.toml")).unwrap();
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["onBrokenLinks"], "throw");
    assert_eq!(json["site"]["baseUrl"], "/BramblDart/");
    assert_eq!(json["navbar"]["items"][0]["type"], "docSidebar");
    assert_eq!(json["themes"]["dark"], "dracula");
}

#[test]
fn test_fixture_hash_is_stable() {
    let hash1 = compute_config_hash(&fixture("brambl-docs.toml")).unwrap();
    let hash2 = compute_config_hash(&fixture("brambl-docs.toml")).unwrap();
    assert_eq!(hash1, hash2);
    assert_ne!(hash1, compute_config_hash(&fixture("brambl-docs.json")).unwrap());
}
