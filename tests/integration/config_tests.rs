//! Integration tests for configuration loading and merging.

use distructions::config::{
    load_config, AppearanceLayer, Config, ConfigLayer, DetectConfig, Theme, PROJECT_CONFIG_FILE,
};
use distructions::error::{exit_code, DxError};

use crate::integration::fixtures::{create_empty_project, create_project};

// ==================== Config Defaults ====================

#[test]
fn test_config_new() {
    let config = Config::new();

    assert!(config.general.confirm_generation);
    assert_eq!(config.catalog_file(), ".project-commands.json");
    assert!(config.detect.disabled.is_empty());
    assert_eq!(config.appearance.theme, Theme::Default);
}

// ==================== Config Merging ====================

#[test]
fn test_config_merge_overlay_wins() {
    let mut base = Config::default();
    base.general.shell = Some("bash".to_string());

    let overlay = ConfigLayer {
        appearance: AppearanceLayer {
            compact: Some(true),
            ..Default::default()
        },
        detect: DetectConfig {
            disabled: vec!["cargo".to_string()],
        },
        ..Default::default()
    };

    base.merge(overlay);

    // Unset values keep the base
    assert_eq!(base.shell(), "bash");
    assert!(base.appearance.compact);
    assert!(base.appearance.show_footer);
    assert_eq!(base.detect.disabled, vec!["cargo"]);
}

#[test]
fn test_later_layer_keeps_settings_it_omits() {
    let base: ConfigLayer = toml::from_str(
        r#"
[general]
confirm_generation = false

[appearance]
theme = "minimal"
compact = true
"#,
    )
    .unwrap();
    let project: ConfigLayer = toml::from_str("[general]\nshell = \"bash\"\n").unwrap();

    let mut config = Config::default();
    config.merge(base);
    config.merge(project);

    assert_eq!(config.shell(), "bash");
    assert!(!config.general.confirm_generation);
    assert_eq!(config.appearance.theme, Theme::Minimal);
    assert!(config.appearance.compact);
    assert!(config.appearance.show_footer);
}

// ==================== File Loading ====================

#[test]
fn test_project_config_is_loaded() {
    let project = create_project(&[(
        PROJECT_CONFIG_FILE,
        r#"
[general]
catalog_file = "commands.json"
shell = "bash"

[detect]
disabled = ["compose"]

[appearance]
theme = "minimal"
show_descriptions = false
"#,
    )]);

    let config = load_config(None, project.path()).unwrap();

    assert_eq!(config.catalog_file(), "commands.json");
    assert_eq!(config.shell(), "bash");
    assert!(config.detect.disabled.contains(&"compose".to_string()));
    assert_eq!(config.appearance.theme, Theme::Minimal);
    assert!(!config.appearance.show_descriptions);
    assert!(config.appearance.show_footer);
}

#[test]
fn test_cli_config_overrides_project_config() {
    let project = create_project(&[
        (PROJECT_CONFIG_FILE, "[general]\nshell = \"bash\"\n"),
        ("override.toml", "[general]\nshell = \"zsh\"\n"),
    ]);

    let config = load_config(Some(&project.path().join("override.toml")), project.path()).unwrap();

    assert_eq!(config.shell(), "zsh");
}

#[test]
fn test_broken_project_config_is_ignored() {
    let project = create_project(&[(PROJECT_CONFIG_FILE, "[general\nshell = ")]);

    let config = load_config(None, project.path()).unwrap();
    assert_eq!(config.catalog_file(), ".project-commands.json");
}

#[test]
fn test_broken_cli_config_is_fatal() {
    let project = create_project(&[("bad.toml", "[appearance]\ntheme = \"neon\"\n")]);

    let err = load_config(Some(&project.path().join("bad.toml")), project.path()).unwrap_err();

    assert!(matches!(err, DxError::InvalidConfig { .. }));
    assert_eq!(err.exit_code(), exit_code::INVALID_CONFIG);
}

#[test]
fn test_missing_cli_config_is_fatal() {
    let project = create_empty_project();
    let err = load_config(Some(&project.path().join("nope.toml")), project.path()).unwrap_err();

    assert!(matches!(err, DxError::InvalidConfig { .. }));
}

#[test]
fn test_cli_config_only_overrides_what_it_sets() {
    let project = create_project(&[
        (
            PROJECT_CONFIG_FILE,
            "[general]\nconfirm_generation = false\n\n[appearance]\ntheme = \"minimal\"\ncompact = true\n",
        ),
        ("override.toml", "[general]\nshell = \"bash\"\n"),
    ]);

    let config = load_config(Some(&project.path().join("override.toml")), project.path()).unwrap();

    assert_eq!(config.shell(), "bash");
    assert!(!config.general.confirm_generation);
    assert_eq!(config.appearance.theme, Theme::Minimal);
    assert!(config.appearance.compact);
}
