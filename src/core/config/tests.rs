use super::data::{path_display, Config};
use super::defaults::ConfigKey;
use super::io::ConfigError;
use crate::core::mode::AssistantMode;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_persistence_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config
        .set_value(ConfigKey::DefaultMode, "jigsaw")
        .expect("mode");
    config
        .set_value(ConfigKey::DefaultModel, "gpt-4o-mini")
        .expect("model");
    config
        .set_value(ConfigKey::DefaultTemperature, "0.3")
        .expect("temperature");
    config
        .save_to_path(&config_path)
        .expect("Failed to save config");

    let contents = std::fs::read_to_string(&config_path).expect("read back");
    assert!(contents.contains("default_mode = \"jigsaw\""));

    let mut loaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.default_mode, Some(AssistantMode::Jigsaw));
    assert_eq!(loaded.default_model.as_deref(), Some("gpt-4o-mini"));
    assert_eq!(loaded.default_temperature, Some(0.3));

    loaded.unset_value(ConfigKey::DefaultMode);
    loaded.save_to_path(&config_path).expect("save after unset");
    let reloaded = Config::load_from_path(&config_path).expect("reload");
    assert_eq!(reloaded.default_mode, None);
    assert_eq!(reloaded.default_model.as_deref(), Some("gpt-4o-mini"));
}

#[test]
fn invalid_toml_reports_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "default_mode = [").expect("write");

    let err = Config::load_from_path(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn unknown_mode_in_file_is_a_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "default_mode = \"poetry\"\n").expect("write");

    let err = Config::load_from_path(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn set_value_validates_input() {
    let mut config = Config::default();
    assert!(config.set_value(ConfigKey::DefaultModel, "gpt-5-ultra").is_err());
    assert!(config.set_value(ConfigKey::DefaultTemperature, "1.4").is_err());
    assert!(config.set_value(ConfigKey::DefaultMode, "poetry").is_err());
    assert!(config.set_value(ConfigKey::Theme, "neon").is_err());
    assert!(config.set_value(ConfigKey::BaseUrl, "   ").is_err());
    assert_eq!(config, Config::default());

    let message = config
        .set_value(ConfigKey::Theme, "Light")
        .expect("light theme");
    assert_eq!(message, "Set theme to: light");
    assert_eq!(config.theme.as_deref(), Some("light"));
}

#[test]
fn config_keys_parse_by_name() {
    for key in ConfigKey::ALL {
        assert_eq!(key.name().parse::<ConfigKey>(), Ok(key));
    }
    assert!("default-provider".parse::<ConfigKey>().is_err());
}

#[test]
fn initial_settings_precedence() {
    let config = Config {
        default_model: Some("gpt-4o-mini".to_string()),
        default_temperature: Some(0.2),
        ..Default::default()
    };

    let from_config = config.initial_settings(None, None, None);
    assert_eq!(from_config.model, "gpt-4o-mini");
    assert_eq!(from_config.temperature, 0.2);
    assert_eq!(from_config.mode, None);

    let from_cli =
        config.initial_settings(Some(AssistantMode::Clarification), Some("gpt-4o"), Some(0.9));
    assert_eq!(from_cli.model, "gpt-4o");
    assert_eq!(from_cli.temperature, 0.9);
    assert_eq!(from_cli.mode, Some(AssistantMode::Clarification));
}

#[test]
fn stale_default_model_falls_back_to_first_available() {
    let config = Config {
        default_model: Some("retired-model".to_string()),
        ..Default::default()
    };
    assert_eq!(config.initial_settings(None, None, None).model, "gpt-4o");
}

#[test]
fn custom_model_list_replaces_builtin() {
    let config = Config {
        models: vec!["llama3".to_string(), "mistral".to_string()],
        ..Default::default()
    };
    assert_eq!(config.models(), vec!["llama3", "mistral"]);
    assert_eq!(config.initial_settings(None, None, None).model, "llama3");
}

#[test]
#[cfg(unix)]
fn path_display_abbreviates_home() {
    if let Some(home) = std::env::var_os("HOME") {
        let path = std::path::PathBuf::from(home).join(".config/workbench/config.toml");
        assert_eq!(path_display(&path), "~/.config/workbench/config.toml");
    }
}
