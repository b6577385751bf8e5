//! Config keys settable from the command line and the session defaults they
//! feed into.

use std::fmt;
use std::str::FromStr;

use crate::core::config::data::Config;
use crate::core::mode::AssistantMode;
use crate::core::session::{available_models, parse_temperature, SessionSettings, DEFAULT_TEMPERATURE};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DefaultMode,
    DefaultModel,
    DefaultTemperature,
    BaseUrl,
    Theme,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::DefaultMode,
        ConfigKey::DefaultModel,
        ConfigKey::DefaultTemperature,
        ConfigKey::BaseUrl,
        ConfigKey::Theme,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::DefaultMode => "default-mode",
            ConfigKey::DefaultModel => "default-model",
            ConfigKey::DefaultTemperature => "default-temperature",
            ConfigKey::BaseUrl => "base-url",
            ConfigKey::Theme => "theme",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<_> = ConfigKey::ALL.iter().map(|k| k.name()).collect();
                format!("Unknown config key: {s} (expected one of: {})", names.join(", "))
            })
    }
}

impl Config {
    /// Validate and store a value. Returns a confirmation message.
    pub fn set_value(&mut self, key: ConfigKey, value: &str) -> Result<String, String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(format!("A value is required for {key}"));
        }
        match key {
            ConfigKey::DefaultMode => {
                let mode: AssistantMode = value.parse().map_err(|e| format!("{e}"))?;
                self.default_mode = Some(mode);
                Ok(format!("Set {key} to: {}", mode.slug()))
            }
            ConfigKey::DefaultModel => {
                let models = available_models(&self.models);
                if !models.iter().any(|m| m == value) {
                    return Err(format!(
                        "Unknown model '{value}' (available: {})",
                        models.join(", ")
                    ));
                }
                self.default_model = Some(value.to_string());
                Ok(format!("Set {key} to: {value}"))
            }
            ConfigKey::DefaultTemperature => {
                let temperature = parse_temperature(value)?;
                self.default_temperature = Some(temperature);
                Ok(format!("Set {key} to: {temperature:.2}"))
            }
            ConfigKey::BaseUrl => {
                self.base_url = Some(value.to_string());
                Ok(format!("Set {key} to: {value}"))
            }
            ConfigKey::Theme => {
                if Theme::by_name(value).is_none() {
                    return Err(format!(
                        "Unknown theme '{value}' (available: {})",
                        Theme::NAMES.join(", ")
                    ));
                }
                self.theme = Some(value.to_lowercase());
                Ok(format!("Set {key} to: {}", value.to_lowercase()))
            }
        }
    }

    pub fn unset_value(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::DefaultMode => self.default_mode = None,
            ConfigKey::DefaultModel => self.default_model = None,
            ConfigKey::DefaultTemperature => self.default_temperature = None,
            ConfigKey::BaseUrl => self.base_url = None,
            ConfigKey::Theme => self.theme = None,
        }
    }

    /// Selectable models for this configuration.
    pub fn models(&self) -> Vec<String> {
        available_models(&self.models)
    }

    /// Initial session settings, with command-line overrides taking
    /// precedence over config values. A configured model that is no longer
    /// selectable falls back to the first available model.
    pub fn initial_settings(
        &self,
        mode: Option<AssistantMode>,
        model: Option<&str>,
        temperature: Option<f64>,
    ) -> SessionSettings {
        let models = self.models();
        let model = model
            .map(str::to_string)
            .or_else(|| {
                self.default_model
                    .clone()
                    .filter(|configured| models.contains(configured))
            })
            .unwrap_or_else(|| models[0].clone());
        let temperature = temperature
            .or(self.default_temperature)
            .unwrap_or(DEFAULT_TEMPERATURE);
        SessionSettings::new(mode, model, temperature)
    }
}
