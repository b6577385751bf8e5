use crate::core::mode::AssistantMode;

pub const AVAILABLE_MODELS: [&str; 3] = ["gpt-4o", "gpt-4o-mini", "gpt-3.5-turbo-0125"];

pub const MIN_TEMPERATURE: f64 = 0.0;
pub const MAX_TEMPERATURE: f64 = 1.0;
pub const TEMPERATURE_STEP: f64 = 0.05;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
const STEPS_PER_UNIT: f64 = 20.0;

/// Clamp a temperature into range and snap it onto the 0.05 grid.
pub fn normalize_temperature(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_TEMPERATURE;
    }
    let clamped = value.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
    (clamped * STEPS_PER_UNIT).round() / STEPS_PER_UNIT
}

/// Move a temperature by a whole number of steps.
pub fn step_temperature(value: f64, steps: i32) -> f64 {
    normalize_temperature(value + steps as f64 * TEMPERATURE_STEP)
}

/// Parse a user-supplied temperature, rejecting values outside the range.
pub fn parse_temperature(text: &str) -> Result<f64, String> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", text.trim()))?;
    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&value) {
        return Err(format!(
            "temperature must be between {MIN_TEMPERATURE:.1} and {MAX_TEMPERATURE:.1}"
        ));
    }
    Ok(normalize_temperature(value))
}

/// The built-in model list, or the configured override when non-empty.
pub fn available_models(overrides: &[String]) -> Vec<String> {
    let configured: Vec<String> = overrides
        .iter()
        .map(|model| model.trim().to_string())
        .filter(|model| !model.is_empty())
        .collect();
    if configured.is_empty() {
        AVAILABLE_MODELS.iter().map(|m| m.to_string()).collect()
    } else {
        configured
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// `None` until the user presses Start for the first time.
    pub mode: Option<AssistantMode>,
    pub model: String,
    pub temperature: f64,
}

impl SessionSettings {
    pub fn new(mode: Option<AssistantMode>, model: impl Into<String>, temperature: f64) -> Self {
        Self {
            mode,
            model: model.into(),
            temperature: normalize_temperature(temperature),
        }
    }

    pub fn set_temperature(&mut self, value: f64) {
        self.temperature = normalize_temperature(value);
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::new(None, AVAILABLE_MODELS[0], DEFAULT_TEMPERATURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_snaps_and_clamps() {
        assert_eq!(normalize_temperature(0.72), 0.7);
        assert_eq!(normalize_temperature(0.73), 0.75);
        assert_eq!(normalize_temperature(-3.0), 0.0);
        assert_eq!(normalize_temperature(4.2), 1.0);
        assert_eq!(normalize_temperature(f64::NAN), DEFAULT_TEMPERATURE);
    }

    #[test]
    fn stepping_stays_on_grid() {
        assert_eq!(step_temperature(0.7, 1), 0.75);
        assert_eq!(step_temperature(0.7, -2), 0.6);
        assert_eq!(step_temperature(1.0, 1), 1.0);
        assert_eq!(step_temperature(0.0, -1), 0.0);
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(parse_temperature("0.35"), Ok(0.35));
        assert!(parse_temperature("1.5").is_err());
        assert!(parse_temperature("warm").is_err());
    }

    #[test]
    fn defaults_match_first_model() {
        let settings = SessionSettings::default();
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.temperature, 0.7);
        assert!(settings.mode.is_none());
    }

    #[test]
    fn model_override_falls_back_when_blank() {
        assert_eq!(available_models(&[]).len(), 3);
        assert_eq!(available_models(&["  ".to_string()]).len(), 3);
        assert_eq!(
            available_models(&["local-llama".to_string()]),
            vec!["local-llama".to_string()]
        );
    }
}
