use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::mode::AssistantMode;

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Mode preselected on the selector screen (slug, e.g. "jigsaw")
    pub default_mode: Option<AssistantMode>,
    /// Model preselected on the selector screen (e.g. "gpt-4o-mini")
    pub default_model: Option<String>,
    /// Initial sampling temperature, 0.0 to 1.0
    pub default_temperature: Option<f64>,
    /// Chat-completion base URL; overrides OPENAI_BASE_URL
    pub base_url: Option<String>,
    /// UI theme name ("dark" or "light")
    pub theme: Option<String>,
    /// Replaces the built-in list of selectable models when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<String>,
}

/// Get a user-friendly display string for a path, using `~` for the home
/// directory on Unix-like systems.
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
