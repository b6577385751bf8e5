//! Model listing functionality
//!
//! Lists the models offered in the selector and, on request, checks them
//! against the endpoint's `/models` listing.

use std::error::Error;

use crate::api::models::{fetch_models, mark_accessible};
use crate::auth::{AuthManager, API_KEY_ENV};
use crate::core::config::Config;
use crate::utils::url::{resolve_base_url, BASE_URL_ENV};

/// One line per model. `accessible` pairs each model with whether the
/// endpoint reported it; `None` skips the check.
pub fn model_lines(
    models: &[String],
    default_model: Option<&str>,
    accessible: Option<&[(&str, bool)]>,
) -> Vec<String> {
    models
        .iter()
        .map(|model| {
            let mut line = match accessible {
                Some(marks) => {
                    let found = marks
                        .iter()
                        .any(|(id, ok)| *id == model.as_str() && *ok);
                    if found {
                        format!("  ✅ {model}")
                    } else {
                        format!("  ⚠️  {model} (not reported by the endpoint)")
                    }
                }
                None => format!("  • {model}"),
            };
            if default_model == Some(model.as_str()) {
                line.push_str(" (default)");
            }
            line
        })
        .collect()
}

pub async fn list_models(remote: bool) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let models = config.models();
    let default_model = config.default_model.as_deref();

    println!("🤖 Available Models");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();

    if !remote {
        for line in model_lines(&models, default_model, None) {
            println!("{line}");
        }
        return Ok(());
    }

    let auth_manager = AuthManager::new();
    let api_key = auth_manager
        .resolve_api_key(std::env::var(API_KEY_ENV).ok())
        .ok_or("❌ No API key found. Run 'workbench auth' or set OPENAI_API_KEY.")?;
    let base_url = resolve_base_url(
        config.base_url.as_deref(),
        std::env::var(BASE_URL_ENV).ok().as_deref(),
    );

    let client = reqwest::Client::new();
    let response = fetch_models(&client, &base_url, &api_key.key).await?;
    let marks = mark_accessible(&models, &response);
    for line in model_lines(&models, default_model, Some(&marks)) {
        println!("{line}");
    }
    println!();
    println!("The endpoint reports {} models in total.", response.data.len());
    Ok(())
}
