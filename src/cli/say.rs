//! TUI-less "say" command

use std::error::Error;

use crate::auth::{AuthManager, API_KEY_ENV};
use crate::cli::resolve_settings;
use crate::core::app::error_turn_text;
use crate::core::chat_client::OpenAiClient;
use crate::core::config::Config;
use crate::core::message::Message;
use crate::core::mode::AssistantMode;
use crate::core::router;
use crate::utils::logging::init_stderr_logging_from_env;
use crate::utils::url::{resolve_base_url, BASE_URL_ENV};

pub async fn run_say(
    prompt: Vec<String>,
    mode: Option<AssistantMode>,
    model: Option<String>,
    temperature: Option<f64>,
) -> Result<(), Box<dyn Error>> {
    init_stderr_logging_from_env();

    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: workbench say [--mode <MODE>] <prompt>");
        std::process::exit(1);
    }

    let config = Config::load()?;
    let settings = match resolve_settings(&config, mode, model.as_deref(), temperature) {
        Ok(settings) => settings,
        Err(message) => {
            eprintln!("❌ {message}");
            std::process::exit(1);
        }
    };
    let mode = mode.unwrap_or(AssistantMode::WriteUp);

    let auth_manager = AuthManager::new();
    let Some(api_key) = auth_manager.resolve_api_key(std::env::var(API_KEY_ENV).ok()) else {
        eprintln!("❌ No API key found");
        eprintln!();
        eprintln!("💡 Quick fixes:");
        eprintln!("  • Run 'workbench auth' to store a key in the system keyring");
        eprintln!("  • export {API_KEY_ENV}=\"your-api-key-here\"");
        std::process::exit(1);
    };

    let base_url = resolve_base_url(
        config.base_url.as_deref(),
        std::env::var(BASE_URL_ENV).ok().as_deref(),
    );
    let client = OpenAiClient::new(reqwest::Client::new(), base_url, api_key.key);

    let history = [Message::user(prompt)];
    match router::dispatch(
        &client,
        mode,
        &history,
        &settings.model,
        settings.temperature,
    )
    .await
    {
        Ok(reply) => {
            println!("{reply}");
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", error_turn_text(&err));
            std::process::exit(1);
        }
    }
}
