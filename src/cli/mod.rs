//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod mode_list;
pub mod model_list;
pub mod say;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::auth::{AuthManager, API_KEY_ENV};
use crate::cli::mode_list::list_modes;
use crate::cli::model_list::list_models;
use crate::cli::say::run_say;
use crate::core::app::{App, AppInitConfig};
use crate::core::config::{path_display, Config, ConfigKey};
use crate::core::mode::AssistantMode;
use crate::core::session::{parse_temperature, SessionSettings};
use crate::ui::chat_loop::run_chat;
use crate::ui::theme::Theme;
use crate::utils::logging::init_file_logging;
use crate::utils::url::{resolve_base_url, BASE_URL_ENV};

#[derive(Parser)]
#[command(name = "workbench")]
#[command(version)]
#[command(about = "Educational Assistant Workbench: a terminal chat for guided learning activities")]
#[command(
    long_about = "A full-screen terminal chat with five assistant modes (write-up, \
self-assessment, jigsaw, feedback on feedback, clarification). Each mode prepends its own \
instructions to the conversation before it is sent to an OpenAI-compatible chat endpoint.\n\n\
Authentication:\n\
  Use 'workbench auth' to store an API key in your system keyring.\n\n\
Environment Variables:\n\
  OPENAI_API_KEY    API key used when the keyring has none\n\
  OPENAI_BASE_URL   Custom API base URL (optional, defaults to https://api.openai.com/v1)\n\
  WORKBENCH_LOG     Log filter for --debug-log (defaults to workbench=debug)\n\n\
Controls:\n\
  Enter             Send the message (Alt+Enter for a new line)\n\
  Esc               Back to the mode selector\n\
  Ctrl+R            Reset the conversation\n\
  F2 / Shift+F2     Next / previous model\n\
  F3 / F4           Lower / raise temperature\n\
  Ctrl+C            Quit the application\n\n\
Commands:\n\
  /help             Show commands and key bindings"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Assistant mode to start in (skips the selector)
    #[arg(long, global = true, value_name = "MODE")]
    pub mode: Option<AssistantMode>,

    /// Model to use for chat
    #[arg(short = 'm', long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature between 0.0 and 1.0
    #[arg(short = 't', long, global = true, value_name = "TEMP", value_parser = parse_temperature)]
    pub temperature: Option<f64>,

    /// Write diagnostic logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub debug_log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Store an API key in the system keyring
    Auth,
    /// Remove the stored API key
    Deauth,
    /// List assistant modes and their instructions
    Modes,
    /// List selectable models
    Models {
        /// Ask the endpoint which models this key can use
        #[arg(long)]
        remote: bool,
    },
    /// Set configuration values
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        value: Vec<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Print the current configuration
    Config,
    /// Send one prompt without the TUI and print the reply
    Say {
        /// The prompt to send
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_main())
}

/// Session settings from command-line overrides and config, rejecting a
/// model that is not selectable.
pub fn resolve_settings(
    config: &Config,
    mode: Option<AssistantMode>,
    model: Option<&str>,
    temperature: Option<f64>,
) -> Result<SessionSettings, String> {
    if let Some(model) = model {
        let models = config.models();
        if !models.iter().any(|m| m == model) {
            return Err(format!(
                "Unknown model '{model}' (available: {})",
                models.join(", ")
            ));
        }
    }
    Ok(config.initial_settings(mode, model, temperature))
}

fn exit_with(message: impl std::fmt::Display) -> ! {
    eprintln!("❌ {message}");
    std::process::exit(1);
}

fn parse_key_or_exit(key: &str) -> ConfigKey {
    key.parse().unwrap_or_else(|err| exit_with(err))
}

fn configured_theme(config: &Config) -> Theme {
    match config.theme.as_deref() {
        Some(name) => Theme::by_name(name).unwrap_or_else(|| {
            warn!(theme = name, "Unknown theme in config; using default");
            Theme::default()
        }),
        None => Theme::default(),
    }
}

async fn start_chat(
    mode: Option<AssistantMode>,
    model: Option<String>,
    temperature: Option<f64>,
) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let settings = resolve_settings(&config, mode, model.as_deref(), temperature)
        .unwrap_or_else(|err| exit_with(err));

    let auth_manager = AuthManager::new();
    let api_key = auth_manager.resolve_api_key(std::env::var(API_KEY_ENV).ok());
    let base_url = resolve_base_url(
        config.base_url.as_deref(),
        std::env::var(BASE_URL_ENV).ok().as_deref(),
    );

    let app = App::new(AppInitConfig {
        settings,
        preselected_mode: config.default_mode,
        models: config.models(),
        api_key,
        base_url,
        theme: configured_theme(&config),
    });

    run_chat(app, reqwest::Client::new()).await
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let Args {
        command,
        mode,
        model,
        temperature,
        debug_log,
    } = Args::parse();

    if let Some(path) = &debug_log {
        init_file_logging(path)?;
    }

    match command.unwrap_or(Commands::Chat) {
        Commands::Chat => start_chat(mode, model, temperature).await,
        Commands::Auth => {
            let auth_manager = AuthManager::new();
            if let Err(e) = auth_manager.interactive_auth() {
                exit_with(format!("Authentication failed: {e}"));
            }
            Ok(())
        }
        Commands::Deauth => {
            let auth_manager = AuthManager::new();
            if let Err(e) = auth_manager.interactive_deauth() {
                exit_with(format!("Deauthentication failed: {e}"));
            }
            Ok(())
        }
        Commands::Modes => {
            list_modes();
            Ok(())
        }
        Commands::Models { remote } => list_models(remote).await,
        Commands::Set { key, value } => {
            let key = parse_key_or_exit(&key);
            let mut config = Config::load()?;
            match config.set_value(key, &value.join(" ")) {
                Ok(message) => {
                    config.save()?;
                    println!("✅ {message}");
                }
                Err(message) => exit_with(message),
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let key = parse_key_or_exit(&key);
            let mut config = Config::load()?;
            config.unset_value(key);
            config.save()?;
            println!("✅ Unset {key}");
            Ok(())
        }
        Commands::Config => {
            let config = Config::load()?;
            println!("Config file: {}", path_display(Config::config_path()?));
            config.print_all();
            Ok(())
        }
        Commands::Say { prompt } => run_say(prompt, mode, model, temperature).await,
    }
}
