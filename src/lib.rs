//! Educational Assistant Workbench: a terminal chat front end that wraps an
//! OpenAI-compatible chat-completion endpoint in five teaching modes.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the modes, the routing table that prepends each mode's
//!   system prompt, session settings, the app state machine, configuration,
//!   and the chat-completion client.
//! - [`ui`] renders the selector, chat, and API-key screens and runs the
//!   interactive event loop.
//! - [`commands`] implements the slash commands typed into the chat input.
//! - [`auth`] resolves and stores the API key.
//! - [`api`] defines the chat/model payloads sent over the wire.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;
