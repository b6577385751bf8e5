pub mod app;
pub mod chat_client;
pub mod config;
pub mod message;
pub mod mode;
pub mod router;
pub mod session;
