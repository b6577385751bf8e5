//! Terminal UI layer.
//!
//! - [`chat_loop`]: the event loop that feeds keys to [`crate::core::app`]
//!   and runs chat requests in the background.
//! - [`renderer`] and [`markdown`]: frame composition and transcript
//!   rendering.
//! - [`theme`] and [`picker`]: styles and list selection state.

pub mod chat_loop;
pub mod markdown;
pub mod picker;
pub mod renderer;
pub mod theme;
