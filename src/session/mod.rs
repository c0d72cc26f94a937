//! Dashboard session management module
//!
//! This module contains:
//! - Session state (registry, filters, drawing, pending box)
//! - Message types for dashboard interactions
//! - Message handlers and the `update` reducer
//! - Keyboard shortcuts (with the `gui` feature)

pub mod handlers;
pub mod messages;
pub mod registry;
#[cfg(feature = "gui")]
pub mod shortcuts;
pub mod state;

pub use handlers::update;
pub use messages::{Effect, Msg};
pub use registry::Registry;
pub use state::Session;
