//! Factory floor equipment monitor
//!
//! The session core (`domain`, `catalog`, `session`, `annotations`, `export`)
//! has no UI runtime dependency. The COSMIC front-end in `core` and `widget`
//! is compiled with the `gui` feature.

pub mod annotations;
pub mod catalog;
pub mod config;
#[cfg(feature = "gui")]
pub mod core;
pub mod domain;
pub mod export;
pub mod localize;
pub mod session;
#[cfg(feature = "gui")]
pub mod widget;
