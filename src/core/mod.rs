//! Core application module
//!
//! This module contains the application entry point and the COSMIC
//! Application implementation.

pub mod app;
