//! Annotation tool: message handlers for drawing machine bounding boxes

pub mod handlers;

pub use handlers::handle_draw_action;
