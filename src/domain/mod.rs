//! Pure domain types with minimal dependencies
//!
//! Types here have no UI framework dependencies so the session core can be
//! built and tested headless.

pub mod annotation;
pub mod geometry;
pub mod machine;
pub mod view;

pub use annotation::*;
pub use geometry::*;
pub use machine::*;
pub use view::*;
