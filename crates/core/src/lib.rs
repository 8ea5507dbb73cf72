//! # Page Bar Core
//!
//! Core types, traits, and error handling for Page Bar.
//!
//! This crate provides the foundational building blocks used by the page
//! list model and the headless controller, including:
//!
//! - **Types**: `PageId`, `PageType`, `Edge`, geometric primitives (Position, Size, Rect)
//! - **Traits**: `Validatable`, the `EdgeHitTest` capability and `Container` membership
//! - **Errors**: Unified error handling with `PageBarError` and `PageBarResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{PageBarError, PageBarResult, ResultExt};
pub use traits::{Container, EdgeHitTest, HorizontalEdges, Validatable};
pub use types::{Edge, PageId, PageType, Position, Rect, Size};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
