//! # Page Bar UI
//!
//! Headless interaction controller for the page bar of a multi-page form
//! editor.
//!
//! This crate owns the page list and turns renderer events into page list
//! edits. Drawing, icons and the concrete drag-and-drop library stay with
//! the embedding application.
//!
//! ## Features
//!
//! - Page selection and the per-page settings menu (set as first, duplicate, delete)
//! - Add-page menus, appended or inserted at a gap between pages
//! - Drag-and-drop reordering driven by closest-edge hit testing
//! - Outside-click dismissal of open menus
//!

// ============================================================================
// Modules
// ============================================================================

pub mod events;
pub mod interactions;
pub mod menu;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use pagebar_core;
pub use pagebar_model;

pub use events::PageBarEvent;
pub use interactions::{
    DragController, DragSession, DragState, DropOutcome, GapAction, GapState,
    InsertionAffordance, MenuContainer, MoveRequest, OutsideClick, PointerTarget,
};
pub use menu::{AddMenuTarget, MenuState, SettingsAction};
pub use state::{PageBar, PageBarSnapshot, Selection};

// ============================================================================
// Constants
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Component name
pub const NAME: &str = "Page Bar";
