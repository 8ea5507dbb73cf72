//! # Interactions
//!
//! Pointer-driven state machines for the page bar.
//!
//! This module provides:
//! - Drag reorder (drag start, hover with closest edge, drop, cancel)
//! - Insertion points (hover-activated "+" controls between pages)
//! - Outside-click dismissal of open menus

// ============================================================================
// Module Declarations
// ============================================================================

pub mod drag;
pub mod insertion;
pub mod outside_click;

// ============================================================================
// Re-exports
// ============================================================================

pub use drag::{DragController, DragSession, DragState, DropHover, DropOutcome, MoveRequest};
pub use insertion::{GapAction, GapState, InsertionAffordance};
pub use outside_click::{MenuContainer, OutsideClick, PointerTarget};
