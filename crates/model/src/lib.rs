//! # Page Bar Model
//!
//! This crate provides the page list model for Page Bar: the ordered pages of
//! a multi-page form and the operations that reorder, insert, duplicate and
//! remove them.
//!
//! ## Core Concepts
//!
//! - **PageEntry**: One page of the form (id, page type, label)
//! - **PageList**: The ordered pages; insertion order is page order
//! - **IdGenerator**: Issues ids that are never reused
//! - **Catalog**: The page types offered by the add-page menu
//! - **Payloads**: Drag source / drop target data exchanged with the host
//! - **PageBarConfig**: Seed pages, id strategy and menu anchoring offsets
//!

// Module declarations
pub mod catalog;
pub mod config;
pub mod id;
pub mod page;
pub mod page_list;
pub mod payload;

// Re-export commonly used types at crate root
pub use catalog::{PageTypeInfo, catalog, info};
pub use config::PageBarConfig;
pub use id::{IdGenerator, IdStrategy, PAGE_ID_PREFIX};
pub use page::{DEFAULT_COPY_SUFFIX, PageEntry};
pub use page_list::{DEFAULT_PAGES, PageList, reorder_index};
pub use payload::{BUTTON_PAYLOAD_TYPE, DragData, DropTargetData};

// Re-export core types that are commonly used with the model
pub use pagebar_core::{
    Edge, PageBarError, PageBarResult, PageId, PageType, Position, Rect, Size, Validatable,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        DragData, DropTargetData, Edge, IdStrategy, PageBarConfig, PageBarError, PageBarResult,
        PageEntry, PageId, PageList, PageType,
    };
}
