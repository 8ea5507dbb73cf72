//! Page entry definitions
//!
//! A `PageEntry` is one step of the multi-page form: an immutable page kind,
//! a stable id and a mutable display label.

use pagebar_core::{PageId, PageType};
use serde::{Deserialize, Serialize};

/// Suffix appended to the label of a duplicated page
pub const DEFAULT_COPY_SUFFIX: &str = " (copy)";

/// One page of the form being built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
    /// Stable unique identifier
    pub id: PageId,

    /// Kind of page, fixed at creation
    page_type: PageType,

    /// Display label
    pub label: String,
}

impl PageEntry {
    /// Create a page labelled with its type's display name
    pub fn new(id: PageId, page_type: PageType) -> Self {
        Self {
            id,
            page_type,
            label: page_type.display_name().to_string(),
        }
    }

    /// Builder method to set a custom label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn page_type(&self) -> PageType {
        self.page_type
    }

    /// Clone this page under a new id with `suffix` appended to the label
    pub fn duplicate_as(&self, id: PageId, suffix: &str) -> Self {
        Self {
            id,
            page_type: self.page_type,
            label: format!("{}{}", self.label, suffix),
        }
    }

    /// Compare kind and label, ignoring the id
    pub fn same_content(&self, other: &PageEntry) -> bool {
        self.page_type == other.page_type && self.label == other.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_uses_type_label() {
        let page = PageEntry::new(PageId::from("page-0"), PageType::Cover);
        assert_eq!(page.label, "Cover");
        assert_eq!(page.page_type(), PageType::Cover);
    }

    #[test]
    fn test_duplicate_as() {
        let page = PageEntry::new(PageId::from("page-0"), PageType::Review).with_label("Check");
        let copy = page.duplicate_as(PageId::from("page-9"), DEFAULT_COPY_SUFFIX);
        assert_eq!(copy.label, "Check (copy)");
        assert_eq!(copy.page_type(), PageType::Review);
        assert_ne!(copy.id, page.id);
        assert!(!copy.same_content(&page));
    }

    #[test]
    fn test_serializes_camel_case() {
        let page = PageEntry::new(PageId::from("page-1"), PageType::Scheduling);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pageType"], "Scheduling");
        assert_eq!(json["id"], "page-1");
    }
}
