//! Ordered page list and its editing operations
//!
//! `PageList` is the single source of truth for page order. Every
//! index-based operation validates its indices first and returns an
//! `IndexOutOfRange` error without touching the list when they are stale,
//! so a late UI event can never corrupt the order.

use crate::id::{IdGenerator, IdStrategy};
use crate::page::{DEFAULT_COPY_SUFFIX, PageEntry};
use pagebar_core::{Edge, PageBarError, PageBarResult, PageId, PageType, Validatable};
use serde::Serialize;
use std::collections::HashSet;

/// Pages a fresh editor starts with
pub const DEFAULT_PAGES: &[PageType] = &[PageType::Cover, PageType::Scheduling];

// ============================================================================
// Reorder Math
// ============================================================================

/// Index at which a page dragged from `source` is re-inserted after removal
///
/// The asymmetry between the two directions compensates for the shift
/// caused by removing the source first. Returns `None` for a drop on itself.
pub fn reorder_index(source: usize, target: usize, edge: Option<Edge>) -> Option<usize> {
    let right = edge == Some(Edge::Right);
    if source < target {
        Some(if right { target } else { target - 1 })
    } else if source > target {
        Some(if right { target + 1 } else { target })
    } else {
        None
    }
}

// ============================================================================
// PageList
// ============================================================================

/// The ordered pages of a form
#[derive(Debug, Clone, Serialize)]
pub struct PageList {
    pages: Vec<PageEntry>,

    #[serde(skip)]
    ids: IdGenerator,
}

impl PageList {
    /// Create an empty list
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            pages: Vec::new(),
            ids: IdGenerator::new(strategy),
        }
    }

    /// Create a list seeded with one page per given type
    pub fn seeded(types: &[PageType], strategy: IdStrategy) -> Self {
        let mut list = Self::new(strategy);
        for &page_type in types {
            list.append(page_type);
        }
        list
    }

    /// Build a list from existing entries
    ///
    /// Fails if two entries share an id. The id generator is advanced past
    /// every supplied id.
    pub fn from_entries(entries: Vec<PageEntry>, strategy: IdStrategy) -> PageBarResult<Self> {
        let mut ids = IdGenerator::new(strategy);
        for page in &entries {
            ids.reserve(&page.id);
        }
        let list = Self {
            pages: entries,
            ids,
        };
        list.validate()?;
        Ok(list)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PageEntry> {
        self.pages.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageEntry> {
        self.pages.iter()
    }

    pub fn as_slice(&self) -> &[PageEntry] {
        &self.pages
    }

    /// Current index of the page with the given id
    pub fn position_of(&self, id: &PageId) -> Option<usize> {
        self.pages.iter().position(|p| &p.id == id)
    }

    /// Labels in page order
    pub fn labels(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.label.as_str()).collect()
    }

    fn check_index(&self, operation: &'static str, index: usize) -> PageBarResult<()> {
        if index < self.pages.len() {
            Ok(())
        } else {
            Err(PageBarError::out_of_range(operation, index, self.pages.len()))
        }
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Append a new page of the given type
    pub fn append(&mut self, page_type: PageType) -> PageId {
        let page = PageEntry::new(self.ids.next_id(), page_type);
        let id = page.id.clone();
        self.pages.push(page);
        id
    }

    /// Insert a new page right after `index`, or append when `index` is `None`
    pub fn insert_after(
        &mut self,
        index: Option<usize>,
        page_type: PageType,
    ) -> PageBarResult<PageId> {
        let Some(index) = index else {
            return Ok(self.append(page_type));
        };
        self.check_index("insert_after", index)?;

        let page = PageEntry::new(self.ids.next_id(), page_type);
        let id = page.id.clone();
        self.pages.insert(index + 1, page);
        Ok(id)
    }

    /// Duplicate the page at `index` with the default " (copy)" suffix
    pub fn duplicate(&mut self, index: usize) -> PageBarResult<PageId> {
        self.duplicate_with_suffix(index, DEFAULT_COPY_SUFFIX)
    }

    /// Duplicate the page at `index`, inserting the copy right after it
    pub fn duplicate_with_suffix(&mut self, index: usize, suffix: &str) -> PageBarResult<PageId> {
        self.check_index("duplicate", index)?;

        let copy = self.pages[index].duplicate_as(self.ids.next_id(), suffix);
        let id = copy.id.clone();
        self.pages.insert(index + 1, copy);
        Ok(id)
    }

    // ========================================================================
    // Reordering
    // ========================================================================

    /// Move the page at `source` next to `target`, on the side given by `edge`
    ///
    /// Returns the moved page's new index. Dropping a page on itself leaves
    /// the list unchanged.
    pub fn move_to(
        &mut self,
        source: usize,
        target: usize,
        edge: Option<Edge>,
    ) -> PageBarResult<usize> {
        self.check_index("move_to", source)?;
        self.check_index("move_to", target)?;

        let Some(insert_at) = reorder_index(source, target, edge) else {
            return Ok(source);
        };
        let page = self.pages.remove(source);
        self.pages.insert(insert_at, page);
        Ok(insert_at)
    }

    /// Move the page at `index` to the front
    pub fn move_to_front(&mut self, index: usize) -> PageBarResult<()> {
        self.check_index("move_to_front", index)?;
        if index > 0 {
            let page = self.pages.remove(index);
            self.pages.insert(0, page);
        }
        Ok(())
    }

    // ========================================================================
    // Mutation & Removal
    // ========================================================================

    /// Replace the label of the page at `index`
    pub fn rename(&mut self, index: usize, label: impl Into<String>) -> PageBarResult<()> {
        self.check_index("rename", index)?;
        self.pages[index].label = label.into();
        Ok(())
    }

    /// Remove and return the page at `index`
    pub fn remove(&mut self, index: usize) -> PageBarResult<PageEntry> {
        self.check_index("remove", index)?;
        Ok(self.pages.remove(index))
    }
}

impl Default for PageList {
    fn default() -> Self {
        Self::seeded(DEFAULT_PAGES, IdStrategy::default())
    }
}

impl Validatable for PageList {
    fn validate(&self) -> PageBarResult<()> {
        let mut seen = HashSet::with_capacity(self.pages.len());
        for page in &self.pages {
            if !seen.insert(&page.id) {
                return Err(PageBarError::DuplicatePageId(page.id.to_string()));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
