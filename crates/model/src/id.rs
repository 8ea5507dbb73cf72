//! Page id generation
//!
//! Ids are issued by a generator owned by the page list and never depend on
//! the current list length, so deleting a page can never cause a later page
//! to be handed an id that is still in use.

use pagebar_core::PageId;
use serde::{Deserialize, Serialize};

/// Prefix shared by every generated page id
pub const PAGE_ID_PREFIX: &str = "page-";

/// How fresh page ids are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `page-0`, `page-1`, ... from a counter that never rewinds
    #[default]
    Sequential,
    /// `page-<uuid v4>`
    Uuid,
}

/// Issues unique page ids
///
/// A sequential counter that has handed out `page-18446744073709551615` is
/// exhausted; from then on ids are UUID based, which can never collide with
/// a `page-N` id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    strategy: IdStrategy,
    next: Option<u64>,
}

impl IdGenerator {
    /// Create a generator with the given strategy
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            next: Some(0),
        }
    }

    /// Next value of the sequential counter, `None` once it is exhausted
    pub fn issued(&self) -> Option<u64> {
        self.next
    }

    /// Produce a fresh id
    pub fn next_id(&mut self) -> PageId {
        match (self.strategy, self.next) {
            (IdStrategy::Sequential, Some(n)) => {
                self.next = n.checked_add(1);
                PageId::new(format!("{}{}", PAGE_ID_PREFIX, n))
            }
            (IdStrategy::Sequential, None) => {
                tracing::warn!("Sequential page ids exhausted, issuing a UUID id");
                Self::uuid_id()
            }
            (IdStrategy::Uuid, _) => Self::uuid_id(),
        }
    }

    fn uuid_id() -> PageId {
        PageId::new(format!("{}{}", PAGE_ID_PREFIX, uuid::Uuid::new_v4()))
    }

    /// Mark an externally supplied id as taken
    ///
    /// Sequential generators skip past any `page-N` id they are shown.
    pub fn reserve(&mut self, id: &PageId) {
        let Some(n) = id
            .as_str()
            .strip_prefix(PAGE_ID_PREFIX)
            .and_then(|rest| rest.parse::<u64>().ok())
        else {
            return;
        };
        self.next = match (self.next, n.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_id().as_str(), "page-0");
        assert_eq!(ids.next_id().as_str(), "page-1");
        assert_eq!(ids.issued(), Some(2));
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let mut ids = IdGenerator::new(IdStrategy::Uuid);
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with(PAGE_ID_PREFIX));
        assert_eq!(ids.issued(), Some(0));
    }

    #[test]
    fn test_reserve_skips_taken_ids() {
        let mut ids = IdGenerator::default();
        ids.reserve(&PageId::from("page-7"));
        ids.reserve(&PageId::from("page-2"));
        ids.reserve(&PageId::from("intro"));
        assert_eq!(ids.next_id().as_str(), "page-8");
    }

    #[test]
    fn test_reserve_largest_id_exhausts_counter() {
        let mut ids = IdGenerator::default();
        ids.reserve(&PageId::from("page-18446744073709551615"));
        assert_eq!(ids.issued(), None);

        let id = ids.next_id();
        assert!(id.as_str().starts_with(PAGE_ID_PREFIX));
        assert_ne!(id.as_str(), "page-0");
        assert_ne!(id.as_str(), "page-18446744073709551615");
    }

    #[test]
    fn test_counter_exhausts_after_last_id() {
        let mut ids = IdGenerator::default();
        ids.reserve(&PageId::from("page-18446744073709551614"));
        assert_eq!(ids.next_id().as_str(), "page-18446744073709551615");
        assert_eq!(ids.issued(), None);
        assert_ne!(ids.next_id().as_str(), "page-18446744073709551615");
    }
}
