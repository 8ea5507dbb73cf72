//! Core traits for Page Bar
//!
//! This module defines the seams between the page bar core and the
//! rendering environment it is embedded in: state validation, the
//! "closest edge" hit test used while dragging, and container membership
//! used for outside-click dismissal.

use crate::error::PageBarResult;
use crate::types::{Edge, Position, Rect};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use pagebar_core::{PageBarError, PageBarResult, Validatable};
///
/// struct Offsets {
///     lift: f32,
/// }
///
/// impl Validatable for Offsets {
///     fn validate(&self) -> PageBarResult<()> {
///         if !self.lift.is_finite() {
///             return Err(PageBarError::invalid_config("lift must be finite"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `PageBarError` describing the problem.
    fn validate(&self) -> PageBarResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// Edge Hit Testing
// ============================================================================

/// Capability that decides which edge of a drop target the pointer is nearest to
pub trait EdgeHitTest {
    /// Compute the closest allowed edge of `bounds` for the pointer at `pointer`
    ///
    /// Returns `None` when no edge is applicable.
    fn closest_edge(&self, bounds: Rect, pointer: Position) -> Option<Edge>;
}

/// Hit test over the left and right edges of a horizontally laid out element
///
/// Distances are measured along the x axis only; on a tie the edge listed
/// first in `allowed` wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizontalEdges {
    allowed: Vec<Edge>,
}

impl HorizontalEdges {
    /// Hit test over both horizontal edges
    pub fn new() -> Self {
        Self::with_allowed(Edge::horizontal())
    }

    /// Hit test restricted to a subset of edges
    pub fn with_allowed(allowed: impl Into<Vec<Edge>>) -> Self {
        Self {
            allowed: allowed.into(),
        }
    }
}

impl Default for HorizontalEdges {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeHitTest for HorizontalEdges {
    fn closest_edge(&self, bounds: Rect, pointer: Position) -> Option<Edge> {
        let distance = |edge: Edge| match edge {
            Edge::Left => (pointer.x - bounds.left()).abs(),
            Edge::Right => (bounds.right() - pointer.x).abs(),
        };

        let mut best: Option<(Edge, f32)> = None;
        for &edge in &self.allowed {
            let d = distance(edge);
            match best {
                Some((_, best_d)) if best_d <= d => {}
                _ => best = Some((edge, d)),
            }
        }
        best.map(|(edge, _)| edge)
    }
}

// ============================================================================
// Container Membership
// ============================================================================

/// An on-screen container that can tell whether a pointer target lies inside it
///
/// `T` is whatever the embedding environment uses to identify event targets.
pub trait Container<T> {
    /// Whether `target` is this container or one of its descendants
    fn contains(&self, target: &T) -> bool;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Rect {
        Rect::from_xywh(100.0, 0.0, 80.0, 32.0)
    }

    #[test]
    fn test_closest_edge_left_half() {
        let hit = HorizontalEdges::new();
        assert_eq!(
            hit.closest_edge(button(), Position::new(110.0, 16.0)),
            Some(Edge::Left)
        );
    }

    #[test]
    fn test_closest_edge_right_half() {
        let hit = HorizontalEdges::new();
        assert_eq!(
            hit.closest_edge(button(), Position::new(170.0, 16.0)),
            Some(Edge::Right)
        );
    }

    #[test]
    fn test_closest_edge_tie_goes_to_first_allowed() {
        let center = Position::new(140.0, 16.0);
        assert_eq!(
            HorizontalEdges::new().closest_edge(button(), center),
            Some(Edge::Left)
        );
        assert_eq!(
            HorizontalEdges::with_allowed(vec![Edge::Right, Edge::Left])
                .closest_edge(button(), center),
            Some(Edge::Right)
        );
    }

    #[test]
    fn test_closest_edge_none_allowed() {
        let hit = HorizontalEdges::with_allowed(Vec::new());
        assert_eq!(hit.closest_edge(button(), Position::new(110.0, 16.0)), None);
    }

    struct Offsets {
        lift: f32,
    }

    impl Validatable for Offsets {
        fn validate(&self) -> PageBarResult<()> {
            if !self.lift.is_finite() {
                return Err(crate::PageBarError::invalid_config("lift must be finite"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_validatable_is_valid() {
        assert!(Offsets { lift: 230.0 }.is_valid());
        assert!(!Offsets { lift: f32::NAN }.is_valid());
    }
}
