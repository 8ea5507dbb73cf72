//! Core types used throughout Page Bar
//!
//! This module contains the page identity and page kind types shared by the
//! model and the controller, plus the small geometry vocabulary used for
//! menu anchoring and drag hit-testing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Page Identity
// ============================================================================

/// Stable unique identifier of a page entry
///
/// Assigned once at creation and never reused within a page list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Create a page id from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ============================================================================
// Page Types
// ============================================================================

/// The fixed set of page kinds a form can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageType {
    /// Page to collect user input
    Form,
    /// Welcome page
    Cover,
    /// Thank-you or redirect page
    Ending,
    /// Submission review page
    Review,
    /// Payment collection page
    Payment,
    /// Authentication page
    Login,
    /// Meeting booking page
    Scheduling,
}

impl PageType {
    /// Get the display name (also the default label of a new page)
    pub fn display_name(&self) -> &'static str {
        match self {
            PageType::Form => "Form",
            PageType::Cover => "Cover",
            PageType::Ending => "Ending",
            PageType::Review => "Review",
            PageType::Payment => "Payment",
            PageType::Login => "Login",
            PageType::Scheduling => "Scheduling",
        }
    }

    /// All page types, in add-menu order
    pub fn all() -> &'static [PageType] {
        &[
            PageType::Form,
            PageType::Cover,
            PageType::Ending,
            PageType::Review,
            PageType::Payment,
            PageType::Login,
            PageType::Scheduling,
        ]
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageType::all()
            .iter()
            .copied()
            .find(|t| t.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown page type '{}'", s))
    }
}

// ============================================================================
// Drop Edges
// ============================================================================

/// Horizontal side of a drop target the pointer is nearest to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    /// Both horizontal edges, in tie-break order
    pub fn horizontal() -> &'static [Edge] {
        &[Edge::Left, Edge::Right]
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Left => write!(f, "left"),
            Edge::Right => write!(f, "right"),
        }
    }
}

// ============================================================================
// Geometry Types
// ============================================================================

/// Position in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a new position
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a position at the origin (0, 0)
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Add an offset to this position
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::zero()
    }
}

/// Size of an element on screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Bounding rectangle of an element, as reported by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub position: Position,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(position: Position, size: Size) -> Self {
        Self { position, size }
    }

    /// Create a rectangle from coordinates and dimensions
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.width
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.height
    }

    /// Get the top-left corner
    pub fn top_left(&self) -> Position {
        self.position
    }

    /// Get the bottom-left corner
    pub fn bottom_left(&self) -> Position {
        Position::new(self.left(), self.bottom())
    }

    /// Check if a point is contained within this rectangle (edges inclusive)
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Return this rectangle grown upward by `amount`, bottom edge unchanged
    pub fn extend_top(&self, amount: f32) -> Self {
        Self::from_xywh(
            self.left(),
            self.top() - amount,
            self.size.width,
            self.size.height + amount,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
