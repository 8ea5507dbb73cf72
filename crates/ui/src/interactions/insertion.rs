//! # Insertion Points
//!
//! The dashed gap after each page button expands into a "+" control while
//! hovered. Clicking "+" opens an add-page menu for that gap. Leaving the gap
//! only closes the menu once the pointer is outside the menu's bounds,
//! extended upward by a small tolerance, so moving from the gap toward the
//! menu below it does not make it flicker away.

use pagebar_core::{Position, Rect};
use pagebar_model::PageBarConfig;

/// Hover state of the gap controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapState {
    #[default]
    Retracted,
    Expanded { gap: usize },
}

/// What the owner should do with the gap add-page menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GapAction {
    None,
    OpenMenu { gap: usize, anchor: Position },
    CloseMenu,
}

/// Insertion-point affordance state machine
#[derive(Debug, Clone, PartialEq)]
pub struct InsertionAffordance {
    state: GapState,
    tolerance: f32,
    menu_offset: (f32, f32),
}

impl InsertionAffordance {
    pub fn new(config: &PageBarConfig) -> Self {
        Self {
            state: GapState::Retracted,
            tolerance: config.hover_tolerance,
            menu_offset: (config.add_menu_offset_x, config.add_menu_offset_y),
        }
    }

    pub fn state(&self) -> GapState {
        self.state
    }

    /// Gap currently showing its "+" control
    pub fn expanded_gap(&self) -> Option<usize> {
        match self.state {
            GapState::Expanded { gap } => Some(gap),
            GapState::Retracted => None,
        }
    }

    /// Pointer entered the gap after page `gap`
    pub fn enter_gap(&mut self, gap: usize) {
        self.state = GapState::Expanded { gap };
    }

    /// Pointer left a gap
    ///
    /// `menu_bounds` is the on-screen box of the open gap menu, if rendered.
    pub fn leave_gap(&mut self, pointer: Position, menu_bounds: Option<Rect>) -> GapAction {
        self.state = GapState::Retracted;
        let inside = menu_bounds
            .map(|bounds| bounds.extend_top(self.tolerance).contains(pointer))
            .unwrap_or(false);
        if inside {
            GapAction::None
        } else {
            GapAction::CloseMenu
        }
    }

    /// The "+" control of `gap` was clicked; `bounds` is the control's box
    pub fn click_plus(&mut self, gap: usize, bounds: Rect) -> GapAction {
        self.state = GapState::Expanded { gap };
        let (dx, dy) = self.menu_offset;
        GapAction::OpenMenu {
            gap,
            anchor: bounds.bottom_left().offset(dx, dy),
        }
    }

    /// Pointer entered the gap menu opened for `gap`
    pub fn enter_menu(&mut self, gap: usize) {
        self.state = GapState::Expanded { gap };
    }

    /// Pointer left the gap menu
    pub fn leave_menu(&mut self) -> GapAction {
        self.state = GapState::Retracted;
        GapAction::CloseMenu
    }

    /// Forget any hover, e.g. after the pages under it changed
    pub fn reset(&mut self) {
        self.state = GapState::Retracted;
    }
}

impl Default for InsertionAffordance {
    fn default() -> Self {
        Self::new(&PageBarConfig::default())
    }
}
