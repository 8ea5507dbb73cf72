//! Page bar input events
//!
//! Every interaction the embedding renderer can report, as a plain value.
//! Events are serde-tagged so they can also be replayed from JSON scripts:
//!
//! ```json
//! [
//!   {"event": "select_page", "index": 1},
//!   {"event": "toggle_settings", "index": 1,
//!    "bounds": {"position": {"x": 120.0, "y": 300.0}, "size": {"width": 110.0, "height": 32.0}}},
//!   {"event": "settings", "action": "duplicate"}
//! ]
//! ```

use crate::interactions::PointerTarget;
use crate::menu::SettingsAction;
use pagebar_core::{PageType, Position, Rect};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An input event for `PageBar::dispatch`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PageBarEvent {
    /// Click on a page button
    SelectPage { index: usize },

    /// Click on the settings trigger of a page button with the given bounds
    ToggleSettings { index: usize, bounds: Rect },

    /// Click on a settings menu entry
    Settings { action: SettingsAction },

    /// Click on the trailing "+ Add page" button
    ToggleAddMenu {
        #[serde(default)]
        bounds: Option<Rect>,
    },

    /// Click on a page type in the open add-page menu
    ChoosePageType { page_type: PageType },

    /// Pointer entered the gap after page `index`
    GapEnter { index: usize },

    /// Pointer left a gap
    GapLeave {
        pointer: Position,
        #[serde(default)]
        menu_bounds: Option<Rect>,
    },

    /// Click on the "+" control of the gap after page `index`
    PlusClick { index: usize, bounds: Rect },

    /// Pointer entered the gap add-page menu
    AddMenuEnter,

    /// Pointer left the gap add-page menu
    AddMenuLeave,

    /// A page button started being dragged
    DragStart { source: Value },

    /// The dragged button is over a drop target
    DragOver {
        target: Value,
        bounds: Rect,
        pointer: Position,
    },

    /// The dragged button left the current drop target
    DragLeave,

    /// The drag was released
    Drop {
        #[serde(default)]
        source: Option<Value>,
        #[serde(default)]
        target: Option<Value>,
    },

    /// The drag was aborted
    DragCancel,

    /// Global pointer-down
    PointerDown { target: PointerTarget },
}

impl PageBarEvent {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            PageBarEvent::SelectPage { .. } => "select_page",
            PageBarEvent::ToggleSettings { .. } => "toggle_settings",
            PageBarEvent::Settings { .. } => "settings",
            PageBarEvent::ToggleAddMenu { .. } => "toggle_add_menu",
            PageBarEvent::ChoosePageType { .. } => "choose_page_type",
            PageBarEvent::GapEnter { .. } => "gap_enter",
            PageBarEvent::GapLeave { .. } => "gap_leave",
            PageBarEvent::PlusClick { .. } => "plus_click",
            PageBarEvent::AddMenuEnter => "add_menu_enter",
            PageBarEvent::AddMenuLeave => "add_menu_leave",
            PageBarEvent::DragStart { .. } => "drag_start",
            PageBarEvent::DragOver { .. } => "drag_over",
            PageBarEvent::DragLeave => "drag_leave",
            PageBarEvent::Drop { .. } => "drop",
            PageBarEvent::DragCancel => "drag_cancel",
            PageBarEvent::PointerDown { .. } => "pointer_down",
        }
    }
}
