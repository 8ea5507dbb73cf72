//! Transient menu state
//!
//! At most one menu is open at any time: the add-page menu (either the one
//! under the trailing "+ Add page" button or the one opened from a gap's
//! "+" control) or the settings menu of the selected page. Representing
//! this as a single enum makes "opening one closes the other" structural.

use pagebar_core::Position;
use serde::{Deserialize, Serialize};

// ============================================================================
// Add-Page Menu Target
// ============================================================================

/// Where a page chosen from an add-page menu ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddMenuTarget {
    /// Trailing "+ Add page" button: append to the end
    Append,
    /// Gap "+" control after the page at this index
    AfterPage(usize),
}

impl AddMenuTarget {
    /// Index to pass to `PageList::insert_after`
    pub fn insert_index(&self) -> Option<usize> {
        match self {
            AddMenuTarget::Append => None,
            AddMenuTarget::AfterPage(index) => Some(*index),
        }
    }
}

// ============================================================================
// Settings Actions
// ============================================================================

/// Entries of the page settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsAction {
    SetAsFirst,
    Rename,
    Copy,
    Duplicate,
    Delete,
}

impl SettingsAction {
    /// Get the menu label
    pub fn label(&self) -> &'static str {
        match self {
            SettingsAction::SetAsFirst => "Set as first page",
            SettingsAction::Rename => "Rename",
            SettingsAction::Copy => "Copy",
            SettingsAction::Duplicate => "Duplicate",
            SettingsAction::Delete => "Delete",
        }
    }

    /// Whether choosing this entry does anything yet
    pub fn is_wired(&self) -> bool {
        !matches!(self, SettingsAction::Rename | SettingsAction::Copy)
    }

    /// All entries, in menu order
    pub fn all() -> &'static [SettingsAction] {
        &[
            SettingsAction::SetAsFirst,
            SettingsAction::Rename,
            SettingsAction::Copy,
            SettingsAction::Duplicate,
            SettingsAction::Delete,
        ]
    }
}

// ============================================================================
// Menu State
// ============================================================================

/// Which menu is open, and where
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "menu", rename_all = "snake_case")]
pub enum MenuState {
    #[default]
    Closed,
    AddPage {
        target: AddMenuTarget,
        anchor: Option<Position>,
    },
    Settings {
        page: usize,
        anchor: Position,
    },
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        !matches!(self, MenuState::Closed)
    }

    pub fn is_settings(&self) -> bool {
        matches!(self, MenuState::Settings { .. })
    }

    /// Target of the open add-page menu, if one is open
    pub fn add_target(&self) -> Option<AddMenuTarget> {
        match self {
            MenuState::AddPage { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// Gap index of the open gap add-page menu, if one is open
    pub fn gap(&self) -> Option<usize> {
        match self.add_target() {
            Some(AddMenuTarget::AfterPage(gap)) => Some(gap),
            _ => None,
        }
    }

    /// Screen anchor of the open menu
    pub fn anchor(&self) -> Option<Position> {
        match self {
            MenuState::Closed => None,
            MenuState::AddPage { anchor, .. } => *anchor,
            MenuState::Settings { anchor, .. } => Some(*anchor),
        }
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.anchor(), None);
    }

    #[test]
    fn test_add_target_insert_index() {
        assert_eq!(AddMenuTarget::Append.insert_index(), None);
        assert_eq!(AddMenuTarget::AfterPage(2).insert_index(), Some(2));
    }

    #[test]
    fn test_gap_only_for_gap_menu() {
        let append = MenuState::AddPage {
            target: AddMenuTarget::Append,
            anchor: None,
        };
        let gap = MenuState::AddPage {
            target: AddMenuTarget::AfterPage(1),
            anchor: Some(Position::new(4.0, 40.0)),
        };
        assert_eq!(append.gap(), None);
        assert_eq!(gap.gap(), Some(1));
        assert_eq!(gap.anchor(), Some(Position::new(4.0, 40.0)));
    }

    #[test]
    fn test_close() {
        let mut menu = MenuState::Settings {
            page: 0,
            anchor: Position::new(16.0, -214.0),
        };
        assert!(menu.is_settings());
        menu.close();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn test_unwired_actions() {
        let unwired: Vec<_> = SettingsAction::all()
            .iter()
            .filter(|a| !a.is_wired())
            .map(|a| a.label())
            .collect();
        assert_eq!(unwired, vec!["Rename", "Copy"]);
    }
}
