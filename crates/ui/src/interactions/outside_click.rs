//! # Outside-Click Dismissal
//!
//! Any pointer-down outside the open menu's container closes that menu. A
//! pointer-down on the control that toggles the menu is exempt, otherwise
//! the same click that opens a menu would close it again.

use crate::menu::{AddMenuTarget, MenuState};
use pagebar_core::Container;
use serde::{Deserialize, Serialize};

/// Element that received a pointer-down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum PointerTarget {
    /// A page button (by page index)
    PageButton(usize),
    /// The settings trigger on a page button
    SettingsTrigger(usize),
    /// Anything inside the settings menu
    SettingsMenu,
    /// The trailing "+ Add page" button
    AddPageButton,
    /// Anything inside an add-page menu
    AddMenu,
    /// The "+" control of the gap after a page
    InsertionControl(usize),
    /// Anywhere else
    Background,
}

/// Containers that own a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuContainer {
    /// The settings menu panel
    SettingsMenu,
    /// The trailing button and the menu below it share one wrapper
    AppendWrapper,
    /// The floating gap add-page menu
    GapMenu,
}

impl Container<PointerTarget> for MenuContainer {
    fn contains(&self, target: &PointerTarget) -> bool {
        match self {
            MenuContainer::SettingsMenu => matches!(target, PointerTarget::SettingsMenu),
            MenuContainer::AppendWrapper => matches!(
                target,
                PointerTarget::AddPageButton | PointerTarget::AddMenu
            ),
            MenuContainer::GapMenu => matches!(target, PointerTarget::AddMenu),
        }
    }
}

/// Decides whether a pointer-down dismisses a menu
#[derive(Debug, Clone, PartialEq)]
pub struct OutsideClick<C> {
    container: C,
    toggle: Option<PointerTarget>,
}

impl<C: Container<PointerTarget>> OutsideClick<C> {
    pub fn new(container: C, toggle: Option<PointerTarget>) -> Self {
        Self { container, toggle }
    }

    /// Whether a pointer-down on `target` should close the menu
    pub fn should_dismiss(&self, target: &PointerTarget) -> bool {
        if self.toggle.as_ref() == Some(target) {
            return false;
        }
        !self.container.contains(target)
    }
}

impl OutsideClick<MenuContainer> {
    /// Guard for whichever menu is open
    pub fn for_menu(menu: &MenuState) -> Option<Self> {
        match menu {
            MenuState::Closed => None,
            MenuState::Settings { page, .. } => Some(Self::new(
                MenuContainer::SettingsMenu,
                Some(PointerTarget::SettingsTrigger(*page)),
            )),
            MenuState::AddPage {
                target: AddMenuTarget::Append,
                ..
            } => Some(Self::new(MenuContainer::AppendWrapper, None)),
            MenuState::AddPage {
                target: AddMenuTarget::AfterPage(gap),
                ..
            } => Some(Self::new(
                MenuContainer::GapMenu,
                Some(PointerTarget::InsertionControl(*gap)),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagebar_core::Position;

    fn settings(page: usize) -> MenuState {
        MenuState::Settings {
            page,
            anchor: Position::zero(),
        }
    }

    #[test]
    fn test_closed_menu_has_no_guard() {
        assert!(OutsideClick::for_menu(&MenuState::Closed).is_none());
    }

    #[test]
    fn test_settings_menu_guard() {
        let guard = OutsideClick::for_menu(&settings(1)).unwrap();
        assert!(!guard.should_dismiss(&PointerTarget::SettingsMenu));
        assert!(!guard.should_dismiss(&PointerTarget::SettingsTrigger(1)));
        assert!(guard.should_dismiss(&PointerTarget::SettingsTrigger(0)));
        assert!(guard.should_dismiss(&PointerTarget::PageButton(1)));
        assert!(guard.should_dismiss(&PointerTarget::Background));
    }

    #[test]
    fn test_append_menu_guard_covers_button() {
        let menu = MenuState::AddPage {
            target: AddMenuTarget::Append,
            anchor: None,
        };
        let guard = OutsideClick::for_menu(&menu).unwrap();
        assert!(!guard.should_dismiss(&PointerTarget::AddPageButton));
        assert!(!guard.should_dismiss(&PointerTarget::AddMenu));
        assert!(guard.should_dismiss(&PointerTarget::SettingsMenu));
    }

    #[test]
    fn test_gap_menu_guard() {
        let menu = MenuState::AddPage {
            target: AddMenuTarget::AfterPage(0),
            anchor: None,
        };
        let guard = OutsideClick::for_menu(&menu).unwrap();
        assert!(!guard.should_dismiss(&PointerTarget::AddMenu));
        assert!(!guard.should_dismiss(&PointerTarget::InsertionControl(0)));
        assert!(guard.should_dismiss(&PointerTarget::InsertionControl(1)));
        assert!(guard.should_dismiss(&PointerTarget::AddPageButton));
    }

    #[test]
    fn test_pointer_target_serde() {
        let json = serde_json::to_value(PointerTarget::SettingsTrigger(2)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "settings_trigger", "index": 2}));
        let target: PointerTarget = serde_json::from_str(r#"{"kind": "background"}"#).unwrap();
        assert_eq!(target, PointerTarget::Background);
    }
}
