//! Page Bar State Management
//!
//! This module provides the controller that owns all page bar state: the
//! page list, the selected page, the open menu, the drag gesture and the
//! insertion-point hover. Renderers read snapshots through `&self`
//! accessors; every change goes through an event handler on `PageBar`.
//!
//! Stale or malformed input (an index that no longer exists, a foreign drag
//! payload) is logged and ignored. Handlers never leave the state half
//! updated.

use crate::events::PageBarEvent;
use crate::interactions::{
    DragController, DropOutcome, GapAction, InsertionAffordance, OutsideClick, PointerTarget,
};
use crate::menu::{AddMenuTarget, MenuState, SettingsAction};
use pagebar_core::{
    Edge, EdgeHitTest, HorizontalEdges, PageBarResult, PageType, Position, Rect, ResultExt,
};
use pagebar_model::{DragData, PageBarConfig, PageEntry, PageList};
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Selection State
// ============================================================================

/// Tracks the active page
///
/// The index is always valid while the page list is non-empty; on an empty
/// list it rests at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    index: usize,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Select `index` if it names one of `len` pages
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Step back one page after the selected page was deleted
    pub fn step_back(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Select the first page
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Read-only view of the page bar, as handed to a renderer
#[derive(Debug, Clone, Serialize)]
pub struct PageBarSnapshot<'a> {
    pub pages: &'a [PageEntry],
    pub selected_index: usize,
    pub menu: MenuState,
    pub expanded_gap: Option<usize>,
    pub drop_indicator: Option<(usize, Option<Edge>)>,
    pub dragging: bool,
}

// ============================================================================
// Page Bar Controller
// ============================================================================

/// Top-level page bar controller
#[derive(Debug, Clone)]
pub struct PageBar<H = HorizontalEdges> {
    pages: PageList,
    selection: Selection,
    menu: MenuState,
    drag: DragController,
    gaps: InsertionAffordance,
    config: PageBarConfig,
    hit_test: H,
}

impl PageBar<HorizontalEdges> {
    /// Create a page bar seeded from `config`
    pub fn new(config: PageBarConfig) -> Self {
        Self::with_hit_test(config, HorizontalEdges::new())
    }
}

impl Default for PageBar<HorizontalEdges> {
    fn default() -> Self {
        Self::new(PageBarConfig::default())
    }
}

impl<H: EdgeHitTest> PageBar<H> {
    /// Create a page bar with a custom closest-edge hit test
    pub fn with_hit_test(config: PageBarConfig, hit_test: H) -> Self {
        let pages = PageList::seeded(&config.initial_pages, config.id_strategy);
        Self {
            pages,
            selection: Selection::new(),
            menu: MenuState::Closed,
            drag: DragController::new(),
            gaps: InsertionAffordance::new(&config),
            config,
            hit_test,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn pages(&self) -> &PageList {
        &self.pages
    }

    pub fn selected_index(&self) -> usize {
        self.selection.index()
    }

    pub fn selected_page(&self) -> Option<&PageEntry> {
        self.pages.get(self.selection.index())
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn expanded_gap(&self) -> Option<usize> {
        self.gaps.expanded_gap()
    }

    pub fn config(&self) -> &PageBarConfig {
        &self.config
    }

    /// Consistent view of everything a renderer needs
    pub fn snapshot(&self) -> PageBarSnapshot<'_> {
        PageBarSnapshot {
            pages: self.pages.as_slice(),
            selected_index: self.selection.index(),
            menu: self.menu,
            expanded_gap: self.gaps.expanded_gap(),
            drop_indicator: self.drag.hovered(),
            dragging: self.drag.is_dragging(),
        }
    }

    // ========================================================================
    // Event Dispatch
    // ========================================================================

    /// Apply one input event. Returns whether the page list changed.
    pub fn dispatch(&mut self, event: &PageBarEvent) -> bool {
        tracing::trace!("Dispatching {}", event.name());
        match event {
            PageBarEvent::SelectPage { index } => {
                self.select_page(*index);
                false
            }
            PageBarEvent::ToggleSettings { index, bounds } => {
                self.toggle_settings_menu(*index, *bounds);
                false
            }
            PageBarEvent::Settings { action } => self.apply_settings_action(*action),
            PageBarEvent::ToggleAddMenu { bounds } => {
                self.toggle_add_menu(*bounds);
                false
            }
            PageBarEvent::ChoosePageType { page_type } => self.choose_page_type(*page_type),
            PageBarEvent::GapEnter { index } => {
                self.gap_enter(*index);
                false
            }
            PageBarEvent::GapLeave {
                pointer,
                menu_bounds,
            } => {
                self.gap_leave(*pointer, *menu_bounds);
                false
            }
            PageBarEvent::PlusClick { index, bounds } => {
                self.plus_click(*index, *bounds);
                false
            }
            PageBarEvent::AddMenuEnter => {
                self.add_menu_enter();
                false
            }
            PageBarEvent::AddMenuLeave => {
                self.add_menu_leave();
                false
            }
            PageBarEvent::DragStart { source } => {
                self.drag_start(source);
                false
            }
            PageBarEvent::DragOver {
                target,
                bounds,
                pointer,
            } => {
                self.drag_over(target, *bounds, *pointer);
                false
            }
            PageBarEvent::DragLeave => {
                self.drag.leave();
                false
            }
            PageBarEvent::Drop { source, target } => {
                self.drop(source.as_ref(), target.as_ref())
            }
            PageBarEvent::DragCancel => {
                self.cancel_drag();
                false
            }
            PageBarEvent::PointerDown { target } => {
                self.pointer_down(target);
                false
            }
        }
    }

    // ========================================================================
    // Selection & Settings Menu
    // ========================================================================

    /// Click on a page button
    ///
    /// Moving the selection closes a settings menu opened for the previous page.
    pub fn select_page(&mut self, index: usize) {
        let previous = self.selection.index();
        if self.selection.select(index, self.pages.len()) {
            if index != previous && self.menu.is_settings() {
                self.menu.close();
            }
            tracing::debug!("Page selected: {}", index);
        } else {
            tracing::debug!("Ignoring selection of missing page {}", index);
        }
    }

    /// Click on the settings trigger of page `index`
    ///
    /// The trigger only exists on the selected page. The menu opens above
    /// the page button, lifted by `settings_menu_lift`.
    pub fn toggle_settings_menu(&mut self, index: usize, button_bounds: Rect) {
        if index != self.selection.index() || index >= self.pages.len() {
            tracing::debug!("Ignoring settings trigger on unselected page {}", index);
            return;
        }
        if self.menu.is_settings() {
            self.menu.close();
        } else {
            let anchor = button_bounds
                .top_left()
                .offset(0.0, -self.config.settings_menu_lift);
            self.menu = MenuState::Settings {
                page: index,
                anchor,
            };
        }
    }

    /// Click on a settings menu entry. Returns whether the page list changed.
    pub fn apply_settings_action(&mut self, action: SettingsAction) -> bool {
        if !self.menu.is_settings() {
            tracing::debug!("Ignoring '{}' without an open settings menu", action.label());
            return false;
        }
        if !action.is_wired() {
            tracing::debug!("Settings entry '{}' has no action", action.label());
            return false;
        }

        let selected = self.selection.index();
        let changed = match action {
            SettingsAction::SetAsFirst => match self.pages.move_to_front(selected) {
                Ok(()) => {
                    self.selection.reset();
                    tracing::info!("Moved page {} to the front", selected);
                    selected > 0
                }
                Err(e) => {
                    tracing::debug!("Set as first ignored: {}", e);
                    false
                }
            },
            SettingsAction::Duplicate => {
                match self
                    .pages
                    .duplicate_with_suffix(selected, &self.config.copy_suffix)
                {
                    Ok(id) => {
                        tracing::info!("Duplicated page {} as {}", selected, id);
                        true
                    }
                    Err(e) => {
                        tracing::debug!("Duplicate ignored: {}", e);
                        false
                    }
                }
            }
            SettingsAction::Delete => {
                let removed = self.pages.remove(selected);
                self.selection.step_back();
                match removed {
                    Ok(page) => {
                        tracing::info!("Deleted page '{}' ({})", page.label, page.id);
                        true
                    }
                    Err(e) => {
                        tracing::debug!("Delete ignored: {}", e);
                        false
                    }
                }
            }
            SettingsAction::Rename | SettingsAction::Copy => false,
        };

        self.menu.close();
        if changed {
            self.gaps.reset();
        }
        changed
    }

    // ========================================================================
    // Add-Page Menus
    // ========================================================================

    /// Click on the trailing "+ Add page" button
    pub fn toggle_add_menu(&mut self, button_bounds: Option<Rect>) {
        if self.menu.add_target() == Some(AddMenuTarget::Append) {
            self.menu.close();
            return;
        }
        let offset_y = self.config.add_menu_offset_y;
        let anchor = button_bounds.map(|b| b.bottom_left().offset(0.0, offset_y));
        self.menu = MenuState::AddPage {
            target: AddMenuTarget::Append,
            anchor,
        };
    }

    /// Click on a page type in the open add-page menu. Returns whether a page was added.
    pub fn choose_page_type(&mut self, page_type: PageType) -> bool {
        let Some(target) = self.menu.add_target() else {
            tracing::debug!("Ignoring page type {} without an open add menu", page_type);
            return false;
        };

        let added = match self.pages.insert_after(target.insert_index(), page_type) {
            Ok(id) => {
                tracing::info!("Added {} page {} ({:?})", page_type, id, target);
                true
            }
            Err(e) => {
                tracing::debug!("Insert ignored: {}", e);
                false
            }
        };

        if self.config.close_add_menu_on_select {
            self.menu.close();
        }
        added
    }

    // ========================================================================
    // Insertion Points
    // ========================================================================

    /// Pointer entered the gap after page `index`
    pub fn gap_enter(&mut self, index: usize) {
        if index < self.pages.len() {
            self.gaps.enter_gap(index);
        }
    }

    /// Pointer left a gap
    pub fn gap_leave(&mut self, pointer: Position, menu_bounds: Option<Rect>) {
        let action = self.gaps.leave_gap(pointer, menu_bounds);
        self.apply_gap_action(action);
    }

    /// Click on the "+" control of the gap after page `index`
    pub fn plus_click(&mut self, index: usize, control_bounds: Rect) {
        if index >= self.pages.len() {
            tracing::debug!("Ignoring click on missing gap {}", index);
            return;
        }
        let action = self.gaps.click_plus(index, control_bounds);
        self.apply_gap_action(action);
    }

    /// Pointer entered the gap add-page menu
    pub fn add_menu_enter(&mut self) {
        if let Some(gap) = self.menu.gap() {
            self.gaps.enter_menu(gap);
        }
    }

    /// Pointer left the gap add-page menu
    pub fn add_menu_leave(&mut self) {
        if self.menu.gap().is_some() {
            let action = self.gaps.leave_menu();
            self.apply_gap_action(action);
        }
    }

    fn apply_gap_action(&mut self, action: GapAction) {
        match action {
            GapAction::None => {}
            GapAction::OpenMenu { gap, anchor } => {
                self.menu = MenuState::AddPage {
                    target: AddMenuTarget::AfterPage(gap),
                    anchor: Some(anchor),
                };
            }
            GapAction::CloseMenu => {
                if self.menu.gap().is_some() {
                    self.menu.close();
                }
            }
        }
    }

    // ========================================================================
    // Drag Reorder
    // ========================================================================

    /// A page button started being dragged
    pub fn drag_start(&mut self, source: &Value) {
        match self.drag.begin(source) {
            Ok(session) => tracing::debug!("Drag started on page {}", session.source.index),
            Err(e) => tracing::debug!("Drag start ignored: {}", e),
        }
    }

    /// The dragged button moved over a drop target
    pub fn drag_over(&mut self, target: &Value, bounds: Rect, pointer: Position) {
        if let Err(e) = self.drag.hover(target, bounds, pointer, &self.hit_test) {
            tracing::debug!("Drag over ignored: {}", e);
        }
    }

    /// The drag was aborted
    pub fn cancel_drag(&mut self) {
        if self.drag.cancel() {
            tracing::debug!("Drag cancelled");
        }
    }

    /// The drag was released. Returns whether the page list changed.
    pub fn drop(&mut self, source: Option<&Value>, target: Option<&Value>) -> bool {
        let request = match self.drag.drop(source, target) {
            DropOutcome::Move(request) => request,
            DropOutcome::DroppedOnSelf => {
                tracing::debug!("Dropped page on itself");
                return false;
            }
            DropOutcome::Cancelled => {
                tracing::debug!("Drop outside any page");
                return false;
            }
            DropOutcome::Rejected(e) => {
                tracing::warn!("Drop rejected: {}", e);
                return false;
            }
        };

        if let Err(e) = self.verify_payloads(&request.source, &request.target) {
            tracing::warn!("Drop rejected: {}", e);
            return false;
        }

        match self
            .pages
            .move_to(request.source_index(), request.target_index(), request.edge)
        {
            Ok(new_index) => {
                tracing::info!(
                    "Moved page {} from {} to {}",
                    request.page_id(),
                    request.source_index(),
                    new_index
                );
                new_index != request.source_index()
            }
            Err(e) => {
                tracing::debug!("Move ignored: {}", e);
                false
            }
        }
    }

    fn verify_payloads(&self, source: &DragData, target: &DragData) -> PageBarResult<()> {
        source.verify(&self.pages).with_context("drag source")?;
        target.verify(&self.pages).with_context("drop target")
    }

    // ========================================================================
    // Outside Clicks
    // ========================================================================

    /// Global pointer-down; closes the open menu if the click landed outside it
    pub fn pointer_down(&mut self, target: &PointerTarget) {
        let dismiss = OutsideClick::for_menu(&self.menu)
            .map(|guard| guard.should_dismiss(target))
            .unwrap_or(false);
        if dismiss {
            tracing::debug!("Outside click on {:?} closed {:?}", target, self.menu);
            if self.menu.gap().is_some() {
                self.gaps.reset();
            }
            self.menu.close();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
