//! # Drag Reorder
//!
//! State machine for reordering pages by drag-and-drop:
//!
//! ```text
//! Idle --begin--> Dragging --drop on page--> (move requested) --> Idle
//!                     |----drop elsewhere / cancel----------->  Idle
//! ```
//!
//! The controller never touches the page list itself; a successful drop
//! yields a `MoveRequest` that the owner applies exactly once.

use pagebar_core::{Edge, EdgeHitTest, PageBarError, PageBarResult, PageId, Position, Rect};
use pagebar_model::{DragData, DropTargetData};
use serde_json::Value;

// ============================================================================
// Drag Session
// ============================================================================

/// Drop target currently under the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct DropHover {
    pub target: DragData,
    pub edge: Option<Edge>,
}

/// A running drag gesture
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Payload of the page button being dragged
    pub source: DragData,
    /// Last drop target reported by drag-over, if any
    pub hover: Option<DropHover>,
}

/// Drag state machine
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

// ============================================================================
// Drop Outcome
// ============================================================================

/// A move the page list should perform
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRequest {
    pub source: DragData,
    pub target: DragData,
    pub edge: Option<Edge>,
}

impl MoveRequest {
    pub fn source_index(&self) -> usize {
        self.source.index
    }

    pub fn target_index(&self) -> usize {
        self.target.index
    }

    pub fn page_id(&self) -> &PageId {
        &self.source.id
    }
}

/// Result of releasing a drag
#[derive(Debug)]
pub enum DropOutcome {
    /// Released over another page button
    Move(MoveRequest),
    /// Released over the dragged button itself
    DroppedOnSelf,
    /// Released outside every drop target
    Cancelled,
    /// Payloads were missing or not page-button payloads
    Rejected(PageBarError),
}

// ============================================================================
// Drag Controller
// ============================================================================

/// Drives the drag state machine from drag capability callbacks
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Index and edge of the drop target under the pointer
    pub fn hovered(&self) -> Option<(usize, Option<Edge>)> {
        match &self.state {
            DragState::Dragging(DragSession {
                hover: Some(hover), ..
            }) => Some((hover.target.index, hover.edge)),
            _ => None,
        }
    }

    /// Start dragging the page button described by `source`
    pub fn begin(&mut self, source: &Value) -> PageBarResult<&DragSession> {
        if self.is_dragging() {
            return Err(PageBarError::DragInProgress);
        }
        let source = DragData::from_value(source)?;
        self.state = DragState::Dragging(DragSession {
            source,
            hover: None,
        });
        match &self.state {
            DragState::Dragging(session) => Ok(session),
            DragState::Idle => Err(PageBarError::internal("drag session vanished")),
        }
    }

    /// Record the drop target under the pointer and compute its closest edge
    pub fn hover(
        &mut self,
        target: &Value,
        bounds: Rect,
        pointer: Position,
        hit_test: &impl EdgeHitTest,
    ) -> PageBarResult<Option<Edge>> {
        let DragState::Dragging(session) = &mut self.state else {
            return Err(PageBarError::NoActiveDrag);
        };
        let target = DropTargetData::from_value(target)?.data;
        let edge = hit_test.closest_edge(bounds, pointer);
        session.hover = Some(DropHover { target, edge });
        Ok(edge)
    }

    /// The pointer left the current drop target
    pub fn leave(&mut self) {
        if let DragState::Dragging(session) = &mut self.state {
            session.hover = None;
        }
    }

    /// Abort the gesture. Returns whether a drag was running.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    /// Release the drag
    ///
    /// `source` and `target` are the payloads delivered by the drop monitor.
    /// A missing `source` falls back to the payload recorded at `begin`; a
    /// missing `target` means the pointer was released outside every page.
    /// The gesture always ends here.
    pub fn drop(&mut self, source: Option<&Value>, target: Option<&Value>) -> DropOutcome {
        let session = match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        };

        let source = match (source, &session) {
            (Some(value), _) => match DragData::from_value(value) {
                Ok(data) => data,
                Err(e) => return DropOutcome::Rejected(e),
            },
            (None, Some(session)) => session.source.clone(),
            (None, None) => return DropOutcome::Rejected(PageBarError::NoActiveDrag),
        };

        let Some(target) = target else {
            return DropOutcome::Cancelled;
        };
        let target = match DropTargetData::from_value(target) {
            Ok(target) => target,
            Err(e) => return DropOutcome::Rejected(e),
        };

        let edge = target.closest_edge.or_else(|| {
            session
                .as_ref()
                .and_then(|s| s.hover.as_ref())
                .filter(|hover| hover.target.index == target.index())
                .and_then(|hover| hover.edge)
        });

        if source.index == target.index() {
            return DropOutcome::DroppedOnSelf;
        }

        DropOutcome::Move(MoveRequest {
            source,
            target: target.data,
            edge,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pagebar_core::HorizontalEdges;
    use serde_json::json;

    fn payload(index: usize) -> Value {
        json!({"type": "button", "id": format!("page-{}", index), "index": index})
    }

    fn target(index: usize, edge: &str) -> Value {
        json!({
            "type": "button",
            "id": format!("page-{}", index),
            "index": index,
            "closestEdge": edge,
        })
    }

    #[test]
    fn test_begin_enters_dragging() {
        let mut drag = DragController::new();
        let session = drag.begin(&payload(1)).unwrap();
        assert_eq!(session.source.index, 1);
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_second_begin_rejected() {
        let mut drag = DragController::new();
        drag.begin(&payload(0)).unwrap();
        let err = drag.begin(&payload(1)).unwrap_err();
        assert!(matches!(err, PageBarError::DragInProgress));
        match drag.state() {
            DragState::Dragging(session) => assert_eq!(session.source.index, 0),
            DragState::Idle => panic!("drag should still be running"),
        }
    }

    #[test]
    fn test_begin_with_foreign_payload_stays_idle() {
        let mut drag = DragController::new();
        assert!(drag.begin(&json!({"type": "card", "id": "x", "index": 0})).is_err());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_hover_computes_edge() {
        let mut drag = DragController::new();
        drag.begin(&payload(0)).unwrap();
        let bounds = Rect::from_xywh(100.0, 0.0, 80.0, 32.0);
        let edge = drag
            .hover(&payload(2), bounds, Position::new(175.0, 10.0), &HorizontalEdges::new())
            .unwrap();
        assert_eq!(edge, Some(Edge::Right));
        assert_eq!(drag.hovered(), Some((2, Some(Edge::Right))));

        drag.leave();
        assert_eq!(drag.hovered(), None);
    }

    #[test]
    fn test_hover_without_drag_fails() {
        let mut drag = DragController::new();
        let err = drag
            .hover(
                &payload(0),
                Rect::from_xywh(0.0, 0.0, 10.0, 10.0),
                Position::zero(),
                &HorizontalEdges::new(),
            )
            .unwrap_err();
        assert!(matches!(err, PageBarError::NoActiveDrag));
    }

    #[test]
    fn test_drop_on_other_page_requests_move() {
        let mut drag = DragController::new();
        drag.begin(&payload(0)).unwrap();
        match drag.drop(None, Some(&target(2, "right"))) {
            DropOutcome::Move(request) => {
                assert_eq!(request.source_index(), 0);
                assert_eq!(request.target_index(), 2);
                assert_eq!(request.edge, Some(Edge::Right));
                assert_eq!(request.page_id().as_str(), "page-0");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drop_uses_hover_edge_when_payload_has_none() {
        let mut drag = DragController::new();
        drag.begin(&payload(3)).unwrap();
        let bounds = Rect::from_xywh(0.0, 0.0, 80.0, 32.0);
        drag.hover(&payload(0), bounds, Position::new(5.0, 5.0), &HorizontalEdges::new())
            .unwrap();
        match drag.drop(None, Some(&payload(0))) {
            DropOutcome::Move(request) => assert_eq!(request.edge, Some(Edge::Left)),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_drop_on_self() {
        let mut drag = DragController::new();
        drag.begin(&payload(1)).unwrap();
        assert!(matches!(
            drag.drop(None, Some(&target(1, "left"))),
            DropOutcome::DroppedOnSelf
        ));
    }

    #[test]
    fn test_drop_outside_cancels() {
        let mut drag = DragController::new();
        drag.begin(&payload(1)).unwrap();
        assert!(matches!(drag.drop(None, None), DropOutcome::Cancelled));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drop_with_malformed_target_is_rejected() {
        let mut drag = DragController::new();
        drag.begin(&payload(1)).unwrap();
        let outcome = drag.drop(None, Some(&json!({"index": "two"})));
        match outcome {
            DropOutcome::Rejected(e) => assert!(e.is_payload_error()),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_monitor_drop_without_begin() {
        let mut drag = DragController::new();
        match drag.drop(Some(&payload(3)), Some(&target(0, "left"))) {
            DropOutcome::Move(request) => {
                assert_eq!(request.source_index(), 3);
                assert_eq!(request.target_index(), 0);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(matches!(
            drag.drop(None, Some(&target(0, "left"))),
            DropOutcome::Rejected(PageBarError::NoActiveDrag)
        ));
    }

    #[test]
    fn test_cancel() {
        let mut drag = DragController::new();
        assert!(!drag.cancel());
        drag.begin(&payload(0)).unwrap();
        assert!(drag.cancel());
        assert!(!drag.is_dragging());
    }
}
