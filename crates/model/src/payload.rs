//! Drag-and-drop payloads exchanged with the host's drag capability
//!
//! A page button registers itself as a drag source carrying
//! `{"type": "button", "id": ..., "index": ...}` and as a drop target whose
//! data additionally carries `closestEdge`. Payloads arrive as untyped JSON
//! and are decoded here; anything that is not a page-button payload is
//! rejected.

use crate::page_list::PageList;
use pagebar_core::{Edge, PageBarError, PageBarResult, PageId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload type tag carried by page buttons
pub const BUTTON_PAYLOAD_TYPE: &str = "button";

/// Data attached to a dragged page button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragData {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: PageId,
    pub index: usize,
}

impl DragData {
    /// Payload for the page button at `index`
    pub fn button(id: PageId, index: usize) -> Self {
        Self {
            kind: BUTTON_PAYLOAD_TYPE.to_string(),
            id,
            index,
        }
    }

    /// Decode a drag source payload
    pub fn from_value(value: &Value) -> PageBarResult<Self> {
        let data: Self = serde_json::from_value(value.clone())
            .map_err(|e| PageBarError::malformed(e.to_string()))?;
        data.ensure_button()?;
        Ok(data)
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    fn ensure_button(&self) -> PageBarResult<()> {
        if self.kind == BUTTON_PAYLOAD_TYPE {
            Ok(())
        } else {
            Err(PageBarError::UnsupportedPayload(self.kind.clone()))
        }
    }

    /// Check that the page this payload names still sits at its index
    pub fn verify(&self, pages: &PageList) -> PageBarResult<()> {
        if pages.position_of(&self.id).is_none() {
            return Err(PageBarError::PageNotFound(self.id.to_string()));
        }
        let page = pages
            .get(self.index)
            .ok_or_else(|| PageBarError::out_of_range("drop", self.index, pages.len()))?;
        if page.id != self.id {
            return Err(PageBarError::StalePayload {
                id: self.id.to_string(),
                index: self.index,
            });
        }
        Ok(())
    }
}

/// Data attached to a page button acting as a drop target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTargetData {
    #[serde(flatten)]
    pub data: DragData,
    #[serde(default)]
    pub closest_edge: Option<Edge>,
}

impl DropTargetData {
    pub fn new(data: DragData, closest_edge: Option<Edge>) -> Self {
        Self { data, closest_edge }
    }

    /// Decode a drop target payload
    pub fn from_value(value: &Value) -> PageBarResult<Self> {
        let target: Self = serde_json::from_value(value.clone())
            .map_err(|e| PageBarError::malformed(e.to_string()))?;
        target.data.ensure_button()?;
        Ok(target)
    }

    pub fn index(&self) -> usize {
        self.data.index
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_source_payload() {
        let data = DragData::from_value(&json!({"type": "button", "id": "page-1", "index": 1}))
            .unwrap();
        assert_eq!(data, DragData::button(PageId::from("page-1"), 1));
    }

    #[test]
    fn test_reject_foreign_payload_type() {
        let err = DragData::from_value(&json!({"type": "file", "id": "x", "index": 0}))
            .unwrap_err();
        assert!(matches!(err, PageBarError::UnsupportedPayload(ref t) if t == "file"));
    }

    #[test]
    fn test_reject_missing_fields() {
        let err = DragData::from_value(&json!({"type": "button"})).unwrap_err();
        assert!(err.is_payload_error());
        let err = DropTargetData::from_value(&Value::Null).unwrap_err();
        assert!(err.is_payload_error());
    }

    #[test]
    fn test_decode_target_with_edge() {
        let target = DropTargetData::from_value(&json!({
            "type": "button", "id": "page-0", "index": 0, "closestEdge": "right"
        }))
        .unwrap();
        assert_eq!(target.index(), 0);
        assert_eq!(target.closest_edge, Some(Edge::Right));
    }

    #[test]
    fn test_decode_target_without_edge() {
        let target = DropTargetData::from_value(&json!({
            "type": "button", "id": "page-0", "index": 0, "closestEdge": null
        }))
        .unwrap();
        assert_eq!(target.closest_edge, None);

        let target =
            DropTargetData::from_value(&json!({"type": "button", "id": "page-0", "index": 0}))
                .unwrap();
        assert_eq!(target.closest_edge, None);
    }

    #[test]
    fn test_target_value_shape() {
        let data = DragData::button(PageId::from("page-2"), 2);
        let target = DropTargetData::new(data, Some(Edge::Left));
        let value = target.to_value();
        assert_eq!(value["type"], "button");
        assert_eq!(value["closestEdge"], "left");
    }

    #[test]
    fn test_verify_detects_stale_payload() {
        let mut pages = PageList::default();
        let data = DragData::button(PageId::from("page-1"), 1);
        assert!(data.verify(&pages).is_ok());

        pages.move_to_front(1).unwrap();
        assert!(matches!(
            data.verify(&pages),
            Err(PageBarError::StalePayload { .. })
        ));

        let moved = DragData::button(PageId::from("page-0"), 2);
        assert!(moved.verify(&pages).unwrap_err().is_index_error());
    }

    #[test]
    fn test_verify_detects_deleted_page() {
        let mut pages = PageList::default();
        let data = DragData::button(PageId::from("page-1"), 1);
        pages.remove(1).unwrap();
        pages.append(pagebar_core::PageType::Form);

        let err = data.verify(&pages).unwrap_err();
        assert!(matches!(err, PageBarError::PageNotFound(ref id) if id == "page-1"));
        assert!(err.is_index_error());
    }
}
