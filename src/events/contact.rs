use serde::Serialize;

use crate::hex_body::{HexBody, Vec2};

/// Canvas side touched by a vertex
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl CanvasEdge {
    pub fn as_str(self) -> &'static str {
        match self {
            CanvasEdge::Left => "left",
            CanvasEdge::Right => "right",
            CanvasEdge::Top => "top",
            CanvasEdge::Bottom => "bottom",
        }
    }
}

/// A body vertex found outside the canvas rectangle
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryContact {
    pub body_id: u32,
    pub vertex_index: usize,
    pub edge: CanvasEdge,
    pub position: Vec2,
}

/// A vertex of one body within tolerance of an edge of an opposing body
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossContact {
    pub vertex_owner_id: u32,
    pub vertex_owner_date: String,
    pub edge_owner_id: u32,
    pub edge_owner_date: String,
    pub vertex_index: usize,
    pub edge_index: usize,
    pub contact_point: Vec2,
    pub normal: Vec2,
    pub distance: f64,
    /// Whether the approach test fired and velocities were exchanged
    pub swapped: bool,
}

/// Receiver for contact records. The orchestrator fires and forgets.
pub trait ContactSink {
    /// `body` is the owning body after the boundary response was applied.
    fn boundary_contact(&mut self, contact: &BoundaryContact, body: &HexBody, frame: u64);

    fn cross_contact(&mut self, contact: &CrossContact, frame: u64);
}

/// Sink that keeps every record in order; handy for tests and replays
#[derive(Default, Debug)]
pub struct RecordingSink {
    pub boundary: Vec<BoundaryContact>,
    pub cross: Vec<CrossContact>,
}

impl ContactSink for RecordingSink {
    fn boundary_contact(&mut self, contact: &BoundaryContact, _body: &HexBody, _frame: u64) {
        self.boundary.push(*contact);
    }

    fn cross_contact(&mut self, contact: &CrossContact, _frame: u64) {
        self.cross.push(contact.clone());
    }
}
