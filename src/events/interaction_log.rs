use std::collections::{BTreeMap, VecDeque};

use serde::Serialize;

use crate::hex_body::{HexBody, Vec2};

use super::contact::{BoundaryContact, CanvasEdge, ContactSink, CrossContact};

/// Boundary contact enriched with the body state after the response
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryRecord {
    pub hex_id: u32,
    pub vertex_index: usize,
    pub edge: CanvasEdge,
    pub pos: Vec2,
    pub frame: u64,
    pub hex_x: f64,
    pub hex_y: f64,
    pub vx: f64,
    pub vy: f64,
    pub omega: f64,
}

/// Cross-body interaction as exported (`"type": "vertex_edge"`)
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Interaction {
    VertexEdge {
        #[serde(flatten)]
        contact: CrossContact,
        frame: u64,
    },
}

impl Interaction {
    pub fn contact(&self) -> &CrossContact {
        match self {
            Interaction::VertexEdge { contact, .. } => contact,
        }
    }
}

const CSV_HEADER: &str = "hexId,vertexIndex,edge,pos_x,pos_y,frame,hexX,hexY,vx,vy,omega";

/// In-memory interaction log: full boundary history plus bounded "recent"
/// rings that the host draws as markers.
#[derive(Debug)]
pub struct InteractionLog {
    boundary: Vec<BoundaryRecord>,
    recent_boundary: VecDeque<BoundaryRecord>,
    interactions: VecDeque<Interaction>,
    recent_cap: usize,
    debug: bool,
}

impl InteractionLog {
    pub fn new(recent_cap: usize, debug: bool) -> Self {
        let recent_cap = recent_cap.max(1);
        Self {
            boundary: Vec::new(),
            recent_boundary: VecDeque::with_capacity(recent_cap),
            interactions: VecDeque::with_capacity(recent_cap),
            recent_cap,
            debug,
        }
    }

    pub fn configure(&mut self, recent_cap: usize, debug: bool) {
        self.recent_cap = recent_cap.max(1);
        self.debug = debug;
        trim_front(&mut self.recent_boundary, self.recent_cap);
        trim_front(&mut self.interactions, self.recent_cap);
    }

    pub fn clear(&mut self) {
        self.boundary.clear();
        self.recent_boundary.clear();
        self.interactions.clear();
    }

    pub fn boundary_records(&self) -> &[BoundaryRecord] {
        &self.boundary
    }

    pub fn recent_boundary(&self) -> impl Iterator<Item = &BoundaryRecord> {
        self.recent_boundary.iter()
    }

    pub fn interactions(&self) -> impl Iterator<Item = &Interaction> {
        self.interactions.iter()
    }

    // === Export ===

    /// Full boundary history as pretty JSON
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.boundary).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn export_interactions_json(&self) -> String {
        serde_json::to_string_pretty(&self.interactions).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn recent_boundary_json(&self) -> String {
        serde_json::to_string(&self.recent_boundary).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn recent_interactions_json(&self) -> String {
        serde_json::to_string(&self.interactions).unwrap_or_else(|_| "[]".to_string())
    }

    /// Full boundary history as CSV
    pub fn export_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.boundary.len() + 1);
        lines.push(CSV_HEADER.to_string());
        for r in &self.boundary {
            lines.push(format!(
                "{},{},{},{},{},{},{},{},{},{},{}",
                r.hex_id,
                r.vertex_index,
                r.edge.as_str(),
                r.pos.x,
                r.pos.y,
                r.frame,
                r.hex_x,
                r.hex_y,
                r.vx,
                r.vy,
                r.omega
            ));
        }
        lines.join("\n")
    }

    // === Stats ===

    pub fn count_by_body(&self, body_id: u32) -> usize {
        self.boundary.iter().filter(|r| r.hex_id == body_id).count()
    }

    /// vertex index -> hits for one body
    pub fn count_by_body_vertex(&self, body_id: u32) -> BTreeMap<usize, usize> {
        let mut out = BTreeMap::new();
        for r in self.boundary.iter().filter(|r| r.hex_id == body_id) {
            *out.entry(r.vertex_index).or_insert(0) += 1;
        }
        out
    }

    /// body id -> hits
    pub fn count_all_bodies(&self) -> BTreeMap<u32, usize> {
        let mut out = BTreeMap::new();
        for r in &self.boundary {
            *out.entry(r.hex_id).or_insert(0) += 1;
        }
        out
    }

    /// canvas edge name -> hits (only edges that were hit appear)
    pub fn count_by_edge(&self) -> BTreeMap<&'static str, usize> {
        let mut out = BTreeMap::new();
        for r in &self.boundary {
            *out.entry(r.edge.as_str()).or_insert(0) += 1;
        }
        out
    }

    pub fn stats_json(&self) -> String {
        #[derive(Serialize)]
        struct Stats<'a> {
            total: usize,
            by_body: &'a BTreeMap<u32, usize>,
            by_edge: &'a BTreeMap<&'static str, usize>,
            interactions: usize,
        }
        let by_body = self.count_all_bodies();
        let by_edge = self.count_by_edge();
        serde_json::to_string(&Stats {
            total: self.boundary.len(),
            by_body: &by_body,
            by_edge: &by_edge,
            interactions: self.interactions.len(),
        })
        .unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for InteractionLog {
    fn default() -> Self {
        Self::new(50, false)
    }
}

impl ContactSink for InteractionLog {
    fn boundary_contact(&mut self, contact: &BoundaryContact, body: &HexBody, frame: u64) {
        let record = BoundaryRecord {
            hex_id: contact.body_id,
            vertex_index: contact.vertex_index,
            edge: contact.edge,
            pos: contact.position,
            frame,
            hex_x: body.pos.x,
            hex_y: body.pos.y,
            vx: body.velocity.x,
            vy: body.velocity.y,
            omega: body.angular_vel,
        };
        if self.debug {
            log::debug!(
                "boundary: body {} vertex {} {} at ({:.1}, {:.1})",
                record.hex_id,
                record.vertex_index,
                record.edge.as_str(),
                record.pos.x,
                record.pos.y
            );
        }
        self.recent_boundary.push_back(record.clone());
        trim_front(&mut self.recent_boundary, self.recent_cap);
        self.boundary.push(record);
    }

    fn cross_contact(&mut self, contact: &CrossContact, frame: u64) {
        if self.debug {
            log::debug!(
                "vertex-edge: {}#{} -> {}#{} point=({:.1},{:.1}) d={:.2} n=({:.2},{:.2}) swapped={}",
                contact.vertex_owner_id,
                contact.vertex_index,
                contact.edge_owner_id,
                contact.edge_index,
                contact.contact_point.x,
                contact.contact_point.y,
                contact.distance,
                contact.normal.x,
                contact.normal.y,
                contact.swapped
            );
        }
        self.interactions.push_back(Interaction::VertexEdge {
            contact: contact.clone(),
            frame,
        });
        trim_front(&mut self.interactions, self.recent_cap);
    }
}

fn trim_front<T>(ring: &mut VecDeque<T>, cap: usize) {
    while ring.len() > cap {
        ring.pop_front();
    }
}
