use crate::config::EngineConfig;
use crate::domain::records::MoodRecord;
use crate::hex_body::{HexBody, Vec2};

/// Owns all bodies, in creation order.
///
/// Ids increase monotonically and are never reused, even across
/// `clear()`, so stale ids from a previous import can't alias new bodies.
pub struct BodyArena {
    bodies: Vec<HexBody>,
    next_id: u32,
}

impl BodyArena {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a body from a validated record and return its id
    pub fn spawn(&mut self, record: MoodRecord, pos: Vec2, velocity: Vec2, config: &EngineConfig) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.bodies.push(HexBody::new(
            id,
            pos,
            velocity,
            record.group,
            record.date,
            record.attributes,
            config,
        ));
        id
    }

    /// Drop every body. Id allocation continues where it left off.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Lookup by id (ids are ascending in storage order)
    pub fn get(&self, id: u32) -> Option<&HexBody> {
        let idx = self.bodies.binary_search_by_key(&id, |b| b.id).ok()?;
        self.bodies.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HexBody> {
        self.bodies.iter()
    }

    pub fn as_slice(&self) -> &[HexBody] {
        &self.bodies
    }

    pub fn as_mut_slice(&mut self) -> &mut [HexBody] {
        &mut self.bodies
    }
}

impl Default for BodyArena {
    fn default() -> Self {
        Self::new()
    }
}
