//! Contact records and the interaction log they are handed to

mod contact;
mod interaction_log;

pub use contact::{BoundaryContact, CanvasEdge, ContactSink, CrossContact, RecordingSink};
pub use interaction_log::{BoundaryRecord, Interaction, InteractionLog};
