//! Per-frame algorithms, leaf first: geometry, motion, boundary and
//! cross-body contacts.

pub mod hex_body;
pub mod geometry;
pub mod motion;
pub mod boundary;
pub mod contact;
pub mod body_arena;
pub mod frame;
