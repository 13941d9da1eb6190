//! Record-level data: attributes, groups, import parsing and colours

pub mod attributes;
pub mod color;
pub mod records;
