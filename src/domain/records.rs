//! Imported mood records: parsing, validation and normalization
//!
//! Records arrive as JSON (array, or object of records) or simple CSV.
//! An attribute is either a plain string or `{ value, certainty }`; the
//! record may also carry a global `certainty`. Either the global certainty
//! or a per-attribute one on every attribute is required.
//!
//! A batch is all-or-nothing: the first invalid record rejects it.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{EngineError, Result};

use super::attributes::{AttributeKind, BodyAttribute, Certainty, Group};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAttribute {
    Plain(String),
    Rated { value: String, certainty: f64 },
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    time: String,
    #[serde(default)]
    certainty: Option<Certainty>,
    #[serde(rename = "Energy")]
    energy: Option<RawAttribute>,
    #[serde(rename = "Emotion")]
    emotion: Option<RawAttribute>,
    #[serde(rename = "Attention")]
    attention: Option<RawAttribute>,
    #[serde(rename = "Motivation")]
    motivation: Option<RawAttribute>,
    #[serde(rename = "Engagement")]
    engagement: Option<RawAttribute>,
    #[serde(rename = "Meaning")]
    meaning: Option<RawAttribute>,
}

impl RawRecord {
    fn attribute(&self, kind: AttributeKind) -> Option<&RawAttribute> {
        match kind {
            AttributeKind::Energy => self.energy.as_ref(),
            AttributeKind::Emotion => self.emotion.as_ref(),
            AttributeKind::Attention => self.attention.as_ref(),
            AttributeKind::Motivation => self.motivation.as_ref(),
            AttributeKind::Engagement => self.engagement.as_ref(),
            AttributeKind::Meaning => self.meaning.as_ref(),
        }
    }
}

/// A validated record, ready to become a body
#[derive(Clone, Debug, PartialEq)]
pub struct MoodRecord {
    pub date: String,
    pub group: Group,
    /// Always six entries, in `AttributeKind::ALL` order
    pub attributes: Vec<BodyAttribute>,
}

/// Parse and validate a JSON batch
pub fn parse_json(text: &str) -> Result<Vec<MoodRecord>> {
    let root: Value = serde_json::from_str(text)?;
    let items = match root {
        Value::Array(items) => items,
        Value::Object(map) => js_property_order(map),
        _ => return Err(EngineError::record(0, "expected an array of records")),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, value)| from_value(index, value))
        .collect()
}

/// Parse and validate a CSV batch. The first line is the header; cells are
/// split on commas without quoting. A `certainty` column is read as a number.
pub fn parse_csv(text: &str) -> Result<Vec<MoodRecord>> {
    let mut lines = text.trim().lines();
    let headers: Vec<&str> = match lines.next() {
        Some(h) if !h.trim().is_empty() => h.split(',').map(str::trim).collect(),
        _ => return Err(EngineError::EmptyInput("csv has no header line")),
    };

    lines
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| {
            let mut obj = Map::new();
            for (header, cell) in headers.iter().zip(line.split(',')) {
                let cell = cell.trim();
                let value = if *header == "certainty" {
                    match cell.parse::<f64>() {
                        Ok(n) => serde_json::Number::from_f64(n)
                            .map(Value::Number)
                            .unwrap_or(Value::Null),
                        Err(_) if cell.is_empty() => Value::Null,
                        Err(_) => {
                            return Err(EngineError::record(index, format!("certainty '{}' is not a number", cell)))
                        }
                    }
                } else {
                    Value::String(cell.to_string())
                };
                obj.insert((*header).to_string(), value);
            }
            from_value(index, Value::Object(obj))
        })
        .collect()
}

/// Object values in JavaScript property order: array-index keys ascending,
/// then the remaining keys in insertion order.
fn js_property_order(map: Map<String, Value>) -> Vec<Value> {
    let (mut indexed, named): (Vec<_>, Vec<_>) =
        map.into_iter().partition(|(key, _)| array_index(key).is_some());
    indexed.sort_by_key(|(key, _)| array_index(key));
    indexed.into_iter().chain(named).map(|(_, v)| v).collect()
}

/// Canonical decimal below 2^32 - 1; "01" or "+1" are plain string keys
fn array_index(key: &str) -> Option<u32> {
    let n: u32 = key.parse().ok()?;
    (n != u32::MAX && n.to_string() == key).then_some(n)
}

fn from_value(index: usize, value: Value) -> Result<MoodRecord> {
    if !value.is_object() {
        return Err(EngineError::record(index, "record is not an object"));
    }
    let raw: RawRecord =
        serde_json::from_value(value).map_err(|e| EngineError::record(index, e.to_string()))?;
    validate(index, raw)
}

fn validate(index: usize, raw: RawRecord) -> Result<MoodRecord> {
    let group = Group::parse(&raw.time)
        .ok_or_else(|| EngineError::record(index, format!("time must be \"am\" or \"pm\", got '{}'", raw.time)))?;

    let global = raw.certainty;

    let missing: Vec<&str> = AttributeKind::ALL
        .iter()
        .filter(|k| raw.attribute(**k).is_none())
        .map(|k| k.name())
        .collect();
    if !missing.is_empty() {
        return Err(EngineError::record(index, format!("missing attributes: {}", missing.join(", "))));
    }

    let all_rated = AttributeKind::ALL
        .iter()
        .all(|k| matches!(raw.attribute(*k), Some(RawAttribute::Rated { .. })));
    if global.is_none() && !all_rated {
        return Err(EngineError::record(
            index,
            "needs a global certainty or a certainty on every attribute",
        ));
    }

    let mut attributes = Vec::with_capacity(AttributeKind::ALL.len());
    for kind in AttributeKind::ALL {
        let (value, certainty) = match raw.attribute(kind) {
            Some(RawAttribute::Plain(value)) => (value.clone(), global),
            Some(RawAttribute::Rated { value, certainty }) => {
                let c = Certainty::try_from(*certainty)
                    .map_err(|e| EngineError::record(index, format!("{}: {}", kind.name(), e)))?;
                (value.clone(), Some(c))
            }
            None => return Err(EngineError::record(index, format!("missing attribute {}", kind.name()))),
        };
        attributes.push(BodyAttribute { kind, value, certainty });
    }

    Ok(MoodRecord {
        date: raw.date,
        group,
        attributes,
    })
}
