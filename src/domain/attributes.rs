use serde::Deserialize;

/// Number of attributes (and therefore triangles / vertices) per hexagon
pub const ATTRIBUTE_COUNT: usize = 6;

/// Time-of-day group. Decides which bodies may touch and the spin direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Am,
    Pm,
}

impl Group {
    pub fn opposite(self) -> Group {
        match self {
            Group::Am => Group::Pm,
            Group::Pm => Group::Am,
        }
    }

    /// Sign applied to the configured spin: AM turns clockwise on screen.
    pub fn spin_sign(self) -> f64 {
        match self {
            Group::Am => -1.0,
            Group::Pm => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Group::Am => "am",
            Group::Pm => "pm",
        }
    }

    pub fn parse(s: &str) -> Option<Group> {
        match s.trim() {
            "am" => Some(Group::Am),
            "pm" => Some(Group::Pm),
            _ => None,
        }
    }
}

/// How sure the author was about an attribute value
/// Deserializes from a JSON number that must be exactly 0, 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "f64")]
pub enum Certainty {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl TryFrom<f64> for Certainty {
    type Error = String;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        match v {
            v if v == 0.0 => Ok(Certainty::Low),
            v if v == 1.0 => Ok(Certainty::Medium),
            v if v == 2.0 => Ok(Certainty::High),
            _ => Err(format!("certainty must be 0, 1 or 2 (got {})", v)),
        }
    }
}

/// The six attributes, in vertex order (top first, then around the hexagon)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeKind {
    Energy,
    Emotion,
    Attention,
    Motivation,
    Engagement,
    Meaning,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; ATTRIBUTE_COUNT] = [
        AttributeKind::Energy,
        AttributeKind::Emotion,
        AttributeKind::Attention,
        AttributeKind::Motivation,
        AttributeKind::Engagement,
        AttributeKind::Meaning,
    ];

    /// Field name used in imported records
    pub fn name(self) -> &'static str {
        match self {
            AttributeKind::Energy => "Energy",
            AttributeKind::Emotion => "Emotion",
            AttributeKind::Attention => "Attention",
            AttributeKind::Motivation => "Motivation",
            AttributeKind::Engagement => "Engagement",
            AttributeKind::Meaning => "Meaning",
        }
    }
}

/// A normalized attribute as carried by a body
#[derive(Clone, Debug, PartialEq)]
pub struct BodyAttribute {
    pub kind: AttributeKind,
    pub value: String,
    /// Per-attribute certainty, falling back to the record's global one
    pub certainty: Option<Certainty>,
}
