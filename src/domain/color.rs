//! Attribute -> HSB colour mapping used by the renderer
//!
//! Hue identifies the attribute, saturation the value's intensity word,
//! brightness the certainty. Output is HSB in (360, 100, 100) space.

use super::attributes::{AttributeKind, BodyAttribute, Certainty};

/// [hue, saturation, brightness]
pub type Hsb = [f32; 3];

const DEFAULT_SATURATION: f32 = 80.0;
const DEFAULT_BRIGHTNESS: f32 = 80.0;

pub fn attribute_hue(kind: AttributeKind) -> f32 {
    match kind {
        AttributeKind::Energy => 0.0,
        AttributeKind::Emotion => 30.0,
        AttributeKind::Attention => 60.0,
        AttributeKind::Motivation => 120.0,
        AttributeKind::Engagement => 240.0,
        AttributeKind::Meaning => 280.0,
    }
}

/// Saturation from keywords in the value text (first match wins)
pub fn value_saturation(value: &str) -> f32 {
    let v = value.to_ascii_lowercase();
    if v.contains("high") || v.contains("positive") {
        100.0
    } else if v.contains("medium") || v.contains("neutral") {
        70.0
    } else if v.contains("low") || v.contains("negative") {
        20.0
    } else {
        DEFAULT_SATURATION
    }
}

pub fn certainty_brightness(certainty: Option<Certainty>) -> f32 {
    match certainty {
        Some(Certainty::Low) => 20.0,
        Some(Certainty::Medium) => 70.0,
        Some(Certainty::High) => 100.0,
        None => DEFAULT_BRIGHTNESS,
    }
}

pub fn attribute_color(attr: &BodyAttribute) -> Hsb {
    [
        attribute_hue(attr.kind),
        value_saturation(&attr.value),
        certainty_brightness(attr.certainty),
    ]
}
