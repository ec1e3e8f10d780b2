//! RGB colors as used by the Slides API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A color with normalized components in `[0, 1]`.
///
/// Serializes to the Slides API `rgbColor` shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub red: f64,
    #[serde(default)]
    pub green: f64,
    #[serde(default)]
    pub blue: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Color { red, green, blue }
    }

    /// Parses `#RRGGBB` or `RRGGBB`.
    ///
    /// Returns `None` for anything else (wrong length, non-hex digits). Never
    /// returns a partially parsed color.
    pub fn from_hex(input: &str) -> Option<Color> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .ok()
                .map(|v| v as f64 / 255.0)
        };

        Some(Color {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }

    /// Lowercase `#rrggbb`, rounding each component to the nearest byte.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = [self.red, self.green, self.blue].map(round_channel);
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Byte channels, truncating each component (`0.5` becomes 127).
    ///
    /// This is the rule pixel data uses; [`Color::to_hex`] rounds instead.
    pub fn to_rgb_bytes(&self) -> [u8; 3] {
        [self.red, self.green, self.blue].map(truncate_channel)
    }

    /// Wraps the color in the `opaqueColor` envelope used by fills and text styles.
    pub fn to_opaque_color(&self) -> serde_json::Value {
        serde_json::json!({ "rgbColor": self })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn round_channel(component: f64) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub(crate) fn truncate_channel(component: f64) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0) as u8
}
