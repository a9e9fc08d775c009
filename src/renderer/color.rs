//! RGBA colors as handed to draw sinks

use serde::{Deserialize, Serialize};

/// Linear RGBA color, each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb8(0xff, 0xff, 0xff);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        // from_str_radix would accept a sign
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();

        match digits.len() {
            6 => Some(Self::rgb8(
                channel(digits.get(0..2)?)?,
                channel(digits.get(2..4)?)?,
                channel(digits.get(4..6)?)?,
            )),
            3 => {
                let expand = |s: &str| channel(s).map(|v| v * 17);
                Some(Self::rgb8(
                    expand(digits.get(0..1)?)?,
                    expand(digits.get(1..2)?)?,
                    expand(digits.get(2..3)?)?,
                ))
            }
            _ => None,
        }
    }

    /// Same color with alpha replaced (clamped to [0, 1])
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 0.0 },
            ..self
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
