//! Concrete colors behind the palette tokens.

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create from a hex string (`"#3b82f6"` or `"3b82f6"`, optionally with alpha).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range).and_then(|s| u8::from_str_radix(s, 16).ok())
        };
        match hex.len() {
            6 => Some(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => {
                let mut color = Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?);
                color.a = channel(6..8)? as f32 / 255.0;
                Some(color)
            }
            _ => None,
        }
    }

    /// Convert to an 8-bit RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b), q(self.a))
    }

    /// Lowercase `#rrggbb` form, alpha dropped.
    pub fn to_hex(&self) -> String {
        let (r, g, b, _) = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// CSS color value; `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            return self.to_hex();
        }
        let (r, g, b, _) = self.to_rgba8();
        format!("rgba({}, {}, {}, {})", r, g, b, self.a)
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
