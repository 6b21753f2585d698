use crate::foundation::error::{ForgeError, ForgeResult};

/// Factor used by [`Rgba8::darken`] call sites that have no opinion.
pub const DEFAULT_DARKEN: f64 = 0.6;
/// Factor used by [`Rgba8::lighten`] call sites that have no opinion.
pub const DEFAULT_LIGHTEN: f64 = 1.4;

/// Straight (non-premultiplied) RGBA8 color.
///
/// Colors are plain values: [`Rgba8::darken`], [`Rgba8::lighten`] and
/// [`Rgba8::with_alpha`] return new colors and never touch the receiver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is fully opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with an explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same RGB with a replaced alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(hex: &str) -> ForgeResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ForgeError::configuration(format!(
                "hex color '{hex}' must have 6 or 8 hex digits"
            )));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ForgeError::configuration(format!("invalid hex color '{hex}'")))
        };

        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Scale RGB by `factor` (expected in `[0, 1]`), truncating toward zero.
    pub fn darken(self, factor: f64) -> Self {
        self.scale_rgb(factor)
    }

    /// Scale RGB by `factor` (expected `>= 1`), saturating at 255.
    pub fn lighten(self, factor: f64) -> Self {
        self.scale_rgb(factor)
    }

    fn scale_rgb(self, factor: f64) -> Self {
        let factor = if factor.is_finite() { factor.max(0.0) } else { 1.0 };
        let scale = |c: u8| (f64::from(c) * factor).floor().clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// Channels in `[r, g, b, a]` order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// True when alpha is 255.
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl From<[u8; 3]> for Rgba8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        c.to_array()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
