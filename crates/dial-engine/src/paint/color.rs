use std::fmt;
use std::str::FromStr;

/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_premul(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color::from_premul(1.0, 0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::from_premul(1.0, 1.0, 0.0, 1.0);

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components in `[0, 1]`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Creates a color from a packed `0xRRGGBBAA` word, straight alpha.
    ///
    /// This is the form hosts hand over for the face color attribute.
    #[inline]
    pub fn from_rgba_u32(rgba: u32) -> Self {
        let [r, g, b, a] = rgba.to_be_bytes();
        Self::from_srgb_u8(r, g, b, a)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let word = u32::from_str_radix(hex, 16).map_err(|_| ColorParseError(s.to_owned()))?;
        match hex.len() {
            6 => Ok(Self::from_rgba_u32((word << 8) | 0xff)),
            8 => Ok(Self::from_rgba_u32(word)),
            _ => Err(ColorParseError(s.to_owned())),
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha sRGB bytes, rounded.
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }

    /// Scales every channel by `k`, which keeps the color premultiplied.
    #[inline]
    #[must_use]
    pub fn scaled(self, k: f32) -> Self {
        Self { r: self.r * k, g: self.g * k, b: self.b * k, a: self.a * k }
    }

    /// Source-over composition of `self` on top of `dst`.
    #[inline]
    #[must_use]
    pub fn over(self, dst: Color) -> Self {
        let inv = 1.0 - self.a;
        Self {
            r: self.r + dst.r * inv,
            g: self.g + dst.g * inv,
            b: self.b + dst.b * inv,
            a: self.a + dst.a * inv,
        }
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

/// Error returned when a color string is not `#RRGGBB` / `#RRGGBBAA`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: expected #RRGGBB or #RRGGBBAA", self.0)
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_word_is_rrggbbaa() {
        let c = Color::from_rgba_u32(0xff00_00ff);
        assert_eq!(c, Color::RED);
        assert_eq!(Color::from_rgba_u32(0), Color::TRANSPARENT);
    }

    #[test]
    fn hex_without_alpha_is_opaque() {
        assert_eq!(Color::parse_hex("#ffff00").unwrap(), Color::YELLOW);
        assert_eq!("ffffffff".parse::<Color>().unwrap(), Color::WHITE);
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert!(Color::parse_hex("#fff").is_err());
        assert!(Color::parse_hex("#gg0000").is_err());
        assert!(Color::parse_hex("").is_err());
    }

    #[test]
    fn srgb_bytes_round_trip_through_premul() {
        let c = Color::from_srgb_u8(10, 200, 30, 128);
        assert_eq!(c.to_srgb_u8(), [10, 200, 30, 128]);
    }

    #[test]
    fn over_opaque_source_replaces_destination() {
        assert_eq!(Color::RED.over(Color::WHITE), Color::RED);
        assert_eq!(Color::TRANSPARENT.over(Color::WHITE), Color::WHITE);
    }
}
