//! Clock configuration supplied once at construction.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use dial_engine::paint::Color;
use dial_engine::text::Typeface;

const ROMAN_NUMERALS: [&str; 12] = [
    "XII", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI",
];

/// How the twelve hour labels are written.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum NumeralStyle {
    #[default]
    Arabic,
    Roman,
}

impl NumeralStyle {
    /// Maps the host's enumerated attribute: `1` is roman, anything else arabic.
    pub fn from_attr(value: i32) -> Self {
        if value == 1 { Self::Roman } else { Self::Arabic }
    }

    /// Label for dial position `index` (0 = twelve o'clock, clockwise).
    pub fn label(self, index: usize) -> Cow<'static, str> {
        let hour = index % 12;
        match self {
            Self::Roman => Cow::Borrowed(ROMAN_NUMERALS[hour]),
            Self::Arabic if hour == 0 => Cow::Borrowed("12"),
            Self::Arabic => Cow::Owned(hour.to_string()),
        }
    }
}

impl FromStr for NumeralStyle {
    type Err = UnknownNumeralStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arabic" | "0" => Ok(Self::Arabic),
            "roman" | "1" => Ok(Self::Roman),
            _ => Err(UnknownNumeralStyle(s.to_owned())),
        }
    }
}

/// Error returned when a numeral style name is not recognized.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownNumeralStyle(pub String);

impl fmt::Display for UnknownNumeralStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown numeral style {:?}: expected arabic or roman", self.0)
    }
}

impl std::error::Error for UnknownNumeralStyle {}

/// Immutable clock configuration.
///
/// # Example
/// ```rust,ignore
/// const FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
///
/// let config = ClockConfig::new()
///     .numerals(NumeralStyle::Roman)
///     .face_color(Color::from_rgba_u32(0x202840ff))
///     .typeface(Typeface::from_bytes(FONT)?);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClockConfig {
    numerals: NumeralStyle,
    face_color: Color,
    typeface: Option<Typeface>,
}

impl ClockConfig {
    /// Arabic numerals on a transparent face, no typeface.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn numerals(mut self, v: NumeralStyle) -> Self { self.numerals = v; self }
    pub fn face_color(mut self, v: Color) -> Self { self.face_color = v; self }
    pub fn typeface(mut self, v: Typeface) -> Self { self.typeface = Some(v); self }

    #[inline]
    pub fn numeral_style(&self) -> NumeralStyle {
        self.numerals
    }

    #[inline]
    pub fn face(&self) -> Color {
        self.face_color
    }

    #[inline]
    pub fn font(&self) -> Option<&Typeface> {
        self.typeface.as_ref()
    }
}
