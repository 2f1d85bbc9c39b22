use std::fmt;
use std::sync::Arc;

/// Error returned by [`Typeface::from_bytes`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Ink bounding box of a run of text, in whole pixels.
///
/// Coordinates are relative to the pen origin on the baseline: `top` is
/// negative for glyphs rising above the baseline.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    #[inline]
    pub fn width(self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    fn union(self, other: TextBounds) -> TextBounds {
        if self.is_empty() {
            return other;
        }
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A rasterized glyph placed relative to the baseline origin.
#[derive(Debug, Clone)]
pub struct Glyph {
    /// Left edge of the bitmap relative to the origin.
    pub x: i32,
    /// Top edge of the bitmap relative to the baseline (negative = above).
    pub y: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, one byte per pixel.
    pub coverage: Vec<u8>,
}

/// Shared handle to a parsed font.
///
/// Cloning is cheap; the parsed font is immutable and reference counted so
/// a face cache and its owning clock can hold the same typeface.
#[derive(Clone)]
pub struct Typeface {
    font: Arc<fontdue::Font>,
}

impl Typeface {
    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self { font: Arc::new(font) })
    }

    /// Tight ink bounds of `text` at `size` pixels.
    ///
    /// Glyphs without ink (spaces) advance the pen but do not extend the box.
    #[must_use]
    pub fn text_bounds(&self, text: &str, size: f32) -> TextBounds {
        if size <= 0.0 {
            return TextBounds::default();
        }

        let mut pen = 0.0f32;
        let mut bounds = TextBounds::default();
        for ch in text.chars() {
            let m = self.font.metrics(ch, size);
            if m.width > 0 && m.height > 0 {
                let left = pen.round() as i32 + m.xmin;
                let bottom = -m.ymin;
                bounds = bounds.union(TextBounds {
                    left,
                    top: bottom - m.height as i32,
                    right: left + m.width as i32,
                    bottom,
                });
            }
            pen += m.advance_width;
        }
        bounds
    }

    /// Rasterizes `text` at `size` pixels, one entry per inked glyph.
    #[must_use]
    pub fn glyphs(&self, text: &str, size: f32) -> Vec<Glyph> {
        if size <= 0.0 {
            return Vec::new();
        }

        let mut pen = 0.0f32;
        let mut out = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let (m, coverage) = self.font.rasterize(ch, size);
            if m.width > 0 && m.height > 0 {
                out.push(Glyph {
                    x: pen.round() as i32 + m.xmin,
                    y: -(m.ymin + m.height as i32),
                    width: m.width,
                    height: m.height,
                    coverage,
                });
            }
            pen += m.advance_width;
        }
        out
    }
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typeface")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}
