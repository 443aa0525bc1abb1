// src/raster/mod.rs

//! Turns text into a [`GlyphBitmap`] using an outline font.
//!
//! Glyphs are laid out on a single line whose top edge is the font's ascender,
//! so the bitmap usually starts with a few blank rows above the tallest glyph.
//! Those rows become the header band the encoder skips.

mod bitmap;

pub use bitmap::GlyphBitmap;

use crate::core::{TextCircuitError, defaults};
use crate::validation::check_length;
use fontdue::{Font, FontSettings};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Rasterizes text at a fixed pixel size.
pub struct Rasterizer {
    font: Font,
    px: f32,
    threshold: u8,
    max_length: usize,
}

/// A rasterized glyph positioned on the canvas.
struct PlacedGlyph {
    left: i32,
    top: i32,
    width: usize,
    height: usize,
    coverage: Vec<u8>,
}

impl Rasterizer {
    /// Loads the font at `path` and prepares to rasterize at `px` pixels.
    ///
    /// # Errors
    /// Returns `TextCircuitError::FontUnavailable` if the file cannot be read
    /// or is not a font fontdue can parse.
    pub fn from_file(path: impl AsRef<Path>, px: f32) -> Result<Self, TextCircuitError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| TextCircuitError::FontUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let rasterizer = Self::parse(data, px, path.to_path_buf())?;
        info!("Loaded font {} at {}px", path.display(), px);
        Ok(rasterizer)
    }

    /// Parses an in-memory font.
    pub fn from_bytes(data: &[u8], px: f32) -> Result<Self, TextCircuitError> {
        Self::parse(data, px, PathBuf::from("<memory>"))
    }

    fn parse<D>(data: D, px: f32, origin: PathBuf) -> Result<Self, TextCircuitError>
    where
        D: std::ops::Deref<Target = [u8]>,
    {
        let settings = FontSettings {
            scale: px,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(data, settings).map_err(|e| TextCircuitError::FontUnavailable {
            path: origin,
            reason: e.to_string(),
        })?;
        Ok(Self {
            font,
            px,
            threshold: defaults::INK_THRESHOLD,
            max_length: defaults::MAX_TEXT_LENGTH,
        })
    }

    /// Sets the coverage at or above which a pixel counts as ink.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the longest text accepted by [`Rasterizer::rasterize`].
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Pixel size the text is rendered at.
    pub fn px(&self) -> f32 {
        self.px
    }

    /// The loaded font, for drawing labels with the same face.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Renders `text` into a bitmap exactly large enough to hold it.
    ///
    /// The width covers the pen advance of the whole string and any ink past
    /// it. The height reaches from the ascender line to the lowest ink pixel,
    /// and is at least the ascent.
    ///
    /// # Errors
    /// * `TextCircuitError::NoInput` if `text` is empty.
    /// * `TextCircuitError::InputTooLong` if `text` exceeds the maximum length.
    ///   This is checked before anything is rasterized.
    pub fn rasterize(&self, text: &str) -> Result<GlyphBitmap, TextCircuitError> {
        if text.is_empty() {
            return Err(TextCircuitError::NoInput);
        }
        check_length(text, Some(self.max_length))?;

        let ascent = self
            .font
            .horizontal_line_metrics(self.px)
            .map(|m| m.ascent)
            .unwrap_or(self.px);
        let baseline = ascent.round() as i32;

        let mut glyphs = Vec::with_capacity(text.len());
        let mut pen_x = 0.0f32;
        let mut previous: Option<char> = None;
        for ch in text.chars() {
            if let Some(kern) = previous.and_then(|p| self.font.horizontal_kern(p, ch, self.px)) {
                pen_x += kern;
            }
            if !self.font.has_glyph(ch) {
                debug!("No glyph for {:?}, drawing the fallback glyph", ch);
            }
            let (metrics, coverage) = self.font.rasterize(ch, self.px);
            glyphs.push(PlacedGlyph {
                left: pen_x.round() as i32 + metrics.xmin,
                top: baseline - metrics.ymin - metrics.height as i32,
                width: metrics.width,
                height: metrics.height,
                coverage,
            });
            pen_x += metrics.advance_width;
            previous = Some(ch);
        }

        let bitmap = compose(&glyphs, pen_x, ascent, self.threshold);
        debug!(
            "Rasterized {:?} into {}x{} pixels ({} ink)",
            text,
            bitmap.width(),
            bitmap.height(),
            bitmap.ink_count()
        );
        Ok(bitmap)
    }
}

/// Lays `glyphs` onto a canvas exactly large enough to hold them.
///
/// The width is the larger of the pen `advance` and the rightmost ink column.
/// The height is the larger of `ascent` and the lowest ink row. Ink left of
/// column 0 or above row 0 is clipped.
fn compose(glyphs: &[PlacedGlyph], advance: f32, ascent: f32, threshold: u8) -> GlyphBitmap {
    let ink_right = glyphs.iter().map(|g| g.left + g.width as i32).max().unwrap_or(0);
    let ink_bottom = glyphs.iter().map(|g| g.top + g.height as i32).max().unwrap_or(0);
    let width = (advance.ceil() as i32).max(ink_right).max(1) as usize;
    let height = (ascent.ceil() as i32).max(ink_bottom).max(1) as usize;

    let mut bitmap = GlyphBitmap::new(width, height);
    for glyph in glyphs {
        composite(&mut bitmap, glyph, threshold);
    }
    bitmap
}

fn composite(bitmap: &mut GlyphBitmap, glyph: &PlacedGlyph, threshold: u8) {
    if glyph.width == 0 {
        return;
    }
    for (y, row) in glyph.coverage.chunks(glyph.width).enumerate() {
        let r = glyph.top + y as i32;
        if r < 0 {
            continue;
        }
        for (x, &value) in row.iter().enumerate() {
            let c = glyph.left + x as i32;
            if c >= 0 && value >= threshold {
                bitmap.set_ink(r as usize, c as usize, true);
            }
        }
    }
}
