// src/raster/bitmap.rs

use std::fmt;

/// A monochrome pixel grid of rendered text.
///
/// Row-major, row 0 is the top scanline. A pixel is either ink (`true`, part
/// of a glyph) or background (`false`). Both the header scan and gate emission
/// read pixels through [`GlyphBitmap::is_ink`], so there is exactly one
/// polarity convention.
#[derive(Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl GlyphBitmap {
    /// Creates an all-background bitmap of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Builds a bitmap from rows of pixels, top row first.
    ///
    /// Returns `None` if the rows differ in length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut pixels = Vec::with_capacity(width * rows.len());
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return None;
            }
            pixels.extend_from_slice(row);
        }
        Some(Self {
            width,
            height: rows.len(),
            pixels,
        })
    }

    /// Parses a picture where `#` marks ink and any other character marks
    /// background, one line per row.
    ///
    /// Returns `None` if the lines differ in length.
    pub fn from_ascii(picture: &str) -> Option<Self> {
        let rows: Vec<Vec<bool>> = picture
            .lines()
            .map(|line| line.chars().map(|c| c == '#').collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the pixel at `(row, column)` is ink.
    ///
    /// Pixels outside the grid read as background.
    pub fn is_ink(&self, row: usize, column: usize) -> bool {
        row < self.height && column < self.width && self.pixels[row * self.width + column]
    }

    /// Sets the pixel at `(row, column)`. Writes outside the grid are ignored.
    pub fn set_ink(&mut self, row: usize, column: usize, ink: bool) {
        if row < self.height && column < self.width {
            self.pixels[row * self.width + column] = ink;
        }
    }

    /// The pixels of one row.
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // `chunks` panics on zero; a zero-width bitmap has no pixels to yield anyway
        self.pixels.chunks(self.width.max(1))
    }

    /// Returns `true` if no pixel in `row` is ink.
    pub fn row_is_background(&self, row: usize) -> bool {
        !self.row(row).iter().any(|&ink| ink)
    }

    /// Number of ink pixels in the whole grid.
    pub fn ink_count(&self) -> usize {
        self.pixels.iter().filter(|&&ink| ink).count()
    }
}

impl fmt::Display for GlyphBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &ink in row {
                f.write_str(if ink { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for GlyphBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GlyphBitmap[{}x{}]", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}
