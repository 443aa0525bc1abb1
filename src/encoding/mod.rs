// src/encoding/mod.rs

//! Encodes a glyph bitmap as a circuit.
//!
//! Each bitmap row below the header band becomes one qubit and each pixel of
//! that row becomes one gate on it: a Hadamard for background, a randomly
//! chosen I, X, Y or Z for ink. Read as "is this cell a Hadamard or not", the
//! diagram reproduces the bitmap.

use crate::circuits::Circuit;
use crate::core::{QubitId, TextCircuitError};
use crate::operations::Gate;
use crate::raster::{GlyphBitmap, Rasterizer};
use log::debug;

/// Returns the index of the first row holding any ink, scanning top-down.
///
/// This is the header offset: the number of leading all-background rows.
/// Returns `None` if the bitmap has no ink at all.
pub fn first_non_background_row(bitmap: &GlyphBitmap) -> Option<usize> {
    (0..bitmap.height()).find(|&row| !bitmap.row_is_background(row))
}

/// Builds circuits from glyph bitmaps.
#[derive(Debug, Default, Clone, Copy)]
pub struct Encoder;

impl Encoder {
    /// Creates a new Encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encodes `bitmap`, rolling a fresh unseeded uniform draw for every ink pixel.
    ///
    /// Encoding the same bitmap twice gives the same gate count and the same
    /// Hadamard positions; only the gate kinds at ink pixels differ.
    pub fn encode(&self, bitmap: &GlyphBitmap) -> Result<Circuit, TextCircuitError> {
        self.encode_with(bitmap, rand::random::<f64>)
    }

    /// Encodes `bitmap`, calling `draw` for a value in `[0, 1)` at each ink pixel.
    ///
    /// # Errors
    /// Returns `TextCircuitError::BlankBitmap` if the bitmap has no ink, since
    /// there would be no row left to assign a qubit to.
    pub fn encode_with<F>(&self, bitmap: &GlyphBitmap, mut draw: F) -> Result<Circuit, TextCircuitError>
    where
        F: FnMut() -> f64,
    {
        let offset = first_non_background_row(bitmap).ok_or(TextCircuitError::BlankBitmap)?;
        let num_qubits = bitmap.height() - offset;
        debug!(
            "Header offset {} of {} rows, encoding {} qubits x {} columns",
            offset,
            bitmap.height(),
            num_qubits,
            bitmap.width()
        );

        let mut circuit = Circuit::with_qubits(num_qubits);
        for r in offset..bitmap.height() {
            let qubit = QubitId(r - offset);
            for c in 0..bitmap.width() {
                let gate = if bitmap.is_ink(r, c) {
                    Gate::from_uniform(draw())
                } else {
                    Gate::BACKGROUND
                };
                circuit.apply(gate, qubit);
            }
        }
        Ok(circuit)
    }

    /// Rasterizes `text` and encodes the result.
    pub fn encode_text(&self, rasterizer: &Rasterizer, text: &str) -> Result<Circuit, TextCircuitError> {
        let bitmap = rasterizer.rasterize(text)?;
        self.encode(&bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GlyphBitmap {
        GlyphBitmap::from_ascii("....\n#.#.\n..##").unwrap()
    }

    #[test]
    fn test_header_offset() {
        assert_eq!(first_non_background_row(&sample()), Some(1));
        let top_ink = GlyphBitmap::from_ascii("#.\n..").unwrap();
        assert_eq!(first_non_background_row(&top_ink), Some(0));
    }

    #[test]
    fn test_header_offset_of_blank_bitmap() {
        assert_eq!(first_non_background_row(&GlyphBitmap::new(3, 4)), None);
        assert_eq!(first_non_background_row(&GlyphBitmap::new(0, 0)), None);
    }

    #[test]
    fn test_sample_bitmap_layout() -> Result<(), TextCircuitError> {
        // Draw cycles through the quartiles so ink gates are predictable.
        let draws = [0.1, 0.3, 0.6, 0.9];
        let mut n = 0;
        let circuit = Encoder::new().encode_with(&sample(), || {
            let u = draws[n % draws.len()];
            n += 1;
            u
        })?;

        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.len(), 8);
        assert_eq!(circuit.wires()[0], vec![Gate::I, Gate::H, Gate::X, Gate::H]);
        assert_eq!(circuit.wires()[1], vec![Gate::H, Gate::H, Gate::Y, Gate::Z]);
        Ok(())
    }

    #[test]
    fn test_gates_follow_row_major_order() -> Result<(), TextCircuitError> {
        let circuit = Encoder::new().encode_with(&sample(), || 0.0)?;
        let targets: Vec<usize> = circuit.operations().iter().map(|op| op.target.index()).collect();
        assert_eq!(targets, vec![0, 0, 0, 0, 1, 1, 1, 1]);
        Ok(())
    }

    #[test]
    fn test_one_draw_per_ink_pixel() -> Result<(), TextCircuitError> {
        let mut calls = 0;
        Encoder::new().encode_with(&sample(), || {
            calls += 1;
            0.5
        })?;
        assert_eq!(calls, 4);
        Ok(())
    }

    #[test]
    fn test_blank_bitmap_is_rejected() {
        let result = Encoder::new().encode(&GlyphBitmap::new(5, 3));
        assert!(matches!(result, Err(TextCircuitError::BlankBitmap)));
    }

    #[test]
    fn test_random_encoding_keeps_structure() -> Result<(), TextCircuitError> {
        let bitmap = sample();
        let encoder = Encoder::new();
        for _ in 0..10 {
            let circuit = encoder.encode(&bitmap)?;
            for (r, wire) in circuit.wires().iter().enumerate() {
                for (c, gate) in wire.iter().enumerate() {
                    assert_eq!(gate.is_background(), !bitmap.is_ink(r + 1, c));
                }
            }
        }
        Ok(())
    }
}
