// src/lib.rs

//! `textcircuit` - Encode short text strings as single-qubit gate circuits
//!
//! Text is rasterized into a monochrome bitmap, every bitmap row becomes a
//! qubit and every pixel becomes a gate: a Hadamard for background, a random
//! I, X, Y or Z for ink. Drawn as a circuit diagram, the Hadamards spell out
//! the text. This is a generative-art encoding, not a quantum algorithm.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod raster;
pub mod encoding;
pub mod validation;
pub mod render;

// Re-export the most common types for easier top-level use
pub use crate::core::{QubitId, TextCircuitError};
pub use crate::operations::{Gate, Operation};
pub use crate::circuits::{Circuit, CircuitBuilder};
pub use crate::raster::{GlyphBitmap, Rasterizer};
pub use crate::encoding::{Encoder, first_non_background_row};
pub use crate::validation::{check_length, join_words, validate_text};
pub use crate::render::{DrawStyle, GateColors, OutputMode, Renderer};

// Example: Encoding a hand-drawn bitmap
// The header row is skipped, the two remaining rows become qubits 0 and 1.
/// ```
/// use textcircuit::{Encoder, Gate, GlyphBitmap, QubitId, TextCircuitError};
///
/// let bitmap = GlyphBitmap::from_ascii("....\n#.#.\n..##").expect("rows have equal length");
/// let circuit = Encoder::new().encode(&bitmap)?;
///
/// assert_eq!(circuit.num_qubits(), 2);
/// let background: Vec<bool> = circuit.gates_on(QubitId(1)).map(|g| g == Gate::H).collect();
/// assert_eq!(background, vec![true, true, false, false]);
/// println!("{}", circuit);
/// # Ok::<(), TextCircuitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
