// src/operations/mod.rs

//! Defines the gate kinds and the single-qubit operation that make up an
//! encoded circuit.
//!
//! Every bitmap pixel becomes exactly one operation. Background pixels always
//! become a Hadamard; ink pixels become one of the four Pauli-family gates
//! picked at random.

use crate::core::QubitId;
use std::fmt;
use std::str::FromStr;

/// A single-qubit gate kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gate {
    /// Hadamard. Emitted for every background pixel.
    H,
    /// Identity
    I,
    /// Pauli X
    X,
    /// Pauli Y
    Y,
    /// Pauli Z
    Z,
}

impl Gate {
    /// The fixed gate used for background pixels.
    pub const BACKGROUND: Gate = Gate::H;

    /// The alternatives for ink pixels, in quartile order.
    pub const INK: [Gate; 4] = [Gate::I, Gate::X, Gate::Y, Gate::Z];

    /// All gate kinds, background gate first.
    pub const ALL: [Gate; 5] = [Gate::H, Gate::I, Gate::X, Gate::Y, Gate::Z];

    /// Maps a uniform draw from `[0, 1)` onto one of the four ink gates.
    ///
    /// The interval is split into four equal quartiles: `[0, .25)` is `I`,
    /// `[.25, .5)` is `X`, `[.5, .75)` is `Y` and `[.75, 1)` is `Z`. Values
    /// outside the interval fall into the nearest quartile.
    pub fn from_uniform(u: f64) -> Gate {
        if u < 0.25 {
            Gate::I
        } else if u < 0.5 {
            Gate::X
        } else if u < 0.75 {
            Gate::Y
        } else {
            Gate::Z
        }
    }

    /// Returns `true` for the background gate.
    pub fn is_background(&self) -> bool {
        *self == Gate::BACKGROUND
    }

    /// Short diagram label
    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::H => "H",
            Gate::I => "I",
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Failed to parse a gate name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGate(pub String);

impl fmt::Display for UnknownGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown gate `{}`, use one of `h`, `id`, `x`, `y` or `z`", self.0)
    }
}

impl std::error::Error for UnknownGate {}

impl FromStr for Gate {
    type Err = UnknownGate;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val.to_ascii_lowercase().as_str() {
            "h" => Ok(Gate::H),
            "i" | "id" => Ok(Gate::I),
            "x" => Ok(Gate::X),
            "y" => Ok(Gate::Y),
            "z" => Ok(Gate::Z),
            _ => Err(UnknownGate(val.to_string())),
        }
    }
}

/// A gate applied to one qubit.
///
/// Circuits built from text carry nothing but these: no multi-qubit gates and
/// no measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    /// The gate kind.
    pub gate: Gate,
    /// The qubit the gate acts on.
    pub target: QubitId,
}

impl Operation {
    /// Creates an operation applying `gate` to `target`.
    pub fn new(gate: Gate, target: QubitId) -> Self {
        Self { gate, target }
    }

    /// Returns the qubit this operation acts on.
    pub fn involved_qubit(&self) -> QubitId {
        self.target
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.gate, self.target)
    }
}
