// src/core/qubit.rs

use std::fmt;

/// Index of a qubit within a circuit's register.
///
/// Qubits are numbered from the top of the diagram: qubit 0 is the first
/// bitmap row below the header band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub usize);

impl QubitId {
    /// Gets the numeric index of this qubit.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for QubitId {
    fn from(index: usize) -> Self {
        QubitId(index)
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}
