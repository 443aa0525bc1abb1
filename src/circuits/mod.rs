// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! single-qubit operations (`textcircuit::operations::Operation`).
//!
//! A `Circuit` is append-only. Since every operation touches a single qubit,
//! the k-th gate on each qubit lines up in column k of the diagram, so a
//! circuit encoded from a bitmap reads back as that bitmap.

use crate::core::QubitId;
use crate::operations::{Gate, Operation};
use std::fmt;

/// Represents an ordered sequence of operations applied to a register of qubits.
///
/// Analogy: Similar to `qiskit.QuantumCircuit` restricted to single-qubit gates.
#[derive(Clone, PartialEq, Eq)]
pub struct Circuit {
    /// Size of the register. Grows when an operation targets a qubit past the end.
    num_qubits: usize,

    /// The ordered sequence of operations.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit with no qubits.
    pub fn new() -> Self {
        Self::with_qubits(0)
    }

    /// Creates a new, empty circuit over a register of `num_qubits` qubits.
    pub fn with_qubits(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            operations: Vec::new(),
        }
    }

    /// Adds a single operation to the end of the circuit's sequence.
    ///
    /// The register is extended if `op` targets a qubit beyond its current size.
    pub fn add_operation(&mut self, op: Operation) {
        self.num_qubits = self.num_qubits.max(op.involved_qubit().index() + 1);
        self.operations.push(op);
    }

    /// Adds multiple operations from an iterator to the end of the circuit's sequence.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op);
        }
    }

    /// Applies `gate` to `target`.
    pub fn apply(&mut self, gate: Gate, target: QubitId) {
        self.add_operation(Operation::new(gate, target));
    }

    /// Number of qubits in the register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Returns a slice containing the ordered sequence of operations in this circuit.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the total number of operations defined in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// The gates applied to `qubit`, in order.
    pub fn gates_on(&self, qubit: QubitId) -> impl Iterator<Item = Gate> + '_ {
        self.operations
            .iter()
            .filter(move |op| op.target == qubit)
            .map(|op| op.gate)
    }

    /// Per-qubit gate sequences, indexed by qubit.
    ///
    /// Qubits without operations yield an empty row.
    pub fn wires(&self) -> Vec<Vec<Gate>> {
        let mut wires = vec![Vec::new(); self.num_qubits];
        for op in &self.operations {
            wires[op.target.index()].push(op.gate);
        }
        wires
    }

    /// Length of the longest per-qubit gate sequence.
    pub fn depth(&self) -> usize {
        self.wires().iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Counts how often each gate kind occurs, in `Gate::ALL` order.
    pub fn gate_counts(&self) -> [(Gate, usize); 5] {
        Gate::ALL.map(|gate| (gate, self.operations.iter().filter(|op| op.gate == gate).count()))
    }

    /// Returns a text diagram that wraps every `fold` columns.
    pub fn text_diagram(&self, fold: usize) -> TextDiagram<'_> {
        TextDiagram {
            circuit: self,
            fold: Some(fold),
        }
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances using method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self {
            circuit: Circuit::new(),
        }
    }

    /// Creates a builder over a register of `num_qubits` qubits.
    pub fn with_qubits(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::with_qubits(num_qubits),
        }
    }

    /// Adds a single operation to the circuit being built.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations from an iterator to the circuit being built.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Applies `gate` to `target` in the circuit being built.
    pub fn gate(self, gate: Gate, target: QubitId) -> Self {
        self.add_op(Operation::new(gate, target))
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Text diagram
//-------------------------------------------------------------------------

const GATE_WIDTH: usize = 3; // e.g. "─H─"
const H_WIRE: char = '─';

/// Wire-and-box text rendering of a circuit, optionally folded into bands.
pub struct TextDiagram<'a> {
    circuit: &'a Circuit,
    fold: Option<usize>,
}

fn format_gate(symbol: &str) -> String {
    let slen = symbol.chars().count();
    if slen >= GATE_WIDTH {
        symbol.chars().take(GATE_WIDTH).collect()
    } else {
        let total_dashes = GATE_WIDTH - slen;
        let pre_dashes = total_dashes / 2;
        let post_dashes = total_dashes - pre_dashes;
        format!(
            "{}{}{}",
            H_WIRE.to_string().repeat(pre_dashes),
            symbol,
            H_WIRE.to_string().repeat(post_dashes)
        )
    }
}

impl fmt::Display for TextDiagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let circuit = self.circuit;
        writeln!(
            f,
            "textcircuit::Circuit[{} operations on {} qubits]",
            circuit.len(),
            circuit.num_qubits()
        )?;
        if circuit.num_qubits() == 0 {
            return Ok(());
        }

        let wires = circuit.wires();
        let depth = wires.iter().map(Vec::len).max().unwrap_or(0);
        let fold = self.fold.unwrap_or(depth).max(1);

        let labels: Vec<String> = (0..wires.len()).map(|q| format!("{}: ", QubitId(q))).collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);
        let wire = H_WIRE.to_string().repeat(GATE_WIDTH);

        let mut start = 0;
        loop {
            let end = (start + fold).min(depth);
            for (label, gates) in labels.iter().zip(&wires) {
                write!(f, "{:<width$}", label, width = label_width)?;
                for column in start..end {
                    match gates.get(column) {
                        Some(gate) => write!(f, "{}", format_gate(gate.symbol()))?,
                        None => write!(f, "{}", wire)?,
                    }
                }
                writeln!(f)?;
            }
            if end >= depth {
                break;
            }
            writeln!(f)?;
            start = end;
        }
        Ok(())
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&TextDiagram { circuit: self, fold: None }, f)
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(index: usize) -> QubitId {
        QubitId(index)
    }

    #[test]
    fn test_register_grows_with_targets() {
        let mut circuit = Circuit::new();
        circuit.apply(Gate::H, q(2));
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.len(), 1);

        let op = Operation::new(Gate::Z, q(5));
        assert_eq!(op.involved_qubit(), q(5));
        circuit.add_operation(op);
        assert_eq!(circuit.num_qubits(), 6);

        let circuit = Circuit::with_qubits(4);
        assert_eq!(circuit.num_qubits(), 4);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_wires_keep_per_qubit_order() {
        let circuit = CircuitBuilder::new()
            .gate(Gate::H, q(0))
            .gate(Gate::X, q(1))
            .gate(Gate::Z, q(0))
            .build();

        assert_eq!(circuit.wires(), vec![vec![Gate::H, Gate::Z], vec![Gate::X]]);
        assert_eq!(circuit.gates_on(q(0)).collect::<Vec<_>>(), vec![Gate::H, Gate::Z]);
        assert_eq!(circuit.depth(), 2);
    }

    #[test]
    fn test_gate_counts() {
        let circuit = CircuitBuilder::new()
            .gate(Gate::H, q(0))
            .gate(Gate::H, q(1))
            .gate(Gate::Y, q(1))
            .build();
        let counts = circuit.gate_counts();
        assert_eq!(counts[0], (Gate::H, 2));
        assert_eq!(counts[3], (Gate::Y, 1));
        assert_eq!(counts[4], (Gate::Z, 0));
    }

    #[test]
    fn test_display_lines_up_columns() {
        let circuit = CircuitBuilder::new()
            .gate(Gate::X, q(0))
            .gate(Gate::H, q(0))
            .gate(Gate::H, q(1))
            .build();
        let text = circuit.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "textcircuit::Circuit[3 operations on 2 qubits]");
        assert_eq!(lines[1], "q0: ─X──H─");
        assert_eq!(lines[2], "q1: ─H────");
    }

    #[test]
    fn test_folded_diagram_splits_into_bands() {
        let circuit = CircuitBuilder::new()
            .gate(Gate::H, q(0))
            .gate(Gate::I, q(0))
            .gate(Gate::Z, q(0))
            .build();
        let text = circuit.text_diagram(2).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "q0: ─H──I─");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "q0: ─Z─");
    }

    #[test]
    fn test_empty_circuit_display() {
        assert_eq!(Circuit::new().to_string(), "textcircuit::Circuit[0 operations on 0 qubits]\n");
    }
}
