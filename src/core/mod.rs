// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod qubit;
pub mod constants;

pub use error::TextCircuitError;
pub use qubit::QubitId;
pub use constants::defaults;
