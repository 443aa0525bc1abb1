// src/render/mod.rs

//! Draws circuits as diagrams and writes them to disk.
//!
//! Two output modes are supported: a PNG image with one colored box per gate,
//! and the text diagram provided by [`Circuit`]'s `Display`. Both wrap into
//! bands every `fold` gate columns.

mod png;
mod style;

pub use style::{DrawStyle, GateColors, OutputMode, OutputModeError, parse_color, parse_gate_color};

use crate::circuits::Circuit;
use crate::core::TextCircuitError;
use fontdue::Font;
use image::{ImageFormat, RgbImage};
use log::info;
use std::path::Path;

/// Renders circuits with a fixed style.
pub struct Renderer<'f> {
    style: DrawStyle,
    font: Option<&'f Font>,
}

impl<'f> Renderer<'f> {
    /// Creates a renderer that draws unlabeled gate boxes.
    pub fn new(style: DrawStyle) -> Self {
        Self { style, font: None }
    }

    /// Labels gates and qubits using `font`.
    pub fn with_font(mut self, font: &'f Font) -> Self {
        self.font = Some(font);
        self
    }

    /// The style this renderer draws with.
    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    /// Draws `circuit` into an image.
    pub fn draw(&self, circuit: &Circuit) -> Result<RgbImage, TextCircuitError> {
        self.style.validate()?;
        png::draw(circuit, &self.style, self.font)
    }

    /// Produces the text diagram of `circuit`, folded like the image would be.
    pub fn draw_text(&self, circuit: &Circuit) -> Result<String, TextCircuitError> {
        self.style.validate()?;
        Ok(circuit.text_diagram(self.style.fold).to_string())
    }

    /// Draws `circuit` in the configured output mode and writes it to `path`.
    ///
    /// # Errors
    /// * `TextCircuitError::InvalidStyle` if the style has a zero DPI or fold,
    ///   or the image would exceed the pixel budget.
    /// * `TextCircuitError::Render` if the file cannot be encoded or written.
    pub fn save(&self, circuit: &Circuit, path: impl AsRef<Path>) -> Result<(), TextCircuitError> {
        let path = path.as_ref();
        match self.style.mode {
            OutputMode::Png => {
                let img = self.draw(circuit)?;
                img.save_with_format(path, ImageFormat::Png)?;
                info!("Wrote {}x{} diagram to {}", img.width(), img.height(), path.display());
            }
            OutputMode::Text => {
                std::fs::write(path, self.draw_text(circuit)?)?;
                info!("Wrote text diagram to {}", path.display());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;
    use crate::core::QubitId;
    use crate::operations::Gate;

    fn small_circuit() -> Circuit {
        CircuitBuilder::new()
            .gate(Gate::H, QubitId(0))
            .gate(Gate::X, QubitId(0))
            .gate(Gate::H, QubitId(1))
            .gate(Gate::H, QubitId(1))
            .build()
    }

    #[test]
    fn test_invalid_style_is_reported() {
        let renderer = Renderer::new(DrawStyle { dpi: 0, ..DrawStyle::default() });
        assert!(matches!(renderer.draw(&small_circuit()), Err(TextCircuitError::InvalidStyle { .. })));
    }

    #[test]
    fn test_huge_dpi_is_rejected_before_allocating() {
        let circuit = CircuitBuilder::new().gate(Gate::H, QubitId(0)).build();
        let renderer = Renderer::new(DrawStyle { dpi: u32::MAX, ..DrawStyle::default() });
        assert!(matches!(renderer.draw(&circuit), Err(TextCircuitError::InvalidStyle { .. })));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.png");
        assert!(renderer.save(&circuit, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_text_mode_folds() -> Result<(), TextCircuitError> {
        let renderer = Renderer::new(DrawStyle { mode: OutputMode::Text, fold: 1, ..DrawStyle::default() });
        let text = renderer.draw_text(&small_circuit())?;
        assert_eq!(text, small_circuit().text_diagram(1).to_string());
        assert_eq!(text.lines().filter(|l| l.starts_with("q0: ")).count(), 2);
        Ok(())
    }
}
