// src/render/style.rs

use crate::core::{TextCircuitError, defaults};
use crate::operations::Gate;
use image::Rgb;
use std::fmt;
use std::str::FromStr;

/// The format to write the diagram in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// A PNG image
    #[default]
    Png,
    /// A wire-and-box text drawing
    Text,
}

#[derive(Debug)]
/// Failed to parse an output mode name
pub struct OutputModeError {}

impl fmt::Display for OutputModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Use one of `png` or `text`")
    }
}

impl std::error::Error for OutputModeError {}

impl FromStr for OutputMode {
    type Err = OutputModeError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "png" | "mpl" => Ok(Self::Png),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(OutputModeError {}),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => write!(f, "png"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Parses a `#RRGGBB` (or `RRGGBB`) hex color.
pub fn parse_color(value: &str) -> Result<Rgb<u8>, TextCircuitError> {
    let invalid = || TextCircuitError::InvalidStyle {
        message: format!("`{}` is not a #RRGGBB color", value),
    };
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Parses a `GATE=#RRGGBB` color assignment such as `x=#33B1FF`.
pub fn parse_gate_color(value: &str) -> Result<(Gate, Rgb<u8>), TextCircuitError> {
    let (name, color) = value.split_once('=').ok_or_else(|| TextCircuitError::InvalidStyle {
        message: format!("`{}` is not a GATE=#RRGGBB assignment", value),
    })?;
    let gate = name
        .trim()
        .parse::<Gate>()
        .map_err(|err| TextCircuitError::InvalidStyle { message: err.to_string() })?;
    Ok((gate, parse_color(color.trim())?))
}

/// Display color of each gate kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateColors {
    /// Background gate
    pub h: Rgb<u8>,
    /// Identity
    pub i: Rgb<u8>,
    /// Pauli X
    pub x: Rgb<u8>,
    /// Pauli Y
    pub y: Rgb<u8>,
    /// Pauli Z
    pub z: Rgb<u8>,
}

impl GateColors {
    /// Looks up the fill color for `gate`.
    pub fn color(&self, gate: Gate) -> Rgb<u8> {
        match gate {
            Gate::H => self.h,
            Gate::I => self.i,
            Gate::X => self.x,
            Gate::Y => self.y,
            Gate::Z => self.z,
        }
    }

    /// Replaces the fill color of `gate`.
    pub fn set(&mut self, gate: Gate, color: Rgb<u8>) {
        match gate {
            Gate::H => self.h = color,
            Gate::I => self.i = color,
            Gate::X => self.x = color,
            Gate::Y => self.y = color,
            Gate::Z => self.z = color,
        }
    }

    /// Parses the five default colors.
    fn from_defaults() -> Result<Self, TextCircuitError> {
        Ok(Self {
            h: parse_color(defaults::H_COLOR)?,
            i: parse_color(defaults::I_COLOR)?,
            x: parse_color(defaults::X_COLOR)?,
            y: parse_color(defaults::Y_COLOR)?,
            z: parse_color(defaults::Z_COLOR)?,
        })
    }
}

impl Default for GateColors {
    fn default() -> Self {
        // The defaults are literals checked by `test_default_colors_parse`
        Self::from_defaults().unwrap_or(Self {
            h: Rgb([0xA5, 0x14, 0x17]),
            i: Rgb([0xF0, 0xF0, 0xF0]),
            x: Rgb([0xF0, 0xF0, 0xF0]),
            y: Rgb([0xF0, 0xF0, 0xF0]),
            z: Rgb([0xF0, 0xF0, 0xF0]),
        })
    }
}

/// Settings for drawing a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawStyle {
    /// Output format
    pub mode: OutputMode,
    /// Resolution in dots per inch. Scales every length in the image.
    pub dpi: u32,
    /// Gate columns per band before the diagram wraps.
    pub fold: usize,
    /// Per-gate fill colors
    pub colors: GateColors,
}

impl DrawStyle {
    /// Rejects settings that cannot produce a diagram. Image size limits are
    /// checked when drawing, since they depend on the circuit.
    pub fn validate(&self) -> Result<(), TextCircuitError> {
        if self.dpi == 0 {
            return Err(TextCircuitError::InvalidStyle { message: "dpi must be positive".to_string() });
        }
        if self.fold == 0 {
            return Err(TextCircuitError::InvalidStyle { message: "fold must be positive".to_string() });
        }
        Ok(())
    }
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            dpi: defaults::DPI,
            fold: defaults::MAX_TEXT_LENGTH,
            colors: GateColors::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#A51417").unwrap(), Rgb([0xA5, 0x14, 0x17]));
        assert_eq!(parse_color("33b1ff").unwrap(), Rgb([0x33, 0xB1, 0xFF]));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#GGGGGG").is_err());
        assert!(parse_color("#ÄÄÄ").is_err());
    }

    #[test]
    fn test_parse_gate_color() {
        assert_eq!(parse_gate_color("x=#33B1FF").unwrap(), (Gate::X, Rgb([0x33, 0xB1, 0xFF])));
        assert_eq!(parse_gate_color("ID = 000000").unwrap(), (Gate::I, Rgb([0, 0, 0])));
        match parse_gate_color("cx=#000000") {
            Err(TextCircuitError::InvalidStyle { message }) => assert!(message.contains("Unknown gate `cx`")),
            other => panic!("expected InvalidStyle, got {:?}", other),
        }
        assert!(parse_gate_color("#000000").is_err());
        assert!(parse_gate_color("z=nope").is_err());
    }

    #[test]
    fn test_set_overrides_one_gate() {
        let mut colors = GateColors::default();
        colors.set(Gate::Z, Rgb([1, 2, 3]));
        assert_eq!(colors.color(Gate::Z), Rgb([1, 2, 3]));
        assert_eq!(colors.color(Gate::X), GateColors::default().x);
    }

    #[test]
    fn test_default_colors_parse() {
        assert!(GateColors::from_defaults().is_ok());
        let colors = GateColors::default();
        assert_eq!(colors.color(Gate::H), Rgb([0xA5, 0x14, 0x17]));
        assert_eq!(colors.color(Gate::Y), Rgb([0xF0, 0xF0, 0xF0]));
    }

    #[test]
    fn test_output_mode_names() {
        assert_eq!("png".parse::<OutputMode>().unwrap(), OutputMode::Png);
        assert_eq!("mpl".parse::<OutputMode>().unwrap(), OutputMode::Png);
        assert_eq!("text".parse::<OutputMode>().unwrap(), OutputMode::Text);
        assert!("svg".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_zero_fold_is_invalid() {
        let style = DrawStyle { fold: 0, ..DrawStyle::default() };
        assert!(matches!(style.validate(), Err(TextCircuitError::InvalidStyle { .. })));
        assert!(DrawStyle::default().validate().is_ok());
    }
}
