//! Error handling logic

use std::path::PathBuf;
use thiserror::Error;

/// Error types raised while turning text into a circuit diagram.
///
/// All variants but `Render` are user-facing: they describe a problem with the
/// input, the options or the environment and are reported at the command line
/// with a clean exit. `Render` indicates an output failure.
#[derive(Debug, Error)]
pub enum TextCircuitError {
    /// There is no text to encode (empty or whitespace-only input).
    #[error("No input text given")]
    NoInput,

    /// The input exceeds the configured maximum length.
    #[error("Length of input ({length}) exceeded maximum ({max})")]
    InputTooLong {
        /// Length of the rejected input, in characters
        length: usize,
        /// The configured maximum, in characters
        max: usize,
    },

    /// The font resource could not be read or parsed.
    #[error("Font unavailable ({}): {reason}", .path.display())]
    FontUnavailable {
        /// Where the font was looked up
        path: PathBuf,
        /// Why loading failed
        reason: String,
    },

    /// The rendered text contains no ink, so there is no row to assign a qubit to.
    #[error("Rendered text contains no visible pixels")]
    BlankBitmap,

    /// A draw style setting could not be used.
    #[error("Invalid style: {message}")]
    InvalidStyle {
        /// InvalidStyle failure message
        message: String,
    },

    /// The diagram could not be produced or written.
    #[error("Render failure: {message}")]
    Render {
        /// Render failure message
        message: String,
    },
}

impl TextCircuitError {
    /// Returns `true` for errors that are reported to the user and end the run
    /// cleanly instead of failing the process.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TextCircuitError::NoInput
                | TextCircuitError::InputTooLong { .. }
                | TextCircuitError::FontUnavailable { .. }
                | TextCircuitError::BlankBitmap
                | TextCircuitError::InvalidStyle { .. }
        )
    }
}

impl From<image::ImageError> for TextCircuitError {
    fn from(err: image::ImageError) -> Self {
        TextCircuitError::Render { message: err.to_string() }
    }
}

impl From<std::io::Error> for TextCircuitError {
    fn from(err: std::io::Error) -> Self {
        TextCircuitError::Render { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors_are_flagged() {
        assert!(TextCircuitError::NoInput.is_user_error());
        assert!(TextCircuitError::InputTooLong { length: 201, max: 200 }.is_user_error());
        assert!(TextCircuitError::BlankBitmap.is_user_error());
        assert!(
            TextCircuitError::FontUnavailable { path: "missing.otf".into(), reason: "not found".to_string() }
                .is_user_error()
        );
        assert!(!TextCircuitError::Render { message: "disk full".to_string() }.is_user_error());
        assert!(TextCircuitError::InvalidStyle { message: "bad color".to_string() }.is_user_error());
    }

    #[test]
    fn test_too_long_message_names_both_lengths() {
        let err = TextCircuitError::InputTooLong { length: 201, max: 200 };
        assert_eq!(err.to_string(), "Length of input (201) exceeded maximum (200)");
    }
}
