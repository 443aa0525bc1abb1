//! Default settings for rasterizing text and drawing circuits.

/// Defaults used when nothing else is configured
pub mod defaults {
    /// Resolution of the rendered diagram, in dots per inch.
    pub const DPI: u32 = 250;
    /// Pixel size the text is rasterized at. This fixes the qubit count for most strings.
    pub const FONT_SIZE: f32 = 19.0;
    /// Font file looked up relative to the working directory.
    pub const FONT_FILE: &str = "SourceSansPro-Bold.otf";
    /// Where the rendered diagram is written.
    pub const OUTPUT_FILE: &str = "output.png";
    /// Longest accepted input, in characters. Also the fold width of the diagram.
    pub const MAX_TEXT_LENGTH: usize = 200;
    /// Largest image, in pixels, the PNG renderer will allocate.
    pub const MAX_IMAGE_PIXELS: u64 = 1 << 28;
    /// Coverage at or above which a rasterized pixel counts as ink.
    pub const INK_THRESHOLD: u8 = 128;

    /// Display color of the background gate (H).
    pub const H_COLOR: &str = "#A51417";
    /// Display color of the identity gate.
    pub const I_COLOR: &str = "#F0F0F0";
    /// Display color of the X gate.
    pub const X_COLOR: &str = "#F0F0F0";
    /// Display color of the Y gate.
    pub const Y_COLOR: &str = "#F0F0F0";
    /// Display color of the Z gate.
    pub const Z_COLOR: &str = "#F0F0F0";
}
