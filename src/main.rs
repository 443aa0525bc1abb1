//! # textcircuit
//!
//! Draws a text string as a quantum circuit diagram.
#![warn(missing_docs)]

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{self, WrapErr};
use env_logger::Env;
use image::Rgb;
use log::{LevelFilter, debug, info};
use textcircuit::{
    DrawStyle, Encoder, Gate, GateColors, OutputMode, Rasterizer, Renderer, TextCircuitError,
    core::defaults, join_words,
    render::{parse_color, parse_gate_color},
    validate_text,
};

#[derive(Parser)]
#[clap(name = "textcircuit")]
/// Encode text as a circuit of single-qubit gates and draw it
struct Opts {
    /// The text to encode. Several words are joined with a single space
    text: Vec<String>,

    /// Font file used to rasterize the text
    #[clap(long, default_value = defaults::FONT_FILE)]
    font: PathBuf,

    /// Pixel size of the rasterized text
    #[clap(long, default_value_t = defaults::FONT_SIZE)]
    font_size: f32,

    /// Coverage (0-255) at which a rasterized pixel counts as ink
    #[clap(long, default_value_t = defaults::INK_THRESHOLD)]
    threshold: u8,

    /// Longest accepted text. Also the number of gate columns before the diagram wraps
    #[clap(long, default_value_t = defaults::MAX_TEXT_LENGTH)]
    max_length: usize,

    /// Where to write the diagram
    #[clap(short, long, default_value = defaults::OUTPUT_FILE)]
    output: PathBuf,

    /// Output format, `png` or `text`
    #[clap(short, long, default_value_t = OutputMode::Png)]
    mode: OutputMode,

    /// Resolution of the image in dots per inch
    #[clap(long, default_value_t = defaults::DPI)]
    dpi: u32,

    /// Color of the H gates that spell out the background
    #[clap(long, default_value = defaults::H_COLOR, value_parser = parse_color)]
    h_color: Rgb<u8>,

    /// Color of the I gates
    #[clap(long, default_value = defaults::I_COLOR, value_parser = parse_color)]
    i_color: Rgb<u8>,

    /// Color of the X gates
    #[clap(long, default_value = defaults::X_COLOR, value_parser = parse_color)]
    x_color: Rgb<u8>,

    /// Color of the Y gates
    #[clap(long, default_value = defaults::Y_COLOR, value_parser = parse_color)]
    y_color: Rgb<u8>,

    /// Color of the Z gates
    #[clap(long, default_value = defaults::Z_COLOR, value_parser = parse_color)]
    z_color: Rgb<u8>,

    /// Override a gate color as `GATE=#RRGGBB`, e.g. `x=#33B1FF`. May be repeated
    #[clap(long = "color", value_parser = parse_gate_color)]
    colors: Vec<(Gate, Rgb<u8>)>,

    /// Draw plain boxes without gate and qubit labels
    #[clap(long)]
    no_labels: bool,
}

impl Opts {
    fn style(&self) -> DrawStyle {
        let mut colors = GateColors {
            h: self.h_color,
            i: self.i_color,
            x: self.x_color,
            y: self.y_color,
            z: self.z_color,
        };
        for &(gate, color) in &self.colors {
            colors.set(gate, color);
        }
        DrawStyle {
            mode: self.mode,
            dpi: self.dpi,
            fold: self.max_length,
            colors,
        }
    }
}

/// Set up CLI. Returns `None` when the arguments were not usable and clap
/// already printed why (this includes `--help` and `--version`).
fn init() -> color_eyre::Result<Option<Opts>> {
    color_eyre::install()?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter("TEXTCIRCUIT_LOG"))
        .init();
    match Opts::try_parse() {
        Ok(opts) => Ok(Some(opts)),
        Err(err) => {
            err.print()?;
            Ok(None)
        }
    }
}

fn run(opts: &Opts) -> Result<(), TextCircuitError> {
    let text = join_words(&opts.text);
    validate_text(&text, Some(opts.max_length))?;

    let rasterizer = Rasterizer::from_file(&opts.font, opts.font_size)?
        .with_threshold(opts.threshold)
        .with_max_length(opts.max_length);
    let bitmap = rasterizer.rasterize(&text)?;
    debug!("Glyph bitmap:\n{}", bitmap);

    info!("Building circuit...");
    let circuit = Encoder::new().encode(&bitmap)?;
    info!("{} qubits, {} gates", circuit.num_qubits(), circuit.len());

    info!("Generating {} output...", opts.mode);
    let mut renderer = Renderer::new(opts.style());
    if !opts.no_labels {
        renderer = renderer.with_font(rasterizer.font());
    }
    renderer.save(&circuit, &opts.output)
}

fn usage(max_length: usize) -> eyre::Result<()> {
    Opts::command().print_help()?;
    println!("\n   Maximum text length: {}", max_length);
    Ok(())
}

fn main() -> eyre::Result<()> {
    let Some(opts) = init()? else { return Ok(()) };
    match run(&opts) {
        Ok(()) => {
            println!("Image generated, view output at {}", opts.output.display());
            Ok(())
        }
        Err(TextCircuitError::NoInput) => usage(opts.max_length),
        Err(e) if e.is_user_error() => {
            eprintln!("{}", e);
            Ok(())
        }
        Err(e) => Err(e).wrap_err_with(|| format!("failed to draw '{}'", opts.output.display())),
    }
}
