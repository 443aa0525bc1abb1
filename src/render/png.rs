// src/render/png.rs

//! Raster drawing of a circuit: one horizontal wire per qubit, one filled box
//! per gate, wrapped into bands of `fold` columns.

use super::DrawStyle;
use crate::circuits::Circuit;
use crate::core::{QubitId, TextCircuitError, defaults};
use fontdue::Font;
use image::{Rgb, RgbImage};

const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
const BLACK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
const WIRE: Rgb<u8> = Rgb([0x40, 0x40, 0x40]);

/// Pixel measurements derived from the DPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    /// Edge length of one gate cell
    pub cell: u32,
    /// Gap between a box and its cell edge
    pub inset: u32,
    /// Room for qubit labels left of the wires
    pub margin: u32,
    /// Columns actually drawn per band
    pub columns: usize,
    /// Number of bands
    pub bands: usize,
    /// Height of one band including the gap below it
    pub band_height: u32,
    /// Image width
    pub width: u32,
    /// Image height
    pub height: u32,
}

impl Layout {
    /// Cell size is 8pt at the given resolution.
    ///
    /// Fails with `InvalidStyle` when the image would not fit in
    /// `defaults::MAX_IMAGE_PIXELS`.
    pub(crate) fn new(circuit: &Circuit, style: &DrawStyle) -> Result<Self, TextCircuitError> {
        let too_large = || TextCircuitError::InvalidStyle {
            message: format!(
                "a {} dpi drawing of {} gates on {} qubits exceeds {} pixels",
                style.dpi,
                circuit.len(),
                circuit.num_qubits(),
                defaults::MAX_IMAGE_PIXELS
            ),
        };

        // Float to int casts saturate
        let cell = ((8.0 * style.dpi as f64 / 72.0).round() as u32).max(4);
        let depth = circuit.depth();
        let columns = depth.min(style.fold).max(1);
        let bands = depth.div_ceil(style.fold).max(1);

        let margin = cell.checked_mul(2).ok_or_else(too_large)?;
        let band_height = u32::try_from(circuit.num_qubits())
            .ok()
            .and_then(|n| n.checked_add(1))
            .and_then(|n| n.checked_mul(cell))
            .ok_or_else(too_large)?;
        let width = u32::try_from(columns)
            .ok()
            .and_then(|n| n.checked_mul(cell))
            .and_then(|n| n.checked_add(margin))
            .and_then(|n| n.checked_add(cell / 2))
            .ok_or_else(too_large)?;
        let height = u32::try_from(bands)
            .ok()
            .and_then(|n| n.checked_mul(band_height))
            .ok_or_else(too_large)?
            .max(cell);
        if width as u64 * height as u64 > defaults::MAX_IMAGE_PIXELS {
            return Err(too_large());
        }

        Ok(Self {
            cell,
            inset: (cell / 8).max(1),
            margin,
            columns,
            bands,
            band_height,
            width,
            height,
        })
    }
}

/// Draws `circuit` into a new image. Gate and qubit labels are only drawn when
/// a font is available.
pub(crate) fn draw(circuit: &Circuit, style: &DrawStyle, font: Option<&Font>) -> Result<RgbImage, TextCircuitError> {
    let layout = Layout::new(circuit, style)?;
    let mut img = RgbImage::from_pixel(layout.width, layout.height, WHITE);
    let label_px = layout.cell as f32 * 0.6;

    for (q, gates) in circuit.wires().iter().enumerate() {
        for band in 0..layout.bands {
            let top = band as u32 * layout.band_height + layout.cell / 2 + q as u32 * layout.cell;
            let mid = top + layout.cell / 2;
            let start = band * style.fold;
            let end = (start + style.fold).min(gates.len());
            let wire_end = layout.margin + (end.saturating_sub(start)) as u32 * layout.cell;

            fill_rect(&mut img, layout.margin, mid, wire_end.saturating_sub(layout.margin), (layout.inset / 2).max(1), WIRE);
            if let Some(font) = font {
                let label = QubitId(q).to_string();
                draw_text(&mut img, font, &label, label_px, layout.inset, top, layout.cell, BLACK);
            }

            for (column, gate) in gates.iter().enumerate().take(end).skip(start) {
                let x = layout.margin + (column - start) as u32 * layout.cell + layout.inset;
                let y = top + layout.inset;
                let side = layout.cell - 2 * layout.inset;
                let fill = style.colors.color(*gate);
                fill_rect(&mut img, x, y, side, side, fill);
                outline_rect(&mut img, x, y, side, WIRE);
                if let Some(font) = font {
                    let ink = if luminance(fill) < 128 { WHITE } else { BLACK };
                    let symbol = gate.symbol();
                    let text_width = measure(font, symbol, label_px);
                    let tx = x + side.saturating_sub(text_width) / 2;
                    draw_text(&mut img, font, symbol, label_px, tx, y, side, ink);
                }
            }
        }
    }
    Ok(img)
}

fn luminance(Rgb([r, g, b]): Rgb<u8>) -> u32 {
    (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

fn outline_rect(img: &mut RgbImage, x: u32, y: u32, side: u32, color: Rgb<u8>) {
    if side == 0 {
        return;
    }
    fill_rect(img, x, y, side, 1, color);
    fill_rect(img, x, y + side - 1, side, 1, color);
    fill_rect(img, x, y, 1, side, color);
    fill_rect(img, x + side - 1, y, 1, side, color);
}

fn blend(under: Rgb<u8>, over: Rgb<u8>, coverage: u8) -> Rgb<u8> {
    let a = coverage as u32;
    let mix = |u: u8, o: u8| ((u as u32 * (255 - a) + o as u32 * a) / 255) as u8;
    Rgb([mix(under[0], over[0]), mix(under[1], over[1]), mix(under[2], over[2])])
}

fn measure(font: &Font, text: &str, px: f32) -> u32 {
    text.chars()
        .map(|c| font.metrics(c, px).advance_width)
        .sum::<f32>()
        .ceil() as u32
}

/// Draws `text` vertically centered in the strip `[top, top + height)`.
#[allow(clippy::too_many_arguments)]
fn draw_text(img: &mut RgbImage, font: &Font, text: &str, px: f32, left: u32, top: u32, height: u32, color: Rgb<u8>) {
    let ascent = font.horizontal_line_metrics(px).map(|m| m.ascent).unwrap_or(px);
    let baseline = top as i32 + (height as i32 + ascent.round() as i32) / 2 - (px * 0.1).round() as i32;
    let mut pen_x = left as f32;
    for ch in text.chars() {
        let (metrics, coverage) = font.rasterize(ch, px);
        let gx = pen_x.round() as i32 + metrics.xmin;
        let gy = baseline - metrics.ymin - metrics.height as i32;
        if metrics.width > 0 {
            for (y, row) in coverage.chunks(metrics.width).enumerate() {
                for (x, &value) in row.iter().enumerate() {
                    let (tx, ty) = (gx + x as i32, gy + y as i32);
                    if value == 0 || tx < 0 || ty < 0 || tx as u32 >= img.width() || ty as u32 >= img.height() {
                        continue;
                    }
                    let under = *img.get_pixel(tx as u32, ty as u32);
                    img.put_pixel(tx as u32, ty as u32, blend(under, color, value));
                }
            }
        }
        pen_x += metrics.advance_width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;
    use crate::operations::Gate;

    fn row(len: usize, gate: Gate, qubit: usize) -> CircuitBuilder {
        (0..len).fold(CircuitBuilder::new(), |b, _| b.gate(gate, QubitId(qubit)))
    }

    #[test]
    fn test_layout_scales_with_dpi() -> Result<(), TextCircuitError> {
        let circuit = row(4, Gate::H, 0).build();
        let low = Layout::new(&circuit, &DrawStyle { dpi: 72, ..DrawStyle::default() })?;
        let high = Layout::new(&circuit, &DrawStyle { dpi: 144, ..DrawStyle::default() })?;
        assert_eq!(low.cell, 8);
        assert_eq!(high.cell, 16);
        assert!(high.width > low.width);
        Ok(())
    }

    #[test]
    fn test_layout_folds_long_circuits() -> Result<(), TextCircuitError> {
        let circuit = row(7, Gate::X, 0).build();
        let layout = Layout::new(&circuit, &DrawStyle { fold: 3, ..DrawStyle::default() })?;
        assert_eq!(layout.columns, 3);
        assert_eq!(layout.bands, 3);
        assert_eq!(layout.height, 3 * layout.band_height);
        Ok(())
    }

    #[test]
    fn test_layout_rejects_images_over_budget() {
        let one_gate = row(1, Gate::H, 0).build();
        let huge = DrawStyle { dpi: u32::MAX, ..DrawStyle::default() };
        assert!(matches!(Layout::new(&one_gate, &huge), Err(TextCircuitError::InvalidStyle { .. })));
        assert!(matches!(draw(&one_gate, &huge, None), Err(TextCircuitError::InvalidStyle { .. })));

        // Fits in u32 on each side, too many pixels in total
        let wide = row(100, Gate::H, 0).build();
        let style = DrawStyle { dpi: 20_000, ..DrawStyle::default() };
        assert!(matches!(Layout::new(&wide, &style), Err(TextCircuitError::InvalidStyle { .. })));
    }

    #[test]
    fn test_gate_boxes_use_gate_colors() -> Result<(), TextCircuitError> {
        let circuit = row(2, Gate::H, 0).build();
        let style = DrawStyle { dpi: 72, ..DrawStyle::default() };
        let layout = Layout::new(&circuit, &style)?;
        let img = draw(&circuit, &style, None)?;
        assert_eq!(img.dimensions(), (layout.width, layout.height));

        // Center of the first box
        let cx = layout.margin + layout.cell / 2;
        let cy = layout.cell / 2 + layout.cell / 2 - 1;
        assert_eq!(*img.get_pixel(cx, cy), style.colors.h);
        Ok(())
    }

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend(WHITE, BLACK, 0), WHITE);
        assert_eq!(blend(WHITE, BLACK, 255), BLACK);
    }
}
