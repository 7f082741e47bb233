//! Pixel sampling for theme synthesis.

use anyhow::Context;

use crate::foundation::error::SlidecraftResult;
use crate::theme::palette::{Rgb, rgb_to_hsl};

/// Edge length of the fixed sampling surface; bounds quantization cost
/// regardless of source image size.
pub(crate) const SAMPLE_EDGE: u32 = 100;

/// Fraction of rows excluded at the top and bottom of the surface
/// (edge artifacts, letterboxing).
const EDGE_EXCLUSION_FRAC: f64 = 0.08;

/// Pixels outside this lightness band are dropped as near-black/near-white.
const MIN_PIXEL_LIGHTNESS: f64 = 0.05;
const MAX_PIXEL_LIGHTNESS: f64 = 0.95;

/// Decode `bytes` onto the sampling surface and collect the usable pixels.
///
/// The result can be empty (e.g. a pure black image); callers decide the
/// fallback.
pub(crate) fn sample_pixels(bytes: &[u8]) -> SlidecraftResult<Vec<Rgb>> {
    let decoded = image::load_from_memory(bytes).context("decode theme source image")?;
    let surface = image::imageops::resize(
        &decoded.to_rgb8(),
        SAMPLE_EDGE,
        SAMPLE_EDGE,
        image::imageops::FilterType::Triangle,
    );

    let skip_rows = (f64::from(SAMPLE_EDGE) * EDGE_EXCLUSION_FRAC).round() as u32;
    let mut pixels = Vec::with_capacity((SAMPLE_EDGE * SAMPLE_EDGE) as usize);
    for (_, y, px) in surface.enumerate_pixels() {
        if y < skip_rows || y >= SAMPLE_EDGE - skip_rows {
            continue;
        }
        let rgb: Rgb = px.0;
        let l = rgb_to_hsl(rgb).l;
        if !(MIN_PIXEL_LIGHTNESS..=MAX_PIXEL_LIGHTNESS).contains(&l) {
            continue;
        }
        pixels.push(rgb);
    }
    Ok(pixels)
}

#[cfg(test)]
#[path = "../../tests/unit/theme/sample.rs"]
mod tests;
