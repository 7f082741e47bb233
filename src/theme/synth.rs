//! Theme synthesis entry points.

use std::time::Duration;

use anyhow::Context;

use crate::foundation::error::{SlidecraftError, SlidecraftResult};
use crate::theme::palette::{Theme, fallback_theme, palette_from_seed};
use crate::theme::quantize::{median_cut, pick_seed};
use crate::theme::sample::sample_pixels;

/// Single-attempt fetch timeout for the source image.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Derive a [`Theme`] from the image at `image_url`.
///
/// The one suspension point in the crate: a single fetch attempt with a
/// fixed timeout, no retry. Any fetch or decode failure yields the neutral
/// dark fallback theme, so the renderer always has a usable palette.
#[tracing::instrument]
pub async fn synthesize_theme(image_url: &str) -> Theme {
    match fetch_theme(image_url).await {
        Ok(theme) => theme,
        Err(err) => {
            tracing::warn!(url = image_url, error = %err, "theme synthesis failed, using fallback");
            fallback_theme()
        }
    }
}

async fn fetch_theme(image_url: &str) -> SlidecraftResult<Theme> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("build theme fetch client")?;
    let bytes = client
        .get(image_url)
        .send()
        .await
        .context("fetch theme source image")?
        .error_for_status()
        .context("theme source image status")?
        .bytes()
        .await
        .context("read theme source image body")?;
    theme_from_image_bytes(&bytes)
}

/// Derive a [`Theme`] from already-fetched image bytes.
pub fn theme_from_image_bytes(bytes: &[u8]) -> SlidecraftResult<Theme> {
    let pixels = sample_pixels(bytes)?;
    if pixels.is_empty() {
        return Err(SlidecraftError::theme(
            "no usable pixels after sampling exclusions",
        ));
    }
    let total_pixels = pixels.len();
    let clusters = median_cut(pixels);
    let seed = pick_seed(&clusters, total_pixels)
        .ok_or_else(|| SlidecraftError::theme("quantization produced no clusters"))?;
    Ok(palette_from_seed(seed))
}

#[cfg(test)]
#[path = "../../tests/unit/theme/synth.rs"]
mod tests;
