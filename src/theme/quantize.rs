//! Median-cut quantization and vibrancy-based seed selection.

use crate::theme::palette::{Rgb, rgb_to_hsl};

/// Recursion depth of the median cut; yields up to `2^3 = 8` clusters.
const MEDIAN_CUT_DEPTH: usize = 3;

/// Minimum vibrancy score a cluster must reach to be chosen outright.
const VIBRANCY_THRESHOLD: f64 = 0.12;

/// Centroid lightness band eligible for vibrancy scoring.
const SCORABLE_LIGHTNESS_MIN: f64 = 0.10;
const SCORABLE_LIGHTNESS_MAX: f64 = 0.90;

/// One quantized color cluster.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cluster {
    /// Mean color of the cluster's pixels.
    pub centroid: Rgb,
    /// Number of pixels in the cluster.
    pub len: usize,
}

/// Quantize `pixels` into clusters by recursive median cut: split along
/// whichever RGB channel has the widest range, at its median.
pub(crate) fn median_cut(pixels: Vec<Rgb>) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    split(pixels, MEDIAN_CUT_DEPTH, &mut clusters);
    clusters
}

fn split(mut pixels: Vec<Rgb>, depth: usize, out: &mut Vec<Cluster>) {
    if pixels.is_empty() {
        return;
    }
    if depth == 0 || pixels.len() < 2 {
        out.push(Cluster {
            centroid: centroid(&pixels),
            len: pixels.len(),
        });
        return;
    }
    let channel = widest_channel(&pixels);
    pixels.sort_unstable_by_key(|p| p[channel]);
    let right = pixels.split_off(pixels.len() / 2);
    split(pixels, depth - 1, out);
    split(right, depth - 1, out);
}

fn widest_channel(pixels: &[Rgb]) -> usize {
    let mut min = [u8::MAX; 3];
    let mut max = [u8::MIN; 3];
    for px in pixels {
        for c in 0..3 {
            min[c] = min[c].min(px[c]);
            max[c] = max[c].max(px[c]);
        }
    }
    let ranges = [max[0] - min[0], max[1] - min[1], max[2] - min[2]];
    (0..3)
        .max_by_key(|&c| ranges[c])
        .unwrap_or(0)
}

fn centroid(pixels: &[Rgb]) -> Rgb {
    let n = pixels.len().max(1) as u64;
    let mut sums = [0u64; 3];
    for px in pixels {
        for c in 0..3 {
            sums[c] += u64::from(px[c]);
        }
    }
    [
        (sums[0] / n) as u8,
        (sums[1] / n) as u8,
        (sums[2] / n) as u8,
    ]
}

/// Pick the palette seed: the most vibrant cluster when one clears the
/// threshold, else the largest cluster's centroid (low-saturation images
/// still get a result). `None` only when there are no clusters at all.
pub(crate) fn pick_seed(clusters: &[Cluster], total_pixels: usize) -> Option<Rgb> {
    let mut best: Option<(f64, Rgb)> = None;
    for cluster in clusters {
        let hsl = rgb_to_hsl(cluster.centroid);
        if !(SCORABLE_LIGHTNESS_MIN..=SCORABLE_LIGHTNESS_MAX).contains(&hsl.l) {
            continue;
        }
        let score = vibrancy(hsl.s, hsl.l, cluster.len, total_pixels);
        if best.is_none_or(|(b, _)| score > b) {
            best = Some((score, cluster.centroid));
        }
    }
    if let Some((score, rgb)) = best
        && score > VIBRANCY_THRESHOLD
    {
        return Some(rgb);
    }
    clusters.iter().max_by_key(|c| c.len).map(|c| c.centroid)
}

/// Weighted blend of saturation, mid-range lightness proximity and cluster
/// frequency.
fn vibrancy(saturation: f64, lightness: f64, cluster_len: usize, total_pixels: usize) -> f64 {
    let mid = (1.0 - (2.0 * (lightness - 0.5).abs()).powi(2)).max(0.0);
    let frequency = (cluster_len as f64 / (total_pixels as f64 * 0.05)).min(1.0);
    0.55 * saturation + 0.25 * mid + 0.20 * frequency
}

#[cfg(test)]
#[path = "../../tests/unit/theme/quantize.rs"]
mod tests;
