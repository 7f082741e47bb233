//! Color math and palette derivation.
//!
//! Every derived color passes through an incremental contrast-correction
//! step that walks lightness toward the better of white/black until the
//! WCAG target is met, falling back to the pure extreme. Stepping (rather
//! than snapping straight to an extreme) preserves hue cohesion across the
//! palette while the contrast floor still holds by construction.

use crate::foundation::error::{SlidecraftError, SlidecraftResult};

/// Straight (non-premultiplied) 8-bit RGB triple.
pub(crate) type Rgb = [u8; 3];

/// Lightness step size per contrast-correction iteration.
const CORRECTION_STEP: f64 = 0.03;
/// Correction iterations before falling back to pure white/black.
const MAX_CORRECTION_STEPS: usize = 30;
/// Luminance below which white is the higher-contrast extreme.
///
/// Solves `1.05/(L+0.05) = (L+0.05)/0.05` for L; at the crossover either
/// extreme yields a 4.58:1 ratio, so the fallback always clears 4.5.
const WHITE_WINS_BELOW: f64 = 0.179;

/// Contrast targets for the derived palette roles.
const TEXT_CONTRAST: f64 = 4.5;
const MUTED_CONTRAST: f64 = 4.5;
const ACCENT_CONTRAST: f64 = 3.0;
const ACCENT_TEXT_CONTRAST: f64 = 4.5;

/// Two-stop background gradient, dark end first.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Gradient {
    /// Start color as `#rrggbb`.
    pub from: String,
    /// End color as `#rrggbb`.
    pub to: String,
}

/// A renderable palette derived from one source image.
///
/// Contrast invariants hold at construction: `text`/`bg` >= 4.5,
/// `muted`/`bg` >= 4.5, `accent`/`bg` >= 3.0, `accent_text`/`accent` >= 4.5.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    /// Slide background, near-black with the seed hue.
    pub bg: String,
    /// Primary text color.
    pub text: String,
    /// Accent color for bars, highlights and badges.
    pub accent: String,
    /// Accent-tinted panel background.
    pub accent_bg: String,
    /// Text color used on top of `accent`.
    pub accent_text: String,
    /// Secondary, body-text-capable color.
    pub muted: String,
    /// Background gradient stops.
    pub gradient: Gradient,
}

/// Hue/saturation/lightness, `h` in degrees, `s` and `l` in `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Derive the full palette from the chosen seed color.
pub(crate) fn palette_from_seed(seed: Rgb) -> Theme {
    let seed = rgb_to_hsl(seed);
    let h = seed.h;

    let bg_hsl = Hsl {
        h,
        s: seed.s.min(0.45),
        l: 0.08,
    };
    let bg = hsl_to_rgb(bg_hsl);

    let text = correct_contrast(Hsl { h, s: 0.08, l: 0.88 }, bg, TEXT_CONTRAST);
    let accent = correct_contrast(
        Hsl {
            h,
            s: seed.s.max(0.50),
            l: 0.58,
        },
        bg,
        ACCENT_CONTRAST,
    );
    let muted = correct_contrast(Hsl { h, s: 0.15, l: 0.72 }, bg, MUTED_CONTRAST);
    let accent_text = correct_contrast(Hsl { h, s: 0.30, l: 0.15 }, accent, ACCENT_TEXT_CONTRAST);
    let accent_bg = hsl_to_rgb(Hsl {
        h,
        s: bg_hsl.s.max(0.25),
        l: 0.16,
    });
    let gradient_to = hsl_to_rgb(Hsl {
        h,
        s: bg_hsl.s,
        l: 0.18,
    });

    Theme {
        bg: hex(bg),
        text: hex(text),
        accent: hex(accent),
        accent_bg: hex(accent_bg),
        accent_text: hex(accent_text),
        muted: hex(muted),
        gradient: Gradient {
            from: hex(bg),
            to: hex(gradient_to),
        },
    }
}

/// The neutral dark palette used when no image can be sampled.
pub fn fallback_theme() -> Theme {
    palette_from_seed([104, 112, 128])
}

/// WCAG contrast ratio between two `#rrggbb` colors, in `[1, 21]`.
pub fn contrast_ratio(a: &str, b: &str) -> SlidecraftResult<f64> {
    Ok(contrast(parse_hex(a)?, parse_hex(b)?))
}

/// Walk `candidate`'s lightness toward the higher-contrast extreme until it
/// clears `target` against `against`, else return pure white/black.
fn correct_contrast(candidate: Hsl, against: Rgb, target: f64) -> Rgb {
    let toward_white = relative_luminance(against) < WHITE_WINS_BELOW;
    let mut current = candidate;
    for _ in 0..MAX_CORRECTION_STEPS {
        let rgb = hsl_to_rgb(current);
        if contrast(rgb, against) >= target {
            return rgb;
        }
        current.l = if toward_white {
            (current.l + CORRECTION_STEP).min(1.0)
        } else {
            (current.l - CORRECTION_STEP).max(0.0)
        };
    }
    let rgb = hsl_to_rgb(current);
    if contrast(rgb, against) >= target {
        return rgb;
    }
    if toward_white { [255, 255, 255] } else { [0, 0, 0] }
}

pub(crate) fn contrast(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

fn relative_luminance(rgb: Rgb) -> f64 {
    fn linearize(c: u8) -> f64 {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linearize(rgb[0]) + 0.7152 * linearize(rgb[1]) + 0.0722 * linearize(rgb[2])
}

pub(crate) fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb[0]) / 255.0;
    let g = f64::from(rgb[1]) / 255.0;
    let b = f64::from(rgb[2]) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    Hsl { h: h * 60.0, s, l }
}

pub(crate) fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = channel(l);
        return [v, v, v];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        channel(hue_to_channel(p, q, h)),
        channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    ]
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

fn parse_hex(hex: &str) -> SlidecraftResult<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SlidecraftError::validation(format!(
            "expected #rrggbb color, got '{hex}'"
        )));
    }
    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|e| SlidecraftError::validation(e.to_string()))
    };
    Ok([byte(0..2)?, byte(2..4)?, byte(4..6)?])
}

#[cfg(test)]
#[path = "../../tests/unit/theme/palette.rs"]
mod tests;
