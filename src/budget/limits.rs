//! Pure, geometry-derived budget constants.
//!
//! Every limit is derived from canvas geometry and font metrics, not
//! hand-tuned: the renderer can trust that text within these budgets fits
//! the canvas without a second layout pass.

use crate::foundation::core::Canvas;
use crate::foundation::error::{SlidecraftError, SlidecraftResult};

/// Horizontal padding on each side of the canvas, in pixels.
const SIDE_PADDING_PX: f64 = 90.0;
/// Vertical chrome above the content area (progress dots, brand mark).
const TOP_CHROME_PX: f64 = 160.0;
/// Vertical chrome below the content area (swipe hint, slide number).
const BOTTOM_CHROME_PX: f64 = 140.0;
/// Fixed allowance for the accent bar under the title, plus its gap.
const ACCENT_BAR_PX: f64 = 44.0;

/// Title font size in pixels.
const TITLE_FONT_PX: f64 = 64.0;
/// Title line height multiplier.
const TITLE_LINE_HEIGHT: f64 = 1.15;
/// Hard clamp on rendered title lines.
const MAX_TITLE_LINES: usize = 3;
/// Lines of title the budget reserves space for (the title character limit
/// is sized to this, so the reservation is exact).
const TITLE_BUDGET_LINES: usize = 2;

/// Body font size in pixels.
const BODY_FONT_PX: f64 = 38.0;
/// Body line height multiplier.
const BODY_LINE_HEIGHT: f64 = 1.5;

/// Average glyph width as a fraction of font size, proportional type.
const PROPORTIONAL_GLYPH_RATIO: f64 = 0.47;
/// Average glyph width as a fraction of font size, monospace type.
const MONO_GLYPH_RATIO: f64 = 0.60;

/// Width of the bullet marker column, in pixels.
const BULLET_MARKER_PX: f64 = 48.0;
/// Lines of wrapped text a bullet may span.
const BULLET_MAX_LINES: usize = 2;
/// Average lines a bullet row occupies (most bullets wrap once at most).
const BULLET_ROW_LINES: f64 = 1.5;
/// Vertical gap between bullet rows, in pixels.
const BULLET_GAP_PX: f64 = 14.0;
/// Lines reserved for a bullet-list intro paragraph.
const INTRO_LINES: usize = 3;
/// Gap between the intro paragraph and the first bullet, in pixels.
const INTRO_GAP_PX: f64 = 20.0;

/// The canvas all default budgets derive from (portrait 4:5).
///
/// The square aspect is the binding constraint; see
/// [`Canvas::square_edge`].
pub fn default_canvas() -> Canvas {
    Canvas {
        width: 1080,
        height: 1350,
    }
}

/// How many characters of the given type fit one line of `width_px`.
pub fn chars_per_line(width_px: f64, font_px: f64, mono: bool) -> usize {
    let ratio = if mono {
        MONO_GLYPH_RATIO
    } else {
        PROPORTIONAL_GLYPH_RATIO
    };
    let glyph_px = font_px * ratio;
    if glyph_px <= 0.0 || width_px <= 0.0 {
        return 0;
    }
    (width_px / glyph_px).floor() as usize
}

/// Output verbosity preset controlling character/bullet budgets.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    /// Tighter character budgets, fewer slides.
    Concise,
    /// The reference preset the geometry is derived for.
    #[default]
    Balanced,
    /// Looser character budgets, more slides.
    Detailed,
}

impl Density {
    /// All presets, in increasing verbosity order.
    pub const ALL: [Density; 3] = [Density::Concise, Density::Balanced, Density::Detailed];

    /// Multiplier applied to the balanced character limits.
    ///
    /// Only character limits scale; bullet counts and the title budget stay
    /// geometry-derived, so every preset fits the same canvas.
    pub fn char_scale(self) -> f64 {
        match self {
            Density::Concise => 0.65,
            Density::Balanced => 1.0,
            Density::Detailed => 1.15,
        }
    }

    /// Total slide budget including cover and CTA.
    pub fn max_slides(self) -> usize {
        match self {
            Density::Concise => 8,
            Density::Balanced => 10,
            Density::Detailed => 14,
        }
    }
}

/// Character/line/bullet capacity constants for one generation pass.
///
/// Immutable once derived; see module docs for the derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BudgetLimits {
    /// Maximum title length in characters (density-invariant).
    pub max_title_len: usize,
    /// Maximum body text per slide, in characters.
    pub content_char_limit: usize,
    /// Maximum length of a single bullet, in characters.
    pub bullet_char_limit: usize,
    /// Maximum length of a bullet-list intro paragraph, in characters.
    pub bullet_intro_char_limit: usize,
    /// Bullet rows that fit when no intro paragraph is present.
    pub max_bullets_no_intro: usize,
    /// Bullet rows that fit below an intro paragraph.
    pub max_bullets_with_intro: usize,
    /// Total slide budget including cover and CTA.
    pub max_slides: usize,
}

impl BudgetLimits {
    /// Budgets for `density` on the default 1080x1350 canvas.
    pub fn for_density(density: Density) -> Self {
        // The default canvas is known-good; the validation path cannot fire.
        Self::for_canvas(default_canvas(), density)
            .unwrap_or_else(|_| unreachable!("default canvas derivation is infallible"))
    }

    /// Budgets for `density` on an arbitrary canvas.
    ///
    /// Rejects canvases too small to hold the fixed chrome and at least one
    /// body line.
    pub fn for_canvas(canvas: Canvas, density: Density) -> SlidecraftResult<Self> {
        let edge = f64::from(canvas.square_edge());
        let usable_w = edge - 2.0 * SIDE_PADDING_PX;
        let usable_h = edge - TOP_CHROME_PX - BOTTOM_CHROME_PX;

        let body_cpl = chars_per_line(usable_w, BODY_FONT_PX, false);
        let title_cpl = chars_per_line(usable_w, TITLE_FONT_PX, false);
        if body_cpl == 0 || title_cpl == 0 {
            return Err(SlidecraftError::validation(
                "canvas too narrow for one line of text",
            ));
        }

        let max_title_len = title_cpl * TITLE_BUDGET_LINES;
        let title_lines = max_title_len.div_ceil(title_cpl).min(MAX_TITLE_LINES);
        let title_h = title_lines as f64 * TITLE_FONT_PX * TITLE_LINE_HEIGHT;

        let line_px = BODY_FONT_PX * BODY_LINE_HEIGHT;
        let body_area = usable_h - title_h - ACCENT_BAR_PX;
        if body_area < line_px {
            return Err(SlidecraftError::validation(
                "canvas too short for one body line under the title",
            ));
        }
        let body_lines = (body_area / line_px).floor() as usize;

        let bullet_cpl = chars_per_line(usable_w - BULLET_MARKER_PX, BODY_FONT_PX, false);
        let bullet_row_px = BULLET_ROW_LINES * line_px + BULLET_GAP_PX;
        let intro_h = INTRO_LINES as f64 * line_px + INTRO_GAP_PX;

        let max_bullets_no_intro = ((body_area / bullet_row_px).floor() as usize).max(1);
        let max_bullets_with_intro =
            ((((body_area - intro_h) / bullet_row_px).floor()) as usize).max(1);

        let scale = density.char_scale();
        Ok(Self {
            max_title_len,
            content_char_limit: scaled(body_lines * body_cpl, scale),
            bullet_char_limit: scaled(BULLET_MAX_LINES * bullet_cpl, scale),
            bullet_intro_char_limit: scaled(INTRO_LINES * body_cpl, scale),
            max_bullets_no_intro,
            max_bullets_with_intro,
            max_slides: density.max_slides(),
        })
    }

    /// Slots available for content slides after cover and CTA.
    pub fn max_content_slides(&self) -> usize {
        self.max_slides.saturating_sub(2)
    }
}

fn scaled(chars: usize, factor: f64) -> usize {
    ((chars as f64 * factor).floor() as usize).max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/budget/limits.rs"]
mod tests;
