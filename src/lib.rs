//! Slidecraft turns a long-form article body into a bounded, fixed-geometry
//! sequence of slide records for a 1080x1350 canvas, plus a companion color
//! palette derived from a source image.
//!
//! # Pipeline overview
//!
//! 1. **Extract**: markdown body -> ordered [`Section`] records (headings,
//!    paragraphs, bullets, sub-headings, first image)
//! 2. **Expand**: `Section + BudgetLimits -> Vec<SlideDraft>` via ordered
//!    strategies (FAQ pairing, bulleted overview, hierarchy, sentence packing)
//! 3. **Allocate**: ration a global content-slide budget across sections,
//!    breadth before depth, preserving document order
//! 4. **Assemble**: bracket the chosen drafts with cover and CTA slides and
//!    number the result
//!
//! Independently, [`synthesize_theme`] samples a source image, quantizes its
//! colors with median-cut, and derives a background/text/accent palette that
//! satisfies WCAG contrast floors by construction.
//!
//! The key design constraints:
//!
//! - **No second rendering pass**: every character/line/bullet budget is
//!   derived up front from canvas geometry and font metrics; the renderer
//!   trusts the precomputed limits.
//! - **Deterministic-by-default**: generation is pure and stable for a given
//!   input; the only suspension point in the crate is the image fetch inside
//!   theme synthesis.
//! - **No IO in the pagination core**: extraction, expansion and allocation
//!   operate on in-memory records only.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod allocate;
mod article;
mod budget;
mod deck;
mod expand;
mod foundation;
mod theme;

pub use allocate::plan::allocate_slides;
pub use article::extract::extract_sections;
pub use article::model::{Article, Section, SubHeadingBodies};
pub use budget::limits::{BudgetLimits, Density, chars_per_line, default_canvas};
pub use deck::assemble::{GenerateOptions, generate};
pub use deck::model::{Slide, SlideKind, renumber_content_slides};
pub use expand::strategies::{SlideDraft, expand_section};
pub use foundation::core::Canvas;
pub use foundation::error::{SlidecraftError, SlidecraftResult};
pub use foundation::text::{condense, split_sentences, truncate_at_word};
pub use theme::palette::{Gradient, Theme, contrast_ratio, fallback_theme};
pub use theme::synth::{synthesize_theme, theme_from_image_bytes};
