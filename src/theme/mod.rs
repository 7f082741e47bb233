//! Image-derived color palettes with WCAG contrast enforced by construction.

pub mod palette;
pub mod quantize;
pub mod sample;
pub mod synth;
