//! Geometry-derived character/line/bullet budgets per density preset.

pub mod limits;
