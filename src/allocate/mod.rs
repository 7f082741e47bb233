//! Rationing of the global slide budget across expanded sections.

pub mod plan;
