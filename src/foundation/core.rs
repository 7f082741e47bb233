use crate::foundation::error::{SlidecraftError, SlidecraftResult};

/// Target canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting degenerate dimensions.
    pub fn new(width: u32, height: u32) -> SlidecraftResult<Self> {
        if width == 0 || height == 0 {
            return Err(SlidecraftError::validation(
                "Canvas dimensions must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// The edge length of the largest square that fits this canvas.
    ///
    /// The square aspect is the binding constraint for all text budgets;
    /// portrait canvases reuse the square-derived limits and under-fill
    /// rather than overflow.
    pub fn square_edge(self) -> u32 {
        self.width.min(self.height)
    }
}
