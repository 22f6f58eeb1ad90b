use crate::{
    expression::builder::ExprTree,
    expression::node::Coord,
    foundation::error::{ArtError, ArtResult},
    transform::remap::{EVAL_MAX, EVAL_MIN, Remap},
};

/// Pixel grid with its index-to-coordinate maps resolved once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    x_map: Remap,
    y_map: Remap,
}

impl PixelGrid {
    /// Grid of `width x height` pixels. Both must be non-zero.
    pub fn new(width: u32, height: u32) -> ArtResult<Self> {
        if width == 0 || height == 0 {
            return Err(ArtError::invalid_dimensions(width, height));
        }
        Ok(Self {
            width,
            height,
            x_map: Remap::new(0.0, f64::from(width), EVAL_MIN, EVAL_MAX)?,
            y_map: Remap::new(0.0, f64::from(height), EVAL_MIN, EVAL_MAX)?,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count.
    pub fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Always `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluation coordinate of column `i`, row `j`.
    #[inline]
    pub fn coord(&self, i: u32, j: u32) -> Coord {
        Coord::new(self.x_map.apply(f64::from(i)), self.y_map.apply(f64::from(j)))
    }

    /// Coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |j| (0..self.width).map(move |i| self.coord(i, j)))
    }

    /// Evaluate `tree` at every pixel, row-major.
    pub fn evaluate(&self, tree: &ExprTree) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.coords().map(|c| tree.eval(c)));
        out
    }
}

/// Evaluate one channel's tree over a `width x height` grid.
///
/// Returns one value per pixel in row-major order (`j * width + i`).
pub fn evaluate_grid(tree: &ExprTree, width: u32, height: u32) -> ArtResult<Vec<f64>> {
    Ok(PixelGrid::new(width, height)?.evaluate(tree))
}

#[cfg(test)]
#[path = "../../tests/unit/render/grid.rs"]
mod tests;
