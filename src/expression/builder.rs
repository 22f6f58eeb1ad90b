use std::fmt;

use crate::{
    expression::node::{Coord, Expr, Operator},
    foundation::error::{ArtError, ArtResult},
    foundation::rng::RandomSource,
};

/// A randomly built expression: the root of one channel's function.
///
/// Depth bounds are consumed while building and are not stored.
#[derive(Clone, Debug, PartialEq)]
pub struct ExprTree {
    root: Expr,
}

impl ExprTree {
    /// Wrap an existing expression.
    pub fn from_expr(root: Expr) -> Self {
        Self { root }
    }

    /// Build a random tree whose every root-to-leaf path has depth in
    /// `[max(1, min_depth), max(1, max_depth)]`.
    ///
    /// The range is checked on the values as given, before clamping: `(4, 3)` and
    /// `(-1, -5)` both fail with [`ArtError::InvalidRange`], while `(-1, 9)` builds the
    /// same tree as `(1, 9)` for the same random sequence.
    #[tracing::instrument(skip(rng))]
    pub fn build<R>(min_depth: i32, max_depth: i32, rng: &mut R) -> ArtResult<Self>
    where
        R: RandomSource + ?Sized,
    {
        if min_depth > max_depth {
            return Err(ArtError::invalid_range(min_depth, max_depth));
        }
        let root = build_node(min_depth.max(1), max_depth.max(1), rng);
        tracing::trace!(depth = root.depth(), nodes = root.node_count(), "built tree");
        Ok(Self { root })
    }

    /// Evaluate the tree at `c`.
    #[inline]
    pub fn eval(&self, c: Coord) -> f64 {
        self.root.eval(c)
    }

    /// Root expression.
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Longest root-to-leaf operator count.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Shortest root-to-leaf operator count.
    pub fn min_depth(&self) -> usize {
        self.root.min_depth()
    }

    /// Total node count.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

impl fmt::Display for ExprTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

// Both bounds are already clamped to >= 1 here.
fn build_node<R>(min_depth: i32, max_depth: i32, rng: &mut R) -> Expr
where
    R: RandomSource + ?Sized,
{
    let op = Operator::ALL[rng.choose_index(Operator::ALL.len())];

    if max_depth > 1 && (min_depth > 1 || rng.coin()) {
        let next_min = (min_depth - 1).max(1);
        let next_max = max_depth - 1;
        let left = build_node(next_min, next_max, rng);
        let right = build_node(next_min, next_max, rng);
        return Expr::compose(op, left, right);
    }

    Expr::leaf(op)
}

#[cfg(test)]
#[path = "../../tests/unit/expression/builder.rs"]
mod tests;
