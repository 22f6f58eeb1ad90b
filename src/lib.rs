//! Procedural imagery from random recursive expression trees.
//!
//! Each colour channel is driven by its own randomly built expression tree mapping a
//! coordinate in `[-1, 1]^2` to a value in `[-1, 1]`. Rendering evaluates the three trees
//! at every pixel and quantizes the results into an RGB8 frame.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `RandomSource + depth range -> ChannelTrees` (red, green, blue)
//! 2. **Evaluate**: `ExprTree + grid -> Vec<f64>` per channel, or all three per pixel
//! 3. **Assemble**: quantize into a [`FrameRGB`]
//!
//! Small images run on the calling thread. Images of 64x64 pixels or more, on machines
//! with at least two workers, evaluate the three channels as three tasks on a rayon pool.
//! Both paths produce the same bytes.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a seeded [`RandomSource`] fully determines the trees, and trees
//!   fully determine the image.
//! - **No IO in the core**: encoding is left to the caller (see [`FrameRGB::into_rgb_image`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod expression;
mod foundation;
mod render;
mod transform;

pub use config::settings::ArtConfig;
pub use expression::builder::ExprTree;
pub use expression::node::{Axis, BinaryKind, Coord, Expr, Operator, UnaryKind};
pub use foundation::error::{ArtError, ArtResult};
pub use foundation::rng::{RandomSource, SplitMix64};
pub use render::frame::FrameRGB;
pub use render::grid::{PixelGrid, evaluate_grid};
pub use render::pipeline::{
    ChannelTrees, PARALLEL_PIXEL_THRESHOLD, RenderOpts, RenderStats, Strategy, render,
    render_trees, render_with_opts, select_strategy,
};
pub use transform::remap::{EVAL_MAX, EVAL_MIN, Remap, index_to_coord, quantize, remap};
