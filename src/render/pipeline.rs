use std::time::{Duration, Instant};

use crate::{
    expression::builder::ExprTree,
    foundation::error::{ArtError, ArtResult},
    foundation::rng::RandomSource,
    render::frame::FrameRGB,
    render::grid::PixelGrid,
    transform::remap::quantize,
};

/// Below this many pixels the sequential strategy wins: pool dispatch costs more than
/// it saves. Measured with `recursive-art bench`.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 64 * 64;

/// How the three channels are evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// One loop over the pixels, evaluating all three trees at each one.
    Sequential,
    /// One pool task per channel over the whole grid, zipped afterwards.
    Parallel,
}

/// Pick a strategy for `pixels` pixels with `workers` threads available.
pub fn select_strategy(pixels: usize, workers: usize) -> Strategy {
    if pixels < PARALLEL_PIXEL_THRESHOLD || workers < 2 {
        Strategy::Sequential
    } else {
        Strategy::Parallel
    }
}

/// Render options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOpts {
    /// Force a strategy; `None` picks one from the workload size.
    pub strategy: Option<Strategy>,
    /// Worker threads for the parallel strategy; `None` runs on rayon's global pool.
    pub threads: Option<usize>,
}

/// What a render did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStats {
    /// Strategy that actually ran.
    pub strategy: Strategy,
    /// Pixels written.
    pub pixels: usize,
    /// Worker threads considered when selecting the strategy.
    pub workers: usize,
    /// Wall-clock time spent evaluating and assembling.
    pub elapsed: Duration,
}

/// Red, green and blue trees for one image.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelTrees {
    /// Drives the red channel.
    pub red: ExprTree,
    /// Drives the green channel.
    pub green: ExprTree,
    /// Drives the blue channel.
    pub blue: ExprTree,
}

impl ChannelTrees {
    /// Build red, then green, then blue from the same depth range and generator.
    pub fn build<R>(min_depth: i32, max_depth: i32, rng: &mut R) -> ArtResult<Self>
    where
        R: RandomSource + ?Sized,
    {
        Ok(Self {
            red: ExprTree::build(min_depth, max_depth, rng)?,
            green: ExprTree::build(min_depth, max_depth, rng)?,
            blue: ExprTree::build(min_depth, max_depth, rng)?,
        })
    }
}

/// Build three random trees and render a `width x height` image with them.
///
/// Dimensions are checked before any randomness is consumed.
pub fn render<R>(
    width: u32,
    height: u32,
    min_depth: i32,
    max_depth: i32,
    rng: &mut R,
) -> ArtResult<FrameRGB>
where
    R: RandomSource + ?Sized,
{
    render_with_opts(width, height, min_depth, max_depth, rng, &RenderOpts::default())
        .map(|(frame, _)| frame)
}

/// [`render`] with explicit options; also returns [`RenderStats`].
#[tracing::instrument(skip(rng))]
pub fn render_with_opts<R>(
    width: u32,
    height: u32,
    min_depth: i32,
    max_depth: i32,
    rng: &mut R,
    opts: &RenderOpts,
) -> ArtResult<(FrameRGB, RenderStats)>
where
    R: RandomSource + ?Sized,
{
    if width == 0 || height == 0 {
        return Err(ArtError::invalid_dimensions(width, height));
    }
    let trees = ChannelTrees::build(min_depth, max_depth, rng)?;
    render_trees(&trees, width, height, opts)
}

/// Render pre-built trees.
///
/// Sequential and parallel strategies produce byte-identical frames for the same trees
/// and dimensions.
#[tracing::instrument(skip(trees))]
pub fn render_trees(
    trees: &ChannelTrees,
    width: u32,
    height: u32,
    opts: &RenderOpts,
) -> ArtResult<(FrameRGB, RenderStats)> {
    let grid = PixelGrid::new(width, height)?;
    if opts.threads == Some(0) {
        return Err(ArtError::validation(
            "render option 'threads' must be >= 1 when set",
        ));
    }

    let workers = available_workers(opts.threads);
    let strategy = opts
        .strategy
        .unwrap_or_else(|| select_strategy(grid.len(), workers));
    tracing::debug!(?strategy, pixels = grid.len(), workers, "selected strategy");

    let started = Instant::now();
    let data = match strategy {
        Strategy::Sequential => render_sequential(trees, &grid),
        Strategy::Parallel => match opts.threads {
            Some(n) => render_parallel(trees, &grid, Some(&build_thread_pool(n)?)),
            None => render_parallel(trees, &grid, None),
        },
    };
    let elapsed = started.elapsed();

    let frame = FrameRGB::from_raw(width, height, data)?;
    let stats = RenderStats {
        strategy,
        pixels: grid.len(),
        workers,
        elapsed,
    };
    Ok((frame, stats))
}

fn render_sequential(trees: &ChannelTrees, grid: &PixelGrid) -> Vec<u8> {
    let mut data = Vec::with_capacity(grid.len() * 3);
    for c in grid.coords() {
        data.push(quantize(trees.red.eval(c)));
        data.push(quantize(trees.green.eval(c)));
        data.push(quantize(trees.blue.eval(c)));
    }
    data
}

/// Worker count used for strategy selection: the override, or the machine's available
/// parallelism.
fn available_workers(threads: Option<usize>) -> usize {
    threads.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(std::num::NonZeroUsize::get)
            .unwrap_or(1)
    })
}

// `None` runs on rayon's global pool; a sized pool is only built for an explicit override.
fn render_parallel(
    trees: &ChannelTrees,
    grid: &PixelGrid,
    pool: Option<&rayon::ThreadPool>,
) -> Vec<u8> {
    let mut red = Vec::new();
    let mut green = Vec::new();
    let mut blue = Vec::new();

    // The scope joins all three tasks before the vectors are read.
    let slots = [&mut red, &mut green, &mut blue];
    match pool {
        Some(pool) => pool.scope(move |s| spawn_channels(s, trees, grid, slots)),
        None => rayon::scope(move |s| spawn_channels(s, trees, grid, slots)),
    }

    let mut data = Vec::with_capacity(grid.len() * 3);
    for ((r, g), b) in red.iter().zip(&green).zip(&blue) {
        data.extend_from_slice(&[quantize(*r), quantize(*g), quantize(*b)]);
    }
    data
}

/// One task per channel; each task owns its output vector.
fn spawn_channels<'scope>(
    s: &rayon::Scope<'scope>,
    trees: &'scope ChannelTrees,
    grid: &'scope PixelGrid,
    [red, green, blue]: [&'scope mut Vec<f64>; 3],
) {
    s.spawn(move |_| *red = grid.evaluate(&trees.red));
    s.spawn(move |_| *green = grid.evaluate(&trees.green));
    s.spawn(move |_| *blue = grid.evaluate(&trees.blue));
}

fn build_thread_pool(threads: usize) -> ArtResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| ArtError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
