//! Affine remapping between the pixel, evaluation and output domains.

use crate::foundation::error::{ArtError, ArtResult};

/// Lower bound of the evaluation domain and range.
pub const EVAL_MIN: f64 = -1.0;
/// Upper bound of the evaluation domain and range.
pub const EVAL_MAX: f64 = 1.0;

/// Map `value` from `[src_min, src_max]` onto `[dst_min, dst_max]`.
///
/// Values outside the source interval extrapolate linearly. Fails with
/// [`ArtError::DegenerateInterval`] when `src_min == src_max`.
pub fn remap(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> ArtResult<f64> {
    Ok(Remap::new(src_min, src_max, dst_min, dst_max)?.apply(value))
}

/// A validated affine map, reusable without re-checking the source interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Remap {
    src_min: f64,
    dst_min: f64,
    scale: f64,
}

impl Remap {
    /// Build the map `[src_min, src_max] -> [dst_min, dst_max]`.
    pub fn new(src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> ArtResult<Self> {
        if src_max == src_min {
            return Err(ArtError::DegenerateInterval {
                min: src_min,
                max: src_max,
            });
        }
        Ok(Self {
            src_min,
            dst_min,
            scale: (dst_max - dst_min) / (src_max - src_min),
        })
    }

    /// Apply the map to one value.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        self.scale * (value - self.src_min) + self.dst_min
    }
}

/// Convert an evaluation value in `[-1, 1]` to an 8-bit intensity.
///
/// Rounds to nearest with ties going up, so `0.0` lands on 128. Out-of-range inputs
/// saturate at 0 or 255.
#[inline]
pub fn quantize(value: f64) -> u8 {
    // 255 / 2 per unit of input; the interval is fixed so no validation is needed.
    let scaled = (value - EVAL_MIN) * (255.0 / (EVAL_MAX - EVAL_MIN));
    (scaled + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Map a pixel index along an axis of `extent` pixels into `[-1, 1)`.
///
/// Index `0` maps to `-1`; index `extent` (one past the last pixel) would map to `1`.
pub fn index_to_coord(index: u32, extent: u32) -> ArtResult<f64> {
    remap(f64::from(index), 0.0, f64::from(extent), EVAL_MIN, EVAL_MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/remap.rs"]
mod tests;
