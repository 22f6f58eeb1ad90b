/// Source of randomness consumed by the tree builder.
///
/// Builders take `&mut impl RandomSource` instead of reading process-wide state, so a fixed
/// seed reproduces the same trees (and therefore the same image) on every run.
pub trait RandomSource {
    /// Next raw 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Uniform value in `[0, 1)` with 53 bits of precision.
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "choose_index on an empty range");
        // Multiply-shift keeps the top bits, which SplitMix64 mixes best.
        ((u128::from(self.next_u64()) * len as u128) >> 64) as usize
    }

    /// Fair coin: `true` when a uniform draw in `[0, 1)` is `>= 0.5`.
    fn coin(&mut self) -> bool {
        self.next_f64() >= 0.5
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }

    fn coin(&mut self) -> bool {
        (**self).coin()
    }
}

/// SplitMix64 generator, the default [`RandomSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a generator from `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from the wall clock, for runs that did not ask for a fixed seed.
    pub fn seed_from_time() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}

impl RandomSource for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
