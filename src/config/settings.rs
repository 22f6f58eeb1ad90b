use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{ArtError, ArtResult};
use crate::render::pipeline::{RenderOpts, Strategy};

/// Render parameters, loadable from JSON.
///
/// Missing fields take their defaults: a 350x350 image with trees between 9 and 20
/// levels deep, automatic strategy selection and a time-derived seed.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Minimum tree depth (clamped to at least 1 after validation).
    pub min_depth: i32,
    /// Maximum tree depth (clamped to at least 1 after validation).
    pub max_depth: i32,
    /// Generator seed. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Forced strategy. `None` selects by workload size.
    pub strategy: Option<Strategy>,
    /// Worker threads for the parallel strategy.
    pub threads: Option<usize>,
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            width: 350,
            height: 350,
            min_depth: 9,
            max_depth: 20,
            seed: None,
            strategy: None,
            threads: None,
        }
    }
}

impl ArtConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ArtResult<Self> {
        serde_json::from_reader(r).map_err(|e| ArtError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON string.
    pub fn from_json_str(s: &str) -> ArtResult<Self> {
        serde_json::from_str(s).map_err(|e| ArtError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ArtResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ArtError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check dimensions, depth ordering and thread count.
    pub fn validate(&self) -> ArtResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ArtError::invalid_dimensions(self.width, self.height));
        }
        if self.min_depth > self.max_depth {
            return Err(ArtError::invalid_range(self.min_depth, self.max_depth));
        }
        if self.threads == Some(0) {
            return Err(ArtError::validation("config 'threads' must be >= 1 when set"));
        }
        Ok(())
    }

    /// Options for [`crate::render_with_opts`].
    pub fn render_opts(&self) -> RenderOpts {
        RenderOpts {
            strategy: self.strategy,
            threads: self.threads,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
