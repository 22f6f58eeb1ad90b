use crate::foundation::error::{ArtError, ArtResult};

/// Rendered image: row-major RGB8, three bytes per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGB {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 3` bytes, row by row.
    pub data: Vec<u8>,
}

impl FrameRGB {
    /// Wrap raw RGB8 bytes, checking the length against the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> ArtResult<Self> {
        if width == 0 || height == 0 {
            return Err(ArtError::invalid_dimensions(width, height));
        }
        let expected = (width as usize) * (height as usize) * 3;
        if data.len() != expected {
            return Err(ArtError::validation(format!(
                "frame data has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// The `[r, g, b]` triple at column `x`, row `y`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data.chunks_exact(3).map(|p| [p[0], p[1], p[2]])
    }

    /// Convert into an [`image::RgbImage`] for encoding.
    pub fn into_rgb_image(self) -> ArtResult<image::RgbImage> {
        let (width, height) = (self.width, self.height);
        image::RgbImage::from_raw(width, height, self.data).ok_or_else(|| {
            ArtError::validation(format!("frame buffer does not fit {width}x{height}"))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
