//! Owned grayscale raster: `width * height` float samples in row-major order.

use common::{ImageInfo, Sample};
use errors::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    info: ImageInfo,
    samples: Vec<Sample>,
}

/// Validates `width` and `height` and returns the shape they describe.
pub fn checked_info(width: usize, height: usize) -> Result<ImageInfo> {
    if width == 0 || height == 0 {
        bail!(ErrorKind::ZeroDimension(width, height));
    }
    if width.checked_mul(height).is_none() {
        bail!(ErrorKind::TooLarge(width, height));
    }
    Ok(ImageInfo::new(width, height))
}

impl Raster {
    /// All-zero raster.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, 0.)
    }

    pub fn filled(width: usize, height: usize, value: Sample) -> Result<Self> {
        let info = checked_info(width, height)?;
        Ok(Self {
            info,
            samples: vec![value; info.len()],
        })
    }

    /// Zeroed raster for a shape that already passed `checked_info`.
    pub(crate) fn with_info(info: ImageInfo) -> Self {
        Self {
            info,
            samples: vec![0.; info.len()],
        }
    }

    pub fn from_samples(width: usize, height: usize, samples: Vec<Sample>) -> Result<Self> {
        let info = checked_info(width, height)?;
        if samples.len() != info.len() {
            bail!(ErrorKind::DimensionMismatch(info.len(), samples.len()));
        }
        Ok(Self { info, samples })
    }

    pub fn from_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self> {
        Self::from_samples(width, height, bytes.iter().map(|&b| b as Sample).collect())
    }

    pub fn width(&self) -> usize {
        self.info.width
    }

    pub fn height(&self) -> usize {
        self.info.height
    }

    pub fn info(&self) -> &ImageInfo {
        &self.info
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [Sample] {
        &mut self.samples
    }

    /// Sample at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// If `(x, y)` lies outside the raster.
    pub fn get(&self, x: usize, y: usize) -> Sample {
        assert!(x < self.info.width && y < self.info.height);
        self.samples[self.info.image_offset(x, y)]
    }

    /// Quantizes every sample to a byte by clamping to `[0, 255]` and
    /// truncating toward zero. NaN becomes 0.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.samples.iter().map(|&s| s as u8).collect()
    }
}
