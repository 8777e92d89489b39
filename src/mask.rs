//! Square convolution masks.

use common::MaskView;
use errors::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    width: usize,
    weights: Vec<f32>,
}

fn check_width(width: usize) -> Result<()> {
    if width == 0 || width % 2 == 0 {
        bail!(ErrorKind::MaskWidth(width));
    }
    Ok(())
}

impl Mask {
    /// Box filter: every one of the `width * width` weights is `1 / (width * width)`.
    pub fn averaging(width: usize) -> Result<Self> {
        check_width(width)?;
        let taps = width * width;
        Ok(Self {
            width,
            weights: vec![1.0 / taps as f32; taps],
        })
    }

    /// Mask from explicit row-major weights.
    pub fn from_weights(width: usize, weights: Vec<f32>) -> Result<Self> {
        check_width(width)?;
        if weights.len() != width * width {
            bail!(ErrorKind::MaskWeights(width * width, weights.len()));
        }
        Ok(Self { width, weights })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn view(&self) -> MaskView<'_> {
        MaskView {
            weights: &self.weights,
            width: self.width,
        }
    }
}
