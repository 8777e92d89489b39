#![cfg_attr(not(feature = "std"), no_std)]

pub mod kernel;

/// Intensity sample. Holds the 0-255 range with room for partial sums.
pub type Sample = f32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: usize,
    pub height: usize,
    pub stride_x: usize,
    pub stride_y: usize,
}

impl ImageInfo {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            stride_x: 1,
            stride_y: width,
        }
    }

    /// Number of samples in a row-major buffer of this shape.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn image_offset(&self, x: usize, y: usize) -> usize {
        x * self.stride_x + y * self.stride_y
    }

    /// Whether the signed position `(x, y)` lies inside the image.
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }
}

/// Borrowed square mask of odd side `width`, weights in row-major order.
#[derive(Debug, Clone, Copy)]
pub struct MaskView<'a> {
    pub weights: &'a [f32],
    pub width: usize,
}

impl<'a> MaskView<'a> {
    pub fn radius(&self) -> usize {
        self.width / 2
    }

    /// Weight applied to the neighbor at offset `(dx, dy)` from the center.
    pub fn weight(&self, dx: isize, dy: isize) -> f32 {
        let r = self.radius() as isize;
        self.weights[((dy + r) as usize) * self.width + (dx + r) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_row_major() {
        let info = ImageInfo::new(5, 3);
        assert_eq!(info.len(), 15);
        assert_eq!(info.image_offset(0, 0), 0);
        assert_eq!(info.image_offset(4, 0), 4);
        assert_eq!(info.image_offset(0, 1), 5);
        assert_eq!(info.image_offset(4, 2), 14);
    }

    #[test]
    fn contains_rejects_every_side() {
        let info = ImageInfo::new(4, 2);
        assert!(info.contains(0, 0));
        assert!(info.contains(3, 1));
        assert!(!info.contains(-1, 0));
        assert!(!info.contains(0, -1));
        assert!(!info.contains(4, 0));
        assert!(!info.contains(0, 2));
    }

    #[test]
    fn mask_weight_addresses_offsets() {
        let weights = [0., 1., 2., 3., 4., 5., 6., 7., 8.];
        let mask = MaskView {
            weights: &weights,
            width: 3,
        };
        assert_eq!(mask.radius(), 1);
        assert_eq!(mask.weight(-1, -1), 0.);
        assert_eq!(mask.weight(0, -1), 1.);
        assert_eq!(mask.weight(0, 0), 4.);
        assert_eq!(mask.weight(1, 1), 8.);
    }
}
