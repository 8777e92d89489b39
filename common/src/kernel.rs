use super::{ImageInfo, MaskView, Sample};

/// Output sample at `(x, y)`: the mask-weighted sum of its neighborhood.
///
/// Neighbors outside the image contribute nothing. Border pixels therefore get
/// a partial sum over the in-bounds taps only, without renormalizing the mask.
/// Each output depends only on `input`, so any pixel order gives the same result.
pub fn convolve(
    input_samples: &[Sample],
    mask: &MaskView,
    info: &ImageInfo,
    x: usize,
    y: usize,
) -> Sample {
    debug_assert!(x < info.width && y < info.height);

    let radius = mask.radius() as isize;

    let mut output: Sample = 0.;
    for dy in -radius..radius + 1 {
        for dx in -radius..radius + 1 {
            let x2 = x as isize + dx;
            let y2 = y as isize + dy;
            if !info.contains(x2, y2) {
                continue;
            }
            output += mask.weight(dx, dy) * input_samples[info.image_offset(x2 as usize, y2 as usize)];
        }
    }
    output
}
