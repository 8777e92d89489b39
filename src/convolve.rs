//! Whole-image convolution with zero padding at the borders.
//!
//! Every entry point drives [`common::kernel::convolve`] over a set of output
//! rows. Rows are independent of each other, so an image may be processed as
//! one call or as several row bands with bit-identical results.

use common::kernel;
use common::{ImageInfo, MaskView, Sample};
use errors::*;
use mask::Mask;
use raster::{self, Raster};
use std::ops::Range;

fn fill_rows(
    input_samples: &[Sample],
    mask: &MaskView,
    info: &ImageInfo,
    first_row: usize,
    output_samples: &mut [Sample],
) {
    for (i, output_row) in output_samples.chunks_mut(info.width).enumerate() {
        let y = first_row + i;
        for (x, output) in output_row.iter_mut().enumerate() {
            *output = kernel::convolve(input_samples, mask, info, x, y);
        }
    }
}

/// Convolves `input` with `mask` into a freshly allocated raster of the same shape.
pub fn convolve(input: &Raster, mask: &Mask) -> Raster {
    let mut output = Raster::with_info(*input.info());
    fill_rows(
        input.samples(),
        &mask.view(),
        input.info(),
        0,
        output.samples_mut(),
    );
    output
}

/// Convolves `input` with `mask`, overwriting every sample of `output`.
pub fn convolve_into(input: &Raster, mask: &Mask, output: &mut Raster) -> Result<()> {
    if output.info() != input.info() {
        bail!(ErrorKind::DimensionMismatch(
            input.info().len(),
            output.info().len()
        ));
    }
    fill_rows(
        input.samples(),
        &mask.view(),
        input.info(),
        0,
        output.samples_mut(),
    );
    Ok(())
}

/// Computes only the output rows in `rows`, writing them to `output` as
/// `rows.len()` consecutive rows of `input.width()` samples.
pub fn convolve_rows(
    input: &Raster,
    mask: &Mask,
    rows: Range<usize>,
    output: &mut [Sample],
) -> Result<()> {
    if rows.start > rows.end || rows.end > input.height() {
        bail!(ErrorKind::RowRange(rows.start, rows.end, input.height()));
    }
    let expected = (rows.end - rows.start) * input.width();
    if output.len() != expected {
        bail!(ErrorKind::DimensionMismatch(expected, output.len()));
    }
    fill_rows(input.samples(), &mask.view(), input.info(), rows.start, output);
    Ok(())
}

/// Convolves a bare row-major buffer of `width * height` samples.
pub fn convolve_slice(
    input: &[Sample],
    width: usize,
    height: usize,
    mask: &Mask,
) -> Result<Vec<Sample>> {
    let info = raster::checked_info(width, height)?;
    if input.len() != info.len() {
        bail!(ErrorKind::DimensionMismatch(info.len(), input.len()));
    }
    let mut output = vec![0.; info.len()];
    fill_rows(input, &mask.view(), &info, 0, &mut output);
    Ok(output)
}
