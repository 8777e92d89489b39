//! Binary graymap (PGM `P5`) reading and writing.
//!
//! Files are `P5`, `width height`, a maximum sample value and then exactly
//! `width * height` bytes, one per pixel. `image`'s PNM decoder parses the
//! header; the sample bytes are read as stored, whatever the maximum value.

use errors::*;
use image::codecs::pnm::PnmDecoder;
use raster::{self, Raster};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

pub const MAGIC: &[u8] = b"P5";

/// Maximum sample value declared by every written file.
pub const MAX_VALUE: u32 = 255;

/// Reads the graymap at `path`.
pub fn decode(path: &Path) -> Result<Raster> {
    let file = File::open(path).chain_err(|| ErrorKind::Open(path.to_owned()))?;
    read(BufReader::new(file))
}

/// Writes `raster` to `path` as a graymap, creating or truncating the file.
pub fn encode(path: &Path, raster: &Raster) -> Result<()> {
    let file = File::create(path).chain_err(|| ErrorKind::Open(path.to_owned()))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, raster)?;
    writer.flush()?;
    Ok(())
}

pub fn read<R: BufRead>(mut reader: R) -> Result<Raster> {
    {
        let head = reader.fill_buf()?;
        if !head.starts_with(MAGIC) {
            bail!(ErrorKind::Format(head.iter().take(MAGIC.len()).cloned().collect()));
        }
    }

    let (mut reader, header) = PnmDecoder::new(reader)?.into_inner();
    if header.maximal_sample() > MAX_VALUE {
        bail!(ErrorKind::MaxValue(header.maximal_sample()));
    }

    let info = raster::checked_info(header.width() as usize, header.height() as usize)?;
    let mut bytes = vec![0; info.len()];
    reader.read_exact(&mut bytes)?;
    Raster::from_bytes(info.width, info.height, &bytes)
}

/// Writes `P5`, the dimensions and a maximum value of 255, then one byte per
/// sample (see [`Raster::to_bytes`] for the quantization).
pub fn write<W: Write>(mut writer: W, raster: &Raster) -> Result<()> {
    write!(
        writer,
        "P5\n{} {}\n{}\n",
        raster.width(),
        raster.height(),
        MAX_VALUE
    )?;
    writer.write_all(&raster.to_bytes())?;
    Ok(())
}
