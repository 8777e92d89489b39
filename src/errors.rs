use std::path::PathBuf;

error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Image(::image::ImageError);
    }

    errors {
        Open(path: PathBuf) {
            description("could not open file")
            display("could not open '{}'", path.display())
        }

        Format(magic: Vec<u8>) {
            description("not a binary graymap")
            display("not a binary graymap (P5): file starts with {:?}", String::from_utf8_lossy(magic))
        }

        MaxValue(maxval: u32) {
            description("samples do not fit in one byte")
            display("maximum sample value {} does not fit in one byte", maxval)
        }

        ZeroDimension(width: usize, height: usize) {
            description("image has no pixels")
            display("image dimensions must be positive, got {}×{}", width, height)
        }

        TooLarge(width: usize, height: usize) {
            description("image too large")
            display("image of {}×{} pixels does not fit in memory", width, height)
        }

        DimensionMismatch(expected: usize, actual: usize) {
            description("buffer size does not match image dimensions")
            display("buffer holds {} samples, expected {}", actual, expected)
        }

        RowRange(start: usize, end: usize, height: usize) {
            description("row range outside image")
            display("rows {}..{} are outside an image of height {}", start, end, height)
        }

        MaskWidth(width: usize) {
            description("invalid mask width")
            display("mask width must be a positive odd integer, got {}", width)
        }

        MaskWeights(expected: usize, actual: usize) {
            description("mask weight count does not match its width")
            display("mask has {} weights, expected {}", actual, expected)
        }

        Usage(msg: String) {
            description("invalid command line")
            display("{}", msg)
        }
    }
}
