/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::{io, path::Path};

use image::{DynamicImage, ImageReader, RgbImage, RgbaImage};
use pixel_packer::{Channels, OutputFormat, PixelSource};

use crate::error::ConvertError;

/// Decoded pixels narrowed to the channels the target format consumes.
pub enum Decoded {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl Decoded {
    /// RGB565 never stores alpha, so it is dropped here; ARGB8888 gets an
    /// opaque alpha channel when the image has none.
    pub fn for_format(image: DynamicImage, format: OutputFormat) -> Self {
        if format.has_alpha() {
            Decoded::Rgba(image.to_rgba8())
        } else {
            Decoded::Rgb(image.to_rgb8())
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Decoded::Rgb(img) => img.dimensions(),
            Decoded::Rgba(img) => img.dimensions(),
        }
    }
}

impl PixelSource for Decoded {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> Channels {
        match self {
            Decoded::Rgb(img) => img.pixel(x, y),
            Decoded::Rgba(img) => img.pixel(x, y),
        }
    }
}

/// Opens and decodes the image at `path`, guessing the container from its
/// contents.
pub fn open(path: &Path) -> Result<DynamicImage, ConvertError> {
    let reader = ImageReader::open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConvertError::SourceNotFound(path.to_path_buf()),
            _ => ConvertError::Io(e),
        })?
        .with_guessed_format()?;

    reader.decode().map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
