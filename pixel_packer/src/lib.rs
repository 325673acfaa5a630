/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Converts decoded images into raw big-endian RGB565 or ARGB8888 pixel data.
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use pixel_packer::{OutputFormat, pack};
//!
//! let img = RgbImage::from_pixel(1, 1, Rgb([255, 255, 255]));
//! assert_eq!(pack(&img, OutputFormat::Rgb565)?, [0xFF, 0xFF]);
//! assert_eq!(pack(&img, OutputFormat::Argb8888)?, [0xFF, 0xFF, 0xFF, 0xFF]);
//! # Ok::<(), pixel_packer::PackError>(())
//! ```

mod channels;
mod error;
mod format;
mod pack;
mod source;
mod unpack;

#[cfg(test)]
mod test_prelude;

pub use channels::Channels;
pub use error::PackError;
pub use format::{ChannelField, ChannelLayout, OutputFormat};
pub use pack::{
    MAX_PIXELS, encode_pixel, pack, pack_argb8888, pack_into, pack_into_serial, pack_rgb565,
    pack_serial, packed_len,
};
pub use source::PixelSource;
pub use unpack::{PackedImage, decode_pixel, unpack_argb8888, unpack_rgb565};
