/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Shared helpers for unit tests.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use proptest::prelude::*;

use crate::{Channels, PixelSource};

pub fn solid_rgb(width: u32, height: u32, px: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(px))
}

pub fn solid_rgba(width: u32, height: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(px))
}

/// Each pixel is `(x, y, 0x40)`, so its position is visible in the output.
pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 0x40]))
}

/// Reports any size without backing pixels.
pub struct Unbounded {
    pub width: u32,
    pub height: u32,
}

impl PixelSource for Unbounded {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, _x: u32, _y: u32) -> Channels {
        Channels::Rgb { r: 0, g: 0, b: 0 }
    }
}

fn pixels(channels: u32) -> impl Strategy<Value = (u32, u32, Vec<u8>)> {
    (0u32..12, 0u32..12).prop_flat_map(move |(width, height)| {
        let len = (width * height * channels) as usize;
        (
            Just(width),
            Just(height),
            proptest::collection::vec(any::<u8>(), len),
        )
    })
}

/// Dimensions plus a matching RGB byte buffer.
pub fn rgb_pixels() -> impl Strategy<Value = (u32, u32, Vec<u8>)> {
    pixels(3)
}

/// Dimensions plus a matching RGBA byte buffer.
pub fn rgba_pixels() -> impl Strategy<Value = (u32, u32, Vec<u8>)> {
    pixels(4)
}
