/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Reading packed buffers back into channel values.

use crate::{Channels, OutputFormat, PackError, PixelSource, packed_len};

/// Expands an RGB565 value to 8 bits per channel. Truncated bits come back as
/// zero, so re-packing the result yields the same value.
pub const fn unpack_rgb565(packed: u16) -> (u8, u8, u8) {
    let layout = OutputFormat::Rgb565.layout();
    let packed = packed as u32;
    (
        layout.red.extract(packed),
        layout.green.extract(packed),
        layout.blue.extract(packed),
    )
}

/// Splits an ARGB8888 value into `(a, r, g, b)`.
pub const fn unpack_argb8888(packed: u32) -> (u8, u8, u8, u8) {
    let layout = OutputFormat::Argb8888.layout();
    let a = match layout.alpha {
        Some(alpha) => alpha.extract(packed),
        None => Channels::OPAQUE,
    };
    (
        a,
        layout.red.extract(packed),
        layout.green.extract(packed),
        layout.blue.extract(packed),
    )
}

/// Decodes one big-endian packed pixel. `bytes` must be exactly
/// `format.bytes_per_pixel()` long.
pub fn decode_pixel(bytes: &[u8], format: OutputFormat) -> Channels {
    let packed = bytes
        .iter()
        .fold(0u32, |packed, &byte| (packed << 8) | byte as u32);

    let layout = format.layout();
    let r = layout.red.extract(packed);
    let g = layout.green.extract(packed);
    let b = layout.blue.extract(packed);

    match layout.alpha {
        Some(alpha) => Channels::Rgba {
            r,
            g,
            b,
            a: alpha.extract(packed),
        },
        None => Channels::Rgb { r, g, b },
    }
}

/// A packed buffer viewed as a pixel source, e.g. to repack ARGB8888 output as
/// RGB565. Dimensions are not stored in the packed data and must be supplied.
#[derive(Debug, Clone, Copy)]
pub struct PackedImage<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    format: OutputFormat,
}

impl<'a> PackedImage<'a> {
    pub fn new(
        data: &'a [u8],
        width: u32,
        height: u32,
        format: OutputFormat,
    ) -> Result<Self, PackError> {
        let expected = packed_len(width, height, format)?;
        if data.len() != expected {
            return Err(PackError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(PackedImage {
            data,
            width,
            height,
            format,
        })
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }
}

impl PixelSource for PackedImage<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Channels {
        let bpp = self.format.bytes_per_pixel();
        let offset = (y as usize * self.width as usize + x as usize) * bpp;
        decode_pixel(&self.data[offset..offset + bpp], self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use crate::{pack, pack_argb8888, pack_rgb565};
    use proptest::prelude::*;

    #[test]
    fn rgb565_expands_by_shifting() {
        assert_eq!(unpack_rgb565(0xFFFF), (0xF8, 0xFC, 0xF8));
        assert_eq!(unpack_rgb565(0xF800), (0xF8, 0, 0));
        assert_eq!(unpack_rgb565(0x0821), (8, 4, 8));
    }

    #[test]
    fn argb8888_splits_bytes() {
        assert_eq!(unpack_argb8888(0x8011_2233), (0x80, 0x11, 0x22, 0x33));
    }

    #[test]
    fn decodes_big_endian_pixels() {
        assert_eq!(
            decode_pixel(&[0xF8, 0x00], OutputFormat::Rgb565),
            Channels::Rgb { r: 0xF8, g: 0, b: 0 }
        );
        assert_eq!(
            decode_pixel(&[0x80, 0x11, 0x22, 0x33], OutputFormat::Argb8888),
            Channels::Rgba {
                r: 0x11,
                g: 0x22,
                b: 0x33,
                a: 0x80
            }
        );
    }

    #[test]
    fn rejects_mismatched_buffers() {
        let data = [0u8; 7];
        assert_eq!(
            PackedImage::new(&data, 2, 2, OutputFormat::Rgb565).unwrap_err(),
            PackError::LengthMismatch {
                expected: 8,
                actual: 7
            }
        );
    }

    #[test]
    fn argb8888_repacks_to_rgb565() {
        let img = solid_rgba(3, 2, [200, 100, 50, 10]);
        let argb = pack(&img, OutputFormat::Argb8888).unwrap();
        let packed = PackedImage::new(&argb, 3, 2, OutputFormat::Argb8888).unwrap();

        assert_eq!(packed.format(), OutputFormat::Argb8888);
        assert_eq!(packed.as_bytes(), argb.as_slice());
        assert_eq!(
            pack(&packed, OutputFormat::Rgb565).unwrap(),
            pack(&img, OutputFormat::Rgb565).unwrap()
        );
    }

    #[test]
    fn rgb565_repacks_as_opaque_argb8888() {
        let rgb565 = 0xF800u16.to_be_bytes();
        let packed = PackedImage::new(&rgb565, 1, 1, OutputFormat::Rgb565).unwrap();
        assert_eq!(
            pack(&packed, OutputFormat::Argb8888).unwrap(),
            [0xFF, 0xF8, 0x00, 0x00]
        );
    }

    proptest! {
        #[test]
        fn rgb565_requantization_is_idempotent(packed in any::<u16>()) {
            let (r, g, b) = unpack_rgb565(packed);
            prop_assert_eq!(pack_rgb565(r, g, b), packed);
        }

        #[test]
        fn argb8888_unpack_inverts_pack(packed in any::<u32>()) {
            let (a, r, g, b) = unpack_argb8888(packed);
            prop_assert_eq!(pack_argb8888(a, r, g, b), packed);
        }

        #[test]
        fn packed_image_reproduces_its_bytes(pixels in rgba_pixels()) {
            let (width, height, data) = pixels;
            let img = image::RgbaImage::from_raw(width, height, data).unwrap();
            for format in OutputFormat::ALL {
                let bytes = pack(&img, format).unwrap();
                let packed = PackedImage::new(&bytes, width, height, format).unwrap();
                prop_assert_eq!(pack(&packed, format).unwrap(), bytes);
            }
        }
    }
}
