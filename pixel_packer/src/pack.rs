/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Packing of pixel sources into big-endian RGB565 / ARGB8888 buffers.
//!
//! Quantization to RGB565 truncates: each channel keeps only its top bits
//! (`r >> 3`, `g >> 2`, `b >> 3`). No rounding or dithering is applied, which
//! keeps the output bit-exact for a given input.
//!
//! Output is row-major (top row first, left to right) with no header, padding
//! or row alignment. The pixel at `(x, y)` always lands at byte offset
//! `(y * width + x) * bytes_per_pixel`, so rows can be filled independently.

#[cfg(feature = "multithreaded")]
use rayon::prelude::*;

use crate::{Channels, OutputFormat, PackError, PixelSource};

pub const fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = (r >> 3) as u16;
    let g6 = (g >> 2) as u16;
    let b5 = (b >> 3) as u16;
    (r5 << 11) | (g6 << 5) | b5
}

pub const fn pack_argb8888(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Encodes one pixel into `out`, which must be exactly
/// `format.bytes_per_pixel()` long.
pub fn encode_pixel(channels: Channels, format: OutputFormat, out: &mut [u8]) {
    match format {
        OutputFormat::Rgb565 => {
            let (r, g, b) = channels.rgb();
            out.copy_from_slice(&pack_rgb565(r, g, b).to_be_bytes());
        }
        OutputFormat::Argb8888 => {
            let (r, g, b, a) = channels.rgba();
            out.copy_from_slice(&pack_argb8888(a, r, g, b).to_be_bytes());
        }
    }
}

/// Largest pixel count accepted for packing (1 GiB of ARGB8888 output).
pub const MAX_PIXELS: u64 = 1 << 28;

/// Number of bytes `pack` produces for a `width` x `height` source.
///
/// Fails with [`PackError::InvalidDimensions`] above [`MAX_PIXELS`] pixels or
/// when the length does not fit in memory.
pub fn packed_len(width: u32, height: u32, format: OutputFormat) -> Result<usize, PackError> {
    let pixels = width as u64 * height as u64;
    if pixels > MAX_PIXELS {
        return Err(PackError::InvalidDimensions {
            width,
            height,
            format,
        });
    }

    usize::try_from(pixels)
        .ok()
        .and_then(|pixels| pixels.checked_mul(format.bytes_per_pixel()))
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(PackError::InvalidDimensions {
            width,
            height,
            format,
        })
}

/// Packs every pixel of `source` into a newly allocated buffer.
///
/// Rows are packed in parallel when the `multithreaded` feature is enabled;
/// the result is identical to [`pack_serial`].
pub fn pack<S: PixelSource + ?Sized>(
    source: &S,
    format: OutputFormat,
) -> Result<Vec<u8>, PackError> {
    let mut out = alloc_output(source, format)?;
    pack_into(source, format, &mut out)?;
    Ok(out)
}

/// Same as [`pack`], but never leaves the calling thread.
pub fn pack_serial<S: PixelSource + ?Sized>(
    source: &S,
    format: OutputFormat,
) -> Result<Vec<u8>, PackError> {
    let mut out = alloc_output(source, format)?;
    pack_into_serial(source, format, &mut out)?;
    Ok(out)
}

/// Packs `source` into a caller-provided buffer of exactly
/// [`packed_len`] bytes.
pub fn pack_into<S: PixelSource + ?Sized>(
    source: &S,
    format: OutputFormat,
    out: &mut [u8],
) -> Result<(), PackError> {
    let Some(row_len) = check_output(source, format, out)? else {
        return Ok(());
    };

    #[cfg(feature = "multithreaded")]
    {
        out.par_chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| pack_row(source, format, y as u32, row));
    }

    #[cfg(not(feature = "multithreaded"))]
    {
        for (y, row) in out.chunks_exact_mut(row_len).enumerate() {
            pack_row(source, format, y as u32, row);
        }
    }

    Ok(())
}

pub fn pack_into_serial<S: PixelSource + ?Sized>(
    source: &S,
    format: OutputFormat,
    out: &mut [u8],
) -> Result<(), PackError> {
    let Some(row_len) = check_output(source, format, out)? else {
        return Ok(());
    };

    for (y, row) in out.chunks_exact_mut(row_len).enumerate() {
        pack_row(source, format, y as u32, row);
    }

    Ok(())
}

fn alloc_output<S: PixelSource + ?Sized>(
    source: &S,
    format: OutputFormat,
) -> Result<Vec<u8>, PackError> {
    let len = packed_len(source.width(), source.height(), format)?;
    log::debug!(
        "packing {}x{} as {} ({} bytes)",
        source.width(),
        source.height(),
        format,
        len
    );
    Ok(vec![0; len])
}

/// Validates `out` against the source and returns the byte length of one row,
/// or `None` when there is nothing to pack.
fn check_output<S: PixelSource + ?Sized>(
    source: &S,
    format: OutputFormat,
    out: &[u8],
) -> Result<Option<usize>, PackError> {
    let expected = packed_len(source.width(), source.height(), format)?;
    if out.len() != expected {
        return Err(PackError::LengthMismatch {
            expected,
            actual: out.len(),
        });
    }

    if expected == 0 {
        return Ok(None);
    }

    Ok(Some(source.width() as usize * format.bytes_per_pixel()))
}

fn pack_row<S: PixelSource + ?Sized>(source: &S, format: OutputFormat, y: u32, row: &mut [u8]) {
    for (x, out) in row.chunks_exact_mut(format.bytes_per_pixel()).enumerate() {
        encode_pixel(source.pixel(x as u32, y), format, out);
    }
}
