/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use thiserror::Error;

use crate::OutputFormat;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PackError {
    /// The packed size of a `width` x `height` image cannot be represented.
    #[error("invalid dimensions {width}x{height}: packed {format} size overflows")]
    InvalidDimensions {
        width: u32,
        height: u32,
        format: OutputFormat,
    },
    #[error("unsupported format: {0}. Valid formats are: rgb565, argb8888")]
    UnsupportedFormat(String),
    #[error("packed buffer is {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}
