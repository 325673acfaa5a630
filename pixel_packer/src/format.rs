/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Packed pixel formats and their bit layouts.

use core::fmt;
use core::str::FromStr;

use crate::PackError;

/// Target encoding of a conversion. Chosen once per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// 16 bits: 5 red, 6 green, 5 blue. Alpha is dropped.
    Rgb565,
    /// 32 bits: 8 bits each of alpha, red, green, blue, alpha most significant.
    Argb8888,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Rgb565, OutputFormat::Argb8888];

    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            OutputFormat::Rgb565 => 2,
            OutputFormat::Argb8888 => 4,
        }
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, OutputFormat::Argb8888)
    }

    pub const fn name(self) -> &'static str {
        match self {
            OutputFormat::Rgb565 => "rgb565",
            OutputFormat::Argb8888 => "argb8888",
        }
    }

    /// Where each channel lives inside a packed value of this format.
    pub const fn layout(self) -> ChannelLayout {
        match self {
            OutputFormat::Rgb565 => ChannelLayout {
                red: ChannelField::new(0xF800, 11, 5),
                green: ChannelField::new(0x07E0, 5, 6),
                blue: ChannelField::new(0x001F, 0, 5),
                alpha: None,
            },
            OutputFormat::Argb8888 => ChannelLayout {
                red: ChannelField::new(0x00FF_0000, 16, 8),
                green: ChannelField::new(0x0000_FF00, 8, 8),
                blue: ChannelField::new(0x0000_00FF, 0, 8),
                alpha: Some(ChannelField::new(0xFF00_0000, 24, 8)),
            },
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rgb565" => Ok(OutputFormat::Rgb565),
            "argb8888" => Ok(OutputFormat::Argb8888),
            _ => Err(PackError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Bit masks and shifts of every channel in a packed format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLayout {
    pub red: ChannelField,
    pub green: ChannelField,
    pub blue: ChannelField,
    pub alpha: Option<ChannelField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelField {
    pub mask: u32,
    pub shift: u8,
    pub bits: u8,
}

impl ChannelField {
    pub const fn new(mask: u32, shift: u8, bits: u8) -> Self {
        ChannelField { mask, shift, bits }
    }

    /// Reads the channel out of `packed`, aligned to the top of a byte.
    /// Bits the format never stored come back as zero.
    pub const fn extract(self, packed: u32) -> u8 {
        (((packed & self.mask) >> self.shift) << (8 - self.bits)) as u8
    }
}
