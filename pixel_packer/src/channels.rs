/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

/// Channel values of a single source pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Channels {
    /// Alpha assumed for sources without an alpha channel.
    pub const OPAQUE: u8 = 255;

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Channels::Rgb { r, g, b } | Channels::Rgba { r, g, b, .. } => (r, g, b),
        }
    }

    pub const fn rgba(self) -> (u8, u8, u8, u8) {
        match self {
            Channels::Rgb { r, g, b } => (r, g, b, Self::OPAQUE),
            Channels::Rgba { r, g, b, a } => (r, g, b, a),
        }
    }

    pub const fn alpha(self) -> Option<u8> {
        match self {
            Channels::Rgb { .. } => None,
            Channels::Rgba { a, .. } => Some(a),
        }
    }
}

impl From<image::Rgb<u8>> for Channels {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Channels::Rgb { r, g, b }
    }
}

impl From<image::Rgba<u8>> for Channels {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Channels::Rgba { r, g, b, a }
    }
}
