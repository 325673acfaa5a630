/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use core::ops::Deref;

use image::{DynamicImage, GenericImageView, ImageBuffer, Rgb, Rgba};

use crate::Channels;

/// Read-only view of a decoded pixel grid.
///
/// Implementors must answer `pixel(x, y)` for every `x < width()` and
/// `y < height()`. The packer never asks for anything outside that range and
/// does not retain the source past the call. `Sync` is required so rows can be
/// packed from several threads.
pub trait PixelSource: Sync {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pixel(&self, x: u32, y: u32) -> Channels;
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel(&self, x: u32, y: u32) -> Channels {
        (**self).pixel(x, y)
    }
}

impl<C> PixelSource for ImageBuffer<Rgb<u8>, C>
where
    C: Deref<Target = [u8]> + Sync,
{
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Channels {
        (*self.get_pixel(x, y)).into()
    }
}

impl<C> PixelSource for ImageBuffer<Rgba<u8>, C>
where
    C: Deref<Target = [u8]> + Sync,
{
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Channels {
        (*self.get_pixel(x, y)).into()
    }
}

/// Any decoded image. Sources whose color type has no alpha report
/// [`Channels::Rgb`], so their alpha falls back to opaque.
impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Channels {
        let [r, g, b, a] = GenericImageView::get_pixel(self, x, y).0;
        if self.color().has_alpha() {
            Channels::Rgba { r, g, b, a }
        } else {
            Channels::Rgb { r, g, b }
        }
    }
}
