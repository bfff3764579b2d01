//! Test display that allows pixel overdraw.
//!
//! `MockDisplay` from embedded-graphics panics when a pixel is drawn twice,
//! which doesn't work for screens that clear backgrounds then draw on top.
//! This simple framebuffer display allows overdraw for render tests and
//! headless scenario runs.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

/// Simple framebuffer display for tests that allows overdraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDisplay {
    pixels: Vec<BinaryColor>,
    width: u32,
    height: u32,
}

impl TestDisplay {
    /// Create a new test display with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![BinaryColor::Off; (width * height) as usize],
            width,
            height,
        }
    }

    /// Create a display matching the dashboard canvas (480x800).
    pub fn default_size() -> Self {
        Self::new(crate::DISPLAY_WIDTH, crate::DISPLAY_HEIGHT)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major pixel iterator.
    pub fn pixels(&self) -> impl Iterator<Item = BinaryColor> + '_ {
        self.pixels.iter().copied()
    }

    pub fn pixel(&self, point: Point) -> Option<BinaryColor> {
        self.index_of(point).map(|idx| self.pixels[idx])
    }

    /// Count of `On` (black) pixels on the whole display.
    pub fn black_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|&&c| c == BinaryColor::On).count()
    }

    /// Count of `On` pixels inside `area` (clipped to the display).
    pub fn black_pixels_in(&self, area: Rectangle) -> usize {
        area.points()
            .filter(|&p| self.pixel(p) == Some(BinaryColor::On))
            .count()
    }

    /// Copy of the pixels inside `area`, for comparing regions across frames.
    pub fn region(&self, area: Rectangle) -> Vec<BinaryColor> {
        area.points().filter_map(|p| self.pixel(p)).collect()
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        if point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
        {
            Some((point.y as u32 * self.width + point.x as u32) as usize)
        } else {
            None
        }
    }
}

impl DrawTarget for TestDisplay {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some(idx) = self.index_of(coord) {
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
