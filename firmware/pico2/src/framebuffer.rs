//! RAM framebuffer with dirty window tracking.
//!
//! The panel is written over SPI only on `end_frame`, so every pixel write of
//! a redraw pass lands here first. Alongside the pixels the buffer keeps the
//! bounding box of everything touched since the last flush; the flush then
//! sends only that window.
//!
//! # Memory Layout
//!
//! 480x320 RGB565 pixels, row-major, 2 bytes per pixel in big-endian order
//! (the byte order the ST7796S expects on the wire): 307,200 bytes.

use core::convert::Infallible;

use clock_common::PanelError;
use clock_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Width in pixels.
pub const WIDTH: usize = SCREEN_WIDTH as usize;

/// Height in pixels.
pub const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// Framebuffer size in bytes.
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT * 2;

/// Smallest rectangle containing both `a` and `b`.
fn union(
    a: &Rectangle,
    b: &Rectangle,
) -> Rectangle {
    match (a.bottom_right(), b.bottom_right()) {
        (Some(a_br), Some(b_br)) => {
            Rectangle::with_corners(a.top_left.component_min(b.top_left), a_br.component_max(b_br))
        }
        (Some(_), None) => *a,
        _ => *b,
    }
}

/// Pixel store for one panel plus the window changed since the last flush.
pub struct Framebuffer<'a> {
    pixels: &'a mut [u8],
    dirty: Option<Rectangle>,
}

impl<'a> Framebuffer<'a> {
    /// Wrap a buffer of exactly [`BUFFER_SIZE`] bytes.
    pub fn new(pixels: &'a mut [u8]) -> Result<Self, PanelError> {
        if pixels.len() != BUFFER_SIZE {
            return Err(PanelError::InvalidConfig);
        }
        Ok(Self { pixels, dirty: None })
    }

    /// Window changed since the last [`take_dirty`](Self::take_dirty).
    pub const fn dirty(&self) -> Option<Rectangle> { self.dirty }

    /// Return and reset the dirty window.
    pub fn take_dirty(&mut self) -> Option<Rectangle> { self.dirty.take() }

    /// Wire bytes of `width` pixels of row `y`, starting at column `x`.
    pub fn row(
        &self,
        x: usize,
        y: usize,
        width: usize,
    ) -> &[u8] {
        let start = (y * WIDTH + x) * 2;
        &self.pixels[start..start + width * 2]
    }

    /// Add `area` to the dirty window.
    pub fn mark_dirty(
        &mut self,
        area: Rectangle,
    ) {
        self.dirty = Some(match self.dirty {
            Some(dirty) => union(&dirty, &area),
            None => area,
        });
    }

    #[inline]
    fn write(
        &mut self,
        x: usize,
        y: usize,
        color: Rgb565,
    ) {
        let idx = (y * WIDTH + x) * 2;
        let raw: RawU16 = color.into();
        self.pixels[idx..idx + 2].copy_from_slice(&raw.into_inner().to_be_bytes());
    }
}

impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size { Size::new(WIDTH as u32, HEIGHT as u32) }
}

impl DrawTarget for Framebuffer<'_> {
    type Color = Rgb565;
    type Error = Infallible;

    /// Pixels outside the panel are dropped.
    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        let mut touched: Option<(Point, Point)> = None;
        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            self.write(point.x as usize, point.y as usize, color);
            touched = Some(match touched {
                Some((min, max)) => (min.component_min(point), max.component_max(point)),
                None => (point, point),
            });
        }
        if let Some((min, max)) = touched {
            self.mark_dirty(Rectangle::with_corners(min, max));
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }

        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        let x = area.top_left.x as usize;
        let width = area.size.width as usize;
        for y in area.rows() {
            let start = (y as usize * WIDTH + x) * 2;
            for pixel in self.pixels[start..start + width * 2].chunks_exact_mut(2) {
                pixel.copy_from_slice(&bytes);
            }
        }
        self.mark_dirty(area);
        Ok(())
    }
}

/// Expand big-endian RGB565 wire bytes to RGB666 (3 bytes per pixel, color
/// in the upper 6 bits). Returns the number of bytes written to `out`.
pub fn expand_to_rgb666(
    rgb565: &[u8],
    out: &mut [u8],
) -> usize {
    let mut written = 0;
    for (src, dst) in rgb565.chunks_exact(2).zip(out.chunks_exact_mut(3)) {
        let color = Rgb565::from(RawU16::new(u16::from_be_bytes([src[0], src[1]])));
        let wide = Rgb888::from(color);
        dst.copy_from_slice(&[wide.r() & 0xFC, wide.g() & 0xFC, wide.b() & 0xFC]);
        written += 3;
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> Vec<u8> { vec![0; BUFFER_SIZE] }

    #[test]
    fn test_rejects_wrong_size() {
        let mut short = vec![0u8; BUFFER_SIZE - 2];
        assert_eq!(Framebuffer::new(&mut short).err(), Some(PanelError::InvalidConfig));
    }

    #[test]
    fn test_pixel_bytes_are_big_endian() {
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels).unwrap();
        Pixel(Point::new(1, 0), Rgb565::RED).draw(&mut fb).unwrap();
        // Red is 0xF800.
        assert_eq!(fb.row(1, 0, 1), &[0xF8, 0x00]);
        assert_eq!(fb.row(0, 0, 1), &[0x00, 0x00]);
    }

    #[test]
    fn test_dirty_window_grows_and_resets() {
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels).unwrap();
        assert_eq!(fb.dirty(), None);

        fb.fill_solid(&Rectangle::new(Point::new(10, 10), Size::new(5, 5)), Rgb565::RED).unwrap();
        fb.draw_iter([Pixel(Point::new(40, 2), Rgb565::RED)]).unwrap();
        assert_eq!(fb.dirty(), Some(Rectangle::with_corners(Point::new(10, 2), Point::new(40, 14))));

        let taken = fb.take_dirty().unwrap();
        assert_eq!(fb.dirty(), None);

        // A failed flush puts the window back.
        fb.mark_dirty(taken);
        assert_eq!(fb.dirty(), Some(taken));
    }

    #[test]
    fn test_offscreen_writes_are_dropped() {
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels).unwrap();
        fb.draw_iter([Pixel(Point::new(-1, 0), Rgb565::RED), Pixel(Point::new(0, HEIGHT as i32), Rgb565::RED)])
            .unwrap();
        assert_eq!(fb.dirty(), None);

        fb.fill_solid(&Rectangle::new(Point::new(470, 310), Size::new(40, 40)), Rgb565::RED).unwrap();
        assert_eq!(fb.dirty(), Some(Rectangle::new(Point::new(470, 310), Size::new(10, 10))));
    }

    #[test]
    fn test_fill_solid_writes_rows() {
        let mut pixels = buffer();
        let mut fb = Framebuffer::new(&mut pixels).unwrap();
        fb.fill_solid(&Rectangle::new(Point::new(2, 3), Size::new(3, 2)), Rgb565::WHITE).unwrap();
        assert_eq!(fb.row(2, 3, 3), &[0xFF; 6]);
        assert_eq!(fb.row(2, 4, 3), &[0xFF; 6]);
        assert_eq!(fb.row(1, 3, 1), &[0x00; 2]);
        assert_eq!(fb.row(2, 5, 1), &[0x00; 2]);
    }

    #[test]
    fn test_expand_to_rgb666() {
        let mut out = [0u8; 6];
        // White, pure blue
        let written = expand_to_rgb666(&[0xFF, 0xFF, 0x00, 0x1F], &mut out);
        assert_eq!(written, 6);
        assert_eq!(out, [0xFC, 0xFC, 0xFC, 0x00, 0x00, 0xFC]);
    }
}
