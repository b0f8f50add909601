//! Pixel compositor.
//!
//! Two ways to put color on the panel:
//!
//! | Operation | Set bits | Unset bits |
//! |-----------|----------|------------|
//! | [`paint`] (stencil) | foreground color | untouched |
//! | [`fill_rect`] | every pixel gets the color | - |
//!
//! Stencil compositing never erases: repainting a field over old digits needs
//! a `fill_rect` of the background first. Neither operation clips; keeping
//! coordinates on the panel is the layout's job.

use embedded_graphics::Drawable;
use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, Point};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;

use crate::assets::Glyph;

/// A glyph placed on the screen with a foreground color.
#[derive(Clone, Copy, Debug)]
pub struct Stencil<'a> {
    glyph: &'a Glyph,
    origin: Point,
    color: Rgb565,
}

impl<'a> Stencil<'a> {
    pub const fn new(
        glyph: &'a Glyph,
        origin: Point,
        color: Rgb565,
    ) -> Self {
        Self { glyph, origin, color }
    }

    /// Pixels for the set bits of the mask, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel<Rgb565>> + 'a {
        let Self { glyph, origin, color } = *self;
        (0..glyph.height())
            .flat_map(move |dy| (0..glyph.width()).map(move |dx| (dx, dy)))
            .filter(move |&(dx, dy)| glyph.is_set(dx, dy))
            .map(move |(dx, dy)| Pixel(origin + Point::new(dx as i32, dy as i32), color))
    }
}

impl Dimensions for Stencil<'_> {
    fn bounding_box(&self) -> Rectangle { Rectangle::new(self.origin, self.glyph.size()) }
}

impl Drawable for Stencil<'_> {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.draw_iter(self.pixels())
    }
}

/// Stencil `glyph` onto `target` with its top-left corner at `origin`.
pub fn paint<D>(
    target: &mut D,
    origin: Point,
    glyph: &Glyph,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Stencil::new(glyph, origin, color).draw(target)
}

/// Opaque fill of `area`.
#[inline]
pub fn fill_rect<D>(
    target: &mut D,
    area: &Rectangle,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.fill_solid(area, color)
}
