//! Decimal digit sequences and their rendering.
//!
//! A value is split into base-10 digits least-significant first, zero-padded
//! to a minimum count and then drawn most-significant first, one font advance
//! (`width + spacing`) apart. Nothing is allocated; the sequence lives in a
//! `heapless::Vec` sized for the widest `u32`.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb565;
use heapless::Vec;

use crate::assets::Font;
use crate::compositor::paint;

/// Digits in `u32::MAX`.
pub const MAX_DIGITS: usize = 10;

/// Decimal digits of a value, most significant first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digits(Vec<u8, MAX_DIGITS>);

impl Digits {
    /// Digits of `value`, zero-padded on the left to `min_digits`.
    ///
    /// `min_digits` is capped at [`MAX_DIGITS`]. Zero with `min_digits == 0`
    /// produces an empty sequence.
    pub fn new(
        mut value: u32,
        min_digits: usize,
    ) -> Self {
        let min_digits = min_digits.min(MAX_DIGITS);
        let mut digits = Vec::new();
        while value > 0 {
            // At most MAX_DIGITS iterations for any u32.
            let _ = digits.push((value % 10) as u8);
            value /= 10;
        }
        while digits.len() < min_digits {
            let _ = digits.push(0);
        }
        digits.reverse();
        Self(digits)
    }

    /// Digits of `value` truncated toward zero.
    ///
    /// The conversion saturates: negative values and NaN become 0, values
    /// above `u32::MAX` become `u32::MAX`.
    pub fn from_truncated(
        value: f32,
        min_digits: usize,
    ) -> Self {
        Self::new(value as u32, min_digits)
    }

    pub fn as_slice(&self) -> &[u8] { &self.0 }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

/// Draw `value` with `font`, first glyph at `origin`.
///
/// Returns the number of glyphs drawn.
pub fn draw_number<D>(
    target: &mut D,
    font: &Font,
    origin: Point,
    color: Rgb565,
    value: u32,
    min_digits: usize,
) -> Result<usize, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_digits(target, font, origin, color, &Digits::new(value, min_digits))
}

/// Float variant of [`draw_number`]; `value` is truncated toward zero.
pub fn draw_truncated<D>(
    target: &mut D,
    font: &Font,
    origin: Point,
    color: Rgb565,
    value: f32,
    min_digits: usize,
) -> Result<usize, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_digits(target, font, origin, color, &Digits::from_truncated(value, min_digits))
}

fn draw_digits<D>(
    target: &mut D,
    font: &Font,
    origin: Point,
    color: Rgb565,
    digits: &Digits,
) -> Result<usize, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let advance = font.advance() as i32;
    for (i, &digit) in digits.as_slice().iter().enumerate() {
        let at = origin + Point::new(i as i32 * advance, 0);
        paint(target, at, font.glyph(digit), color)?;
    }
    Ok(digits.len())
}
