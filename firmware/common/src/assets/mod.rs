//! Monochrome glyph assets.
//!
//! Every drawable symbol is a [`Glyph`]: a width, a height and a packed bit mask
//! (1 bit per pixel, row-major, LSB-first within each byte). Digit glyphs are
//! grouped into [`Font`]s of exactly ten symbols sharing one size and spacing.
//!
//! All assets are `static` data built by `const fn`s, so a mask whose length does
//! not match its declared dimensions fails the build instead of reaching the panel.
//!
//! - [`digits`]: Seven-segment digit fonts ([`BIG`], [`SMALL`])
//! - [`icons`]: Delimiter, status and unit images

pub mod digits;
pub mod icons;

pub use digits::{BIG, SMALL};

use embedded_graphics::geometry::Size;

/// Number of mask bytes needed for a `width` x `height` bitmap.
pub const fn mask_len(
    width: u32,
    height: u32,
) -> usize {
    ((width * height) as usize).div_ceil(8)
}

/// A single monochrome bitmap symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    width: u32,
    height: u32,
    mask: &'static [u8],
}

impl Glyph {
    /// Create a glyph from a packed mask.
    ///
    /// # Panics
    ///
    /// Panics if `mask` is not exactly [`mask_len`]`(width, height)` bytes long.
    /// Glyphs are declared as `static` items, so this fires at compile time.
    pub const fn new(
        width: u32,
        height: u32,
        mask: &'static [u8],
    ) -> Self {
        assert!(mask.len() == mask_len(width, height), "glyph mask length does not match its dimensions");
        Self { width, height, mask }
    }

    #[inline]
    pub const fn width(&self) -> u32 { self.width }

    #[inline]
    pub const fn height(&self) -> u32 { self.height }

    #[inline]
    pub const fn size(&self) -> Size { Size::new(self.width, self.height) }

    /// Raw packed mask bytes.
    #[inline]
    pub const fn mask(&self) -> &'static [u8] { self.mask }

    /// Whether the pixel at (`dx`, `dy`) inside the glyph is set.
    #[inline]
    pub fn is_set(
        &self,
        dx: u32,
        dy: u32,
    ) -> bool {
        let bit = (dy * self.width + dx) as usize;
        self.mask.get(bit / 8).is_some_and(|&byte| (byte >> (bit % 8)) & 1 == 1)
    }
}

/// Ten digit glyphs (0-9) sharing size and inter-glyph spacing.
#[derive(Debug)]
pub struct Font {
    width: u32,
    height: u32,
    spacing: u32,
    glyphs: [Glyph; 10],
}

impl Font {
    /// Create a font. Every glyph must match the font's size.
    pub const fn new(
        width: u32,
        height: u32,
        spacing: u32,
        glyphs: [Glyph; 10],
    ) -> Self {
        let mut i = 0;
        while i < glyphs.len() {
            assert!(
                glyphs[i].width == width && glyphs[i].height == height,
                "font glyph size mismatch"
            );
            i += 1;
        }
        Self {
            width,
            height,
            spacing,
            glyphs,
        }
    }

    #[inline]
    pub const fn width(&self) -> u32 { self.width }

    #[inline]
    pub const fn height(&self) -> u32 { self.height }

    /// Gap between adjacent glyphs in pixels.
    #[inline]
    pub const fn spacing(&self) -> u32 { self.spacing }

    /// Horizontal distance from one glyph origin to the next.
    #[inline]
    pub const fn advance(&self) -> u32 { self.width + self.spacing }

    /// Glyph for `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit > 9`. Digit values come from the number formatter, so an
    /// out-of-range index is a programming error.
    #[inline]
    pub fn glyph(
        &self,
        digit: u8,
    ) -> &Glyph {
        &self.glyphs[usize::from(digit)]
    }
}

/// Pack ASCII art into a mask: `#` is a set pixel, anything else is clear.
///
/// `art` must hold exactly `width * height` characters in row-major order.
pub const fn pack<const N: usize>(
    width: u32,
    height: u32,
    art: &str,
) -> [u8; N] {
    assert!(N == mask_len(width, height), "mask buffer size does not match dimensions");
    let bytes = art.as_bytes();
    assert!(bytes.len() == (width * height) as usize, "art size does not match dimensions");

    let mut mask = [0u8; N];
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'#' {
            mask[i / 8] |= 1 << (i % 8);
        }
        i += 1;
    }
    mask
}
