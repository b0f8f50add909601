//! Seven-segment digit fonts.
//!
//! Masks are rasterized at compile time. Each segment is a hexagon (pointed
//! ends) so neighbouring segments meet at a diagonal with a small gap between
//! them, like a classic LED clock.
//!
//! ```text
//!  aaaa
//! f    b
//! f    b
//!  gggg
//! e    c
//! e    c
//!  dddd
//! ```

use super::{Font, Glyph, mask_len};

// Segment bits
const SEG_A: u8 = 1 << 0;
const SEG_B: u8 = 1 << 1;
const SEG_C: u8 = 1 << 2;
const SEG_D: u8 = 1 << 3;
const SEG_E: u8 = 1 << 4;
const SEG_F: u8 = 1 << 5;
const SEG_G: u8 = 1 << 6;

/// Lit segments for digits 0-9.
const SEGMENTS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,         // 0
    SEG_B | SEG_C,                                         // 1
    SEG_A | SEG_B | SEG_D | SEG_E | SEG_G,                 // 2
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,                 // 3
    SEG_B | SEG_C | SEG_F | SEG_G,                         // 4
    SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,                 // 5
    SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,         // 6
    SEG_A | SEG_B | SEG_C,                                 // 7
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G, // 8
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,         // 9
];

// =============================================================================
// Font Metrics
// =============================================================================

/// Big digit width (hours and minutes).
pub const BIG_WIDTH: u32 = 80;
/// Big digit height.
pub const BIG_HEIGHT: u32 = 140;
/// Gap between big digits.
pub const BIG_SPACING: u32 = 4;
const BIG_STROKE: u32 = 14;
const BIG_GAP: i32 = 2;
const BIG_MASK_LEN: usize = mask_len(BIG_WIDTH, BIG_HEIGHT);

/// Small digit width (seconds and measurements).
pub const SMALL_WIDTH: u32 = 40;
/// Small digit height.
pub const SMALL_HEIGHT: u32 = 64;
/// Gap between small digits.
pub const SMALL_SPACING: u32 = 2;
const SMALL_STROKE: u32 = 8;
const SMALL_GAP: i32 = 1;
const SMALL_MASK_LEN: usize = mask_len(SMALL_WIDTH, SMALL_HEIGHT);

// =============================================================================
// Rasterizer
// =============================================================================

const fn abs(v: i32) -> i32 { if v < 0 { -v } else { v } }

const fn set_bit(
    mask: &mut [u8],
    width: i32,
    x: i32,
    y: i32,
) {
    let bit = (y * width + x) as usize;
    mask[bit / 8] |= 1 << (bit % 8);
}

/// Horizontal hexagon centered on row `yc`, spanning columns `x0..=x1`.
const fn horizontal(
    mask: &mut [u8],
    width: i32,
    half: i32,
    yc: i32,
    x0: i32,
    x1: i32,
) {
    let mut dy = -half;
    while dy <= half {
        let mut x = x0 + abs(dy);
        while x <= x1 - abs(dy) {
            set_bit(mask, width, x, yc + dy);
            x += 1;
        }
        dy += 1;
    }
}

/// Vertical hexagon centered on column `xc`, spanning rows `y0..=y1`.
const fn vertical(
    mask: &mut [u8],
    width: i32,
    half: i32,
    xc: i32,
    y0: i32,
    y1: i32,
) {
    let mut dx = -half;
    while dx <= half {
        let mut y = y0 + abs(dx);
        while y <= y1 - abs(dx) {
            set_bit(mask, width, xc + dx, y);
            y += 1;
        }
        dx += 1;
    }
}

const fn seven_segment<const N: usize>(
    width: u32,
    height: u32,
    stroke: u32,
    gap: i32,
    segments: u8,
) -> [u8; N] {
    let mut mask = [0u8; N];
    let w = width as i32;
    let h = height as i32;
    let half = (stroke / 2) as i32;
    let mid = h / 2;

    let left = half;
    let right = w - 1 - half;
    let top = half;
    let bottom = h - 1 - half;

    if segments & SEG_A != 0 {
        horizontal(&mut mask, w, half, top, left + gap, right - gap);
    }
    if segments & SEG_G != 0 {
        horizontal(&mut mask, w, half, mid, left + gap, right - gap);
    }
    if segments & SEG_D != 0 {
        horizontal(&mut mask, w, half, bottom, left + gap, right - gap);
    }
    if segments & SEG_F != 0 {
        vertical(&mut mask, w, half, left, top + gap, mid - gap);
    }
    if segments & SEG_B != 0 {
        vertical(&mut mask, w, half, right, top + gap, mid - gap);
    }
    if segments & SEG_E != 0 {
        vertical(&mut mask, w, half, left, mid + gap, bottom - gap);
    }
    if segments & SEG_C != 0 {
        vertical(&mut mask, w, half, right, mid + gap, bottom - gap);
    }
    mask
}

const fn rasterize<const N: usize>(
    width: u32,
    height: u32,
    stroke: u32,
    gap: i32,
) -> [[u8; N]; 10] {
    let mut masks = [[0u8; N]; 10];
    let mut digit = 0;
    while digit < 10 {
        masks[digit] = seven_segment(width, height, stroke, gap, SEGMENTS[digit]);
        digit += 1;
    }
    masks
}

// =============================================================================
// Fonts
// =============================================================================

static BIG_MASKS: [[u8; BIG_MASK_LEN]; 10] = rasterize(BIG_WIDTH, BIG_HEIGHT, BIG_STROKE, BIG_GAP);
static SMALL_MASKS: [[u8; SMALL_MASK_LEN]; 10] = rasterize(SMALL_WIDTH, SMALL_HEIGHT, SMALL_STROKE, SMALL_GAP);

macro_rules! font {
    ($masks:ident, $w:expr, $h:expr, $spacing:expr) => {
        Font::new(
            $w,
            $h,
            $spacing,
            [
                Glyph::new($w, $h, &$masks[0]),
                Glyph::new($w, $h, &$masks[1]),
                Glyph::new($w, $h, &$masks[2]),
                Glyph::new($w, $h, &$masks[3]),
                Glyph::new($w, $h, &$masks[4]),
                Glyph::new($w, $h, &$masks[5]),
                Glyph::new($w, $h, &$masks[6]),
                Glyph::new($w, $h, &$masks[7]),
                Glyph::new($w, $h, &$masks[8]),
                Glyph::new($w, $h, &$masks[9]),
            ],
        )
    };
}

/// 80x140 digits for hours and minutes.
pub static BIG: Font = font!(BIG_MASKS, BIG_WIDTH, BIG_HEIGHT, BIG_SPACING);

/// 40x64 digits for seconds and sensor readings.
pub static SMALL: Font = font!(SMALL_MASKS, SMALL_WIDTH, SMALL_HEIGHT, SMALL_SPACING);
