//! Delimiter, status and unit images.
//!
//! Small icons are drawn as ASCII art (`#` = set pixel) and packed into masks at
//! compile time. The hour/minute delimiter is rasterized from its dimensions.

use super::digits::{BIG_HEIGHT, BIG_WIDTH};
use super::{Glyph, mask_len, pack};

// =============================================================================
// Delimiter
// =============================================================================

/// Side of one colon dot in pixels.
const COLON_DOT: u32 = 16;
const COLON_MASK_LEN: usize = mask_len(BIG_WIDTH, BIG_HEIGHT);

/// Two square dots centered horizontally at one and two thirds of the height.
const fn colon<const N: usize>(
    width: u32,
    height: u32,
    dot: u32,
) -> [u8; N] {
    let mut mask = [0u8; N];
    let x0 = (width - dot) / 2;
    let centers = [height / 3, height * 2 / 3];
    let mut i = 0;
    while i < centers.len() {
        let y0 = centers[i] - dot / 2;
        let mut y = y0;
        while y < y0 + dot {
            let mut x = x0;
            while x < x0 + dot {
                let bit = (y * width + x) as usize;
                mask[bit / 8] |= 1 << (bit % 8);
                x += 1;
            }
            y += 1;
        }
        i += 1;
    }
    mask
}

static COLON_MASK: [u8; COLON_MASK_LEN] = colon(BIG_WIDTH, BIG_HEIGHT, COLON_DOT);

/// Hour/minute delimiter, same size as a big digit.
pub static COLON: Glyph = Glyph::new(BIG_WIDTH, BIG_HEIGHT, &COLON_MASK);

// =============================================================================
// Status Icons
// =============================================================================

/// Shown while Wi-Fi is down.
pub static WIFI_OFF: Glyph = Glyph::new(32, 32, &WIFI_OFF_MASK);

#[rustfmt::skip]
static WIFI_OFF_MASK: [u8; mask_len(32, 32)] = pack(
    32,
    32,
    concat!(
        "................................",
        "..#.............................",
        "..##............................",
        "..###.......########............",
        "...###..################........",
        "....###..#################......",
        ".....###..#..........#######....",
        "..##..###...............######..",
        ".####..###................#####.",
        "####....###.................####",
        "###......###..#####..........###",
        "#.........###..########........#",
        ".......##..###..#########.......",
        "......####..###.....######......",
        ".....####....###.......####.....",
        "....####......###.......####....",
        "...###.........###........###...",
        "....#...........###........#....",
        "...........####..###............",
        "..........######..###...........",
        "........#####......###..........",
        ".........##.........###.........",
        ".....................###........",
        "......................###.......",
        ".......................###......",
        "..............####......###.....",
        "..............####.......###....",
        ".............######.......###...",
        "..............####.........###..",
        "..............####..........##..",
        ".............................#..",
        "................................",
    ),
);

/// Shown while connected but the clock has not been synced yet.
pub static SYNC_PENDING: Glyph = Glyph::new(32, 32, &SYNC_PENDING_MASK);

#[rustfmt::skip]
static SYNC_PENDING_MASK: [u8; mask_len(32, 32)] = pack(
    32,
    32,
    concat!(
        "................................",
        "............########............",
        ".........##############.........",
        "........################........",
        "......#####..........#####......",
        ".....####..............####.....",
        "....####.......##.......####....",
        "....###........##........###....",
        "...###.........##.........###...",
        "..###..........##..........###..",
        "..###..........##..........###..",
        "..##...........##...........##..",
        ".###...........##...........###.",
        ".###...........##...........###.",
        ".###...........##...........###.",
        ".###...........#########....###.",
        ".###...........#########....###.",
        ".###........................###.",
        ".###........................###.",
        ".###........................###.",
        "..##........................##..",
        "..###......................###..",
        "..###......................###..",
        "...###....................###...",
        "....###..................###....",
        "....####................####....",
        ".....####..............####.....",
        "......#####..........#####......",
        "........################........",
        ".........##############.........",
        "............########............",
        "................................",
    ),
);

// =============================================================================
// Unit Symbols
// =============================================================================

/// Degree sign after the temperature.
pub static DEGREE: Glyph = Glyph::new(16, 16, &DEGREE_MASK);

#[rustfmt::skip]
static DEGREE_MASK: [u8; mask_len(16, 16)] = pack(
    16,
    16,
    concat!(
        "................",
        "....########....",
        "...##########...",
        "..############..",
        ".#####....#####.",
        ".####......####.",
        ".###........###.",
        ".###........###.",
        ".###........###.",
        ".###........###.",
        ".####......####.",
        ".#####....#####.",
        "..############..",
        "...##########...",
        "....########....",
        "................",
    ),
);

/// Percent sign after the relative humidity.
pub static PERCENT: Glyph = Glyph::new(24, 24, &PERCENT_MASK);

#[rustfmt::skip]
static PERCENT_MASK: [u8; mask_len(24, 24)] = pack(
    24,
    24,
    concat!(
        "......................##",
        "...######............###",
        "..########..........###.",
        ".##########........###..",
        ".###....###.......###...",
        ".###....###......###....",
        ".###....###.....###.....",
        ".###....###....###......",
        ".##########...###.......",
        "..########...###........",
        "...######...###.........",
        "...........###..........",
        "..........###...........",
        ".........###............",
        "........###.....######..",
        ".......###.....########.",
        "......###.....##########",
        ".....###......###....###",
        "....###.......###....###",
        "...###........###....###",
        "..###.........###....###",
        ".###..........##########",
        "###............########.",
        "##..............######..",
    ),
);

/// "mm" after the pressure in millimeters of mercury.
pub static MMHG: Glyph = Glyph::new(32, 16, &MMHG_MASK);

#[rustfmt::skip]
static MMHG_MASK: [u8; mask_len(32, 16)] = pack(
    32,
    16,
    concat!(
        "................................",
        "................................",
        "................................",
        "................................",
        "..############....############..",
        ".##############..##############.",
        ".##....##....##..##....##....##.",
        ".##....##....##..##....##....##.",
        ".##....##....##..##....##....##.",
        ".##....##....##..##....##....##.",
        ".##....##....##..##....##....##.",
        ".##....##....##..##....##....##.",
        ".##....##....##..##....##....##.",
        ".##....##....##..##....##....##.",
        ".##....##....##..##....##....##.",
        ".##....##....##..##....##....##.",
    ),
);
