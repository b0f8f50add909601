//! Screen layout for the 480x320 clock face.
//!
//! # Pre-computed Layout Constants
//!
//! Every element has a fixed origin and every dynamic field owns a fixed
//! rectangle sized for its minimum digit count. All of it is computed at
//! compile time; no layout happens while drawing.
//!
//! ```text
//! +------------------------------------------------+
//! |                                         [wifi] |
//! |   [ H ][ H ]   :   [ M ][ M ]                  |
//! |                                                |
//! |                                     [s][s]     |
//! |  [t][t]°    [h][h]%    [p][p][p]mm             |
//! +------------------------------------------------+
//! ```

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::assets::digits::{BIG_HEIGHT, BIG_SPACING, BIG_WIDTH, SMALL_HEIGHT, SMALL_SPACING, SMALL_WIDTH};

// =============================================================================
// Element Origins
// =============================================================================

/// Hours, big font.
pub const HOURS_POS: Point = Point::new(34, 40);

/// Hour/minute delimiter.
pub const COLON_POS: Point = Point::new(200, 40);

/// Minutes, big font.
pub const MINUTES_POS: Point = Point::new(282, 40);

/// Seconds, small font.
pub const SECONDS_POS: Point = Point::new(360, 184);

/// Connectivity status icon (top right corner).
pub const STATUS_POS: Point = Point::new(440, 4);

/// Temperature, small font.
pub const TEMPERATURE_POS: Point = Point::new(20, 252);

/// Degree sign after the temperature.
pub const DEGREE_POS: Point = Point::new(104, 252);

/// Relative humidity, small font.
pub const HUMIDITY_POS: Point = Point::new(150, 252);

/// Percent sign after the humidity.
pub const PERCENT_POS: Point = Point::new(234, 252);

/// Pressure, small font.
pub const PRESSURE_POS: Point = Point::new(290, 252);

/// "mm" after the pressure, aligned with the digit baseline.
pub const MMHG_POS: Point = Point::new(416, 300);

// =============================================================================
// Minimum Digit Counts
// =============================================================================

/// Hours, minutes and seconds are always two digits.
pub const TIME_DIGITS: usize = 2;

/// Whole degrees Celsius.
pub const TEMPERATURE_DIGITS: usize = 2;

/// Whole percent.
pub const HUMIDITY_DIGITS: usize = 2;

/// Whole millimeters of mercury.
pub const PRESSURE_DIGITS: usize = 3;

/// Status icons are 32x32.
pub const STATUS_ICON_SIZE: Size = Size::new(32, 32);

// =============================================================================
// Field Rectangles
// =============================================================================

/// Rectangle covered by `digits` glyphs of one font starting at `origin`.
const fn digit_run(
    origin: Point,
    width: u32,
    height: u32,
    spacing: u32,
    digits: usize,
) -> Rectangle {
    let digits = digits as u32;
    Rectangle::new(origin, Size::new(digits * width + (digits - 1) * spacing, height))
}

pub const HOURS_AREA: Rectangle = digit_run(HOURS_POS, BIG_WIDTH, BIG_HEIGHT, BIG_SPACING, TIME_DIGITS);

pub const MINUTES_AREA: Rectangle = digit_run(MINUTES_POS, BIG_WIDTH, BIG_HEIGHT, BIG_SPACING, TIME_DIGITS);

pub const SECONDS_AREA: Rectangle = digit_run(SECONDS_POS, SMALL_WIDTH, SMALL_HEIGHT, SMALL_SPACING, TIME_DIGITS);

pub const STATUS_AREA: Rectangle = Rectangle::new(STATUS_POS, STATUS_ICON_SIZE);

pub const TEMPERATURE_AREA: Rectangle =
    digit_run(TEMPERATURE_POS, SMALL_WIDTH, SMALL_HEIGHT, SMALL_SPACING, TEMPERATURE_DIGITS);

pub const HUMIDITY_AREA: Rectangle =
    digit_run(HUMIDITY_POS, SMALL_WIDTH, SMALL_HEIGHT, SMALL_SPACING, HUMIDITY_DIGITS);

pub const PRESSURE_AREA: Rectangle =
    digit_run(PRESSURE_POS, SMALL_WIDTH, SMALL_HEIGHT, SMALL_SPACING, PRESSURE_DIGITS);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::icons::{COLON, DEGREE, MMHG, PERCENT, SYNC_PENDING, WIFI_OFF};
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn all_areas() -> [(&'static str, Rectangle); 11] {
        [
            ("hours", HOURS_AREA),
            ("minutes", MINUTES_AREA),
            ("seconds", SECONDS_AREA),
            ("status", STATUS_AREA),
            ("temperature", TEMPERATURE_AREA),
            ("humidity", HUMIDITY_AREA),
            ("pressure", PRESSURE_AREA),
            ("colon", Rectangle::new(COLON_POS, COLON.size())),
            ("degree", Rectangle::new(DEGREE_POS, DEGREE.size())),
            ("percent", Rectangle::new(PERCENT_POS, PERCENT.size())),
            ("mmhg", Rectangle::new(MMHG_POS, MMHG.size())),
        ]
    }

    #[test]
    fn test_areas_inside_screen() {
        let screen = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        for (name, area) in all_areas() {
            let bottom_right = area.bottom_right().unwrap();
            assert!(screen.contains(area.top_left), "{name} starts off screen");
            assert!(screen.contains(bottom_right), "{name} ends off screen");
        }
    }

    #[test]
    fn test_areas_do_not_overlap() {
        let areas = all_areas();
        for (i, (name_a, a)) in areas.iter().enumerate() {
            for (name_b, b) in &areas[i + 1..] {
                assert!(a.intersection(b).is_zero_sized(), "{name_a} overlaps {name_b}");
            }
        }
    }

    #[test]
    fn test_digit_run_width() {
        assert_eq!(HOURS_AREA.size, Size::new(80 + 4 + 80, 140));
        assert_eq!(PRESSURE_AREA.size, Size::new(3 * 40 + 2 * 2, 64));
    }

    #[test]
    fn test_status_icons_fit_area() {
        assert_eq!(WIFI_OFF.size(), STATUS_ICON_SIZE);
        assert_eq!(SYNC_PENDING.size(), STATUS_ICON_SIZE);
    }
}
