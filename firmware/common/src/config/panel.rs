//! Panel and timing constants.

use crate::panel::{ColorFormat, PanelConfig, Rotation};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (3.5" ST7796S, landscape after rotation).
pub const SCREEN_WIDTH: u32 = 480;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

/// Hardware setup applied once by [`Panel::init`](crate::panel::Panel::init).
/// The native panel is 320x480 portrait; a 90° rotation gives landscape.
pub const PANEL: PanelConfig = PanelConfig {
    width: SCREEN_WIDTH,
    height: SCREEN_HEIGHT,
    rotation: Rotation::Deg90,
    color_format: ColorFormat::Rgb565,
};

// =============================================================================
// Brightness Levels (0-255 backlight duty)
// =============================================================================

/// Backlight while offline.
pub const BRIGHTNESS_DIM: u8 = 40;

/// Backlight while waiting for the first time sync.
pub const BRIGHTNESS_MEDIUM: u8 = 128;

/// Backlight once the clock is synced.
pub const BRIGHTNESS_FULL: u8 = 255;

// =============================================================================
// Timing and Units
// =============================================================================

/// Minimum interval between redraw passes in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Hectopascals per millimeter of mercury. Pressure readings are divided by
/// this and truncated before display.
pub const HPA_PER_MMHG: f32 = 1.333_223_7;
