//! Color constants for the clock face.
//!
//! # Using Built-in `RgbColor` Trait Constants
//!
//! Pure colors come from the `RgbColor` trait constants of `embedded_graphics`
//! rather than hand-built `Rgb565::new(r, g, b)` values.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black (0, 0, 0). The background established at boot.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure red (31, 0, 0). Digit color once the clock is synced.
pub const RED: Rgb565 = Rgb565::RED;

// =============================================================================
// Custom Colors
// =============================================================================

/// Red-orange used for the "time not synced yet" icon.
/// RGB565: (31, 20, 0).
pub const RED_ORANGE: Rgb565 = Rgb565::new(31, 20, 0);

/// Amber used for digits while connected but waiting for the first sync.
/// RGB565: (31, 40, 0).
pub const AMBER: Rgb565 = Rgb565::new(31, 40, 0);

/// Mid gray for the "no Wi-Fi" icon.
/// RGB565: (14, 28, 14) - roughly 45% brightness.
pub const GRAY: Rgb565 = Rgb565::new(14, 28, 14);

/// Dim gray for unit symbols. Subtle enough to not distract from the numbers.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const DIM_GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Dim blue for digits while offline.
/// RGB565: (4, 12, 24).
pub const DIM_BLUE: Rgb565 = Rgb565::new(4, 12, 24);
