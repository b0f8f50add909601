//! Backlight PWM duty mapping.
//!
//! The backlight pin (GPIO20) sits on PWM slice 2, channel A. Brightness
//! levels 0-255 map linearly onto the compare value of a fixed PWM period.

/// PWM counter wrap value. At the default 150 MHz system clock and divider 1
/// this gives roughly 2.3 kHz, well above visible flicker.
pub const PWM_TOP: u16 = 0xFFFF;

/// Compare value producing `level`/255 duty at [`PWM_TOP`].
pub const fn compare_for(level: u8) -> u16 { (level as u32 * PWM_TOP as u32 / u8::MAX as u32) as u16 }
