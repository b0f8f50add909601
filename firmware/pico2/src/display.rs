//! Display wiring for a 3.5" ST7796S SPI module (480x320).
//!
//! Pin mapping:
//! - DC: GPIO16
//! - CS: GPIO17
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20 (PWM slice 2, channel A)
//! - Reset: Tied to RUN pin (resets with Pico)

use clock_pico2::backlight::{PWM_TOP, compare_for};
use embassy_rp::pwm::Config as PwmConfig;
use embassy_rp::spi::Config as SpiConfig;

/// SPI configuration for the ST7796S.
/// Writes are reliable up to 40 MHz on typical modules.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 40_000_000;
    config
}

/// PWM configuration for a backlight level (0-255).
pub fn backlight_pwm_config(level: u8) -> PwmConfig {
    let mut config = PwmConfig::default();
    config.top = PWM_TOP;
    config.compare_a = compare_for(level);
    config
}
