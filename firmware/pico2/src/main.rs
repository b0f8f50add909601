//! LCD Clock Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Shows the time (and, in the station build, temperature, humidity and
//! pressure) on a 3.5" ST7796S 480x320 SPI panel.
//!
//! # Architecture
//!
//! - Main task: 1 Hz [`Ticker`]; each tick builds a [`DisplaySnapshot`] and
//!   runs one incremental redraw pass
//! - Demo task: publishes link state and sensor readings through a `Watch`
//!
//! The backlight level and digit color follow the link state
//! ([`Theme::for_link`]).
//!
//! # Features
//!
//! - **clock-only**: Time-only face ([`Variant::Clock`])

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
mod display;
mod st7796;
mod tasks;

use clock_common::config::{PANEL, TICK_INTERVAL_MS};
use clock_common::{DisplaySnapshot, Renderer, Theme, Variant};
use clock_pico2::demo::BOOT_SECONDS_OF_DAY;
use clock_pico2::framebuffer::{BUFFER_SIZE, Framebuffer};
use defmt::{debug, info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::pwm::Pwm;
use embassy_rp::spi::Spi;
use embassy_time::{Duration, Instant, Ticker};
use static_cell::ConstStaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::display::{backlight_pwm_config, display_spi_config};
use crate::st7796::St7796;
use crate::tasks::{DEMO_ENVIRONMENT, demo_environment_task};

#[cfg(feature = "clock-only")]
const VARIANT: Variant = Variant::Clock;
#[cfg(not(feature = "clock-only"))]
const VARIANT: Variant = Variant::Station;

/// Panel framebuffer (307,200 bytes), handed out once at boot.
static FRAMEBUFFER: ConstStaticCell<[u8; BUFFER_SIZE]> = ConstStaticCell::new([0; BUFFER_SIZE]);

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-lcd-clock"),
    embassy_rp::binary_info::rp_program_description!(c"LCD clock on a 3.5in ST7796S panel"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("LCD clock starting...");

    let p = embassy_rp::init(Default::default());

    // Display pins: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    // Backlight off until the renderer applies the theme
    let backlight = Pwm::new_output_a(p.PWM_SLICE2, p.PIN_20, backlight_pwm_config(0));

    // TX-only SPI, the panel is never read back
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());

    let framebuffer = unwrap!(Framebuffer::new(FRAMEBUFFER.take()));
    let panel = St7796::new(spi, dc, cs, backlight, framebuffer);
    let mut renderer = unwrap!(Renderer::new(panel, &PANEL, VARIANT));
    info!("Display initialized: {}x{} {}", PANEL.width, PANEL.height, VARIANT);

    let boot = Instant::now();
    spawner.spawn(demo_environment_task(DEMO_ENVIRONMENT.dyn_sender(), boot)).unwrap();
    let mut environment = unwrap!(DEMO_ENVIRONMENT.dyn_receiver());
    info!("Demo environment task spawned");

    let mut link = None;
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    loop {
        let seconds_of_day = BOOT_SECONDS_OF_DAY + boot.elapsed().as_secs() as u32;
        let snapshot = match environment.try_get() {
            Some(reading) => reading.snapshot(seconds_of_day),
            None => DisplaySnapshot::from_seconds_of_day(seconds_of_day),
        };

        // Link changes switch colors and brightness (full repaint)
        let current = snapshot.link();
        if link != Some(current) {
            info!("Link: {}", current);
            match renderer.set_theme(Theme::for_link(current)) {
                Ok(()) => link = Some(current),
                Err(e) => warn!("Theme change failed: {}", e),
            }
        }

        match renderer.redraw(&snapshot) {
            Ok(painted) => {
                debug!(
                    "{:02}:{:02}:{:02} painted {}",
                    snapshot.hours, snapshot.minutes, snapshot.seconds, painted
                );
                if snapshot.seconds == 0 {
                    info!(
                        "{:02}:{:02} temp={} hum={} press={}",
                        snapshot.hours,
                        snapshot.minutes,
                        snapshot.temperature_display(),
                        snapshot.humidity_display(),
                        snapshot.pressure_display()
                    );
                }
            }
            Err(e) => warn!("Redraw failed: {}", e),
        }

        ticker.next().await;
    }
}
