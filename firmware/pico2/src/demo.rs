//! Demo environment source.
//!
//! Stands in for the Wi-Fi, time sync and BME280 collaborators on a bare
//! board: a deterministic function of uptime that walks through every link
//! state and produces slowly drifting sensor readings.
//!
//! | Uptime | Link | Sensors |
//! |--------|------|---------|
//! | 0-5 s | Offline | unavailable |
//! | 5-10 s | Unsynced | available |
//! | 10 s+ | Online, except a 10 s Wi-Fi dropout every 5 minutes | available |

use clock_common::DisplaySnapshot;

/// Link phase boundaries in milliseconds.
const ASSOCIATE_MS: u32 = 5_000;
const SYNC_MS: u32 = 10_000;

/// Dropout period and length in milliseconds.
const DROPOUT_PERIOD_MS: u32 = 300_000;
const DROPOUT_LEN_MS: u32 = 10_000;

/// Local time shown at boot (12:00:00); there is no RTC on the board.
pub const BOOT_SECONDS_OF_DAY: u32 = 12 * 60 * 60;

/// One reading of the demo collaborators.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct DemoEnvironment {
    pub wifi_connected: bool,
    pub time_synced: bool,
    /// Degrees Celsius.
    pub temperature: Option<f32>,
    /// Percent.
    pub humidity: Option<f32>,
    /// Hectopascals.
    pub pressure: Option<f32>,
}

impl DemoEnvironment {
    /// Demo state `elapsed_ms` after boot.
    pub fn at(elapsed_ms: u32) -> Self {
        let dropout = elapsed_ms >= DROPOUT_PERIOD_MS && elapsed_ms % DROPOUT_PERIOD_MS < DROPOUT_LEN_MS;
        let wifi_connected = elapsed_ms >= ASSOCIATE_MS && !dropout;
        // A dropout also loses the sync until the next period.
        let time_synced = wifi_connected && elapsed_ms >= SYNC_MS;

        if elapsed_ms < ASSOCIATE_MS {
            return Self { wifi_connected, time_synced, ..Self::default() };
        }

        let t = elapsed_ms as f32 / 1000.0;
        Self {
            wifi_connected,
            time_synced,
            temperature: Some(22.0 + 4.0 * micromath::F32(t * 0.01).sin().0),
            humidity: Some(45.0 + 15.0 * micromath::F32(t * 0.007).sin().0),
            pressure: Some(1013.0 + 12.0 * micromath::F32(t * 0.003).sin().0),
        }
    }

    /// Combine with the wall clock into the renderer input.
    pub fn snapshot(
        &self,
        seconds_of_day: u32,
    ) -> DisplaySnapshot {
        DisplaySnapshot::from_seconds_of_day(seconds_of_day)
            .with_link(self.wifi_connected, self.time_synced)
            .with_environment(self.temperature, self.humidity, self.pressure)
    }
}
