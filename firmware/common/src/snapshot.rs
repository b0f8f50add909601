//! Per-tick display input.
//!
//! A [`DisplaySnapshot`] is produced once per second by whatever owns the
//! clock, the sensor and the network (firmware tasks or the simulator) and
//! handed to [`Renderer::redraw`](crate::render::Renderer::redraw). The
//! renderer never looks at raw floats when diffing: it compares the integers
//! returned by the `*_display` accessors, which are exactly what gets drawn.

use crate::config::HPA_PER_MMHG;

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Network state shown by the status icon.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Link {
    /// No Wi-Fi association. Shows the no-wifi icon.
    #[default]
    Offline,
    /// Associated, waiting for the first time sync. Shows the sync icon.
    Unsynced,
    /// Associated and synced. No icon.
    Online,
}

impl Link {
    /// Losing Wi-Fi also drops the sync, so `time_synced` only matters while
    /// connected.
    pub const fn from_flags(
        wifi_connected: bool,
        time_synced: bool,
    ) -> Self {
        match (wifi_connected, time_synced) {
            (false, _) => Self::Offline,
            (true, false) => Self::Unsynced,
            (true, true) => Self::Online,
        }
    }
}

/// Everything the screen should show right now.
///
/// Sensor readings are `None` while the sensor is unavailable; their regions
/// are then left blank.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct DisplaySnapshot {
    pub wifi_connected: bool,
    pub time_synced: bool,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    /// Degrees Celsius.
    pub temperature: Option<f32>,
    /// Relative humidity in percent.
    pub humidity: Option<f32>,
    /// Pressure in hectopascals.
    pub pressure: Option<f32>,
}

impl DisplaySnapshot {
    /// Offline snapshot at the given wall-clock time, no sensor readings.
    pub const fn at(
        hours: u8,
        minutes: u8,
        seconds: u8,
    ) -> Self {
        Self {
            wifi_connected: false,
            time_synced: false,
            hours,
            minutes,
            seconds,
            temperature: None,
            humidity: None,
            pressure: None,
        }
    }

    /// Snapshot for a count of seconds since local midnight (wraps at 24 h).
    pub const fn from_seconds_of_day(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY;
        Self::at((seconds / 3600) as u8, (seconds / 60 % 60) as u8, (seconds % 60) as u8)
    }

    #[must_use]
    pub const fn with_link(
        mut self,
        wifi_connected: bool,
        time_synced: bool,
    ) -> Self {
        self.wifi_connected = wifi_connected;
        self.time_synced = time_synced;
        self
    }

    #[must_use]
    pub const fn with_environment(
        mut self,
        temperature: Option<f32>,
        humidity: Option<f32>,
        pressure: Option<f32>,
    ) -> Self {
        self.temperature = temperature;
        self.humidity = humidity;
        self.pressure = pressure;
        self
    }

    pub const fn link(&self) -> Link { Link::from_flags(self.wifi_connected, self.time_synced) }

    /// Whole degrees as drawn. Below-zero readings show as 0 and the value
    /// saturates at 99, the width of the field.
    pub fn temperature_display(&self) -> Option<u32> { self.temperature.map(|t| saturate(t, 99)) }

    /// Whole percent as drawn. The field is two digits wide, so a 100 %
    /// reading shows as 99.
    pub fn humidity_display(&self) -> Option<u32> { self.humidity.map(|h| saturate(h, 99)) }

    /// Whole millimeters of mercury as drawn, at most 999.
    pub fn pressure_display(&self) -> Option<u32> { self.pressure.map(|hpa| saturate(hpa / HPA_PER_MMHG, 999)) }
}

/// Truncate toward zero into `0..=max`. NaN becomes 0.
fn saturate(
    value: f32,
    max: u32,
) -> u32 {
    (value.max(0.0) as u32).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_from_flags() {
        assert_eq!(Link::from_flags(false, false), Link::Offline);
        assert_eq!(Link::from_flags(false, true), Link::Offline);
        assert_eq!(Link::from_flags(true, false), Link::Unsynced);
        assert_eq!(Link::from_flags(true, true), Link::Online);
    }

    #[test]
    fn test_seconds_of_day() {
        let snapshot = DisplaySnapshot::from_seconds_of_day(23 * 3600 + 59 * 60 + 58);
        assert_eq!((snapshot.hours, snapshot.minutes, snapshot.seconds), (23, 59, 58));

        let wrapped = DisplaySnapshot::from_seconds_of_day(SECONDS_PER_DAY + 61);
        assert_eq!((wrapped.hours, wrapped.minutes, wrapped.seconds), (0, 1, 1));
    }

    #[test]
    fn test_pressure_conversion_truncates() {
        let snapshot = DisplaySnapshot::at(0, 0, 0).with_environment(None, None, Some(1013.3));
        // 760.04 mmHg
        assert_eq!(snapshot.pressure_display(), Some(760));

        let snapshot = snapshot.with_environment(None, None, Some(1000.0));
        // 750.06...
        assert_eq!(snapshot.pressure_display(), Some(750));
    }

    #[test]
    fn test_displayed_values() {
        let snapshot = DisplaySnapshot::at(12, 0, 0).with_environment(Some(21.9), Some(45.2), None);
        assert_eq!(snapshot.temperature_display(), Some(21));
        assert_eq!(snapshot.humidity_display(), Some(45));
        assert_eq!(snapshot.pressure_display(), None);

        let freezing = snapshot.with_environment(Some(-7.5), None, None);
        assert_eq!(freezing.temperature_display(), Some(0));
        assert_eq!(freezing.humidity_display(), None);
    }

    #[test]
    fn test_displayed_values_saturate_at_field_width() {
        let snapshot = DisplaySnapshot::at(0, 0, 0).with_environment(Some(120.0), Some(100.0), Some(1500.0));
        assert_eq!(snapshot.temperature_display(), Some(99));
        assert_eq!(snapshot.humidity_display(), Some(99));
        assert_eq!(snapshot.pressure_display(), Some(999));

        let broken = snapshot.with_environment(Some(f32::NAN), None, None);
        assert_eq!(broken.temperature_display(), Some(0));
    }

    #[test]
    fn test_default_is_offline_midnight() {
        let snapshot = DisplaySnapshot::default();
        assert_eq!(snapshot, DisplaySnapshot::at(0, 0, 0));
        assert_eq!(snapshot.link(), Link::Offline);
    }
}
