//! Simulated collaborators driven from the keyboard.
//!
//! Stands in for the Wi-Fi stack, the time sync and the environment sensor.
//! Each toggle mirrors what the real collaborators report: losing Wi-Fi also
//! drops the time sync, and a sync cannot happen without Wi-Fi.

use clock_common::{DisplaySnapshot, Variant};

/// Keyboard-controlled link, sensor and layout state.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SimState {
    pub wifi_connected: bool,
    pub time_synced: bool,
    pub sensors_available: bool,
    pub variant: Variant,
}

impl SimState {
    /// Boot state: offline, sensor present, full station layout.
    pub const fn new() -> Self {
        Self { wifi_connected: false, time_synced: false, sensors_available: true, variant: Variant::Station }
    }

    /// Connect or disconnect Wi-Fi. Disconnecting loses the sync.
    pub fn toggle_wifi(&mut self) {
        self.wifi_connected = !self.wifi_connected;
        if !self.wifi_connected {
            self.time_synced = false;
        }
    }

    /// Complete or forget the time sync. Ignored while offline.
    pub fn toggle_sync(&mut self) {
        if self.wifi_connected {
            self.time_synced = !self.time_synced;
        }
    }

    pub fn toggle_sensors(&mut self) { self.sensors_available = !self.sensors_available; }

    pub fn toggle_variant(&mut self) {
        self.variant = match self.variant {
            Variant::Clock => Variant::Station,
            Variant::Station => Variant::Clock,
        };
    }

    /// Renderer input for a wall-clock time; `t` (seconds since start) drives
    /// the fake sensor waveforms.
    pub fn snapshot(
        &self,
        seconds_of_day: u32,
        t: f32,
    ) -> DisplaySnapshot {
        let snapshot =
            DisplaySnapshot::from_seconds_of_day(seconds_of_day).with_link(self.wifi_connected, self.time_synced);
        if !self.sensors_available {
            return snapshot;
        }
        snapshot.with_environment(
            Some(fake_signal(t, 18.0, 26.0, 0.02)),
            Some(fake_signal(t, 30.0, 60.0, 0.013)),
            Some(fake_signal(t, 995.0, 1030.0, 0.005)),
        )
    }
}

fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

#[cfg(test)]
mod tests {
    use clock_common::Link;

    use super::*;

    #[test]
    fn test_sync_requires_wifi() {
        let mut state = SimState::new();
        state.toggle_sync();
        assert!(!state.time_synced);

        state.toggle_wifi();
        state.toggle_sync();
        assert_eq!(state.snapshot(0, 0.0).link(), Link::Online);
    }

    #[test]
    fn test_wifi_loss_drops_sync() {
        let mut state = SimState::new();
        state.toggle_wifi();
        state.toggle_sync();
        state.toggle_wifi();
        assert!(!state.time_synced);

        // Reconnecting starts unsynced
        state.toggle_wifi();
        assert_eq!(state.snapshot(0, 0.0).link(), Link::Unsynced);
    }

    #[test]
    fn test_sensor_toggle_blanks_readings() {
        let mut state = SimState::new();
        assert!(state.snapshot(0, 10.0).temperature.is_some());

        state.toggle_sensors();
        let snapshot = state.snapshot(0, 10.0);
        assert_eq!(snapshot.temperature, None);
        assert_eq!(snapshot.humidity, None);
        assert_eq!(snapshot.pressure, None);
    }

    #[test]
    fn test_fake_signal_range() {
        for i in 0..1000 {
            let value = fake_signal(i as f32 * 0.7, 18.0, 26.0, 0.02);
            assert!((18.0..=26.0).contains(&value));
        }
    }

    #[test]
    fn test_variant_toggle() {
        let mut state = SimState::new();
        state.toggle_variant();
        assert_eq!(state.variant, Variant::Clock);
        state.toggle_variant();
        assert_eq!(state.variant, Variant::Station);
    }
}
