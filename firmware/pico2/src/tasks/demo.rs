//! Demo environment task.
//!
//! Publishes [`DemoEnvironment`] readings into a [`Watch`] channel. The render
//! loop picks up the latest value once per tick; intermediate values are
//! simply overwritten.

use clock_pico2::demo::DemoEnvironment;
use defmt::info;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::watch::{DynSender, Watch};
use embassy_time::{Instant, Timer};

/// Latest demo reading. One receiver: the render loop.
pub static DEMO_ENVIRONMENT: Watch<CriticalSectionRawMutex, DemoEnvironment, 1> = Watch::new();

/// Publish interval in milliseconds (several updates per render tick).
const PUBLISH_INTERVAL_MS: u64 = 250;

#[embassy_executor::task]
pub async fn demo_environment_task(
    sender: DynSender<'static, DemoEnvironment>,
    start_time: Instant,
) {
    info!("Demo environment task started");

    let mut prev_link = None;
    loop {
        let environment = DemoEnvironment::at(start_time.elapsed().as_millis() as u32);

        let link = (environment.wifi_connected, environment.time_synced);
        if prev_link != Some(link) {
            info!("Demo link: wifi={} synced={}", link.0, link.1);
            prev_link = Some(link);
        }

        sender.send(environment);
        Timer::after_millis(PUBLISH_INTERVAL_MS).await;
    }
}
