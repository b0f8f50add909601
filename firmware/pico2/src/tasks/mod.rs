//! Async tasks for the clock firmware.
//!
//! - `demo`: Demo link and sensor value generation task

pub mod demo;

pub use demo::{DEMO_ENVIRONMENT, demo_environment_task};
