//! Application configuration.
//!
//! Everything here is a compile-time constant; nothing is negotiated at runtime.
//!
//! - `panel`: Resolution, rotation, color format, brightness and tick interval
//! - `layout`: Fixed screen coordinates and field rectangles

pub mod layout;
pub mod panel;

// Re-export panel constants at config level for convenience
pub use panel::{
    BRIGHTNESS_DIM,
    BRIGHTNESS_FULL,
    BRIGHTNESS_MEDIUM,
    HPA_PER_MMHG,
    PANEL,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    TICK_INTERVAL_MS,
};
