//! Rendering engine for the LCD clock.
//!
//! This crate contains the platform-agnostic code shared between the simulator
//! and the Pico 2 firmware:
//!
//! - [`assets`]: Monochrome glyph masks (two digit fonts, status and unit icons)
//! - [`compositor`]: Stencil painting of glyph masks and opaque rectangle fills
//! - [`number`]: Zero-padded decimal digit sequences drawn with a font
//! - [`snapshot`]: The per-tick input value and connectivity state
//! - [`panel`]: Display driver facade and the frame transaction guard
//! - [`render`]: Retained-state differ that repaints only changed regions
//! - [`colors`] / [`config`]: Compile-time palette, panel and layout constants
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and never allocates. Tests run on the host with `std`
//! (via `cfg_attr`):
//!
//! ```bash
//! cargo test -p clock-common
//! ```

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod assets;
pub mod colors;
pub mod compositor;
pub mod config;
pub mod number;
pub mod panel;
pub mod render;
pub mod snapshot;

// Re-export commonly used items
pub use assets::{Font, Glyph};
pub use panel::{ColorFormat, Frame, Panel, PanelConfig, PanelError, Rotation};
pub use render::{Region, RegionSet, Renderer, Theme, Variant};
pub use snapshot::{DisplaySnapshot, Link};
