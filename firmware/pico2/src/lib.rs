//! Clock firmware library - testable modules for the RP2350 build.
//!
//! This library contains the hardware-independent parts of the firmware. The
//! binary (`main.rs`) uses it and adds the embassy tasks and peripherals.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p clock-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p clock-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod backlight;
pub mod command;
pub mod demo;
pub mod framebuffer;
