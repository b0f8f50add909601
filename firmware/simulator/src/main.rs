//! LCD Clock Simulator for Windows/Desktop.
//!
//! Runs the shared renderer against an SDL2 window through the
//! embedded-graphics-simulator crate. The clock follows the host clock; link
//! state and sensors are toggled from the keyboard:
//!
//! - `W`: Wi-Fi on/off (off also drops the time sync)
//! - `S`: Time sync on/off (needs Wi-Fi)
//! - `E`: Environment sensor present/missing
//! - `V`: Switch between the clock and station faces
//! - `Esc`: Quit

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod panel;
mod state;
mod timing;

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clock_common::config::PANEL;
use clock_common::{Link, PanelError, Renderer, Theme};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorEvent, Window};

use crate::panel::SimulatorPanel;
use crate::state::SimState;
use crate::timing::{POLL_INTERVAL, local_seconds_of_day};

fn main() -> ExitCode {
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let window = Window::new("LCD Clock Sim", &output_settings);

    let mut state = SimState::new();
    let mut renderer = match Renderer::new(SimulatorPanel::new(window), &PANEL, state.variant) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Panel init failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("Simulator started: {}x{} {:?}", PANEL.width, PANEL.height, state.variant);

    let start = Instant::now();
    let mut link: Option<Link> = None;
    let mut last_second = None;
    let mut dirty = true;

    loop {
        for event in renderer.panel_mut().window_mut().events() {
            match event {
                SimulatorEvent::Quit => return ExitCode::SUCCESS,
                SimulatorEvent::KeyDown { keycode, repeat: false, .. } => match keycode {
                    Keycode::Escape => return ExitCode::SUCCESS,
                    Keycode::W => state.toggle_wifi(),
                    Keycode::S => state.toggle_sync(),
                    Keycode::E => state.toggle_sensors(),
                    Keycode::V => state.toggle_variant(),
                    _ => continue,
                },
                _ => continue,
            }
            dirty = true;
        }

        // A face change needs a fresh renderer on the same window
        if state.variant != renderer.variant() {
            renderer = match Renderer::new(renderer.into_panel(), &PANEL, state.variant) {
                Ok(renderer) => renderer,
                Err(e) => {
                    eprintln!("Panel re-init failed: {e}");
                    return ExitCode::FAILURE;
                }
            };
            link = None;
            println!("Face: {:?}", state.variant);
        }

        let seconds_of_day = local_seconds_of_day();
        if dirty || last_second != Some(seconds_of_day) {
            let snapshot = state.snapshot(seconds_of_day, start.elapsed().as_secs_f32());

            let current = snapshot.link();
            if link != Some(current) {
                println!("Link: {current:?}");
                match renderer.set_theme(Theme::for_link(current)) {
                    Ok(()) => link = Some(current),
                    Err(e) => report(&e, "Theme change failed"),
                }
            }

            match renderer.redraw(&snapshot) {
                Ok(_) => {
                    last_second = Some(seconds_of_day);
                    dirty = false;
                }
                Err(e) => report(&e, "Redraw failed"),
            }
        }

        thread::sleep(POLL_INTERVAL);
    }
}

fn report(
    error: &PanelError,
    context: &str,
) {
    eprintln!("{context}: {error}");
}
