//! Build script for clock-simulator
//!
//! On Windows, points the linker at the SDL2 development libraries named by
//! `SDL2_LIB_DIR` and copies `SDL2.dll` next to the simulator binary. Other
//! platforms link the system SDL2 and need nothing here.

use std::path::{Path, PathBuf};
use std::{env, fs};

const SDL2_LIB_DIR: &str = "SDL2_LIB_DIR";

fn main() {
    println!("cargo:rerun-if-env-changed={SDL2_LIB_DIR}");

    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Some(sdl2_dir) = env::var_os(SDL2_LIB_DIR).map(PathBuf::from) else {
        println!("cargo:warning={SDL2_LIB_DIR} not set, relying on SDL2 being on the linker path");
        return;
    };
    if !sdl2_dir.is_dir() {
        println!("cargo:warning={SDL2_LIB_DIR}={} is not a directory", sdl2_dir.display());
        return;
    }

    println!("cargo:rustc-link-search=native={}", sdl2_dir.display());
    println!("cargo:rerun-if-changed={}", sdl2_dir.display());

    if let Some(profile_dir) = profile_dir() {
        copy_dll(&sdl2_dir.join("SDL2.dll"), &profile_dir.join("SDL2.dll"));
    }
}

/// `target/<profile>`, found by walking up from OUT_DIR
/// (`target/<profile>/build/clock-simulator-<hash>/out`).
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR")?);
    out_dir.ancestors().nth(3).map(Path::to_path_buf)
}

fn copy_dll(
    src: &Path,
    dst: &Path,
) {
    if !src.exists() || dst.exists() {
        return;
    }
    if let Err(e) = fs::copy(src, dst) {
        println!("cargo:warning=Failed to copy SDL2.dll: {e}");
    }
}
