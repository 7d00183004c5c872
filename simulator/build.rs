//! Build script for gauge-cluster-simulator
//!
//! On Windows, SDL2 is not a system library. Point the linker at
//! `vendor/sdl2/` in the repository root and place `SDL2.dll` next to the
//! built binary so `cargo run` works without extra setup.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from) else {
        return;
    };
    let Some(repo_root) = manifest_dir.parent() else {
        return;
    };
    let sdl2_dir = repo_root.join("vendor").join("sdl2");
    println!("cargo:rerun-if-changed={}", sdl2_dir.display());

    if !sdl2_dir.exists() {
        println!("cargo:warning=SDL2 not found at {}, linking may fail", sdl2_dir.display());
        return;
    }
    println!("cargo:rustc-link-search=native={}", sdl2_dir.display());

    if let Some(profile_dir) = env::var_os("OUT_DIR").as_deref().and_then(|out| profile_dir(Path::new(out))) {
        let dll = sdl2_dir.join("SDL2.dll");
        let dest = profile_dir.join("SDL2.dll");
        if dll.exists() && !dest.exists() && fs::copy(&dll, &dest).is_err() {
            println!("cargo:warning=could not copy SDL2.dll to {}", dest.display());
        }
    }
}

/// `target/<profile>` directory above OUT_DIR (`target/<profile>/build/<pkg>/out`).
fn profile_dir(out_dir: &Path) -> Option<&Path> {
    out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "debug" || n == "release"))
}
