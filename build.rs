//! Retrieves information about the version of the library from Git and the
//! build environment. This information is then written to a file in the output
//! directory and can be accessed at runtime by the host through
//! `sightline::version()`.

use std::path::Path;
use std::{env, fs};

fn generate_file(filename: &str, contents: &str) {
    let out_dir = env::var_os("OUT_DIR").expect("cargo always sets OUT_DIR for build scripts");
    let dest_path = Path::new(&out_dir).join(filename);
    fs::write(dest_path, contents).expect("OUT_DIR should be writable");
}

fn generate_build_info() {
    let features = format!(
        "{}ffi",
        if env::var_os("CARGO_FEATURE_FFI").is_some() {
            "+"
        } else {
            "-"
        }
    );
    generate_file("features", &features);
}

fn main() -> shadow_rs::SdResult<()> {
    generate_build_info();
    shadow_rs::new()
}
