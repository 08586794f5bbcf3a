//! Bakes the exchange endpoint and log filter into the browser build.
//!
//! Values come from the environment, or from a `.env` file found in the
//! crate directory or any parent.

const BAKED_VARS: [&str; 2] = ["CHAT_ENDPOINT_URL", "CHAT_LOG"];

fn main() {
    if let Ok(path) = dotenvy::dotenv() {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    for key in BAKED_VARS {
        println!("cargo:rerun-if-env-changed={key}");
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
