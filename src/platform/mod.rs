//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logging bootstrap
//! - Host bindings (wasm-bindgen wrapper around a [`Session`](crate::Session))

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Install the logger for the current platform. Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Install the console logger and panic hook. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
