//! BreakBouncer entry point
//!
//! Handles platform-specific initialization and hands off to the host loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    break_bouncer::platform::web::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use break_bouncer::Settings;
    use break_bouncer::platform::native;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("BreakBouncer (native) starting...");

    // Optional settings file as the only argument
    let path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let settings = Settings::load(path.as_deref());

    if let Err(e) = native::run(settings) {
        log::error!("{}", e);
    }

    log::info!("BreakBouncer exiting");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
