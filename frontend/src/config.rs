use gloo::storage::{LocalStorage, Storage};
use roulette_shared::SpinConfig;

pub const OPTIONS_STORAGE_KEY: &str = "rouletteOptions";
pub const SPIN_CONFIG_STORAGE_KEY: &str = "rouletteSpinConfig";

pub const CANVAS_SIZE: u32 = 500;
pub const WHEEL_MARGIN: f64 = 12.0;
pub const RESULT_DELAY_MS: u32 = 100;

/// Spin settings, optionally overridden by a JSON object saved under
/// [`SPIN_CONFIG_STORAGE_KEY`]. Missing fields keep their defaults.
pub fn spin_config() -> SpinConfig {
    let config = match LocalStorage::get::<SpinConfig>(SPIN_CONFIG_STORAGE_KEY) {
        Ok(config) => config,
        Err(_) => return SpinConfig::default(),
    };

    match config.validate() {
        Ok(()) => {
            log::info!("Using spin config override: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("Ignoring spin config override: {}", e);
            SpinConfig::default()
        }
    }
}

/// Milliseconds on the same clock `requestAnimationFrame` uses.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
