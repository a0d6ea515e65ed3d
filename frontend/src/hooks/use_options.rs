use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use roulette_shared::wheel_option::{check_options, initial_options};
use roulette_shared::WheelOption;
use yew::prelude::*;

use crate::config::OPTIONS_STORAGE_KEY;

pub fn load_options() -> Vec<WheelOption> {
    match LocalStorage::get::<Vec<WheelOption>>(OPTIONS_STORAGE_KEY) {
        Ok(options) => match check_options(&options) {
            Ok(()) => options,
            Err(e) => {
                log::warn!("Stored options are unusable ({}), starting from defaults", e);
                initial_options()
            }
        },
        Err(StorageError::KeyNotFound(_)) => initial_options(),
        Err(e) => {
            log::warn!("Failed to load options: {}", e);
            initial_options()
        }
    }
}

pub fn save_options(options: &[WheelOption]) {
    if let Err(e) = LocalStorage::set(OPTIONS_STORAGE_KEY, options) {
        log::warn!("Failed to save options: {}", e);
    }
}

/// The option list, loaded from local storage and written back on every change.
#[hook]
pub fn use_options() -> UseStateHandle<Vec<WheelOption>> {
    let options = use_state(load_options);

    use_effect_with((*options).clone(), |options| {
        save_options(options);
        || ()
    });

    options
}
