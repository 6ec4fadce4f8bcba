pub mod app;
pub mod app_shell;
pub mod controller;
pub mod layout;
pub mod shared;
pub mod usecases;

use shared::settings::AppSettings;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let settings = AppSettings::from_document();
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(settings.log_level);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(move || {
        leptos::view! { <app::App settings=settings.clone() /> }
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
