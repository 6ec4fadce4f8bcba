use crate::app_shell::MainLayout;
use crate::controller::Controller;
use crate::layout::file_inputs::FileInputRegistry;
use crate::layout::loading_overlay::inject_overlay_styles;
use crate::layout::view_manager::ViewManager;
use crate::shared::api_client::ApiClient;
use crate::shared::features::ViewFeatures;
use crate::shared::settings::AppSettings;
use crate::shared::theme::LocalPreferenceStore;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn viewport_size(window: &web_sys::Window) -> Option<(f64, f64)> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Feeds window resizes into the view manager, starting with the current size.
fn install_resize_listener(vm: ViewManager) {
    if !vm.features.resize {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some((width, height)) = viewport_size(&window) {
        vm.handle_resize(width, height);
    }

    let on_resize = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some((width, height)) = web_sys::window().as_ref().and_then(viewport_size) {
            vm.handle_resize(width, height);
        }
    }) as Box<dyn FnMut(_)>);
    if window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .is_ok()
    {
        on_resize.forget();
    }
}

#[component]
pub fn App(settings: AppSettings) -> impl IntoView {
    let features = ViewFeatures::detect();
    let vm = ViewManager::new(features, Arc::new(LocalPreferenceStore), &settings);
    let client = Arc::new(ApiClient::new(&settings));
    let controller: Controller = Controller::new(client.clone(), vm, &settings);

    provide_context(settings);
    provide_context(vm);
    provide_context(client);
    provide_context(controller);

    if features.document {
        inject_overlay_styles();
    }
    vm.attach_file_inputs(FileInputRegistry::install(vm));
    install_resize_listener(vm);
    vm.init_url_sync();
    log::info!("console initialized");

    view! { <MainLayout /> }
}
