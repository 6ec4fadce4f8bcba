//! Hidden `<input type="file">` elements behind the picker buttons.
//!
//! The inputs are created once, appended to `<body>` and wired to the view
//! manager. Their change handlers live for the whole page session.

use crate::layout::view_manager::{FilePicker, InputField, PanelId, ViewManager};
use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, File, HtmlInputElement};

pub const LOG_READ_FAILURE: &str = "文件读取失败，请重试";

pub struct FileInputRegistry {
    inputs: HashMap<FilePicker, HtmlInputElement>,
}

impl FileInputRegistry {
    /// Creates the inputs. `None` when pickers are unsupported in this host.
    pub fn install(vm: ViewManager) -> Option<Self> {
        if !vm.features.file_pickers {
            return None;
        }
        let document = web_sys::window()?.document()?;
        let body = document.body()?;

        let mut inputs = HashMap::new();
        for picker in FilePicker::all() {
            let input = match create_hidden_input(&document, picker) {
                Ok(input) => input,
                Err(e) => {
                    log::warn!("failed to create picker '{}': {:?}", picker.button_id(), e);
                    continue;
                }
            };
            if body.append_child(&input).is_err() {
                continue;
            }

            let handle = input.clone();
            let on_change = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                handle_selection(vm, picker, &handle);
            }) as Box<dyn FnMut(_)>);
            if input
                .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                .is_ok()
            {
                on_change.forget();
            }
            inputs.insert(picker, input);
        }

        Some(Self { inputs })
    }

    pub fn open(&self, picker: FilePicker) {
        if let Some(input) = self.inputs.get(&picker) {
            input.click();
        }
    }
}

fn create_hidden_input(document: &Document, picker: FilePicker) -> Result<HtmlInputElement, JsValue> {
    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("file");
    input.set_id(&format!("{}-input", picker.button_id()));
    input.set_attribute("style", "display: none")?;
    if picker.is_directory() {
        input.set_attribute("webkitdirectory", "")?;
        input.set_multiple(true);
    }
    if let Some(accept) = picker.accept() {
        input.set_accept(accept);
    }
    Ok(input)
}

fn handle_selection(vm: ViewManager, picker: FilePicker, input: &HtmlInputElement) {
    let Some(list) = input.files() else {
        return;
    };
    let files: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
    let names = files.iter().map(|f| f.name()).collect();
    if vm.record_file_selection(picker, names).is_none() {
        return;
    }

    if picker == FilePicker::LogFile {
        if let Some(file) = files.into_iter().next() {
            spawn_local(async move {
                let outcome = read_text(&file).await;
                if let Err(e) = &outcome {
                    log::error!("failed to read log file '{}': {}", file.name(), e);
                }
                on_log_read(vm, outcome);
            });
        }
    }
}

/// Fills the web-log input with the file text, or reports the failure in the
/// web-log result panel.
pub fn on_log_read(vm: ViewManager, outcome: Result<String, String>) {
    match outcome {
        Ok(text) => vm.field(InputField::Weblog).set(text),
        Err(_) => vm.show_error(PanelId::Weblog, LOG_READ_FAILURE),
    }
}

/// Reads a file as UTF-8 text.
async fn read_text(file: &File) -> Result<String, String> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("{:?}", e))?;
    value
        .as_string()
        .ok_or_else(|| "file content is not text".to_string())
}
