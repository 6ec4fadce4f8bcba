use crate::layout::view_manager::{FilePicker, ViewManager};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Trigger of a hidden file input. Shows the selection count once files are
/// picked, with the names in the tooltip.
#[component]
pub fn FilePickerButton(picker: FilePicker) -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");
    let selection = move || vm.file_selection(picker);

    view! {
        <Button
            attr:id=picker.button_id()
            attr:title=move || selection().map(|s| s.title()).unwrap_or_default()
            appearance=ButtonAppearance::Secondary
            on_click=move |_| vm.open_file_picker(picker)
        >
            {icon(if picker.is_directory() { "folder-open" } else { "upload" })}
            {move || {
                selection()
                    .map(|s| s.label())
                    .unwrap_or_else(|| picker.idle_label().to_string())
            }}
        </Button>
    }
}
