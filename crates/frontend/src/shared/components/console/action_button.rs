use crate::layout::view_manager::{ActionId, ViewManager};
use leptos::prelude::*;
use thaw::*;

/// Button bound to an [`ActionId`]: disabled with a spinner while its request
/// is in flight.
#[component]
pub fn ActionButton(
    action: ActionId,
    #[prop(into)] label: String,
    #[prop(optional)] secondary: bool,
    on_click: Callback<()>,
) -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");
    let busy = move || vm.is_busy(action);
    let appearance = if secondary {
        ButtonAppearance::Secondary
    } else {
        ButtonAppearance::Primary
    };

    view! {
        <Button
            attr:id=action.as_str()
            appearance=appearance
            disabled=busy
            loading=busy
            on_click=move |_| on_click.run(())
        >
            {label}
        </Button>
    }
}
