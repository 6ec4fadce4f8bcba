use crate::layout::view_manager::ViewManager;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");
    let collapsed = move || vm.sidebar_collapsed.get();

    view! {
        <aside id="sidebar" data-zone="left" class="sidebar left" class:collapsed=collapsed>
            {children()}
        </aside>
    }
}
