use crate::layout::view_manager::{TabId, ViewManager};
use leptos::prelude::*;

/// Root of one tab. Every tab stays mounted so typed input survives
/// switching; inactive ones are hidden.
#[component]
pub fn TabFrame(
    tab: TabId,
    #[prop(optional, into)] subtitle: Option<String>,
    children: Children,
) -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");

    view! {
        <section
            id=tab.as_str()
            class="tab-content page"
            class:active=move || vm.is_tab_active(tab)
            style:display=move || if vm.is_tab_active(tab) { "block" } else { "none" }
        >
            <div class="page-header">
                <h1 class="page-header__title">{tab.title()}</h1>
                {subtitle.map(|s| view! { <div class="page-header__subtitle">{s}</div> })}
            </div>
            <div class="page__content">{children()}</div>
        </section>
    }
}
