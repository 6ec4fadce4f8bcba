//! Tab navigation.

use crate::layout::view_manager::{TabId, ViewManager};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");

    view! {
        <nav class="app-sidebar__content">
            {TabId::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <div
                            class="nav-item app-sidebar__item"
                            class:active=move || vm.is_tab_active(tab)
                            class:app-sidebar__item--active=move || vm.is_tab_active(tab)
                            data-tab=tab.as_str()
                            title=tab.title()
                            on:click=move |_| vm.switch_tab(tab)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(tab.icon())}
                                <span class="app-sidebar__label">{tab.title()}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
