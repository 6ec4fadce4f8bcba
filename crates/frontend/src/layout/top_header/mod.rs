//! Top bar: sidebar toggle, title and theme selector.

use crate::layout::view_manager::ViewManager;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelect;
use leptos::prelude::*;

pub const APP_TITLE: &str = "安全分析控制台";

#[component]
pub fn TopHeader() -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");
    let is_sidebar_visible = move || !vm.sidebar_collapsed.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    id="sidebar-toggle"
                    class="top-header__icon-btn"
                    on:click=move |_| vm.toggle_sidebar()
                    title=move || if is_sidebar_visible() { "收起导航" } else { "展开导航" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{APP_TITLE}</span>
            </div>

            <div class="top-header__actions">
                <ThemeSelect />
            </div>
        </div>
    }
}
