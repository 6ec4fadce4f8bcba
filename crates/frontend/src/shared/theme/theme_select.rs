use super::Theme;
use crate::layout::view_manager::ViewManager;
use leptos::prelude::*;
use thaw::*;

/// Theme selector in the top header. The choice is applied and persisted
/// through the view manager.
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");
    let selected = RwSignal::new(vm.theme.get_untracked().as_str().to_string());

    Effect::new(move |_| {
        let Some(theme) = selected.with(|value| Theme::parse(value)) else {
            return;
        };
        if vm.theme.get_untracked() != theme {
            vm.set_theme(theme);
        }
    });

    view! {
        <div class="theme-select-wrapper" title="切换主题">
            {crate::shared::icons::icon("palette")}
            <Select value=selected size=SelectSize::Small attr:id="theme">
                {Theme::all()
                    .into_iter()
                    .map(|theme| view! { <option value=theme.as_str()>{theme.display_name()}</option> })
                    .collect_view()}
            </Select>
        </div>
    }
}
