use crate::layout::view_manager::{PanelId, ViewManager};
use contracts::analysis::Verdict;
use leptos::prelude::*;
use thaw::*;

fn badge_color(verdict: &Verdict) -> BadgeColor {
    if verdict.severity() == "error" {
        BadgeColor::Danger
    } else {
        BadgeColor::Success
    }
}

/// Output area of one action. Hidden until something was shown in it.
#[component]
pub fn ResultPanel(panel: PanelId) -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");

    view! {
        {move || {
            vm.panel(panel).map(|content| {
                let class = if content.is_error {
                    "result-panel result-panel--error"
                } else {
                    "result-panel"
                };
                view! {
                    <div id=panel.as_str() class=class>
                        {content.verdict.map(|verdict| {
                            view! {
                                <div class="result-panel__verdict">
                                    <Badge appearance=BadgeAppearance::Filled color=badge_color(&verdict)>
                                        {verdict.label()}
                                    </Badge>
                                </div>
                            }
                        })}
                        <pre class="result-panel__text">{content.text}</pre>
                    </div>
                }
            })
        }}
    }
}
