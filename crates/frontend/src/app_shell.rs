//! Main layout: the shell with every tab mounted.

use crate::controller::Capability;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::usecases::analysis_tools::AnalysisToolTab;
use crate::usecases::system_config::SystemConfigTab;
use crate::usecases::translation::TranslationTab;
use crate::usecases::weblog_analysis::WeblogAnalysisTab;
use leptos::prelude::*;

#[component]
pub fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| {
                view! {
                    {Capability::all()
                        .into_iter()
                        .map(|capability| view! { <AnalysisToolTab capability=capability /> })
                        .collect_view()}
                    <WeblogAnalysisTab />
                    <TranslationTab />
                    <SystemConfigTab />
                }
                .into_any()
            }
        />
    }
}
