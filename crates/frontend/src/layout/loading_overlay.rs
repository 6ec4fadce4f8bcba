use crate::layout::view_manager::ViewManager;
use leptos::prelude::*;

const STYLE_ELEMENT_ID: &str = "loading-overlay-styles";

const OVERLAY_CSS: &str = r#"
.loading-overlay {
    position: fixed;
    inset: 0;
    z-index: 1000;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.45);
}
.loading-overlay__box {
    min-width: 260px;
    padding: 24px 32px;
    border-radius: 8px;
    background: var(--color-surface, #fff);
    color: var(--color-text, #222);
    text-align: center;
}
.loading-overlay__spinner {
    width: 36px;
    height: 36px;
    margin: 0 auto 12px;
    border: 3px solid rgba(0, 0, 0, 0.1);
    border-top-color: var(--color-primary, #3b82f6);
    border-radius: 50%;
    animation: loading-overlay-spin 0.8s linear infinite;
}
.loading-overlay__track {
    height: 4px;
    margin-top: 12px;
    border-radius: 2px;
    background: rgba(0, 0, 0, 0.1);
    overflow: hidden;
}
.loading-overlay__bar {
    height: 100%;
    background: var(--color-primary, #3b82f6);
    transition: width 0.2s ease;
}
@keyframes loading-overlay-spin {
    to { transform: rotate(360deg); }
}
"#;

/// Adds the overlay stylesheet to `<head>` once.
pub fn inject_overlay_styles() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(OVERLAY_CSS));
    let _ = head.append_child(&style);
}

/// Single full-screen overlay shared by every action.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");

    view! {
        <Show when=move || vm.loading.with(|state| state.visible)>
            <div id="loading-overlay" class="loading-overlay">
                <div class="loading-overlay__box">
                    <div class="loading-overlay__spinner"></div>
                    <div class="loading-overlay__message">
                        {move || vm.loading.with(|state| state.message.clone())}
                    </div>
                    <div class="loading-overlay__track">
                        <div
                            class="loading-overlay__bar"
                            style:width=move || format!("{}%", vm.loading.with(|state| state.progress))
                        ></div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
