//! Follow-up chat about the last analyzed log.

use super::super::controller_action;
use crate::layout::view_manager::{ActionId, InputField, PanelId, ViewManager};
use crate::shared::components::console::{ActionButton, ResultPanel};
use crate::shared::icons::icon;
use crate::shared::settings::AppSettings;
use contracts::chat::ChatRole;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;

/// Enter submits; Shift+Enter keeps the default newline.
fn submits_on_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

#[component]
pub fn ChatPanel() -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");
    let settings = use_context::<AppSettings>().expect("AppSettings context not found");
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let on_send = controller_action(|ctrl| async move { ctrl.send_chat_message().await });
    let on_clear = controller_action(|ctrl| async move { ctrl.clear_chat() });

    let recompute_height = move || {
        if let Some(metrics) = vm.measure_chat() {
            vm.chat.adjust_height(&metrics);
        }
    };

    // Scroll to the newest entry and refit after every transcript change.
    Effect::new(move |_| {
        vm.chat.messages.track();
        if !vm.chat.visible.get() {
            return;
        }
        if let Some(container) = messages_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
                recompute_height();
            });
        }
    });

    // Debounced refit on window resize.
    let pending = StoredValue::new_local(None::<Timeout>);
    let delay_ms = settings.chat_resize_delay_ms;
    Effect::new(move |previous: Option<(f64, f64)>| {
        let size = vm.viewport.get();
        if previous.is_some() && vm.chat.visible.get_untracked() {
            let timeout = Timeout::new(delay_ms, recompute_height);
            // Dropping the previous handle cancels it.
            pending.set_value(Some(timeout));
        }
        size
    });

    view! {
        <Show when=move || vm.chat.visible.get()>
            <div
                id="weblog-chat-container"
                class="chat-panel"
                style:height=move || format!("{}px", vm.chat.layout.get().container_height)
            >
                <div class="chat-panel__header">
                    {icon("message-square")}
                    <span>"基于分析结果提问"</span>
                </div>

                <div
                    id="weblog-chat-messages"
                    class="chat-panel__messages"
                    node_ref=messages_ref
                    style:height=move || format!("{}px", vm.chat.layout.get().messages_height)
                >
                    <For
                        each=move || vm.chat.messages.get()
                        key=|msg| msg.id
                        let:msg
                    >
                        {{
                            let is_user = msg.role == ChatRole::User;
                            view! {
                                <div
                                    class="chat-message"
                                    class:chat-message--user=is_user
                                    class:chat-message--assistant=!is_user
                                >
                                    <div class="chat-message__role">{msg.role.label()}</div>
                                    <div class="chat-message__content" style="white-space: pre-wrap;">
                                        {msg.content.clone()}
                                    </div>
                                </div>
                            }
                        }}
                    </For>
                </div>

                <div id="weblog-chat-input-row" class="chat-panel__input-row">
                    <div style="flex: 1;">
                        <Textarea
                            value=vm.field(InputField::ChatQuestion)
                            placeholder="输入问题，Enter 发送，Shift+Enter 换行"
                            attr:id=InputField::ChatQuestion.as_str()
                            attr:rows=2
                            attr:style="width: 100%; resize: vertical;"
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if submits_on_key(&ev.key(), ev.shift_key()) {
                                    ev.prevent_default();
                                    if !vm.is_busy(ActionId::SendChat) {
                                        on_send.run(());
                                    }
                                }
                            }
                        />
                    </div>
                    <ActionButton action=ActionId::SendChat label="发送" on_click=on_send />
                </div>

                <div id="weblog-chat-actions" class="chat-panel__actions">
                    <Button
                        attr:id="weblog-chat-clear"
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_clear.run(())
                    >
                        {icon("trash")}
                        " 清空对话"
                    </Button>
                </div>

                <ResultPanel panel=PanelId::Chat />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_submits_shift_enter_does_not() {
        assert!(submits_on_key("Enter", false));
        assert!(!submits_on_key("Enter", true));
        assert!(!submits_on_key("a", false));
    }
}
