use super::super::controller_action;
use crate::layout::view_manager::{ActionId, InputField, PanelId, TabId, ViewManager};
use crate::shared::components::console::{ActionButton, ResultPanel, TabFrame};
use contracts::translation::TARGET_LANGUAGES;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TranslationTab() -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");
    let on_translate = controller_action(|ctrl| async move {
        ctrl.run_translation().await;
    });
    let on_clear = controller_action(|ctrl| async move { ctrl.clear_translation() });

    view! {
        <TabFrame tab=TabId::Translation subtitle="中文内容自动识别为源语言">
            <Flex vertical=true gap=FlexGap::Medium>
                <Textarea
                    value=vm.field(InputField::TranslateText)
                    placeholder="输入需要翻译的文本"
                    attr:id=InputField::TranslateText.as_str()
                    attr:rows=10
                    attr:style="width: 100%;"
                />

                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <label class="form__label" for=InputField::TargetLanguage.as_str()>"目标语言"</label>
                    <Select value=vm.field(InputField::TargetLanguage) attr:id=InputField::TargetLanguage.as_str()>
                        {TARGET_LANGUAGES
                            .iter()
                            .map(|(code, label)| view! { <option value=*code>{*label}</option> })
                            .collect_view()}
                    </Select>
                    <ActionButton action=ActionId::Translate label="翻译" on_click=on_translate />
                    <Button
                        attr:id="translation-clear-btn"
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_clear.run(())
                    >
                        "清空"
                    </Button>
                </Flex>

                <ResultPanel panel=PanelId::Translate />
            </Flex>
        </TabFrame>
    }
}
