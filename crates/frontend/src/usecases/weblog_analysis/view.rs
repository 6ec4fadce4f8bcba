use super::super::controller_action;
use super::chat::ChatPanel;
use crate::layout::view_manager::{ActionId, FilePicker, InputField, PanelId, TabId, ViewManager};
use crate::shared::components::console::{ActionButton, FilePickerButton, ResultPanel, TabFrame};
use contracts::analysis::LogAnalysisType;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn WeblogAnalysisTab() -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");
    let on_analyze = controller_action(|ctrl| async move {
        ctrl.run_weblog_analysis().await;
    });
    let on_clear = controller_action(|ctrl| async move { ctrl.clear_weblog() });

    view! {
        <TabFrame tab=TabId::WeblogAnalysis subtitle="分析访问日志并就结果继续提问">
            <Flex vertical=true gap=FlexGap::Medium>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <FilePickerButton picker=FilePicker::LogFile />
                    <span class="form__hint">"支持 .log .txt .access .error"</span>
                </Flex>

                <Textarea
                    value=vm.field(InputField::Weblog)
                    placeholder="粘贴Web服务器访问日志，或选择日志文件"
                    attr:id=InputField::Weblog.as_str()
                    attr:rows=14
                    attr:style="width: 100%; font-family: monospace;"
                />

                <div class="form__group">
                    <span class="form__label">"分析类型"</span>
                    <Flex gap=FlexGap::Medium>
                        {LogAnalysisType::all()
                            .into_iter()
                            .map(|t| view! {
                                <Checkbox checked=vm.log_type_flag(t) label=t.as_str() />
                            })
                            .collect_view()}
                    </Flex>
                </div>

                <Flex gap=FlexGap::Small>
                    <ActionButton action=ActionId::AnalyzeWeblog label="开始分析" on_click=on_analyze />
                    <Button
                        attr:id="weblog-clear-btn"
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_clear.run(())
                    >
                        "清空"
                    </Button>
                </Flex>

                <ResultPanel panel=PanelId::Weblog />

                <ChatPanel />
            </Flex>
        </TabFrame>
    }
}
