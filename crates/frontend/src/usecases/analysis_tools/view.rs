use super::super::controller_action;
use crate::controller::Capability;
use crate::layout::view_manager::{FilePicker, InputField, TabId, ViewManager};
use crate::shared::components::console::{ActionButton, FilePickerButton, ResultPanel, TabFrame};
use leptos::prelude::*;
use thaw::*;

/// Static texts of one analysis tab.
struct ToolCopy {
    tab: TabId,
    subtitle: &'static str,
    input_label: &'static str,
    placeholder: &'static str,
    rows: u32,
    button: &'static str,
}

fn tool_copy(capability: Capability) -> ToolCopy {
    match capability {
        Capability::Traffic => ToolCopy {
            tab: TabId::TrafficAnalysis,
            subtitle: "识别HTTP请求中的攻击特征",
            input_label: "HTTP请求数据",
            placeholder: "粘贴完整的HTTP请求，包括请求行、请求头和请求体",
            rows: 12,
            button: "开始分析",
        },
        Capability::Decode => ToolCopy {
            tab: TabId::Decode,
            subtitle: "自动识别并还原编码或混淆后的字符串",
            input_label: "待解码字符串",
            placeholder: "支持 Base64、URL、Hex、Unicode 等常见编码",
            rows: 8,
            button: "解码",
        },
        Capability::JsAudit => ToolCopy {
            tab: TabId::JsAudit,
            subtitle: "审计前端脚本中的安全隐患",
            input_label: "JavaScript代码",
            placeholder: "粘贴需要审计的JavaScript代码",
            rows: 14,
            button: "开始审计",
        },
        Capability::Process => ToolCopy {
            tab: TabId::ProcessAnalysis,
            subtitle: "分析进程列表中的可疑项",
            input_label: "进程信息",
            placeholder: "粘贴 ps aux、tasklist 等命令的输出",
            rows: 12,
            button: "开始分析",
        },
        Capability::Regex => ToolCopy {
            tab: TabId::RegexGenerator,
            subtitle: "根据示例文本生成正则表达式",
            input_label: "示例文本",
            placeholder: "粘贴包含目标内容的示例文本",
            rows: 8,
            button: "生成正则",
        },
        Capability::Webshell => ToolCopy {
            tab: TabId::WebshellDetection,
            subtitle: "检测脚本文件中的WebShell特征",
            input_label: "文件内容",
            placeholder: "粘贴可疑文件的内容，或选择文件/目录",
            rows: 14,
            button: "开始检测",
        },
    }
}

fn extra_copy(field: InputField) -> (&'static str, &'static str) {
    match field {
        InputField::RegexTarget => (
            "匹配目标",
            "描述需要匹配的内容，例如：提取所有邮箱地址",
        ),
        _ => ("", ""),
    }
}

/// Tab of a single-input analysis capability: input, trigger button and
/// result panel.
#[component]
pub fn AnalysisToolTab(capability: Capability) -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");
    let action = capability.action();
    let copy = tool_copy(capability);
    let on_run = controller_action(move |ctrl| async move {
        ctrl.run_analysis(capability).await;
    });

    view! {
        <TabFrame tab=copy.tab subtitle=copy.subtitle>
            <Flex vertical=true gap=FlexGap::Medium>
                {(capability == Capability::Webshell).then(|| view! {
                    <Flex gap=FlexGap::Small>
                        <FilePickerButton picker=FilePicker::File />
                        <FilePickerButton picker=FilePicker::Directory />
                    </Flex>
                })}

                <div class="form__group">
                    <label class="form__label" for=action.input.as_str()>{copy.input_label}</label>
                    <Textarea
                        value=vm.field(action.input)
                        placeholder=copy.placeholder
                        attr:id=action.input.as_str()
                        attr:rows=copy.rows.to_string()
                        attr:style="width: 100%; font-family: monospace;"
                    />
                </div>

                {action.extra.map(|(field, _)| {
                    let (label, placeholder) = extra_copy(field);
                    view! {
                        <div class="form__group">
                            <label class="form__label" for=field.as_str()>{label}</label>
                            <Textarea
                                value=vm.field(field)
                                placeholder=placeholder
                                attr:id=field.as_str()
                                attr:rows=3
                                attr:style="width: 100%;"
                            />
                        </div>
                    }
                })}

                <div>
                    <ActionButton action=action.action label=copy.button on_click=on_run />
                </div>

                <ResultPanel panel=action.result />
            </Flex>
        </TabFrame>
    }
}
