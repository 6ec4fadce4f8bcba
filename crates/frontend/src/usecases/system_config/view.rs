use super::super::controller_action;
use crate::layout::view_manager::{ActionId, PanelId, TabId, ViewManager};
use crate::shared::components::console::{ActionButton, ResultPanel, TabFrame};
use contracts::config::{Provider, ProviderField};
use leptos::prelude::*;
use thaw::*;

fn field_input_id(provider: Provider, field: ProviderField) -> String {
    format!("{}-{}", provider.as_str(), field.wire_key().replace('_', "-"))
}

/// Field group of one provider. Only the selected provider's group is shown.
#[component]
fn ProviderGroup(provider: Provider) -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");
    let fields = vm.config_form.provider_fields(provider);

    view! {
        <div
            id=format!("{}-config", provider.as_str())
            class="config-group"
            style:display=move || {
                if vm.config_form.selected_provider() == Some(provider) { "block" } else { "none" }
            }
        >
            <Flex vertical=true gap=FlexGap::Small>
                {provider
                    .fields()
                    .iter()
                    .map(|field| {
                        let id = field_input_id(provider, *field);
                        let input_type = if *field == ProviderField::Key {
                            InputType::Password
                        } else {
                            InputType::Text
                        };
                        view! {
                            <div class="form__group">
                                <label class="form__label" for=id.clone()>{field.label()}</label>
                                <Input
                                    value=fields.field(*field)
                                    input_type=input_type
                                    attr:id=id
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </Flex>
        </div>
    }
}

#[component]
pub fn SystemConfigTab() -> impl IntoView {
    let vm = use_context::<ViewManager>().expect("ViewManager context not found");

    let on_load = controller_action(|ctrl| async move {
        ctrl.load_config().await;
    });
    let on_save = controller_action(|ctrl| async move {
        ctrl.save_config().await;
    });
    let on_test = controller_action(|ctrl| async move {
        ctrl.test_config().await;
    });
    let on_validate = controller_action(|ctrl| async move {
        ctrl.validate_config().await;
    });
    let on_reset = controller_action(|ctrl| async move {
        ctrl.reset_config().await;
    });
    let on_api_info = controller_action(|ctrl| async move {
        ctrl.show_api_info().await;
    });

    view! {
        <TabFrame tab=TabId::Config subtitle="AI服务提供商与连接参数">
            <Flex vertical=true gap=FlexGap::Medium>
                <div class="form__group">
                    <label class="form__label" for="api-type">"API类型"</label>
                    <Select value=vm.config_form.provider attr:id="api-type">
                        {Provider::all()
                            .into_iter()
                            .map(|p| view! { <option value=p.as_str()>{p.display_name()}</option> })
                            .collect_view()}
                    </Select>
                </div>

                {Provider::all()
                    .into_iter()
                    .map(|provider| view! { <ProviderGroup provider=provider /> })
                    .collect_view()}

                <Flex gap=FlexGap::Small style="flex-wrap: wrap;">
                    <ActionButton action=ActionId::LoadConfig label="加载配置" secondary=true on_click=on_load />
                    <ActionButton action=ActionId::SaveConfig label="保存配置" on_click=on_save />
                    <ActionButton action=ActionId::TestConfig label="测试连接" secondary=true on_click=on_test />
                    <ActionButton action=ActionId::ValidateConfig label="验证配置" secondary=true on_click=on_validate />
                    <ActionButton action=ActionId::ResetConfig label="重置配置" secondary=true on_click=on_reset />
                    <ActionButton action=ActionId::ApiInfo label="当前API信息" secondary=true on_click=on_api_info />
                </Flex>

                <ResultPanel panel=PanelId::Config />
            </Flex>
        </TabFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids() {
        assert_eq!(
            field_input_id(Provider::Deepseek, ProviderField::Url),
            "deepseek-api-url"
        );
        assert_eq!(
            field_input_id(Provider::Openrouter, ProviderField::Key),
            "openrouter-api-key"
        );
        let ollama: Vec<String> = Provider::Ollama
            .fields()
            .iter()
            .map(|f| field_input_id(Provider::Ollama, *f))
            .collect();
        assert_eq!(ollama.len(), 2);
        assert!(ollama.iter().all(|id| id.starts_with("ollama-")));
    }
}
