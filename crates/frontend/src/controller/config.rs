use std::future::Future;

use contracts::config::TestConfigRequest;

use super::{AnalysisBackend, AppController, ViewPort};
use crate::layout::view_manager::{ActionId, PanelId};

pub const CONFIG_LOADED_MESSAGE: &str = "配置加载成功";
pub const RESET_CONFIRM_MESSAGE: &str = "确定要重置配置为默认值吗？此操作不可撤销。";

impl<B: AnalysisBackend, V: ViewPort> AppController<B, V> {
    /// Lifecycle shared by the configuration buttons. `task` yields the success
    /// or failure text for the configuration panel. Returns whether it succeeded.
    pub async fn execute_config_action<F>(&self, action: ActionId, busy_message: &str, task: F) -> bool
    where
        F: Future<Output = Result<String, String>>,
    {
        self.view.set_button_busy(action, true);
        self.view.show_loading(busy_message);

        let succeeded = match task.await {
            Ok(message) => {
                self.view.show_result(PanelId::Config, &message);
                true
            }
            Err(message) => {
                self.view.show_error(PanelId::Config, &message);
                false
            }
        };

        self.view.set_button_busy(action, false);
        self.view.hide_loading();
        succeeded
    }

    /// Fetches the stored configuration into the form.
    pub async fn load_config(&self) -> bool {
        let backend = self.backend.clone();
        let view = self.view.clone();
        self.execute_config_action(ActionId::LoadConfig, "正在加载配置...", async move {
            let response = backend.get_config().await.map_err(|e| e.display_message())?;
            view.fill_config_form(&response.config);
            Ok(CONFIG_LOADED_MESSAGE.to_string())
        })
        .await
    }

    pub async fn save_config(&self) -> bool {
        let document = self.view.read_config_form().collect();
        let backend = self.backend.clone();
        self.execute_config_action(ActionId::SaveConfig, "正在保存配置...", async move {
            backend
                .save_config(document)
                .await
                .map(|r| r.result)
                .map_err(|e| e.display_message())
        })
        .await
    }

    /// Tests the selected provider's settings as typed, without saving them.
    pub async fn test_config(&self) -> bool {
        let document = self.view.read_config_form().collect();
        let request = match TestConfigRequest::from_document(&document) {
            Ok(request) => request,
            Err(message) => {
                self.view.show_error(PanelId::Config, &message);
                return false;
            }
        };
        let backend = self.backend.clone();
        self.execute_config_action(ActionId::TestConfig, "正在测试连接...", async move {
            backend
                .test_config(request)
                .await
                .map_err(|e| e.display_message())?
                .into_outcome()
        })
        .await
    }

    pub async fn validate_config(&self) -> bool {
        let backend = self.backend.clone();
        self.execute_config_action(ActionId::ValidateConfig, "正在验证配置...", async move {
            backend
                .validate_config()
                .await
                .map_err(|e| e.display_message())?
                .into_outcome()
        })
        .await
    }

    /// Resets the configuration after confirmation and schedules a reload of
    /// the form.
    pub async fn reset_config(&self) -> bool {
        if !self.view.confirm(RESET_CONFIRM_MESSAGE) {
            return false;
        }
        let backend = self.backend.clone();
        let succeeded = self
            .execute_config_action(ActionId::ResetConfig, "正在重置配置...", async move {
                backend
                    .reset_config()
                    .await
                    .map(|r| r.result)
                    .map_err(|e| e.display_message())
            })
            .await;

        if succeeded {
            let this = self.clone();
            self.view.defer(
                self.reset_reload_delay_ms,
                Box::pin(async move {
                    this.load_config().await;
                }),
            );
        }
        succeeded
    }

    /// Shows which provider the backend currently uses.
    pub async fn show_api_info(&self) -> bool {
        let backend = self.backend.clone();
        self.execute_config_action(ActionId::ApiInfo, "正在获取API信息...", async move {
            backend
                .get_api_info()
                .await
                .map(|info| info.summary())
                .map_err(|e| e.display_message())
        })
        .await
    }
}
