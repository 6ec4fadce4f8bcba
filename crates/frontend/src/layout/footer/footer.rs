use crate::shared::api_client::{ApiClient, ApiError};
use contracts::system::health::{HealthResponse, HealthStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
enum ServerStatus {
    Checking,
    Reported {
        status: HealthStatus,
        config_errors: usize,
    },
    Offline,
}

impl ServerStatus {
    fn from_health(health: &HealthResponse) -> Self {
        ServerStatus::Reported {
            status: health.health_status(),
            config_errors: health.config_errors.len(),
        }
    }

    /// A server that answered without a usable report is still reachable,
    /// so only transport failures read as offline.
    fn from_outcome(outcome: &Result<HealthResponse, ApiError>) -> Self {
        match outcome {
            Ok(health) => Self::from_health(health),
            Err(ApiError::Request { .. }) => ServerStatus::Reported {
                status: HealthStatus::Unhealthy,
                config_errors: 0,
            },
            Err(ApiError::Transport(_)) => ServerStatus::Offline,
        }
    }

    fn display_text(&self) -> String {
        match self {
            ServerStatus::Checking => "后端状态: 检测中...".to_string(),
            ServerStatus::Offline => "后端状态: offline".to_string(),
            ServerStatus::Reported {
                status,
                config_errors,
            } => {
                let label = match status {
                    HealthStatus::Healthy => "healthy",
                    HealthStatus::Warning => "warning",
                    HealthStatus::Unhealthy => "unhealthy",
                };
                if *config_errors > 0 {
                    format!("后端状态: {} ({} 项配置错误)", label, config_errors)
                } else {
                    format!("后端状态: {}", label)
                }
            }
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Checking => "status-checking",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Reported { status, .. } => match status {
                HealthStatus::Healthy => "status-online",
                HealthStatus::Warning => "status-warning",
                HealthStatus::Unhealthy => "status-offline",
            },
        }
    }
}

/// Status bar checking the backend health endpoint on mount and on click.
#[component]
pub fn Footer() -> impl IntoView {
    let client = use_context::<Arc<ApiClient>>().expect("ApiClient context not found");
    let status = RwSignal::new(ServerStatus::Checking);

    let check_server = move || {
        status.set(ServerStatus::Checking);
        let client = client.clone();
        spawn_local(async move {
            let outcome = client.health().await;
            status.set(ServerStatus::from_outcome(&outcome));
        });
    };

    let initial_check = check_server.clone();
    Effect::new(move |_| initial_check());

    view! {
        <footer data-zone="footer" class="status-bar">
            <span
                class=move || status.with(|s| s.css_class())
                title="点击重新检测"
                style="cursor: pointer;"
                on:click=move |_| check_server()
            >
                {move || status.with(|s| s.display_text())}
            </span>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn health(status: &str, errors: &[&str]) -> HealthResponse {
        HealthResponse {
            status: status.to_string(),
            config_errors: errors.iter().map(|e| e.to_string()).collect(),
            ..HealthResponse::default()
        }
    }

    #[test]
    fn test_healthy() {
        let s = ServerStatus::from_health(&health("healthy", &[]));
        assert_eq!(s.display_text(), "后端状态: healthy");
        assert_eq!(s.css_class(), "status-online");
    }

    #[test]
    fn test_warning_counts_config_errors() {
        let s = ServerStatus::from_health(&health("warning", &["a", "b"]));
        assert_eq!(s.display_text(), "后端状态: warning (2 项配置错误)");
        assert_eq!(s.css_class(), "status-warning");
    }

    #[test]
    fn test_unknown_status_and_offline() {
        let s = ServerStatus::from_health(&health("broken", &[]));
        assert_eq!(s.display_text(), "后端状态: unhealthy");
        assert_eq!(ServerStatus::Offline.css_class(), "status-offline");
        assert_eq!(ServerStatus::Checking.css_class(), "status-checking");
    }

    #[test]
    fn test_unhealthy_server_is_not_offline() {
        let reported = Ok(HealthResponse {
            status: "unhealthy".to_string(),
            error: Some("config missing".to_string()),
            ..HealthResponse::default()
        });
        let s = ServerStatus::from_outcome(&reported);
        assert_eq!(s.display_text(), "后端状态: unhealthy");
        assert_eq!(s.css_class(), "status-offline");

        let bad_gateway = Err(ApiError::Request {
            status: 502,
            message: "HTTP 502".to_string(),
            code: None,
            details: Vec::new(),
        });
        assert_eq!(
            ServerStatus::from_outcome(&bad_gateway).display_text(),
            "后端状态: unhealthy"
        );

        let unreachable = Err(ApiError::Transport("网络请求失败".to_string()));
        assert_eq!(ServerStatus::from_outcome(&unreachable), ServerStatus::Offline);
    }
}
