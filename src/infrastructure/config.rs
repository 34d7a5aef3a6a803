use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,
    /// Session CSRF token, when known up front (otherwise resolved from
    /// page meta / cookie at request time).
    #[serde(default)]
    pub csrf_token: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiSettings {
    #[serde(default = "default_toast_dismiss_ms")]
    pub toast_dismiss_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_dismiss_ms: default_toast_dismiss_ms(),
        }
    }
}

fn default_dashboard_path() -> String {
    "/api/dashboard".to_string()
}

fn default_toast_dismiss_ms() -> u64 {
    5000
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
