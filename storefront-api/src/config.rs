use std::str::FromStr;

use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub walmart: WalmartSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    pub app_url: String,
}

#[derive(Deserialize, Clone)]
pub struct WalmartSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    pub channel_type: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl std::fmt::Debug for WalmartSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalmartSettings")
            .field("base_url", &self.base_url)
            .field("service_name", &self.service_name)
            .field("channel_type", &self.channel_type)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn default_base_url() -> String {
    walmart::DEFAULT_BASE_URL.to_string()
}

fn default_service_name() -> String {
    walmart::DEFAULT_SERVICE_NAME.to_string()
}

impl WalmartSettings {
    pub fn client_options(&self) -> walmart::ClientOptions {
        walmart::ClientOptions {
            base_url: self.base_url.clone(),
            service_name: self.service_name.clone(),
            channel_type: self
                .channel_type
                .clone()
                .filter(|channel| !channel.trim().is_empty()),
        }
    }
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct SearchSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub default_limit: usize,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub max_limit: usize,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub suggestion_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_limit: crate::domain::search::DEFAULT_LIMIT,
            max_limit: crate::domain::search::MAX_LIMIT,
            suggestion_limit: 10,
        }
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|e| {
        config::ConfigError::Message(format!("Failed to parse APP_ENVIRONMENT: {}", e))
    })?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("STOREFRONT")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option(
            "walmart.client_id",
            std::env::var(walmart::CLIENT_ID_VAR).ok(),
        )?
        .set_override_option(
            "walmart.client_secret",
            std::env::var(walmart::CLIENT_SECRET_VAR).ok(),
        )?
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
