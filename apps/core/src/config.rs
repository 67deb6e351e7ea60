//! Site configuration, read from `SITECHAT_*` environment variables.
//!
//! A `.env` file in the working directory is loaded first when present.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use url::Url;
use validator::Validate;

use crate::actors::chat::{ChatSettings, ContactChannel, DEFAULT_TYPING_DELAY, MAX_TYPING_DELAY};
use crate::contact::RelayClient;
use crate::dispatcher::SiteLinks;
use crate::error::AppError;
use crate::telemetry::LogFormat;

pub const ENV_PRICING_PATH: &str = "SITECHAT_PRICING_PATH";
pub const ENV_BOOKING_PATH: &str = "SITECHAT_BOOKING_PATH";
pub const ENV_CONTACT_EMAIL: &str = "SITECHAT_CONTACT_EMAIL";
pub const ENV_RELAY_URL: &str = "SITECHAT_RELAY_URL";
pub const ENV_RELAY_KEY: &str = "SITECHAT_RELAY_KEY";
pub const ENV_TYPING_DELAY_MS: &str = "SITECHAT_TYPING_DELAY_MS";
pub const ENV_DATA_DIR: &str = "SITECHAT_DATA_DIR";
pub const ENV_LOG_FORMAT: &str = "SITECHAT_LOG_FORMAT";
pub const ENV_SEED: &str = "SITECHAT_SEED";

const PREFERENCES_FILENAME: &str = "preferences.json";

/// Everything the host needs to assemble a chat.
#[derive(Debug, Clone, Validate)]
pub struct SiteConfig {
    pub links: SiteLinks,
    /// Recipient of `mailto:` contact links.
    #[validate(email)]
    pub contact_email: String,
    /// Form relay endpoint; when unset the contact form falls back to `mailto:`.
    pub relay_url: Option<Url>,
    pub relay_access_key: Option<String>,
    pub typing_delay: Duration,
    /// Where persisted preferences live.
    pub data_dir: PathBuf,
    pub log_format: LogFormat,
    /// Seeds pool selection for reproducible sessions.
    pub random_seed: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            links: SiteLinks::default(),
            contact_email: "hello@example.com".to_string(),
            relay_url: None,
            relay_access_key: None,
            typing_delay: DEFAULT_TYPING_DELAY,
            data_dir: PathBuf::from("data"),
            log_format: LogFormat::Pretty,
            random_seed: None,
        }
    }
}

impl SiteConfig {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        if let Ok(path) = dotenv::dotenv() {
            info!("Loaded environment from {:?}", path);
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();
        let get = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(path) = get(ENV_PRICING_PATH) {
            config.links.pricing_path = relative_path(ENV_PRICING_PATH, path)?;
        }
        if let Some(path) = get(ENV_BOOKING_PATH) {
            config.links.booking_path = relative_path(ENV_BOOKING_PATH, path)?;
        }
        if let Some(email) = get(ENV_CONTACT_EMAIL) {
            config.contact_email = email;
        }
        if let Some(url) = get(ENV_RELAY_URL) {
            let url = Url::parse(&url)?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(AppError::Config(format!(
                    "{} must be an http(s) URL, got scheme '{}'",
                    ENV_RELAY_URL,
                    url.scheme()
                )));
            }
            config.relay_url = Some(url);
        }
        config.relay_access_key = get(ENV_RELAY_KEY);
        if let Some(ms) = get(ENV_TYPING_DELAY_MS) {
            let ms = ms.parse::<u64>().map_err(|e| {
                AppError::Config(format!("{} must be a number of milliseconds: {}", ENV_TYPING_DELAY_MS, e))
            })?;
            config.typing_delay = Duration::from_millis(ms);
            if config.typing_delay > MAX_TYPING_DELAY {
                return Err(AppError::Config(format!(
                    "{} must be at most {} ms, got {}",
                    ENV_TYPING_DELAY_MS,
                    MAX_TYPING_DELAY.as_millis(),
                    ms
                )));
            }
        }
        if let Some(dir) = get(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(format) = get(ENV_LOG_FORMAT) {
            config.log_format = LogFormat::parse(&format)
                .ok_or_else(|| AppError::Config(format!("Unknown {} '{}'", ENV_LOG_FORMAT, format)))?;
        }
        if let Some(seed) = get(ENV_SEED) {
            let seed = seed
                .parse::<u64>()
                .map_err(|e| AppError::Config(format!("{} must be an unsigned integer: {}", ENV_SEED, e)))?;
            config.random_seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILENAME)
    }

    pub fn contact_channel(&self) -> ContactChannel {
        match &self.relay_url {
            Some(url) => ContactChannel::Relay(Arc::new(RelayClient::new(
                url.clone(),
                self.relay_access_key.clone(),
            ))),
            None => ContactChannel::Mailto {
                recipient: self.contact_email.clone(),
            },
        }
    }

    pub fn chat_settings(&self) -> ChatSettings {
        ChatSettings::new(self.typing_delay, self.contact_channel())
    }
}

fn relative_path(key: &str, path: String) -> Result<String, AppError> {
    if path.starts_with('/') && !path.starts_with("//") {
        Ok(path)
    } else {
        Err(AppError::Config(format!(
            "{} must be a site-relative path starting with '/', got '{}'",
            key, path
        )))
    }
}
