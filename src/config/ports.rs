use std::time::Duration;
use crate::config::config::{DEFAULT_PASSWORD, DEFAULT_TARGET};
use crate::error::Result;

pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub target: String,
    pub default_password: String,
    pub log_level: String,
    pub shutdown_timeout: Duration,
    pub request_timeout: Option<Duration>,
    pub no_progress: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            target: DEFAULT_TARGET.to_string(),
            default_password: DEFAULT_PASSWORD.to_string(),
            log_level: "info".to_string(),
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
            request_timeout: None,
            no_progress: false,
        }
    }
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> Result<AppConfig>;
}
