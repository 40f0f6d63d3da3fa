use std::collections::HashMap;
use std::time::Duration;
use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::{ClientError, Result};

pub const ENV_TARGET: &str = "PDF_TO_HTML_TARGET";
pub const ENV_DEFAULT_PASSWORD: &str = "PDF_TO_HTML_DEFAULT_PASSWORD";
pub const ENV_LOG_LEVEL: &str = "PDF_TO_HTML_LOG_LEVEL";
pub const ENV_SHUTDOWN_TIMEOUT: &str = "PDF_TO_HTML_SHUTDOWN_TIMEOUT_SECS";
pub const ENV_REQUEST_TIMEOUT: &str = "PDF_TO_HTML_REQUEST_TIMEOUT_SECS";
pub const ENV_NO_PROGRESS: &str = "PDF_TO_HTML_NO_PROGRESS";

const LOG_LEVELS: [&str; 4] = ["debug", "info", "warn", "error"];

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> Result<AppConfig> {
        self.config_port.get_config()
    }
}

/// 環境變數配置適配器，未設定的項目沿用預設值
pub struct EnvConfigAdapter {
    vars: HashMap<String, String>,
}

impl EnvConfigAdapter {
    /// 讀取目前行程的環境變數；非 UTF-8 的項目視為未設定
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        EnvConfigAdapter {
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

impl ConfigPort for EnvConfigAdapter {
    fn get_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(target) = self.get(ENV_TARGET) {
            config.target = target.to_string();
        }
        // 密碼保留原樣，不做修剪
        if let Some(password) = self.vars.get(ENV_DEFAULT_PASSWORD).filter(|v| !v.is_empty()) {
            config.default_password = password.clone();
        }
        if let Some(level) = self.get(ENV_LOG_LEVEL) {
            let level = level.to_ascii_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(ClientError::InvalidConfig { key: ENV_LOG_LEVEL, value: level });
            }
            config.log_level = level;
        }
        if let Some(secs) = self.get(ENV_SHUTDOWN_TIMEOUT) {
            config.shutdown_timeout = parse_secs(ENV_SHUTDOWN_TIMEOUT, secs)?;
        }
        if let Some(secs) = self.get(ENV_REQUEST_TIMEOUT) {
            config.request_timeout = Some(parse_secs(ENV_REQUEST_TIMEOUT, secs)?);
        }
        if let Some(flag) = self.get(ENV_NO_PROGRESS) {
            config.no_progress = match flag.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ClientError::InvalidConfig {
                        key: ENV_NO_PROGRESS,
                        value: flag.to_string(),
                    })
                }
            };
        }

        log::debug!("載入環境變數配置：{:?}", config);
        Ok(config)
    }
}

fn parse_secs(key: &'static str, value: &str) -> Result<Duration> {
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ClientError::InvalidConfig { key, value: value.to_string() })
}
