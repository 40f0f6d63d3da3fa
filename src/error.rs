//! 全域錯誤型別，涵蓋設定、連線建立與執行環境的失敗。
//! 遠端呼叫本身的失敗不走這裡，見 `models::conversion::RemoteCallFailure`。
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("I/O 錯誤：{0}")]
    Io(#[from] std::io::Error),

    #[error("無效的設定值：{key}={value}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("無效的伺服器位址 '{target}'：{reason}")]
    InvalidEndpoint { target: String, reason: String },
}

impl ClientError {
    pub fn invalid_endpoint<E: std::fmt::Display>(target: &str, e: E) -> Self {
        ClientError::InvalidEndpoint {
            target: target.to_string(),
            reason: e.to_string(),
        }
    }
}
