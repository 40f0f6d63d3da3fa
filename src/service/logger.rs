use crate::service::traits::i_service::DispatchLogger;

/// 將訊息轉交給 `log` 門面，實際輸出由 env_logger 負責
pub struct LogFacadeLogger;

impl DispatchLogger for LogFacadeLogger {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        log::warn!("{}", message);
    }
}
