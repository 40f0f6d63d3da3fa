use std::sync::Arc;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionOutcome, ConversionRequest};
use crate::service::traits::i_service::{ConversionServiceTrait, DispatchLogger};

/// 轉換請求分派器：組裝請求、發送一次同步呼叫、記錄並回報結果
pub struct ConversionDispatcher {
    service: Box<dyn ConversionServiceTrait>,
    logger: Arc<dyn DispatchLogger>,
    default_password: String,
}

impl ConversionDispatcher {
    pub fn new(
        service: Box<dyn ConversionServiceTrait>,
        logger: Arc<dyn DispatchLogger>,
        default_password: impl Into<String>,
    ) -> Self {
        ConversionDispatcher {
            service,
            logger,
            default_password: default_password.into(),
        }
    }
}

impl ConversionFacadeTrait for ConversionDispatcher {
    fn convert(&self, source: &str, destination: &str, password: Option<&str>) -> ConversionOutcome {
        self.logger.info(&format!("準備轉換：{} ... {}", source, destination));

        let password = password.unwrap_or(&self.default_password);
        let request = ConversionRequest::new(source, destination, password);

        // 不重試，失敗只記錄並回報
        match self.service.pdf_to_html(request) {
            Ok(reply) => {
                self.logger.info(&format!("Operation: {}", reply.status));
                ConversionOutcome::Completed { status: reply.status }
            }
            Err(failure) => {
                self.logger.warn(&format!("RPC failed: {}", failure));
                ConversionOutcome::Failed(failure)
            }
        }
    }
}
