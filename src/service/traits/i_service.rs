use crate::config::ports::AppConfig;
use crate::error::Result;
use crate::models::conversion::{ConversionReply, ConversionRequest, RemoteCallFailure};

// 轉換服務接口，同步等待遠端回覆（blocking stub）
pub trait ConversionServiceTrait: Send + Sync {
    /// 發送一次轉換請求並等待回覆
    /// # 參數
    /// - request: 來源、目的地與密碼
    /// # 回傳
    /// - 成功時返回伺服器的狀態文字，失敗時返回遠端呼叫錯誤
    fn pdf_to_html(&self, request: ConversionRequest) -> std::result::Result<ConversionReply, RemoteCallFailure>;
}

// 連線器接口，依配置建立轉換服務；服務被丟棄時釋放連線
pub trait ServiceConnector {
    fn connect(&self, config: &AppConfig) -> Result<Box<dyn ConversionServiceTrait>>;
}

// 注入式日誌接口，讓測試可以攔截轉換流程的訊息
pub trait DispatchLogger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}
