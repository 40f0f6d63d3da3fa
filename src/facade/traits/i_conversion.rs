use crate::models::conversion::ConversionOutcome;

// Facade 接口，負責協調一次轉換請求
pub trait ConversionFacadeTrait: Send + Sync {
    /// 發送轉換請求並回報結果
    /// # 參數
    /// - source: 來源文件路徑或 URI
    /// - destination: 輸出路徑或 URI
    /// - password: 文件密碼，None 時使用預設佔位密碼
    /// # 回傳
    /// - 成功時為伺服器狀態文字，失敗時為遠端呼叫錯誤；兩者都不會中斷程式
    fn convert(&self, source: &str, destination: &str, password: Option<&str>) -> ConversionOutcome;
}
