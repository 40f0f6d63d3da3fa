use std::ffi::OsString;
use std::io::{self, Write};
use std::sync::Arc;
use crate::config::config::{parse_invocation, usage_text, UsageError};
use crate::config::ports::ConfigPort;
use crate::facade::conversion_facade::ConversionDispatcher;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::service::config_service::ConfigService;
use crate::service::traits::i_service::{DispatchLogger, ServiceConnector};
use crate::utils::utils::{setup_logging, PendingIndicator};

pub const EXIT_OK: u8 = 0;
pub const EXIT_USAGE: u8 = 1;

/// 執行一次命令列流程並回傳結束碼
///
/// `args` 不含程式名稱。參數錯誤（包含非 UTF-8 參數）或 `--help` 時回傳 1 且不建立任何連線；
/// 遠端呼叫失敗只記錄警告，仍回傳 0。
pub fn process_args<O: Write, E: Write>(
    args: &[OsString],
    config_port: Box<dyn ConfigPort>,
    connector: &dyn ServiceConnector,
    logger: Arc<dyn DispatchLogger>,
    stdout: &mut O,
    stderr: &mut E,
) -> io::Result<u8> {
    let invocation = match parse_invocation(args) {
        Ok(invocation) => invocation,
        Err(UsageError::HelpRequested) => {
            write!(stderr, "{}", usage_text())?;
            return Ok(EXIT_USAGE);
        }
        Err(e) => {
            writeln!(stderr, "{}", e)?;
            write!(stderr, "{}", usage_text())?;
            return Ok(EXIT_USAGE);
        }
    };

    let config = match ConfigService::new(config_port).get_config() {
        Ok(config) => config,
        Err(e) => {
            writeln!(stderr, "{}", e)?;
            return Ok(EXIT_USAGE);
        }
    };
    setup_logging(&config.log_level)?;

    // 服務在 dispatcher 被丟棄時關閉通道，任何返回路徑都會釋放
    let service = match connector.connect(&config) {
        Ok(service) => service,
        Err(e) => {
            log::error!("無法建立連線：{}", e);
            writeln!(stderr, "{}", e)?;
            return Ok(EXIT_USAGE);
        }
    };
    let dispatcher = ConversionDispatcher::new(service, logger, config.default_password.clone());

    let indicator = PendingIndicator::new(&format!("等待 {} 回覆", config.target), config.no_progress);
    let outcome = dispatcher.convert(
        &invocation.source,
        &invocation.destination,
        invocation.password.as_deref(),
    );
    indicator.finish();
    drop(dispatcher);

    if let Some(status) = outcome.status() {
        writeln!(stdout, "Operation: {}", status)?;
    }
    Ok(EXIT_OK)
}
