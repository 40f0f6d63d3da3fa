use std::ffi::OsString;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use pdf_to_html_client::action::cli::process_args;
use pdf_to_html_client::service::config_service::EnvConfigAdapter;
use pdf_to_html_client::service::grpc::GrpcConnector;
use pdf_to_html_client::service::logger::LogFacadeLogger;

fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let result = process_args(
        &args,
        Box::new(EnvConfigAdapter::from_env()),
        &GrpcConnector,
        Arc::new(LogFacadeLogger),
        &mut io::stdout(),
        &mut io::stderr(),
    );
    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("輸出失敗：{}", e);
            ExitCode::FAILURE
        }
    }
}
