//! gRPC 轉換服務
//!
//! `ManagedChannel` 持有明文 HTTP/2 通道以及驅動它的 tokio 執行環境，
//! 在被丟棄時於限定時間內關閉；`GrpcConversionService` 在其上以同步方式
//! 發送 `pdfToHtml` 呼叫。

use std::future::Future;
use std::time::{Duration, Instant};
use log::{debug, info};
use tokio::runtime::{Builder, Runtime};
use tonic::transport::{Channel, Endpoint};
use tonic::Code;
use crate::config::ports::AppConfig;
use crate::error::{ClientError, Result};
use crate::generated::pdftohtml::convert_pdf_to_html_client::ConvertPdfToHtmlClient;
use crate::generated::pdftohtml;
use crate::models::conversion::{ConversionReply, ConversionRequest, RemoteCallFailure};
use crate::service::traits::i_service::{ConversionServiceTrait, ServiceConnector};

/// 將 `host:port` 形式的位址補成明文 URI；拒絕其他協定
pub fn endpoint_uri(target: &str) -> Result<String> {
    let target = target.trim();
    if target.is_empty() {
        return Err(ClientError::invalid_endpoint(target, "位址為空"));
    }
    match target.split_once("://") {
        Some(("http", _)) => Ok(target.to_string()),
        Some((scheme, _)) => Err(ClientError::invalid_endpoint(
            target,
            format!("僅支援明文連線，不支援 '{}'", scheme),
        )),
        None => Ok(format!("http://{}", target)),
    }
}

pub struct ManagedChannel {
    target: String,
    channel: Channel,
    runtime: Option<Runtime>,
    shutdown_timeout: Duration,
}

impl ManagedChannel {
    /// 建立延遲連線的通道，實際連線在第一次呼叫時發生
    pub fn open(target: &str, request_timeout: Option<Duration>, shutdown_timeout: Duration) -> Result<Self> {
        let uri = endpoint_uri(target)?;
        let mut endpoint = Endpoint::from_shared(uri)
            .map_err(|e| ClientError::invalid_endpoint(target, e))?;
        if let Some(timeout) = request_timeout {
            endpoint = endpoint.timeout(timeout);
        }

        let runtime = Builder::new_current_thread().enable_all().build()?;
        let channel = {
            let _guard = runtime.enter();
            endpoint.connect_lazy()
        };
        debug!("建立通道：{}", target);

        Ok(ManagedChannel {
            target: target.to_string(),
            channel,
            runtime: Some(runtime),
            shutdown_timeout,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn channel(&self) -> Channel {
        self.channel.clone()
    }

    /// 在通道的執行環境上同步等待 future 完成
    pub fn block_on<F: Future>(&self, future: F) -> Option<F::Output> {
        self.runtime.as_ref().map(|runtime| runtime.block_on(future))
    }

    /// 立即關閉通道，最多等待 shutdown_timeout
    pub fn shutdown(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            let start = Instant::now();
            runtime.shutdown_timeout(self.shutdown_timeout);
            info!("通道已關閉：{}，耗時 {:.2} 秒", self.target, start.elapsed().as_secs_f64());
        }
    }
}

impl Drop for ManagedChannel {
    fn drop(&mut self) {
        self.release();
    }
}

/// 以 gRPC 實作的轉換服務
pub struct GrpcConversionService {
    channel: ManagedChannel,
}

impl GrpcConversionService {
    pub fn new(channel: ManagedChannel) -> Self {
        GrpcConversionService { channel }
    }
}

impl ConversionServiceTrait for GrpcConversionService {
    fn pdf_to_html(&self, request: ConversionRequest) -> std::result::Result<ConversionReply, RemoteCallFailure> {
        let mut client = ConvertPdfToHtmlClient::new(self.channel.channel());
        let request = pdftohtml::Request::from(request);

        let response = self
            .channel
            .block_on(client.pdf_to_html(request))
            .ok_or_else(|| RemoteCallFailure::new(Code::Unavailable, "通道已關閉"))??;

        Ok(response.into_inner().into())
    }
}

/// 依配置開啟明文通道的連線器
pub struct GrpcConnector;

impl ServiceConnector for GrpcConnector {
    fn connect(&self, config: &AppConfig) -> Result<Box<dyn ConversionServiceTrait>> {
        let channel = ManagedChannel::open(&config.target, config.request_timeout, config.shutdown_timeout)?;
        info!("連線目標：{}（明文）", channel.target());
        Ok(Box::new(GrpcConversionService::new(channel)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    // 取得一個目前沒有人監聽的本機埠
    fn closed_local_target() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("127.0.0.1:{}", port)
    }

    #[test]
    fn bare_host_port_gets_plaintext_scheme() {
        assert_eq!(endpoint_uri("localhost:50051").unwrap(), "http://localhost:50051");
        assert_eq!(endpoint_uri("http://10.0.0.1:7000").unwrap(), "http://10.0.0.1:7000");
    }

    #[test]
    fn secure_or_empty_targets_are_rejected() {
        assert!(matches!(endpoint_uri("https://example.com"), Err(ClientError::InvalidEndpoint { .. })));
        assert!(matches!(endpoint_uri("   "), Err(ClientError::InvalidEndpoint { .. })));
    }

    #[test]
    fn malformed_target_fails_to_open() {
        let result = ManagedChannel::open("bad host:50051", None, Duration::from_secs(1));
        assert!(matches!(result, Err(ClientError::InvalidEndpoint { .. })));
    }

    #[test]
    fn opening_does_not_connect() {
        let channel = ManagedChannel::open(&closed_local_target(), None, Duration::from_secs(1)).unwrap();
        assert!(channel.target().starts_with("127.0.0.1:"));
        channel.shutdown();
    }

    #[test]
    fn unreachable_server_yields_failure_and_releases_quickly() {
        let channel = ManagedChannel::open(&closed_local_target(), None, Duration::from_secs(2)).unwrap();
        let service = GrpcConversionService::new(channel);

        let result = service.pdf_to_html(ConversionRequest::new("a.pdf", "b.html", "xxxx"));
        assert!(result.is_err());

        let start = Instant::now();
        drop(service);
        assert!(start.elapsed() < Duration::from_secs(3));
    }
}
