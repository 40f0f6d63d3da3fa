use std::fmt;
use tonic::Code;
use crate::generated::pdftohtml;

/// 單次轉換請求，每次呼叫建立後即丟棄
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub source: String,
    pub destination: String,
    pub password: String,
}

impl ConversionRequest {
    pub fn new(source: &str, destination: &str, password: &str) -> Self {
        ConversionRequest {
            source: source.to_string(),
            destination: destination.to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReply {
    pub status: String,
}

/// 遠端呼叫失敗（傳輸層或伺服器回報），保留 gRPC 狀態碼
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCallFailure {
    pub code: Code,
    pub message: String,
}

impl RemoteCallFailure {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        RemoteCallFailure { code, message: message.into() }
    }
}

impl fmt::Display for RemoteCallFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status{{code={:?}, description={}}}", self.code, self.message)
    }
}

impl std::error::Error for RemoteCallFailure {}

/// 一次轉換的結果，成功帶回狀態文字，失敗帶回原因
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    Completed { status: String },
    Failed(RemoteCallFailure),
}

impl ConversionOutcome {
    pub fn status(&self) -> Option<&str> {
        match self {
            ConversionOutcome::Completed { status } => Some(status),
            ConversionOutcome::Failed(_) => None,
        }
    }
}

impl From<ConversionRequest> for pdftohtml::Request {
    fn from(request: ConversionRequest) -> Self {
        pdftohtml::Request {
            source: request.source,
            destination: request.destination,
            password: request.password,
        }
    }
}

impl From<pdftohtml::Reply> for ConversionReply {
    fn from(reply: pdftohtml::Reply) -> Self {
        ConversionReply { status: reply.status }
    }
}

impl From<tonic::Status> for RemoteCallFailure {
    fn from(status: tonic::Status) -> Self {
        RemoteCallFailure::new(status.code(), status.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_maps_fields_in_order() {
        let request = ConversionRequest::new("in.pdf", "out.html", "secret");
        let wire: pdftohtml::Request = request.into();
        assert_eq!(wire.source, "in.pdf");
        assert_eq!(wire.destination, "out.html");
        assert_eq!(wire.password, "secret");
    }

    #[test]
    fn status_keeps_code_and_message() {
        let failure: RemoteCallFailure = tonic::Status::unavailable("connection refused").into();
        assert_eq!(failure.code, Code::Unavailable);
        assert_eq!(failure.message, "connection refused");
        assert!(failure.to_string().contains("Unavailable"));
    }

    #[test]
    fn outcome_exposes_status_only_when_completed() {
        let done = ConversionOutcome::Completed { status: "OK".to_string() };
        assert_eq!(done.status(), Some("OK"));

        let failed = ConversionOutcome::Failed(RemoteCallFailure::new(Code::Internal, "boom"));
        assert_eq!(failed.status(), None);
    }
}
