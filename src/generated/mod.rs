//! 由 proto/pdftohtml.proto 產生的 gRPC 程式碼

#![allow(clippy::all)]

pub mod pdftohtml;
