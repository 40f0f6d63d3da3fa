//! 建置腳本
//!
//! 預設使用 src/generated/ 內已產生的 gRPC 程式碼，不需要 protoc。
//! 啟用 `codegen` 功能時以 tonic-build 重新產生：
//!
//!     cargo build --features codegen

fn main() {
    println!("cargo:rerun-if-changed=proto/pdftohtml.proto");
    println!("cargo:rerun-if-changed=src/generated/pdftohtml.rs");

    #[cfg(feature = "codegen")]
    regenerate();
}

#[cfg(feature = "codegen")]
fn regenerate() {
    // 僅產生客戶端，伺服器不在本專案範圍內
    if let Err(e) = tonic_build::configure()
        .build_client(true)
        .build_server(false)
        .out_dir("src/generated/")
        .compile_protos(&["proto/pdftohtml.proto"], &["proto"])
    {
        println!("cargo:warning=重新產生 gRPC 程式碼失敗：{}", e);
        println!("cargo:warning=改用 src/generated/ 內已產生的程式碼");
    }
}
