use std::ffi::OsString;
use clap::{CommandFactory, Parser};
use thiserror::Error;

pub const PROGRAM_NAME: &str = "pdf_to_html_client";
pub const DEFAULT_TARGET: &str = "localhost:50051";
pub const DEFAULT_PASSWORD: &str = "xxxx";

// 只用於產生用法說明；參數按位置直接取值，不經 clap 重新解析
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pdf_to_html_client",
    about = "透過 gRPC 要求伺服器將文件轉換為 HTML",
    after_help = format!("伺服器位址由 PDF_TO_HTML_TARGET 設定，預設為 {}", DEFAULT_TARGET),
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// 要轉換的文件路徑或 URI
    #[arg(value_name = "SOURCE")]
    pub source: String,
    /// 轉換結果的輸出路徑或 URI
    #[arg(value_name = "DESTINATION")]
    pub destination: String,
    /// 文件密碼，省略時使用預設佔位密碼
    #[arg(value_name = "PASSWORD")]
    pub password: Option<String>,
}

/// 解析完成的一次呼叫參數
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub source: String,
    pub destination: String,
    pub password: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum UsageError {
    #[error("已要求顯示用法")]
    HelpRequested,

    #[error("please enter source, destination and password")]
    WrongArgumentCount(usize),

    #[error("第 {0} 個參數不是有效的 UTF-8")]
    NonUtf8Argument(usize),
}

/// 解析不含程式名稱的命令列參數
///
/// `--help` 只在第一個位置有意義；其餘參數（包含 `--`）一律原樣取用。
pub fn parse_invocation(args: &[OsString]) -> Result<Invocation, UsageError> {
    if args.first().and_then(|arg| arg.to_str()) == Some("--help") {
        return Err(UsageError::HelpRequested);
    }
    if !(2..=3).contains(&args.len()) {
        return Err(UsageError::WrongArgumentCount(args.len()));
    }

    let mut values = args
        .iter()
        .enumerate()
        .map(|(i, arg)| arg.to_str().map(str::to_string).ok_or(UsageError::NonUtf8Argument(i + 1)))
        .collect::<Result<Vec<String>, UsageError>>()?
        .into_iter();

    Ok(Invocation {
        source: values.next().unwrap_or_default(),
        destination: values.next().unwrap_or_default(),
        password: values.next(),
    })
}

pub fn usage_text() -> String {
    Cli::command().render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn two_arguments_leave_password_unset() {
        let invocation = parse_invocation(&args(&["a.pdf", "b.html"])).unwrap();
        assert_eq!(invocation.source, "a.pdf");
        assert_eq!(invocation.destination, "b.html");
        assert_eq!(invocation.password, None);
    }

    #[test]
    fn third_argument_is_password_verbatim() {
        let invocation = parse_invocation(&args(&["a.pdf", "b.html", " p@ss -word "])).unwrap();
        assert_eq!(invocation.password.as_deref(), Some(" p@ss -word "));
    }

    #[test]
    fn double_dash_is_taken_as_a_value_in_every_position() {
        let invocation = parse_invocation(&args(&["--", "b.html", "pw"])).unwrap();
        assert_eq!(invocation.source, "--");
        assert_eq!(invocation.destination, "b.html");
        assert_eq!(invocation.password.as_deref(), Some("pw"));

        let invocation = parse_invocation(&args(&["a.pdf", "--"])).unwrap();
        assert_eq!(invocation.destination, "--");
        assert_eq!(invocation.password, None);

        let invocation = parse_invocation(&args(&["a.pdf", "b.html", "--"])).unwrap();
        assert_eq!(invocation.password.as_deref(), Some("--"));
    }

    #[test]
    fn wrong_counts_are_rejected() {
        for values in [&[][..], &["a.pdf"][..], &["a", "b", "c", "d"][..]] {
            assert_eq!(
                parse_invocation(&args(values)),
                Err(UsageError::WrongArgumentCount(values.len()))
            );
        }
    }

    #[test]
    fn wrong_count_message_is_exact() {
        assert_eq!(
            UsageError::WrongArgumentCount(1).to_string(),
            "please enter source, destination and password"
        );
    }

    #[test]
    fn help_wins_regardless_of_other_arguments() {
        for values in [&["--help"][..], &["--help", "b"][..], &["--help", "b", "c", "d", "e"][..]] {
            assert_eq!(parse_invocation(&args(values)), Err(UsageError::HelpRequested));
        }
    }

    #[test]
    fn help_in_later_position_is_a_plain_value() {
        let invocation = parse_invocation(&args(&["a.pdf", "--help"])).unwrap();
        assert_eq!(invocation.destination, "--help");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_a_usage_error() {
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(vec![b'a', 0xff, b'.', b'p', b'd', b'f']);
        let values = vec![OsString::from("a.pdf"), bad];
        assert_eq!(parse_invocation(&values), Err(UsageError::NonUtf8Argument(2)));
    }

    #[test]
    fn usage_mentions_arguments_and_default_target() {
        let usage = usage_text();
        assert!(usage.contains(PROGRAM_NAME));
        assert!(usage.contains("<SOURCE>"));
        assert!(usage.contains("[PASSWORD]"));
        assert!(usage.contains(DEFAULT_TARGET));
    }
}
