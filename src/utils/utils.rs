use std::io::{self, Write};
use std::time::{Duration, Instant};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    // 傳輸層的除錯訊息過多，只保留警告以上
    let result = env_logger::Builder::new()
        .filter_level(log_level_filter)
        .filter_module("h2", log::LevelFilter::Warn)
        .filter_module("hyper", log::LevelFilter::Warn)
        .filter_module("hyper_util", log::LevelFilter::Warn)
        .filter_module("tower", log::LevelFilter::Warn)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init();
    if result.is_err() {
        log::debug!("日誌系統已初始化，略過重複設定");
    }
    Ok(())
}

/// 等待遠端回覆時顯示的轉圈提示
pub struct PendingIndicator {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl PendingIndicator {
    pub fn new(message: &str, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            match ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]") {
                Ok(style) => pb.set_style(style),
                Err(e) => log::debug!("進度樣式無效，使用預設樣式：{}", e),
            }
            pb.enable_steady_tick(Duration::from_millis(120));
            pb
        };
        pb.set_message(message.to_string());
        PendingIndicator {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(&self) {
        log::debug!("等待遠端回覆 {:.2} 秒", self.elapsed().as_secs_f64());
        if self.no_progress {
            return;
        }
        self.pb.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_setup_can_run_twice() {
        assert!(setup_logging("debug").is_ok());
        assert!(setup_logging("unknown").is_ok());
    }

    #[test]
    fn hidden_indicator_tracks_time() {
        let indicator = PendingIndicator::new("等待中", true);
        std::thread::sleep(Duration::from_millis(5));
        assert!(indicator.elapsed() >= Duration::from_millis(5));
        indicator.finish();
    }
}
