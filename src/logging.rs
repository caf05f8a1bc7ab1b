use chrono::Local;
use std::fs::{create_dir_all, read_dir, remove_file, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// How many session log files are kept before the oldest are removed.
const KEPT_LOG_FILES: usize = 10;

/// Opens a per-session log file under the cache directory. Logging is
/// file-only; stderr would tear up the interactive UI.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("surveyme")
        .join("logs");
    create_dir_all(&log_dir)?;
    prune_old_logs(&log_dir);

    let log_file = log_dir.join(format!(
        "surveyme-{}.log",
        Local::now().format("%Y%m%d-%H%M%S")
    ));
    *LOG_FILE.lock().unwrap() = Some(log_file.clone());

    log_info(&format!(
        "surveyme {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_file.display()
    ));
    Ok(())
}

/// Timestamped file names sort chronologically.
fn prune_old_logs(log_dir: &Path) {
    let Ok(entries) = read_dir(log_dir) else {
        return;
    };
    let mut logs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|ext| ext == "log").unwrap_or(false))
        .collect();
    if logs.len() < KEPT_LOG_FILES {
        return;
    }

    logs.sort();
    let excess = logs.len() + 1 - KEPT_LOG_FILES;
    for path in logs.into_iter().take(excess) {
        let _ = remove_file(&path);
    }
}

pub fn log_error(message: &str) {
    write_line("ERROR", message);
}

pub fn log_warn(message: &str) {
    write_line("WARN", message);
}

pub fn log_info(message: &str) {
    write_line("INFO", message);
}

/// Debug lines are opt-in via SURVEYME_DEBUG to keep session logs small.
pub fn log_debug(message: &str) {
    if std::env::var("SURVEYME_DEBUG").is_ok() {
        write_line("DEBUG", message);
    }
}

pub fn log_panic_info(info: &std::panic::PanicInfo) {
    let location = info
        .location()
        .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
        .unwrap_or_else(|| "unknown location".to_string());
    let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    write_line("PANIC", &format!("at {} - {}", location, payload));

    let backtrace = std::backtrace::Backtrace::capture();
    log_debug(&format!("Backtrace:\n{}", backtrace));
}

fn write_line(level: &str, message: &str) {
    if let Some(log_file) = LOG_FILE.lock().unwrap().as_ref() {
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_file) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "{} [{:<5}] {}", timestamp, level, message);
        }
    }
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().unwrap().clone()
}
