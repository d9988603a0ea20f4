use anyhow::Result;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Log file name
const ACTIVITY_LOG_FILE: &str = "activity_log.txt";

/// Get the directory where app data is stored (same as settings)
fn app_data_dir() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        let app_dir = config_dir.join("orbisdash");
        if !app_dir.exists() {
            let _ = fs::create_dir_all(&app_dir);
        }
        app_dir
    } else {
        // Fall back to current directory
        PathBuf::from(".")
    }
}

fn log_path() -> PathBuf {
    app_data_dir().join(ACTIVITY_LOG_FILE)
}

/// Get the full path to the activity log file as a string for display
pub fn log_file_path() -> String {
    log_path().display().to_string()
}

/// Append a structured entry describing a user-visible session event.
pub fn append_log(event: &str, details: impl AsRef<str>) -> Result<()> {
    let path = log_path();

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let timestamp = Utc::now().to_rfc3339();
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

    writeln!(file, "[{}] event={}", timestamp, event)?;

    let body = details.as_ref();
    if body.trim().is_empty() {
        writeln!(file, "  (no additional details)")?;
    } else {
        for line in body.lines() {
            if line.trim().is_empty() {
                writeln!(file)?;
            } else {
                writeln!(file, "  {}", line)?;
            }
        }
    }

    writeln!(file)?;
    Ok(())
}

/// Read the entire log file content
pub fn read_log() -> Result<String> {
    let path = log_path();
    if path.exists() {
        Ok(fs::read_to_string(&path)?)
    } else {
        Ok(String::new())
    }
}
