use log::LevelFilter;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

const APP_NAME: &str = "eznm";
const LOG_FILE_NAME: &str = "eznm.log";

/// Initialize logging to a per-user log file. The form owns the terminal, so
/// nothing is ever logged to stdout or stderr.
pub fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_path = get_log_file_path()?;

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let log_level = resolve_level(std::env::var("RUST_LOG").ok().as_deref(), verbose);

    env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {} - {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(
            fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)?
        )))
        .try_init()?;

    log::info!("Logging initialized to: {}", log_path.display());
    log::info!("Log level: {}", log_level);

    Ok(())
}

/// `RUST_LOG` wins when it parses; otherwise `--verbose` means debug
fn resolve_level(env_value: Option<&str>, verbose: bool) -> LevelFilter {
    let fallback = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_value
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(fallback)
}

/// Get the system-specific log file path
pub fn get_log_file_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let log_dir = if cfg!(target_os = "macos") {
        // macOS: ~/Library/Logs/eznm/
        dirs::home_dir()
            .ok_or("Could not find home directory")?
            .join("Library")
            .join("Logs")
            .join(APP_NAME)
    } else {
        // ~/.local/share/eznm/logs/ and equivalents
        dirs::data_local_dir()
            .ok_or("Could not find local data directory")?
            .join(APP_NAME)
            .join("logs")
    };

    Ok(log_dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_generation() {
        let path = get_log_file_path().unwrap();
        assert!(path.to_string_lossy().contains("eznm"));
        assert!(path.to_string_lossy().ends_with("eznm.log"));
    }

    #[test]
    fn test_resolve_level() {
        assert_eq!(resolve_level(None, false), LevelFilter::Info);
        assert_eq!(resolve_level(None, true), LevelFilter::Debug);
        assert_eq!(resolve_level(Some("trace"), false), LevelFilter::Trace);
        assert_eq!(resolve_level(Some("bogus"), true), LevelFilter::Debug);
    }
}
