/// Best-effort diagnostic log.
/// Appends `<timestamp>: <message>` lines to a plain-text file. Every failure
/// is swallowed; entries are mirrored to tracing at debug level.
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOG_FILE_NAME: &str = "log.txt";

#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    path: Option<PathBuf>,
}

impl DiagnosticLog {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// `log.txt` in the user's Downloads directory, if there is one
    pub fn in_downloads() -> Self {
        Self::new(dirs::download_dir().map(|dir| dir.join(LOG_FILE_NAME)))
    }

    /// Log that only goes to tracing
    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn log(&self, message: &str) {
        debug!(target: "diagnostics", "{}", message);

        let Some(path) = &self.path else {
            return;
        };
        let line = format!("{}: {}\n", Local::now().format("%Y-%m-%d %H:%M:%S %z"), message);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(e) = result {
            debug!("Diagnostic log write to {} skipped: {}", path.display(), e);
        }
    }
}
