//! Where the client keeps its files.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const TOKEN_DB_FILE: &str = "session.db";
const LOG_FILE: &str = "portico.log";
/// The previous run's log. Anything older is overwritten.
const PREVIOUS_LOG_FILE: &str = "portico.log.1";

fn project() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "portico", "portico")
}

/// `session.db` under the platform data directory, e.g.
/// `~/.local/share/portico/session.db` on Linux.
pub fn default_token_db() -> Option<PathBuf> {
    project().map(|dirs| dirs.data_dir().join(TOKEN_DB_FILE))
}

/// The platform cache directory, which holds the log files.
pub fn log_dir() -> Option<PathBuf> {
    project().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Create an empty log file in `dir`, moving the last run's log aside.
pub fn start_log(dir: &Path) -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;

    let path = dir.join(LOG_FILE);
    if path.exists() {
        fs::rename(&path, dir.join(PREVIOUS_LOG_FILE))?;
    }

    let file = File::create(&path)?;
    Ok((path, file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_log_keeps_one_previous_run() {
        let dir = std::env::temp_dir().join(format!("portico-logs-{}", uuid::Uuid::new_v4()));

        for run in ["first", "second", "third"] {
            let (path, _) = start_log(&dir).unwrap();
            fs::write(&path, run).unwrap();
        }

        assert_eq!(fs::read_to_string(dir.join(LOG_FILE)).unwrap(), "third");
        assert_eq!(fs::read_to_string(dir.join(PREVIOUS_LOG_FILE)).unwrap(), "second");
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 2);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_token_db_file_name() {
        if let Some(path) = default_token_db() {
            assert!(path.ends_with(TOKEN_DB_FILE));
        }
    }
}
