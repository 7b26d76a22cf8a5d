mod config;
mod paths;
mod prompt;
mod secret;
mod storage;

use std::fs;
use std::io::IsTerminal;
use std::sync::Arc;

use log::{error, info};
use portico_lib::LoginController;
use portico_lib::auth::RemoteAuthentication;
use portico_lib::error::StorageError;
use portico_lib::form::FormPhase;
use portico_lib::storage::{ACCESS_TOKEN_KEY, Storage};
use portico_validation::login_validation;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::{Config, ConfigError};
use crate::prompt::Outcome;
use crate::storage::SqliteStorage;

/// Errors that stop the client.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("token storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("login task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Log to a fresh file under the cache directory. Logging is skipped if the
/// file cannot be created.
fn init_logging(level: LevelFilter) {
    let Some(dir) = paths::log_dir() else { return };
    match paths::start_log(&dir) {
        Ok((_, file)) => {
            if let Err(e) = WriteLogger::init(level, LogConfig::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file in {}: {}", dir.display(), e),
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    let db_path = config.token_db_path()?;
    if let Some(dir) = db_path.parent() {
        fs::create_dir_all(dir)?;
    }

    let storage = SqliteStorage::open(&db_path).await?;
    if storage.get(ACCESS_TOKEN_KEY).await?.is_some() {
        println!("A session is already stored. Signing in again replaces it.");
    }
    let authentication = RemoteAuthentication::new(&config.api_url)?;
    info!("Authenticating against {}", authentication.login_url());

    let controller = LoginController::new(
        Arc::new(login_validation(config.password_min_length)),
        Arc::new(authentication),
        Arc::new(storage),
    );
    let handle = controller.handle();
    let mut view = controller.subscribe();
    let task = tokio::spawn(controller.run());

    let hide_password = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let outcome = prompt::run(&mut lines, &handle, &mut view, hide_password).await?;
    drop(handle);

    let state = task.await?;
    match (outcome, state.phase()) {
        (Outcome::Finished, FormPhase::Succeeded) => {
            println!("Signed in. Session stored in {}", db_path.display());
        }
        _ => println!("Not signed in."),
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    init_logging(config.log_level);

    if let Err(e) = run(config).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
