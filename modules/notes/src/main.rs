//! Notes Service — append-only note list persisted to a JSON file.
//!
//! Exposes `GET /api/notes` and `POST /api/notes` plus a small web page at `/`.
//!
//! Default: http://0.0.0.0:3000/

mod config;
mod error;
mod routes;
mod store;

use config::Config;
use routes::AppState;
use std::sync::Arc;
use store::{NoteStore, StorageError};
use tokio::net::TcpListener;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("could not initialize {path}: {source}")]
    Store {
        path: String,
        #[source]
        source: StorageError,
    },
    #[error("could not bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Panics inside request tasks are logged; the server keeps running.
    std::panic::set_hook(Box::new(|info| {
        log::error!("Uncaught panic: {}", info);
    }));

    let config = Config::from_env();

    let (listener, app) = match start(&config).await {
        Ok(started) => started,
        Err(e) => {
            log::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Server running at http://localhost:{}", config.port);

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize the notes file and bind the listener; any failure here is fatal.
async fn start(config: &Config) -> Result<(TcpListener, axum::Router), StartupError> {
    let store = NoteStore::new(&config.notes_file);
    store.initialize().await.map_err(|source| StartupError::Store {
        path: store.path().display().to_string(),
        source,
    })?;
    log::info!("Notes stored in {}", store.path().display());

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    let app = routes::router(Arc::new(AppState { store }));
    Ok((listener, app))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn local_config(notes_file: std::path::PathBuf) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            notes_file,
        }
    }

    #[tokio::test]
    async fn test_start_initializes_notes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let (listener, _app) = start(&local_config(path.clone())).await.expect("start");

        assert!(listener.local_addr().unwrap().port() > 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_start_fails_when_notes_file_cannot_be_created() {
        let dir = tempdir().unwrap();
        // A regular file where the parent directory should be.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = start(&local_config(blocker.join("notes.json")))
            .await
            .unwrap_err();

        assert!(matches!(err, StartupError::Store { .. }));
        assert!(err.to_string().contains("notes.json"));
    }

    #[tokio::test]
    async fn test_start_fails_when_address_is_taken() {
        let dir = tempdir().unwrap();
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = local_config(dir.path().join("notes.json"));
        config.port = taken.local_addr().unwrap().port();

        let err = start(&config).await.unwrap_err();
        assert!(matches!(err, StartupError::Bind { .. }));
    }
}
