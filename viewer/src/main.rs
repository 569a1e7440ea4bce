//! Render the catalogue page, optionally after replaying an event script.
//!
//! # Examples
//! ```sh
//! catalog-viewer --dataset-path catalog.json --script-path session.txt --output-path page.html
//! ```

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cap_std::fs::Dir;
use catalog_fixtures::{DatasetError, open_parent_dir};
use catalog_viewer::CatalogApp;
use catalog_viewer::ViewerSettings;
use catalog_viewer::domain::JoinError;
use catalog_viewer::inbound::script::{ScriptError, parse_script};
use ortho_config::OrthoConfig;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to load configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("catalogue is inconsistent: {0}")]
    Join(#[from] JoinError),
    #[error("script {path}: {source}")]
    Script {
        path: PathBuf,
        #[source]
        source: ScriptError,
    },
    #[error("failed to {action} {path}: {message}")]
    Io {
        action: &'static str,
        path: PathBuf,
        message: String,
    },
}

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "catalog-viewer: {err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let settings = ViewerSettings::load_from_iter(env::args_os())
        .map_err(|e| CliError::Config(e.to_string()))?;

    let dataset = settings.load_dataset()?;
    let mut app = CatalogApp::new(&dataset)?;

    if let Some(path) = settings.script_path.as_deref() {
        let source = read_text(path)?;
        let events = parse_script(&source, app.catalog()).map_err(|error| CliError::Script {
            path: path.to_path_buf(),
            source: error,
        })?;
        info!(events = events.len(), path = %path.display(), "replaying script");
        app.dispatch_all(events);
    }

    if settings.check_only {
        info!(
            products = app.catalog().products().len(),
            "inputs are valid"
        );
        return Ok(());
    }

    let html = app.render();
    match settings.output_path.as_deref() {
        Some(path) => write_text(path, &html),
        None => io::stdout()
            .lock()
            .write_all(html.as_bytes())
            .map_err(|e| CliError::Io {
                action: "write",
                path: PathBuf::from("<stdout>"),
                message: e.to_string(),
            }),
    }
}

fn open_parent<'a>(
    path: &'a Path,
    action: &'static str,
) -> Result<(Dir, &'a Path), CliError> {
    open_parent_dir(path).map_err(|e| CliError::Io {
        action,
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn read_text(path: &Path) -> Result<String, CliError> {
    let (dir, file_name) = open_parent(path, "read")?;
    dir.read_to_string(file_name).map_err(|e| CliError::Io {
        action: "read",
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn write_text(path: &Path, contents: &str) -> Result<(), CliError> {
    let (dir, file_name) = open_parent(path, "write")?;
    dir.write(file_name, contents).map_err(|e| CliError::Io {
        action: "write",
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    info!(path = %path.display(), bytes = contents.len(), "page written");
    Ok(())
}
