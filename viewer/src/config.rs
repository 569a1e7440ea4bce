//! Viewer configuration loaded via OrthoConfig.
//!
//! Values are layered: command-line flags, then `CATALOG_VIEWER_*`
//! environment variables, then any configuration file, then defaults.

use std::path::PathBuf;

use catalog_fixtures::{Dataset, DatasetError};
use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Inputs and outputs of one viewer run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOG_VIEWER")]
pub struct ViewerSettings {
    /// Validate the dataset and script, then exit without rendering.
    #[ortho_config(default = false)]
    pub check_only: bool,
    /// JSON dataset to load; the bundled catalogue is used when absent.
    pub dataset_path: Option<PathBuf>,
    /// Event script replayed before rendering.
    pub script_path: Option<PathBuf>,
    /// File receiving the rendered HTML; standard output when absent.
    pub output_path: Option<PathBuf>,
}

impl ViewerSettings {
    /// Load the configured dataset, falling back to the bundled one.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] when the file cannot be read or parsed.
    pub fn load_dataset(&self) -> Result<Dataset, DatasetError> {
        self.dataset_path
            .as_deref()
            .map_or_else(Dataset::bundled, Dataset::open)
    }
}
