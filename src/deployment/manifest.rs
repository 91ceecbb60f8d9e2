//! Deployment manifest loading from disk.

use std::fs;
use std::path::Path;

use crate::deployment::types::{Deployment, DeploymentError, DeploymentResult};

/// Read and parse the manifest at `path`.
///
/// A missing file is reported as [`DeploymentError::NotFound`] without
/// attempting a read.
pub fn load_manifest(path: &Path) -> DeploymentResult<Deployment> {
    if !path.exists() {
        return Err(DeploymentError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| DeploymentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let deployment: Deployment =
        serde_json::from_str(&content).map_err(|source| DeploymentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        network = %deployment.name,
        contracts = deployment.contracts.len(),
        "Deployment manifest loaded"
    );

    Ok(deployment)
}
