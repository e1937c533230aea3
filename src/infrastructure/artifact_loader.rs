//! Reads the pre-fitted JSON artifacts shipped next to the binary.

use crate::domain::errors::{ArtifactKind, PredictionError};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{error, info};

/// Reads and deserializes one JSON artifact.
///
/// Any failure (missing file, read error, malformed JSON) is an
/// `ArtifactLoad` error; there is no fallback.
pub fn read_json_artifact<T: DeserializeOwned>(
    artifact: ArtifactKind,
    path: &Path,
) -> Result<T, PredictionError> {
    let load_error = |reason: String| {
        error!("Failed to load {} from {:?}: {}", artifact, path, reason);
        PredictionError::ArtifactLoad {
            artifact,
            path: path.to_path_buf(),
            reason,
        }
    };

    if !path.exists() {
        return Err(load_error("file not found".to_string()));
    }

    let mut file = File::open(path).map_err(|e| load_error(format!("open failed: {}", e)))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| load_error(format!("read failed: {}", e)))?;

    let value = serde_json::from_slice(&buffer)
        .map_err(|e| load_error(format!("deserialization failed: {}", e)))?;

    info!("Successfully loaded {} from {:?}", artifact, path);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ml::scaler::FeatureScaler;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_is_artifact_load_error() {
        let path = PathBuf::from("non_existent_scaler.json");
        let result: Result<FeatureScaler, _> = read_json_artifact(ArtifactKind::Scaler, &path);
        match result {
            Err(PredictionError::ArtifactLoad {
                artifact, reason, ..
            }) => {
                assert_eq!(artifact, ArtifactKind::Scaler);
                assert_eq!(reason, "file not found");
            }
            other => panic!("expected ArtifactLoad, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_artifact_load_error() {
        let path = std::env::temp_dir().join(format!(
            "pricecast-malformed-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, b"{ not json").unwrap();

        let result: Result<FeatureScaler, _> = read_json_artifact(ArtifactKind::Scaler, &path);
        let _ = std::fs::remove_file(&path);

        match result {
            Err(PredictionError::ArtifactLoad { reason, .. }) => {
                assert!(reason.starts_with("deserialization failed"));
            }
            other => panic!("expected ArtifactLoad, got {:?}", other),
        }
    }
}
