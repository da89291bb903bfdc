//! File-backed storage of trained models, one file per correction table

use crate::error::{ForecastError, Result};
use crate::models::ModelArtifact;
use correction_math::CorrectionTableKind;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores model artifacts as `<dir>/<kind>.apk`.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so readers see either the old or the new model.
#[derive(Debug, Clone)]
pub struct FileModelStore {
    dir: PathBuf,
}

impl FileModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the model file for `kind`
    pub fn path_for(&self, kind: CorrectionTableKind) -> PathBuf {
        self.dir.join(kind.model_file_name())
    }

    pub fn exists(&self, kind: CorrectionTableKind) -> bool {
        self.path_for(kind).is_file()
    }

    /// Persist a freshly trained model
    pub fn save(&self, kind: CorrectionTableKind, artifact: &ModelArtifact) -> Result<PathBuf> {
        let bytes = artifact.to_bytes()?;
        self.write_atomic(kind, &bytes)
    }

    /// Load and decode the model for `kind`
    pub fn load(&self, kind: CorrectionTableKind) -> Result<ModelArtifact> {
        let bytes = self.read_bytes(kind)?;
        ModelArtifact::from_bytes(&bytes)
    }

    /// Raw artifact bytes for `kind`
    pub fn read_bytes(&self, kind: CorrectionTableKind) -> Result<Vec<u8>> {
        match fs::read(self.path_for(kind)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ForecastError::ModelNotFound(kind.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Store uploaded bytes, creating or overwriting the model.
    ///
    /// The bytes must decode as a [`ModelArtifact`].
    pub fn write_bytes(&self, kind: CorrectionTableKind, bytes: &[u8]) -> Result<PathBuf> {
        ModelArtifact::from_bytes(bytes)?;
        self.write_atomic(kind, bytes)
    }

    /// Overwrite an existing model; fails when none is stored yet
    pub fn replace_bytes(&self, kind: CorrectionTableKind, bytes: &[u8]) -> Result<PathBuf> {
        if !self.exists(kind) {
            return Err(ForecastError::ModelNotFound(kind.to_string()));
        }
        self.write_bytes(kind, bytes)
    }

    /// Remove the model for `kind`
    pub fn delete(&self, kind: CorrectionTableKind) -> Result<()> {
        match fs::remove_file(self.path_for(kind)) {
            Ok(()) => {
                tracing::debug!(%kind, "model removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ForecastError::ModelNotFound(kind.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_atomic(&self, kind: CorrectionTableKind, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(kind);

        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(bytes)?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|e| e.error)?;

        tracing::debug!(%kind, path = %path.display(), "model written");
        Ok(path)
    }
}
