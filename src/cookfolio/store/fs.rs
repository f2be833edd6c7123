use super::{decode_collection, encode_collection, LoadReport, RecipeStore, STORAGE_KEY};
use crate::error::{CookfolioError, Result};
use crate::model::Recipe;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: the whole collection is one JSON file
/// (`cookfolio_recipes.json`) under the data root.
///
/// A store built with no root (`FileStore::unavailable`) models an absent
/// persistence medium: loads return the empty collection and saves do
/// nothing, so the rest of the app keeps working without a data directory.
pub struct FileStore {
    root: Option<PathBuf>,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root: Some(root) }
    }

    /// A store with no backing medium. Load is empty, save is a no-op.
    pub fn unavailable() -> Self {
        Self { root: None }
    }

    /// Path of the blob file, when the medium is available.
    pub fn blob_path(&self) -> Option<PathBuf> {
        self.root
            .as_ref()
            .map(|root| root.join(format!("{}.json", STORAGE_KEY)))
    }

    fn ensure_dir(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CookfolioError::Io)?;
        }
        Ok(())
    }
}

impl RecipeStore for FileStore {
    fn load(&self) -> Result<LoadReport> {
        let Some(path) = self.blob_path() else {
            return Ok(LoadReport::default());
        };
        if !path.exists() {
            return Ok(LoadReport::default());
        }
        let blob = fs::read_to_string(path).map_err(CookfolioError::Io)?;
        Ok(decode_collection(&blob))
    }

    fn save(&mut self, recipes: &[Recipe]) -> Result<()> {
        let Some(path) = self.blob_path() else {
            return Ok(());
        };
        if let Some(root) = self.root.as_deref() {
            Self::ensure_dir(root)?;
        }
        let blob = encode_collection(recipes)?;
        fs::write(path, blob).map_err(CookfolioError::Io)?;
        Ok(())
    }
}
