use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{Fields, ItemError};

/// One item file on disk: a map from item identifier to item definition.
///
/// Keys keep their file order through a load/save cycle (`preserve_order`).
#[derive(Debug, Clone)]
pub struct ItemFile {
    path: PathBuf,
    items: Map<String, Value>,
}

impl ItemFile {
    pub fn new(path: impl Into<PathBuf>, items: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            items,
        }
    }

    /// Read and parse the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ItemError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ItemError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&data).map_err(|source| ItemError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Object(items) => Ok(Self::new(path, items)),
            _ => Err(ItemError::NotAnItemMap {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Write the items back to this file's path, replacing whatever is there.
    ///
    /// Two-space indentation, non-ASCII text written as-is.
    pub fn save(&self) -> Result<(), ItemError> {
        let json = serde_json::to_string_pretty(&self.items).map_err(|source| ItemError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| ItemError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Bare file name, for progress output.
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }

    pub fn items(&self) -> &Map<String, Value> {
        &self.items
    }

    /// Typed views over every item definition, in file order.
    pub fn records_mut(&mut self) -> impl Iterator<Item = Result<Fields<'_>, ItemError>> {
        self.items
            .iter_mut()
            .map(|(id, definition)| Fields::record(id, definition))
    }
}

/// `*.json` files directly inside `dir`, sorted by name.
///
/// Hidden files are skipped. A directory that does not exist yields no files.
pub fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>, ItemError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let io_err = |source| ItemError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let hidden = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'));
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        if is_json && !hidden && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Bare file name of `path`, for progress output.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
