mod fields;
mod file;

use std::path::PathBuf;

pub use fields::Fields;
pub use file::{ItemFile, display_name, list_json_files};

/// ---- Errors ----
#[derive(thiserror::Error, Debug)]
pub enum ItemError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: top-level value is not an item map", .path.display())]
    NotAnItemMap { path: PathBuf },
    #[error("item '{item}': field '{field}' expected {expected}, found {found}")]
    TypeMismatch {
        item: String,
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("item '{item}': scaled value of '{field}' does not fit a JSON number")]
    NotRepresentable { item: String, field: String },
    #[error("file name is not valid UTF-8: {}", .path.display())]
    NonUtf8Name { path: PathBuf },
    #[error("derived identifier '{id}' (from '{source_id}') collides with an existing item")]
    IdentifierCollision { id: String, source_id: String },
}
