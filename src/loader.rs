use crate::errors::LoadError;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads the file at `path` and parses its full contents as a JSON document
/// of any shape.
pub fn load_json_file(path: &Path) -> Result<Value, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let value: Value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        // A read failure part way through surfaces as an I/O error rather
        // than a syntax error.
        if source.is_io() {
            LoadError::Io {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            LoadError::InvalidJson {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    debug!(path = %path.display(), "loaded JSON document");
    Ok(value)
}
