use std::fs;
use std::path::{Path, PathBuf};

use crate::model::UserRecord;

/// The data set bundled into the binary, used when no `--data` is given.
pub const BUNDLED_DATA: &str = include_str!("../../data/people.json");

/// Error type for data-source loading
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("bundled data is malformed: {0}")]
    BundledParseError(serde_json::Error),
}

/// Parse a JSON array of user records.
pub fn parse_records(text: &str) -> Result<Vec<UserRecord>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Load records from an explicit file, or fall back to the bundled data set.
///
/// This runs exactly once at startup. There is no retry and no write path
/// back to the source — every mutation after this point is in-memory only.
pub fn load_records(data_path: Option<&Path>) -> Result<Vec<UserRecord>, DataError> {
    match data_path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| DataError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            parse_records(&text).map_err(|e| DataError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })
        }
        None => parse_records(BUNDLED_DATA).map_err(DataError::BundledParseError),
    }
}
