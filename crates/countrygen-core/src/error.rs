// crates/countrygen-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Only the primary dataset can produce these; everything
/// else degrades to a [`crate::report::Warning`].
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("could not read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GeoError>;

/// Rendering a single record failed. Reported per artifact.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn cause_is_chained_not_repeated() {
        let err = GeoError::Read {
            path: PathBuf::from("src/countries.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "could not read src/countries.json");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("gone"));
    }
}
