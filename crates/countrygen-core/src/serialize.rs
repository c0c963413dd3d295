// crates/countrygen-core/src/serialize.rs
use crate::error::SerializeError;
use serde::Serialize;

/// Output formats. YAML is the human-readable one, JSON the compact
/// interchange one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Yaml, Format::Json];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }

    /// Top-level directory under `dist/`.
    pub fn dir_name(self) -> &'static str {
        self.extension()
    }
}

/// Renders any serializable record (a country, or a country's subdivision
/// list) in the given format.
pub fn render<T: Serialize + ?Sized>(value: &T, format: Format) -> Result<Vec<u8>, SerializeError> {
    match format {
        Format::Yaml => Ok(serde_yaml::to_string(value)?.into_bytes()),
        Format::Json => Ok(serde_json::to_vec(value)?),
    }
}
