// crates/countrygen-core/src/config.rs

//! Input/output locations.
//!
//! Nothing in the core derives paths on its own; every stage receives a
//! [`Paths`] built by the caller.

use crate::serialize::Format;
use std::path::{Path, PathBuf};

pub const COUNTRIES_JSON: &str = "countries.json";

/// Which family of artifact a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Country,
    Subdivisions,
}

impl ArtifactKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            ArtifactKind::Country => "countries",
            ArtifactKind::Subdivisions => "subdivisions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub src_dir: PathBuf,
    pub dist_dir: PathBuf,
}

impl Paths {
    pub fn new(src_dir: impl Into<PathBuf>, dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            src_dir: src_dir.into(),
            dist_dir: dist_dir.into(),
        }
    }

    /// `<src>/countries.json`
    pub fn countries_json(&self) -> PathBuf {
        self.src_dir.join(COUNTRIES_JSON)
    }

    /// `<src>/countries/<CODE>.yaml`
    pub fn country_overlay(&self, code: &str) -> PathBuf {
        overlay_path(&self.src_dir, ArtifactKind::Country, code)
    }

    /// `<src>/subdivisions/<CODE>.yaml`
    pub fn subdivision_overlay(&self, code: &str) -> PathBuf {
        overlay_path(&self.src_dir, ArtifactKind::Subdivisions, code)
    }

    /// `<dist>/<format>/<kind>/<code>.<ext>`, code lowercased.
    pub fn artifact_path(&self, kind: ArtifactKind, format: Format, code: &str) -> PathBuf {
        self.dist_dir
            .join(format.dir_name())
            .join(kind.dir_name())
            .join(format!(
                "{}.{}",
                code.to_ascii_lowercase(),
                format.extension()
            ))
    }
}

fn overlay_path(src: &Path, kind: ArtifactKind, code: &str) -> PathBuf {
    src.join(kind.dir_name())
        .join(format!("{}.yaml", code.to_ascii_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_paths_use_uppercase_codes() {
        let paths = Paths::new("/data/src", "/data/dist");
        assert_eq!(
            paths.country_overlay("se"),
            PathBuf::from("/data/src/countries/SE.yaml")
        );
        assert_eq!(
            paths.subdivision_overlay("Se"),
            PathBuf::from("/data/src/subdivisions/SE.yaml")
        );
        assert_eq!(
            paths.countries_json(),
            PathBuf::from("/data/src/countries.json")
        );
    }

    #[test]
    fn artifact_paths_use_lowercase_codes() {
        let paths = Paths::new("src", "dist");
        assert_eq!(
            paths.artifact_path(ArtifactKind::Country, Format::Yaml, "SE"),
            PathBuf::from("dist/yaml/countries/se.yaml")
        );
        assert_eq!(
            paths.artifact_path(ArtifactKind::Subdivisions, Format::Json, "US"),
            PathBuf::from("dist/json/subdivisions/us.json")
        );
    }
}
