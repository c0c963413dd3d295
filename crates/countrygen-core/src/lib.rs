// crates/countrygen-core/src/lib.rs

//! # countrygen-core
//!
//! Merges the canonical `countries.json` dataset with the per-country YAML
//! overlays under `src/countries/` and `src/subdivisions/`, then renders
//! every merged record as YAML and compact JSON below `dist/`.
//!
//! The entry point for the whole batch is [`pipeline::create`]; the other
//! modules are usable on their own (e.g. merging a single record in tests).

pub mod config;
pub mod error;
pub mod loader;
pub mod merge;
pub mod model;
pub mod overlay;
pub mod pipeline;
pub mod report;
pub mod serialize;
pub mod writer;

// Re-exports
pub use crate::config::{ArtifactKind, Paths};
pub use crate::error::{GeoError, Result, SerializeError};
pub use crate::model::{Country, Subdivision};
pub use crate::pipeline::{create, RunSummary};
pub use crate::report::{Report, Warning, WarningKind};
pub use crate::serialize::Format;
