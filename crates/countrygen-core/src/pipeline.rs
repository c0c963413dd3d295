// crates/countrygen-core/src/pipeline.rs

//! # Create pipeline
//!
//! Loader -> (per country) Overlay Reader -> Merger -> Serializer -> Writer.
//!
//! Countries are handled one at a time and share no state; a failure in one
//! country's artifacts only produces warnings. The only fatal error is a
//! primary dataset that cannot be loaded.

use crate::config::{ArtifactKind, Paths};
use crate::error::Result;
use crate::loader::load_countries;
use crate::merge::{build_subdivisions, merge_country};
use crate::overlay::{read_country_overlay, read_subdivision_overlay};
use crate::report::{Report, Warning, WarningKind};
use crate::serialize::{render, Format};
use crate::writer::write_artifact;
use serde::Serialize;

/// Outcome of a `create` run.
#[derive(Debug, Default, Clone)]
pub struct RunSummary {
    /// Countries loaded from the canonical dataset.
    pub countries: usize,
    /// Files written under `<dist>/*/countries/`.
    pub country_files: usize,
    /// Files written under `<dist>/*/subdivisions/`.
    pub subdivision_files: usize,
    pub warnings: Vec<Warning>,
}

impl RunSummary {
    pub fn files_written(&self) -> usize {
        self.country_files + self.subdivision_files
    }
}

/// Regenerates every artifact under `paths.dist_dir` from `paths.src_dir`.
pub fn create(paths: &Paths) -> Result<RunSummary> {
    tracing::info!(
        src = %paths.src_dir.display(),
        dist = %paths.dist_dir.display(),
        "creating artifacts"
    );

    let mut report = Report::new();
    let countries = load_countries(paths.countries_json(), &mut report)?;
    let mut summary = RunSummary {
        countries: countries.len(),
        ..RunSummary::default()
    };

    for base in &countries {
        let code = base.code_upper();
        tracing::debug!(%code, "processing country");

        let overlay = read_country_overlay(paths, &code, &mut report);
        let country = merge_country(base, overlay.as_ref());
        summary.country_files += emit(paths, ArtifactKind::Country, &code, &country, &mut report);

        // Unreadable subdivision overlay: no subdivision artifacts at all.
        if let Some(entries) = read_subdivision_overlay(paths, &code, &mut report) {
            let subdivisions = build_subdivisions(&code, &entries);
            summary.subdivision_files +=
                emit(paths, ArtifactKind::Subdivisions, &code, &subdivisions, &mut report);
        }
    }

    summary.warnings = report.into_warnings();
    tracing::info!(
        countries = summary.countries,
        files = summary.files_written(),
        warnings = summary.warnings.len(),
        "create finished"
    );
    Ok(summary)
}

/// Renders `value` in every format and writes it. Returns the number of
/// files written.
fn emit<T: Serialize + ?Sized>(
    paths: &Paths,
    kind: ArtifactKind,
    code: &str,
    value: &T,
    report: &mut Report,
) -> usize {
    let mut written = 0;
    for format in Format::ALL {
        let bytes = match render(value, format) {
            Ok(bytes) => bytes,
            Err(e) => {
                report.warn(
                    WarningKind::Serialize,
                    code,
                    format!(
                        "could not render {} as {}: {e}",
                        kind.dir_name(),
                        format.extension()
                    ),
                );
                continue;
            }
        };

        let path = paths.artifact_path(kind, format, code);
        match write_artifact(&path, &bytes) {
            Ok(()) => written += 1,
            Err(e) => report.warn(
                WarningKind::Write,
                path.display().to_string(),
                format!("could not save: {e}"),
            ),
        }
    }
    written
}
