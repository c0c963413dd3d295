// crates/countrygen-core/src/report.rs

//! Non-fatal diagnostics.
//!
//! Every stage pushes into a [`Report`] instead of printing. The caller
//! (the CLI, or a test) decides how to surface the collected warnings.

use std::fmt;

/// What went wrong with a unit of work that was skipped or degraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// Overlay file (or the entry for the country inside it) does not exist.
    OverlayMissing,
    /// Overlay file exists but is not valid YAML of the expected shape.
    OverlayParseError,
    /// An overlay field had the wrong type and was coerced or ignored.
    FieldType,
    /// Two translation keys collapsed onto the same uppercase key.
    TranslationKeyCollision,
    /// A canonical record could not be addressed (bad country code).
    InvalidRecord,
    /// A canonical record repeats an earlier country code.
    DuplicateCountry,
    /// A merged record could not be rendered.
    Serialize,
    /// An artifact could not be written.
    Write,
}

impl WarningKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WarningKind::OverlayMissing => "overlay_missing",
            WarningKind::OverlayParseError => "overlay_parse_error",
            WarningKind::FieldType => "field_type",
            WarningKind::TranslationKeyCollision => "translation_key_collision",
            WarningKind::InvalidRecord => "invalid_record",
            WarningKind::DuplicateCountry => "duplicate_country",
            WarningKind::Serialize => "serialize",
            WarningKind::Write => "write",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single warning record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    /// Country code or path the warning is about.
    pub subject: String,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.subject, self.message)
    }
}

/// Ordered collection of warnings produced during one run.
#[derive(Debug, Default, Clone)]
pub struct Report {
    warnings: Vec<Warning>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(
        &mut self,
        kind: WarningKind,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.warnings.push(Warning {
            kind,
            subject: subject.into(),
            message: message.into(),
        });
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Number of warnings of the given kind.
    pub fn count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_in_order_and_counts_by_kind() {
        let mut report = Report::new();
        report.warn(WarningKind::OverlayMissing, "DE", "no overlay");
        report.warn(WarningKind::Write, "/tmp/x", "denied");
        report.warn(WarningKind::OverlayMissing, "FR", "no overlay");

        assert_eq!(report.len(), 3);
        assert_eq!(report.count(WarningKind::OverlayMissing), 2);
        assert_eq!(report.warnings()[1].subject, "/tmp/x");
        assert_eq!(
            report.warnings()[0].to_string(),
            "[overlay_missing] DE: no overlay"
        );
    }
}
