// crates/countrygen-core/src/loader.rs

//! # Loader
//!
//! Reads the canonical `countries.json` (a JSON array of [`Country`]
//! records) and normalizes it for merging.

use crate::error::{GeoError, Result};
use crate::model::Country;
use crate::report::{Report, WarningKind};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Loads the canonical dataset, preserving file order.
///
/// Failing to read or parse the file is fatal. Records that cannot be
/// addressed by a two-letter code, and repeats of an earlier code, are
/// dropped with a warning.
pub fn load_countries(path: impl AsRef<Path>, report: &mut Report) -> Result<Vec<Country>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| GeoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: Vec<Country> = serde_json::from_str(&text).map_err(|source| GeoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    let mut countries = Vec::with_capacity(raw.len());

    for (idx, mut country) in raw.into_iter().enumerate() {
        let code = country.code_upper();
        if !is_alpha2(&code) {
            report.warn(
                WarningKind::InvalidRecord,
                format!("{}[{idx}]", path.display()),
                format!("invalid country code {:?}, record skipped", country.alpha2),
            );
            continue;
        }
        if !seen.insert(code.clone()) {
            report.warn(
                WarningKind::DuplicateCountry,
                &code,
                format!("record #{idx} repeats an earlier code and was skipped"),
            );
            continue;
        }

        uppercase_translation_keys(&mut country, report);
        countries.push(country);
    }

    tracing::debug!(count = countries.len(), path = %path.display(), "loaded countries");
    Ok(countries)
}

/// Uppercases every translation key. Keys are visited in sorted order, so
/// when two keys collapse onto the same uppercase key the later one wins.
pub fn uppercase_translation_keys(country: &mut Country, report: &mut Report) {
    let original = std::mem::take(&mut country.translations);
    let mut normalized = BTreeMap::new();

    for (key, value) in original {
        let upper = key.to_uppercase();
        if let Some(previous) = normalized.insert(upper.clone(), value) {
            report.warn(
                WarningKind::TranslationKeyCollision,
                country.code_upper(),
                format!("translation key {key:?} overwrites {previous:?} under {upper:?}"),
            );
        }
    }

    country.translations = normalized;
}

fn is_alpha2(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_json(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_in_file_order_and_keeps_extra_fields() {
        let file = write_json(
            r#"[
                {"alpha2": "SE", "name": "Sweden", "alpha3": "SWE"},
                {"alpha2": "no", "name": "Norway"}
            ]"#,
        );
        let mut report = Report::new();
        let countries = load_countries(file.path(), &mut report).unwrap();

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].name, "Sweden");
        assert_eq!(countries[0].extra["alpha3"], serde_json::json!("SWE"));
        assert_eq!(countries[1].code_upper(), "NO");
        assert!(!countries[1].eu_member);
        assert!(report.is_empty());
    }

    #[test]
    fn null_fields_load_as_defaults() {
        let file = write_json(
            r#"[
                {"alpha2": "US", "name": "United States", "eu_member": null,
                 "translations": null, "latitude": null, "continent": null},
                {"alpha2": "SE", "name": "Sweden", "eu_member": true}
            ]"#,
        );
        let mut report = Report::new();
        let countries = load_countries(file.path(), &mut report).unwrap();

        assert_eq!(countries.len(), 2);
        assert!(!countries[0].eu_member);
        assert!(countries[0].translations.is_empty());
        assert_eq!(countries[0].latitude, 0.0);
        assert_eq!(countries[0].continent, "");
        assert!(countries[0].extra.is_empty());
        assert!(countries[1].eu_member);
    }

    #[test]
    fn uppercases_translation_keys() {
        let file = write_json(
            r#"[{"alpha2": "DE", "name": "Germany",
                 "translations": {"fr": "Allemagne", "ja": "ドイツ"}}]"#,
        );
        let mut report = Report::new();
        let countries = load_countries(file.path(), &mut report).unwrap();
        let keys: Vec<_> = countries[0].translations.keys().cloned().collect();

        assert_eq!(keys, vec!["FR".to_string(), "JA".to_string()]);
        assert_eq!(countries[0].translations["FR"], "Allemagne");
    }

    #[test]
    fn translation_collision_keeps_last_and_warns() {
        let file = write_json(
            r#"[{"alpha2": "DE", "name": "Germany",
                 "translations": {"FR": "Allemagne (old)", "fr": "Allemagne"}}]"#,
        );
        let mut report = Report::new();
        let countries = load_countries(file.path(), &mut report).unwrap();

        assert_eq!(countries[0].translations.len(), 1);
        assert_eq!(countries[0].translations["FR"], "Allemagne");
        assert_eq!(report.count(WarningKind::TranslationKeyCollision), 1);
    }

    #[test]
    fn skips_invalid_and_duplicate_codes() {
        let file = write_json(
            r#"[
                {"alpha2": "", "name": "Nowhere"},
                {"alpha2": "FR", "name": "France"},
                {"alpha2": "fr", "name": "France again"}
            ]"#,
        );
        let mut report = Report::new();
        let countries = load_countries(file.path(), &mut report).unwrap();

        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].name, "France");
        assert_eq!(report.count(WarningKind::InvalidRecord), 1);
        assert_eq!(report.count(WarningKind::DuplicateCountry), 1);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_countries(dir.path().join("countries.json"), &mut Report::new())
            .unwrap_err();
        assert!(matches!(err, GeoError::Read { .. }));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let file = write_json(r#"{"alpha2": "SE"}"#);
        let err = load_countries(file.path(), &mut Report::new()).unwrap_err();
        assert!(matches!(err, GeoError::Parse { .. }));
    }
}
