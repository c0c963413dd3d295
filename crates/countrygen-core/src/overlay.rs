// crates/countrygen-core/src/overlay.rs

//! # Overlay Reader
//!
//! Reads the optional per-country YAML files:
//!
//! - `countries/<CODE>.yaml`: `{ CODE: { continent, eu_member, ... } }`
//! - `subdivisions/<CODE>.yaml`: `{ SUBCODE: { name, names, latitude, ... } }`
//!
//! Fields are decoded from an untyped [`serde_yaml::Value`] against their
//! expected shape. A field with the wrong shape is coerced when that is
//! lossless enough (number -> text) and otherwise ignored; both cases leave a
//! [`WarningKind::FieldType`] warning. A missing or unparsable file is never
//! fatal: the reader returns `None` and records why.

use crate::config::Paths;
use crate::report::{Report, WarningKind};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Decoded entry of a country overlay. `None` means "not provided", and the
/// merger keeps the canonical value for that field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CountryOverlay {
    pub international_prefix: Option<String>,
    pub continent: Option<String>,
    pub eu_member: Option<bool>,

    pub min_longitude: Option<f64>,
    pub min_latitude: Option<f64>,
    pub max_longitude: Option<f64>,
    pub max_latitude: Option<f64>,

    /// From `latitude_dec` / `longitude_dec`.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// From `latitude` / `longitude` (human-readable form).
    pub latitude_string: Option<String>,
    pub longitude_string: Option<String>,
}

/// Decoded entry of a subdivision overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubdivisionOverlay {
    pub code: String,
    pub name: Option<String>,
    pub names: Vec<String>,

    pub min_longitude: Option<f64>,
    pub min_latitude: Option<f64>,
    pub max_longitude: Option<f64>,
    pub max_latitude: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

pub fn read_country_overlay(
    paths: &Paths,
    code: &str,
    report: &mut Report,
) -> Option<CountryOverlay> {
    let path = paths.country_overlay(code);
    let root = read_yaml(&path, report)?;
    let code = code.to_ascii_uppercase();

    let Value::Mapping(root) = root else {
        report.warn(
            WarningKind::OverlayParseError,
            path.display().to_string(),
            format!("expected a mapping keyed by {code}"),
        );
        return None;
    };

    let Some(entry) = lookup_code(&root, &code) else {
        report.warn(
            WarningKind::OverlayMissing,
            path.display().to_string(),
            format!("no entry for {code}"),
        );
        return None;
    };

    let Value::Mapping(entry) = untag(entry) else {
        report.warn(
            WarningKind::OverlayParseError,
            path.display().to_string(),
            format!("entry {code} is not a mapping"),
        );
        return None;
    };

    let mut fields = Fields::new(entry, format!("{}#{code}", path.display()), report);
    Some(CountryOverlay {
        international_prefix: fields.text("international_prefix"),
        continent: fields.text("continent"),
        eu_member: fields.flag("eu_member"),
        min_longitude: fields.coordinate("min_longitude"),
        min_latitude: fields.coordinate("min_latitude"),
        max_longitude: fields.coordinate("max_longitude"),
        max_latitude: fields.coordinate("max_latitude"),
        latitude: fields.coordinate("latitude_dec"),
        longitude: fields.coordinate("longitude_dec"),
        latitude_string: fields.text("latitude"),
        longitude_string: fields.text("longitude"),
    })
}

/// Entries come back in file order. An empty file yields an empty list.
pub fn read_subdivision_overlay(
    paths: &Paths,
    code: &str,
    report: &mut Report,
) -> Option<Vec<SubdivisionOverlay>> {
    let path = paths.subdivision_overlay(code);
    let root = match read_yaml(&path, report)? {
        Value::Mapping(map) => map,
        Value::Null => Mapping::new(),
        _ => {
            report.warn(
                WarningKind::OverlayParseError,
                path.display().to_string(),
                "expected a mapping of subdivision code to fields",
            );
            return None;
        }
    };

    let mut entries = Vec::with_capacity(root.len());
    for (key, value) in &root {
        let Some(sub_code) = subdivision_code(key, &path, report) else {
            continue;
        };

        let subject = format!("{}#{sub_code}", path.display());
        let empty = Mapping::new();
        let map = match untag(value) {
            Value::Mapping(map) => map,
            other => {
                report.warn(
                    WarningKind::FieldType,
                    &subject,
                    format!("expected a mapping of fields, found {}", shape(other)),
                );
                &empty
            }
        };

        let mut fields = Fields::new(map, subject, report);
        entries.push(SubdivisionOverlay {
            name: fields.text("name"),
            names: fields.names("names"),
            min_longitude: fields.coordinate("min_longitude"),
            min_latitude: fields.coordinate("min_latitude"),
            max_longitude: fields.coordinate("max_longitude"),
            max_latitude: fields.coordinate("max_latitude"),
            latitude: fields.coordinate("latitude"),
            longitude: fields.coordinate("longitude"),
            code: sub_code,
        });
    }

    Some(entries)
}

/// Best-effort numeric parse: anything that is not a finite float is `0.0`.
pub fn parse_coordinate(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

fn read_yaml(path: &Path, report: &mut Report) -> Option<Value> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            report.warn(
                WarningKind::OverlayMissing,
                path.display().to_string(),
                format!("could not read overlay: {e}"),
            );
            return None;
        }
    };

    match serde_yaml::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            report.warn(
                WarningKind::OverlayParseError,
                path.display().to_string(),
                format!("could not parse overlay: {e}"),
            );
            None
        }
    }
}

/// Exact key first, then a case-insensitive match.
fn lookup_code<'a>(root: &'a Mapping, code: &str) -> Option<&'a Value> {
    root.get(code).or_else(|| {
        root.iter()
            .find(|(k, _)| k.as_str().is_some_and(|k| k.eq_ignore_ascii_case(code)))
            .map(|(_, v)| v)
    })
}

fn subdivision_code(key: &Value, path: &Path, report: &mut Report) -> Option<String> {
    match untag(key) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            let code = n.to_string();
            report.warn(
                WarningKind::FieldType,
                path.display().to_string(),
                format!("subdivision code {code} is numeric; quote it to keep leading zeros"),
            );
            Some(code)
        }
        other => {
            report.warn(
                WarningKind::FieldType,
                path.display().to_string(),
                format!("skipping entry with {} key", shape(other)),
            );
            None
        }
    }
}

fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Typed accessors over one overlay entry.
struct Fields<'a> {
    map: &'a Mapping,
    subject: String,
    report: &'a mut Report,
}

impl<'a> Fields<'a> {
    fn new(map: &'a Mapping, subject: String, report: &'a mut Report) -> Self {
        Self {
            map,
            subject,
            report,
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        match self.map.get(key).map(untag) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn mismatch(&mut self, key: &str, expected: &str, found: &Value, action: &str) {
        self.report.warn(
            WarningKind::FieldType,
            &self.subject,
            format!("{key}: expected {expected}, found {}; {action}", shape(found)),
        );
    }

    fn text(&mut self, key: &str) -> Option<String> {
        let value = self.get(key)?;
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => {
                self.mismatch(key, "a string", value, "converted");
                Some(n.to_string())
            }
            Value::Bool(b) => {
                self.mismatch(key, "a string", value, "converted");
                Some(b.to_string())
            }
            _ => {
                self.mismatch(key, "a string", value, "ignored");
                None
            }
        }
    }

    fn flag(&mut self, key: &str) -> Option<bool> {
        let value = self.get(key)?;
        match value {
            Value::Bool(b) => Some(*b),
            _ => {
                self.mismatch(key, "a boolean", value, "ignored");
                None
            }
        }
    }

    /// Numbers and numeric strings; malformed strings silently become `0.0`.
    fn coordinate(&mut self, key: &str) -> Option<f64> {
        let value = self.get(key)?;
        match value {
            Value::Number(n) => Some(n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0)),
            Value::String(s) => Some(parse_coordinate(s)),
            _ => {
                self.mismatch(key, "a number", value, "ignored");
                None
            }
        }
    }

    /// A single string or a list of strings.
    fn names(&mut self, key: &str) -> Vec<String> {
        let Some(value) = self.get(key) else {
            return Vec::new();
        };
        match value {
            Value::String(s) => vec![s.clone()],
            Value::Sequence(items) => {
                let mut names = Vec::with_capacity(items.len());
                for item in items {
                    match untag(item) {
                        Value::String(s) => names.push(s.clone()),
                        other => self.mismatch(key, "a list of strings", other, "item dropped"),
                    }
                }
                names
            }
            _ => {
                self.mismatch(key, "a string or a list of strings", value, "ignored");
                Vec::new()
            }
        }
    }
}
