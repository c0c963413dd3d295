// crates/countrygen-core/src/merge.rs

//! # Merger
//!
//! Pure functions: canonical record + decoded overlay -> emitted record.
//! No I/O and no warnings happen here; all coercion was done by
//! [`crate::overlay`].

use crate::model::{Country, Subdivision};
use crate::overlay::{CountryOverlay, SubdivisionOverlay};

/// Overwrites the overlay-owned fields of `base`. Fields the overlay does
/// not provide keep their canonical value; `None` overlay means no merge.
pub fn merge_country(base: &Country, overlay: Option<&CountryOverlay>) -> Country {
    let mut country = base.clone();
    let Some(o) = overlay else {
        return country;
    };

    set(&mut country.international_prefix, &o.international_prefix);
    set(&mut country.continent, &o.continent);
    if let Some(eu) = o.eu_member {
        country.eu_member = eu;
    }

    set_f64(&mut country.min_longitude, o.min_longitude);
    set_f64(&mut country.min_latitude, o.min_latitude);
    set_f64(&mut country.max_longitude, o.max_longitude);
    set_f64(&mut country.max_latitude, o.max_latitude);

    set_f64(&mut country.latitude, o.latitude);
    set_f64(&mut country.longitude, o.longitude);
    set(&mut country.latitude_string, &o.latitude_string);
    set(&mut country.longitude_string, &o.longitude_string);

    country
}

/// One [`Subdivision`] per overlay entry, in entry order, each pointing back
/// at `country_code`. Absent coordinates are `0.0`.
pub fn build_subdivisions(country_code: &str, entries: &[SubdivisionOverlay]) -> Vec<Subdivision> {
    entries
        .iter()
        .map(|e| Subdivision {
            country_alpha2: country_code.to_string(),
            code: e.code.clone(),
            name: e.name.clone().unwrap_or_default(),
            names: e.names.clone(),
            min_latitude: e.min_latitude.unwrap_or_default(),
            max_latitude: e.max_latitude.unwrap_or_default(),
            min_longitude: e.min_longitude.unwrap_or_default(),
            max_longitude: e.max_longitude.unwrap_or_default(),
            latitude: e.latitude.unwrap_or_default(),
            longitude: e.longitude.unwrap_or_default(),
        })
        .collect()
}

#[inline]
fn set(field: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        field.clone_from(v);
    }
}

#[inline]
fn set_f64(field: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *field = v;
    }
}
