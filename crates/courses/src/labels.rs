//! Country labels, seeded from a reference list.
use std::{collections::HashSet, io::Read};

use fmcourses_client::labels::Label;
use rand::Rng;
use serde_json::Value;

use crate::{Error, Result};

/// Read the country list: a JSON object whose values are country names, in file order.
pub fn load_countries<R: Read>(reader: R) -> Result<Vec<String>> {
    let value: Value = serde_json::from_reader(reader)?;
    let Value::Object(map) = value else {
        return Err(Error::BadCountries);
    };

    map.into_iter()
        .map(|(_, v)| match v {
            Value::String(s) => Ok(s),
            _ => Err(Error::BadCountries),
        })
        .collect()
}

/// The names in `wanted` that don't exist as labels yet, ignoring case.
pub fn missing_labels(existing: &[Label], wanted: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = existing.iter().map(|l| l.name.to_lowercase()).collect();

    wanted
        .iter()
        .filter(|name| seen.insert(name.to_lowercase()))
        .cloned()
        .collect()
}

/// A random label colour, as six lowercase hex digits
pub fn random_color() -> String {
    format!("{:06x}", rand::thread_rng().gen_range(0..=0xFFFFFFu32))
}
