//! Config file upgrades: detect keys missing from an older file and write
//! them back with their default values, leaving existing values untouched.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys a complete configuration file contains, in file order.
pub const KNOWN_KEYS: &[&str] = &[
    "results_dir",
    "activity_log",
    "edition",
    "min_age",
    "max_age",
    "show_chart",
    "chart_width",
];

/// Result of inspecting a configuration file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConfigCheck {
    pub missing: Vec<String>,
    pub unknown: Vec<String>,
}

impl ConfigCheck {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

pub fn check_file(path: &Path) -> AppResult<ConfigCheck> {
    let map = read_mapping(path)?;
    let mut check = ConfigCheck::default();

    for key in KNOWN_KEYS {
        if !map.contains_key(Value::String(key.to_string())) {
            check.missing.push(key.to_string());
        }
    }
    for key in map.keys() {
        if let Some(k) = key.as_str()
            && !KNOWN_KEYS.contains(&k)
        {
            check.unknown.push(k.to_string());
        }
    }

    Ok(check)
}

/// Add every missing key with its default. Returns the keys that were added;
/// the file is only rewritten when that list is not empty.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in KNOWN_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k)
            && let Some(v) = defaults.get(&k)
        {
            map.insert(k, v.clone());
            added.push(key.to_string());
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(map))?;
        fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
