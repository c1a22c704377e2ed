//! Configuration file upgrades: detect keys an older release did not write
//! and add them with their default values.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Dotted paths (e.g. `thresholds.fever_above`) present in `reference` but
/// absent from `actual`.
fn collect_missing(reference: &Mapping, actual: &Mapping, prefix: &str, out: &mut Vec<String>) {
    for (key, ref_val) in reference {
        let Some(name) = key.as_str() else { continue };
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match actual.get(key) {
            None => out.push(path),
            Some(Value::Mapping(sub)) => {
                if let Value::Mapping(ref_sub) = ref_val {
                    collect_missing(ref_sub, sub, &path, out);
                }
            }
            Some(_) => {}
        }
    }
}

/// Recursively copy keys of `reference` missing from `actual`.
fn merge_missing(reference: &Mapping, actual: &mut Mapping) {
    for (key, ref_val) in reference {
        match actual.get_mut(key) {
            None => {
                actual.insert(key.clone(), ref_val.clone());
            }
            Some(Value::Mapping(sub)) => {
                if let Value::Mapping(ref_sub) = ref_val {
                    merge_missing(ref_sub, sub);
                }
            }
            Some(_) => {}
        }
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn file_mapping(content: &str) -> AppResult<Mapping> {
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("configuration file is not a YAML mapping".into())),
    }
}

/// Keys the configuration text lacks compared to the current release.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let mut out = Vec::new();
    collect_missing(&default_mapping()?, &file_mapping(content)?, "", &mut out);
    Ok(out)
}

/// Add missing keys to the file at `path`, keeping every existing value.
/// Returns the keys that were added; the file is left untouched when none.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    let content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let added = missing_keys(&content)?;
    if added.is_empty() {
        return Ok(added);
    }

    let mut actual = file_mapping(&content)?;
    merge_missing(&default_mapping()?, &mut actual);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let serialized = serde_yaml::to_string(&Value::Mapping(actual))?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    Ok(added)
}
