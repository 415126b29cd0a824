//! Config file upgrades: add keys introduced after the file was written,
//! filled with their default values. Existing values are never touched.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn defaults_mapping() -> AppResult<Mapping> {
    let value =
        serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))?;
    value
        .as_mapping()
        .cloned()
        .ok_or_else(|| AppError::Config("default configuration is not a mapping".into()))
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    let value: Value = serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
    match value {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("configuration file is not a mapping".into())),
    }
}

/// Top-level keys of the default config that `content` lacks.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let current = parse_mapping(content)?;
    Ok(defaults_mapping()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Returns the upgraded YAML and the keys that were added.
pub fn fill_missing_keys(content: &str) -> AppResult<(String, Vec<String>)> {
    let mut current = parse_mapping(content)?;
    let mut added = Vec::new();

    for (k, v) in defaults_mapping()? {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    let yaml = serde_yaml::to_string(&current).map_err(|e| AppError::Config(e.to_string()))?;
    Ok((yaml, added))
}

/// Rewrite the config file in place when keys are missing.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let (yaml, added) = fill_missing_keys(&content)?;
    if !added.is_empty() {
        fs::write(path, yaml)?;
    }
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_keys() {
        let missing = missing_keys("database: /tmp/a.sqlite\npolicy: elapsed\n").unwrap();
        assert!(missing.contains(&"schedule".to_string()));
        assert!(missing.contains(&"checkpoints".to_string()));
        assert!(!missing.contains(&"database".to_string()));
        assert!(!missing.contains(&"policy".to_string()));
    }

    #[test]
    fn filling_keeps_existing_values() {
        let (yaml, added) =
            fill_missing_keys("database: /tmp/a.sqlite\npolicy: checkpoint\n").unwrap();
        assert!(added.contains(&"bind_address".to_string()));
        let cfg = Config::from_yaml(&yaml).unwrap();
        assert_eq!(cfg.database, "/tmp/a.sqlite");
        assert_eq!(cfg.policy, crate::core::reconciler::Policy::Checkpoint);
        assert!(missing_keys(&yaml).unwrap().is_empty());
    }
}
