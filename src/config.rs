//! Optional `.burnmap.toml` configuration discovery and validation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::pipeline::classify::RiskThresholds;

pub const CONFIG_FILE_NAME: &str = ".burnmap.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BurnmapConfig {
    #[serde(default)]
    pub risk: RiskThresholds,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when no `--format` flag is given.
    pub default_format: Option<String>,
}

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<BurnmapConfig, String> {
    let mut config = toml::from_str::<BurnmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Err(e) = config.risk.validate() {
        eprintln!("Warning: Invalid risk thresholds: {e}. Using defaults.");
        config.risk = RiskThresholds::default();
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BurnmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub(crate) fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from `.burnmap.toml` if one exists in the current
/// directory hierarchy; defaults otherwise.
pub fn load_config() -> BurnmapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return BurnmapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            BurnmapConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = parse_and_validate_config(
            r#"
            [risk]
            low_max = 25.0
            medium_max = 75.0

            [output]
            default_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.risk.low_max, 25.0);
        assert_eq!(config.risk.medium_max, 75.0);
        assert_eq!(config.output.default_format.as_deref(), Some("json"));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config.risk, RiskThresholds::default());
        assert_eq!(config.output.default_format, None);
    }

    #[test]
    fn invalid_thresholds_are_replaced_with_defaults() {
        let config = parse_and_validate_config(
            r#"
            [risk]
            low_max = 80.0
            medium_max = 40.0
            "#,
        )
        .unwrap();
        assert_eq!(config.risk, RiskThresholds::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_and_validate_config("[risk").is_err());
    }

    #[test]
    fn ancestors_respect_depth_limit() {
        let dirs: Vec<PathBuf> =
            directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
            ]
        );
    }
}
