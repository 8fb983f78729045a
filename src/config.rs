use std::path::Path;

use anyhow::{Context, Result};
use carpe_calendar::{DEFAULT_DATE_FORMAT, DEFAULT_MIN_YEAR};
use serde::Deserialize;

/// Top-level Carpe configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CarpeConfig {
    /// Reference-date input settings.
    #[serde(default)]
    pub input: InputToml,

    /// Engine settings.
    #[serde(default)]
    pub engine: EngineToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl CarpeConfig {
    /// Reads a TOML config file, or returns defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    /// Defaults to the year of "today".
    #[serde(default)]
    pub max_year: Option<i32>,
}

impl Default for InputToml {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            min_year: default_min_year(),
            max_year: None,
        }
    }
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
fn default_min_year() -> i32 {
    DEFAULT_MIN_YEAR
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EngineToml {
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_sort")]
    pub sort: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            sort: default_sort(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}
fn default_sort() -> String {
    "engine".to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = CarpeConfig::load(None).unwrap();
        assert_eq!(config.input.date_format, "%d/%m/%Y");
        assert_eq!(config.input.min_year, 1901);
        assert_eq!(config.input.max_year, None);
        assert!(!config.engine.parallel);
        assert_eq!(config.output.format, "text");
        assert_eq!(config.output.sort, "engine");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: CarpeConfig = toml::from_str(
            r#"
            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.output.format, "json");
        assert_eq!(config.output.sort, "engine");
        assert_eq!(config.input.min_year, 1901);
    }

    #[test]
    fn unknown_fields_rejected() {
        let parsed: Result<CarpeConfig, _> = toml::from_str(
            r#"
            [engine]
            threads = 4
            "#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [input]
            date_format = "%Y-%m-%d"
            min_year = 1950
            max_year = 2000

            [engine]
            parallel = true
            "#
        )
        .unwrap();
        let config = CarpeConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.input.date_format, "%Y-%m-%d");
        assert_eq!(config.input.min_year, 1950);
        assert_eq!(config.input.max_year, Some(2000));
        assert!(config.engine.parallel);
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = CarpeConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
    }
}
