//! Configuration file support for falcon-fix.
//!
//! Provides YAML-based configuration through `falcon-fix.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::remediation::services::ParentVersions;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "falcon-fix.config.yml";

/// Accepted range for `max_tool_rounds`
pub const MAX_TOOL_ROUNDS_RANGE: std::ops::RangeInclusive<usize> = 1..=50;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub model: Option<String>,
    pub api_base_url: Option<String>,
    pub max_tool_rounds: Option<usize>,
    pub offline: Option<bool>,
    /// Newer versions available per parent component, newest first.
    pub parent_versions: Option<ParentVersions>,
    /// Extra component → BOM property entries.
    pub bom_properties: Option<HashMap<String, String>>,
    /// Extra component → `owner/repo` entries for release notes.
    pub github_repositories: Option<HashMap<String, String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if any. Validated on load.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(OutputFormat::from_str)
            .transpose()
            .map_err(anyhow::Error::msg)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn is_component_key(ga: &str) -> bool {
    matches!(ga.split_once(':'), Some((g, a)) if !g.trim().is_empty() && !a.trim().is_empty())
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if OutputFormat::from_str(format).is_err() {
            bail!(
                "Invalid config: format '{}' is not supported.\n\n\
                 💡 Hint: Use 'json' or 'markdown'.",
                format
            );
        }
    }

    if let Some(rounds) = config.max_tool_rounds {
        if !MAX_TOOL_ROUNDS_RANGE.contains(&rounds) {
            bail!(
                "Invalid config: max_tool_rounds must be between {} and {}, got {}.\n\n\
                 💡 Hint: The default of 10 is enough for most vulnerabilities.",
                MAX_TOOL_ROUNDS_RANGE.start(),
                MAX_TOOL_ROUNDS_RANGE.end(),
                rounds
            );
        }
    }

    if let Some(ref url) = config.api_base_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            bail!(
                "Invalid config: api_base_url '{}' must be an http(s) URL.\n\n\
                 💡 Hint: For example \"https://api.openai.com/v1\".",
                url
            );
        }
    }

    if let Some(ref parents) = config.parent_versions {
        for (ga, versions) in parents {
            if !is_component_key(ga) {
                bail!(
                    "Invalid config: parent_versions key '{}' is not a group:artifact.\n\n\
                     💡 Hint: Use keys like \"org.springframework.boot:spring-boot-starter-web\".",
                    ga
                );
            }
            if versions.iter().all(|v| v.trim().is_empty()) {
                bail!(
                    "Invalid config: parent_versions.{} must list at least one version.\n\n\
                     💡 Hint: List available versions newest first, e.g. [\"3.2.1\", \"3.2.0\"].",
                    ga
                );
            }
        }
    }

    if let Some(ref properties) = config.bom_properties {
        for (ga, property) in properties {
            if !is_component_key(ga) || property.trim().is_empty() {
                bail!(
                    "Invalid config: bom_properties entry '{}' is invalid.\n\n\
                     💡 Hint: Map a group:artifact to a property name, e.g. \
                     \"com.fasterxml.jackson.core:jackson-databind: jackson-bom.version\".",
                    ga
                );
            }
        }
    }

    if let Some(ref repositories) = config.github_repositories {
        for (ga, repository) in repositories {
            let valid_repo = matches!(
                repository.split_once('/'),
                Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/')
            );
            if !is_component_key(ga) || !valid_repo {
                bail!(
                    "Invalid config: github_repositories entry '{}' is invalid.\n\n\
                     💡 Hint: Map a group:artifact to \"owner/repo\", e.g. \
                     \"com.google.guava:guava: google/guava\".",
                    ga
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
format: markdown
model: gpt-4o-mini
api_base_url: https://llm.internal.example/v1
max_tool_rounds: 5
offline: false
parent_versions:
  org.springframework.boot:spring-boot-starter-web:
    - 3.2.1
    - 3.2.0
bom_properties:
  org.example:widget: widget.version
github_repositories:
  org.example:widget: example/widget
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Markdown));
        assert_eq!(config.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://llm.internal.example/v1")
        );
        assert_eq!(config.max_tool_rounds, Some(5));
        assert_eq!(config.offline, Some(false));

        let parents = config.parent_versions.unwrap();
        assert_eq!(
            parents["org.springframework.boot:spring-boot-starter-web"],
            vec!["3.2.1".to_string(), "3.2.0".to_string()]
        );
        assert_eq!(
            config.bom_properties.unwrap()["org.example:widget"],
            "widget.version"
        );
        assert_eq!(
            config.github_repositories.unwrap()["org.example:widget"],
            "example/widget"
        );
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\noffline: true\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.offline, Some(true));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "format: xml\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("format 'xml' is not supported"));
    }

    #[test]
    fn test_max_tool_rounds_out_of_range() {
        let dir = TempDir::new().unwrap();
        for rounds in ["0", "51"] {
            let config_path = write_config(&dir, &format!("max_tool_rounds: {}\n", rounds));
            let err = load_config_from_path(&config_path).unwrap_err();
            assert!(err.to_string().contains("max_tool_rounds must be between 1 and 50"));
        }
    }

    #[test]
    fn test_invalid_api_base_url() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "api_base_url: ftp://example.com\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("must be an http(s) URL"));
    }

    #[test]
    fn test_invalid_parent_versions() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "parent_versions:\n  not-a-ga:\n    - \"1.0.0\"\n");
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("is not a group:artifact"));

        let config_path = write_config(&dir, "parent_versions:\n  g:a: []\n");
        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("must list at least one version"));
    }

    #[test]
    fn test_invalid_github_repository() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "github_repositories:\n  g:a: just-a-name\n");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("github_repositories entry 'g:a' is invalid"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            "format: json\nunknown_field: true\nanother_unknown: value\n",
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert!(config.max_tool_rounds.is_none());
        assert!(config.parent_versions.is_none());
        assert_eq!(config.output_format().unwrap(), None);
        assert!(config.unknown_fields.is_empty());
    }
}
