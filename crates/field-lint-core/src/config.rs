//! Configuration types for field-lint.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

/// Class-name suffixes targeted when nothing else is configured.
pub const DEFAULT_TARGET_SUFFIXES: &[&str] = &["Form", "ContentResult", "Part"];

/// Immutable per-rule scope: which classes are targets and which field
/// names are skipped.
///
/// Built once with the consuming setters below, then borrowed by every
/// validation run. Both setters replace their set wholesale.
///
/// ```
/// use field_lint_core::RuleConfig;
///
/// let config = RuleConfig::new()
///     .target_class_suffixes(["Form", "Body"])
///     .ignore_field_names(["serialVersionUID"]);
/// assert!(config.is_target_name("UserBody"));
/// assert!(!config.is_target_name("UserPart"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    target_suffixes: BTreeSet<String>,
    ignored_field_names: BTreeSet<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            target_suffixes: DEFAULT_TARGET_SUFFIXES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            ignored_field_names: BTreeSet::new(),
        }
    }
}

impl RuleConfig {
    /// Creates a config with the default suffixes and no ignored fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the target class suffixes. An empty set targets nothing.
    #[must_use]
    pub fn target_class_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the set of field names excluded from checking.
    #[must_use]
    pub fn ignore_field_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_field_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the configured target suffixes.
    #[must_use]
    pub fn suffixes(&self) -> &BTreeSet<String> {
        &self.target_suffixes
    }

    /// Returns the configured ignored field names.
    #[must_use]
    pub fn ignored_fields(&self) -> &BTreeSet<String> {
        &self.ignored_field_names
    }

    /// Returns true if a class simple name ends with a target suffix.
    #[must_use]
    pub fn is_target_name(&self, simple_name: &str) -> bool {
        self.target_suffixes
            .iter()
            .any(|suffix| simple_name.ends_with(suffix.as_str()))
    }

    /// Returns true if the field name is on the ignore list.
    #[must_use]
    pub fn is_ignored(&self, field_name: &str) -> bool {
        self.ignored_field_names.contains(field_name)
    }
}

/// Top-level configuration for field-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use (e.g., "recommended", "strict", "all").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for failure (default: "error").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleSection>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Resolves the class/field scope for a rule.
    ///
    /// Keys absent from the rule's section keep their defaults; keys present
    /// replace them entirely.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> RuleConfig {
        let mut config = RuleConfig::default();
        if let Some(section) = self.rules.get(rule_name) {
            if let Some(suffixes) = &section.target_suffixes {
                config = config.target_class_suffixes(suffixes.iter().cloned());
            }
            if let Some(names) = &section.ignore_fields {
                config = config.ignore_field_names(names.iter().cloned());
            }
        }
        config
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Directory holding descriptor manifests (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: Vec::new(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

/// Per-rule section of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSection {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Replacement set of target class suffixes.
    #[serde(default)]
    pub target_suffixes: Option<Vec<String>>,

    /// Replacement set of ignored field names.
    #[serde(default)]
    pub ignore_fields: Option<Vec<String>>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleSection {
    /// Gets a string array option.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Vec<String> {
        self.options
            .get(key)
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_config() {
        let config = RuleConfig::default();
        assert_eq!(config.suffixes().len(), DEFAULT_TARGET_SUFFIXES.len());
        assert!(config.is_target_name("UserForm"));
        assert!(config.is_target_name("SearchContentResult"));
        assert!(config.is_target_name("HeaderPart"));
        assert!(!config.is_target_name("UserHelper"));
        assert!(config.ignored_fields().is_empty());
    }

    #[test]
    fn setters_replace_wholesale() {
        let config = RuleConfig::new()
            .target_class_suffixes(["Body"])
            .ignore_field_names(["id"])
            .ignore_field_names(["version"]);
        assert!(!config.is_target_name("UserForm"));
        assert!(config.is_target_name("UserBody"));
        assert!(!config.is_ignored("id"));
        assert!(config.is_ignored("version"));
    }

    #[test]
    fn empty_suffixes_target_nothing() {
        let config = RuleConfig::new().target_class_suffixes(Vec::<String>::new());
        assert!(!config.is_target_name("UserForm"));
        assert!(!config.is_target_name(""));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.exclude.is_empty());
        assert!(config.rules.is_empty());
        assert_eq!(config.rule_config("anything"), RuleConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
root = "./descriptors"
exclude = ["**/generated/**"]

[rules.no-primitive-fields]
enabled = true
severity = "warning"
target_suffixes = ["Form", "Body"]
ignore_fields = ["serialVersionUID"]

[rules.simple-field-types]
enabled = false
allowed_types = ["com.example.Money"]
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./descriptors"));
        assert!(config.is_rule_enabled("no-primitive-fields"));
        assert!(!config.is_rule_enabled("simple-field-types"));
        assert_eq!(
            config.rule_severity("no-primitive-fields"),
            Some(crate::Severity::Warning)
        );

        let scope = config.rule_config("no-primitive-fields");
        assert!(scope.is_target_name("UserBody"));
        assert!(!scope.is_target_name("HeaderPart"));
        assert!(scope.is_ignored("serialVersionUID"));

        let section = config.rules.get("simple-field-types").unwrap();
        assert_eq!(section.get_str_array("allowed_types"), vec!["com.example.Money"]);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = Config::parse("preset = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
