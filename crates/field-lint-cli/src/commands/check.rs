//! Check command implementation.

use anyhow::{anyhow, Context, Result};
use field_lint_core::{Analyzer, Config, FieldTypeRuleBox, Severity};
use field_lint_rules::{rule_by_name, Preset};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: Option<&Path>,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = match source {
        ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    let fail_on = resolve_fail_on(&config)?;

    let rules_to_add = if let Some(filter) = rules_filter {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&rule_names, &config)
    } else {
        resolve_preset(&config)?.configured_rules(&config)
    };

    let analyzer = build_analyzer(path, config, rules_to_add, exclude)?;

    tracing::info!(
        "Analyzing {:?} with {} rules",
        analyzer.root(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format)?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Builds the analyzer. An explicit `path` overrides `[analyzer] root`.
fn build_analyzer(
    path: Option<&Path>,
    config: Config,
    rules: Vec<FieldTypeRuleBox>,
    exclude: Vec<String>,
) -> Result<Analyzer> {
    let mut builder = Analyzer::builder().config(config).excludes(exclude);
    if let Some(path) = path {
        builder = builder.root(path);
    }
    for rule in rules {
        builder = builder.rule_box(rule);
    }
    builder.build().context("Failed to build analyzer")
}

/// Resolves the preset from config, defaulting to `recommended`.
fn resolve_preset(config: &Config) -> Result<Preset> {
    let name = config.preset.as_deref().unwrap_or("recommended");
    Preset::from_name(name)
        .ok_or_else(|| anyhow!("unknown preset `{name}`. Valid presets: recommended, strict, all"))
}

/// Resolves the failure threshold from config, defaulting to `error`.
fn resolve_fail_on(config: &Config) -> Result<Severity> {
    config
        .fail_on
        .as_deref()
        .unwrap_or("error")
        .parse::<Severity>()
        .map_err(|e| anyhow!(e))
}

fn filter_rules(names: &[&str], config: &Config) -> Vec<FieldTypeRuleBox> {
    let mut rules = Vec::new();

    for name in names {
        match rule_by_name(name, config) {
            Some(rule) => rules.push(rule),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_preset_defaults_to_recommended() {
        let config = Config::default();
        assert_eq!(resolve_preset(&config).unwrap(), Preset::Recommended);
    }

    #[test]
    fn resolve_preset_from_config() {
        let mut config = Config::default();
        config.preset = Some("strict".to_string());
        assert_eq!(resolve_preset(&config).unwrap(), Preset::Strict);
    }

    #[test]
    fn resolve_preset_invalid_is_error() {
        let mut config = Config::default();
        config.preset = Some("nonexistent".to_string());
        let err = resolve_preset(&config).unwrap_err();
        assert!(err.to_string().contains("unknown preset"));
    }

    #[test]
    fn resolve_fail_on_defaults_to_error() {
        assert_eq!(resolve_fail_on(&Config::default()).unwrap(), Severity::Error);
    }

    #[test]
    fn resolve_fail_on_from_config() {
        let mut config = Config::default();
        config.fail_on = Some("warning".to_string());
        assert_eq!(resolve_fail_on(&config).unwrap(), Severity::Warning);
    }

    #[test]
    fn resolve_fail_on_invalid_is_error() {
        let mut config = Config::default();
        config.fail_on = Some("critical".to_string());
        assert!(resolve_fail_on(&config).is_err());
    }

    #[test]
    fn config_root_used_when_no_path_given() {
        let config = Config::parse("[analyzer]\nroot = \"build/descriptors\"\n").unwrap();
        let analyzer = build_analyzer(None, config, Vec::new(), Vec::new()).unwrap();
        assert!(analyzer.root().ends_with("build/descriptors"));
    }

    #[test]
    fn explicit_path_overrides_config_root() {
        let config = Config::parse("[analyzer]\nroot = \"build/descriptors\"\n").unwrap();
        let analyzer =
            build_analyzer(Some(Path::new("manifests")), config, Vec::new(), Vec::new()).unwrap();
        assert!(analyzer.root().ends_with("manifests"));
    }

    #[test]
    fn filter_rules_skips_unknown() {
        let rules = filter_rules(&["FT001", "bogus", "no-raw-collections"], &Config::default());
        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["no-primitive-fields", "no-raw-collections"]);
    }
}
