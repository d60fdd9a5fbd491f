//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# field-lint configuration

# Rule preset: recommended | strict | all
preset = "recommended"

# Lowest severity that makes `field-lint check` exit non-zero
fail_on = "error"

[analyzer]
# Directory holding descriptor manifests (default: current directory)
# root = "./build/field-descriptors"

# Glob patterns to exclude from analysis
exclude = [
    "**/generated/**",
]

# Rule configurations
# Each rule can be enabled/disabled, have its severity overridden, and
# replace the target class suffixes or the ignored field names.

[rules.no-primitive-fields]
enabled = true
# severity = "warning"
# target_suffixes = ["Form", "ContentResult", "Part"]
ignore_fields = ["serialVersionUID"]

[rules.no-raw-collections]
enabled = true
# exempt_annotations = ["Transient", "JsonIgnore"]

# [rules.simple-field-types]
# enabled = true
# allowed_types = ["com.example.Money"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("field-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created field-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit field-lint.toml to configure rules");
    println!("  2. Run: field-lint check <descriptor-dir>");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = field_lint_core::Config::parse(DEFAULT_CONFIG).expect("template should parse");
        assert_eq!(config.preset.as_deref(), Some("recommended"));
        assert!(config
            .rule_config("no-primitive-fields")
            .is_ignored("serialVersionUID"));
    }
}
