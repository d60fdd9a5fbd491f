//! Rule presets and name lookup.

use crate::{no_raw_collections, simple_field_types};
use crate::{NoPrimitiveFields, NoRawCollections, SimpleFieldTypes};
use field_lint_core::{Config, FieldTypeRuleBox, Severity};

/// Preset configurations for field-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// Strict rules, every check at error severity.
    Strict,
    /// Every available rule at its default severity.
    All,
}

impl Preset {
    /// Parses a preset name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "recommended" => Some(Self::Recommended),
            "strict" => Some(Self::Strict),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Returns the names of the rules in this preset.
    #[must_use]
    pub fn rule_names(self) -> &'static [&'static str] {
        match self {
            Self::Recommended => &[crate::no_primitive_fields::NAME, no_raw_collections::NAME],
            Self::Strict | Self::All => &[
                crate::no_primitive_fields::NAME,
                simple_field_types::NAME,
                no_raw_collections::NAME,
            ],
        }
    }

    /// Returns the rules for this preset with default options.
    #[must_use]
    pub fn rules(self) -> Vec<FieldTypeRuleBox> {
        self.configured_rules(&Config::default())
    }

    /// Returns the rules for this preset with options read from `config`.
    #[must_use]
    pub fn configured_rules(self, config: &Config) -> Vec<FieldTypeRuleBox> {
        let strict = self == Self::Strict;
        self.rule_names()
            .iter()
            .filter_map(|name| build_rule(name, config, strict))
            .collect()
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `no-primitive-fields` (FT001)
/// - `no-raw-collections` (FT003)
#[must_use]
pub fn recommended_rules() -> Vec<FieldTypeRuleBox> {
    Preset::Recommended.rules()
}

/// Returns the strict set of rules.
///
/// Includes all recommended rules plus `simple-field-types` (FT002),
/// raised to error severity.
#[must_use]
pub fn strict_rules() -> Vec<FieldTypeRuleBox> {
    Preset::Strict.rules()
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<FieldTypeRuleBox> {
    Preset::All.rules()
}

/// Looks up a rule by name or code (`"no-primitive-fields"` or `"FT001"`).
///
/// Rule-specific options are read from the matching `[rules.<name>]`
/// section of `config`:
/// - `simple-field-types`: `allowed_types = [...]`
/// - `no-raw-collections`: `exempt_annotations = [...]`
#[must_use]
pub fn rule_by_name(name: &str, config: &Config) -> Option<FieldTypeRuleBox> {
    build_rule(name, config, false)
}

fn build_rule(name: &str, config: &Config, strict: bool) -> Option<FieldTypeRuleBox> {
    match name {
        "no-primitive-fields" | "FT001" => Some(Box::new(NoPrimitiveFields::new())),
        "simple-field-types" | "FT002" => {
            let mut rule = SimpleFieldTypes::new();
            if strict {
                rule = rule.severity(Severity::Error);
            }
            if let Some(section) = config.rules.get(simple_field_types::NAME) {
                let extra = section.get_str_array("allowed_types");
                tracing::debug!("{}: {} extra allowed type(s)", simple_field_types::NAME, extra.len());
                rule = rule.allow_types(extra);
            }
            Some(Box::new(rule))
        }
        "no-raw-collections" | "FT003" => {
            let mut rule = NoRawCollections::new();
            if let Some(section) = config.rules.get(no_raw_collections::NAME) {
                let exempt = section.get_str_array("exempt_annotations");
                if !exempt.is_empty() {
                    rule = rule.exempt_annotations(exempt);
                }
            }
            Some(Box::new(rule))
        }
        _ => {
            tracing::debug!("No built-in rule named {name}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_lint_core::{FieldDescriptor, TypeRef};

    #[test]
    fn test_preset_rules() {
        assert_eq!(recommended_rules().len(), 2);
        assert_eq!(strict_rules().len(), 3);
        assert_eq!(all_rules().len(), 3);
    }

    #[test]
    fn strict_raises_simple_field_types() {
        let find = |rules: Vec<FieldTypeRuleBox>| {
            rules
                .into_iter()
                .find(|r| r.name() == "simple-field-types")
                .map(|r| r.default_severity())
        };
        assert_eq!(find(strict_rules()), Some(Severity::Error));
        assert_eq!(find(all_rules()), Some(Severity::Warning));
    }

    #[test]
    fn preset_from_name() {
        assert_eq!(Preset::from_name("strict"), Some(Preset::Strict));
        assert_eq!(Preset::from_name("minimal"), None);
    }

    #[test]
    fn lookup_by_name_or_code() {
        let config = Config::default();
        assert_eq!(
            rule_by_name("FT001", &config).map(|r| r.name()),
            Some("no-primitive-fields")
        );
        assert_eq!(
            rule_by_name("no-raw-collections", &config).map(|r| r.code()),
            Some("FT003")
        );
        assert!(rule_by_name("nope", &config).is_none());
    }

    #[test]
    fn options_are_read_from_config() {
        let config = Config::parse(
            r#"
[rules.simple-field-types]
allowed_types = ["com.example.Money"]

[rules.no-raw-collections]
exempt_annotations = ["Legacy"]
"#,
        )
        .unwrap();
        let money = FieldDescriptor::new("a.PriceForm", "price", TypeRef::new("com.example.Money"));
        let legacy = FieldDescriptor::new("a.PriceForm", "old", TypeRef::new("java.util.List"))
            .with_annotation("Legacy");

        for rule in Preset::Strict.configured_rules(&config) {
            match rule.name() {
                "simple-field-types" => assert!(rule.satisfies_type(&money)),
                "no-raw-collections" => assert!(!rule.is_target_field(&legacy)),
                _ => {}
            }
        }
    }
}
