//! Core analyzer for orchestrating lint execution.

use crate::checker::FieldTypeChecker;
use crate::config::Config;
use crate::descriptor::{DescriptorError, SourceUnit};
use crate::rule::{FieldTypeRule, FieldTypeRuleBox};
use crate::types::{LintResult, Location, Suggestion, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Descriptor manifest could not be loaded.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<FieldTypeRuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory holding descriptor manifests.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: FieldTypeRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: FieldTypeRuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on unreadable manifests (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut exclude_patterns = self.exclude_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.analyzer.exclude.clone());
        }

        Ok(Analyzer {
            root,
            rules: self.rules,
            exclude_patterns,
            config: self.config.unwrap_or_default(),
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<FieldTypeRuleBox>,
    exclude_patterns: Vec<String>,
    config: Config,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes every manifest under the root and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if discovery fails, or if a manifest is unreadable
    /// and `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let files = self.discover_files()?;
        info!("Found {} descriptor files to analyze", files.len());

        let mut units = Vec::with_capacity(files.len());
        for path in &files {
            debug!("Loading: {}", path.display());
            match SourceUnit::from_file(path) {
                Ok(unit) => units.push(unit),
                Err(e @ DescriptorError::Json { .. }) => {
                    warn!("{e}");
                    if self.fail_on_parse_error {
                        return Err(e.into());
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }

        let result = self.analyze_units(&units);

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes already-loaded source units.
    #[must_use]
    pub fn analyze_units(&self, units: &[SourceUnit]) -> LintResult {
        let mut result = LintResult::new();
        for unit in units {
            result.violations.extend(self.analyze_unit(unit));
            result.files_checked += 1;
            result.classes_checked += unit
                .classes
                .iter()
                .map(crate::ClassDescriptor::tree_size)
                .sum::<usize>();
        }

        // Stable: keeps rule and declaration order within a file.
        result
            .violations
            .sort_by(|a, b| a.location.file.cmp(&b.location.file));
        result
    }

    /// Runs every enabled rule over one source unit.
    #[must_use]
    pub fn analyze_unit(&self, unit: &SourceUnit) -> Vec<Violation> {
        debug!("Analyzing: {}", unit.source.display());

        let mut violations = Vec::new();
        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let scope = self.config.rule_config(rule.name());
            let checker = FieldTypeChecker::new(&**rule, &scope);
            let severity = self
                .config
                .rule_severity(rule.name())
                .unwrap_or_else(|| rule.default_severity());

            for class in &unit.classes {
                for finding in checker.check(&unit.source, class) {
                    violations.extend(finding.identifiers.iter().map(|identifier| {
                        let field = identifier
                            .strip_prefix(finding.class_name.as_str())
                            .and_then(|rest| rest.strip_prefix('.'))
                            .unwrap_or(identifier);
                        let location =
                            Location::new(finding.file.clone(), finding.class_name.clone())
                                .with_field(field);
                        let violation = Violation::new(
                            rule.code(),
                            rule.name(),
                            severity,
                            location,
                            describe(unit, &finding.class_name, field, &**rule),
                        );
                        match rule.suggestion() {
                            Some(hint) => violation.with_suggestion(Suggestion::new(hint)),
                            None => violation,
                        }
                    }));
                }
            }
        }

        violations
    }

    /// Discovers all descriptor manifests to analyze.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let pattern = format!("{}/**/*.json", self.root.display());
        let mut files = Vec::new();

        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| AnalyzerError::Io(e.into_error()))?;

            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path);
        }

        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // "**/generated/**" also matches as a path fragment, so relative
            // roots behave like absolute ones. Bare names never do.
            if pattern.starts_with("**/") {
                let fragment = pattern.replace("**", "");
                if fragment.len() > 1 && path_str.contains(&fragment) {
                    return true;
                }
            }
        }

        false
    }
}

/// Builds the violation message, naming the declared type when it can be found.
fn describe(unit: &SourceUnit, class_name: &str, field: &str, rule: &dyn FieldTypeRule) -> String {
    let declared = find_class(&unit.classes, class_name)
        .and_then(|class| class.public_fields().find(|f| f.name == field))
        .map(|f| f.declared_type.to_string());

    match declared {
        Some(ty) => format!(
            "{class_name}.{field}: declared type `{ty}` violates {}",
            rule.name()
        ),
        None => format!("{class_name}.{field} violates {}", rule.name()),
    }
}

fn find_class<'a>(
    classes: &'a [crate::ClassDescriptor],
    name: &str,
) -> Option<&'a crate::ClassDescriptor> {
    classes.iter().find_map(|class| {
        if class.qualified_name == name {
            Some(class)
        } else {
            find_class(&class.nested_classes, name)
        }
    })
}
