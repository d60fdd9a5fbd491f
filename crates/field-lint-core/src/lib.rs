//! # field-lint-core
//!
//! Core framework for checking the declared types of public fields on
//! convention-named data classes (`*Form`, `*ContentResult`, `*Part`, ...).
//!
//! The crate works on resolved class metadata only; it never parses source
//! text. It provides:
//!
//! - [`ClassDescriptor`] / [`FieldDescriptor`] / [`TypeRef`] for the metadata
//! - [`FieldTypeRule`] trait for pluggable type predicates
//! - [`RuleConfig`] for target-class suffixes and ignored field names
//! - [`FieldTypeChecker`] for the select → filter → check → recurse pipeline
//! - [`Analyzer`] for running rules over descriptor manifests on disk
//!
//! ## Example
//!
//! ```ignore
//! use field_lint_core::{ClassDescriptor, FieldTypeChecker, RuleConfig, TypeRef};
//!
//! let config = RuleConfig::new().ignore_field_names(["id"]);
//! let checker = FieldTypeChecker::new(&MyRule, &config);
//!
//! let form = ClassDescriptor::new("com.example.UserForm").field("age", TypeRef::new("int"));
//! let mut nested = Vec::new();
//! if let Some(message) = checker.validate(path, &form, &mut nested) {
//!     eprintln!("{message}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod checker;
mod config;
mod descriptor;
mod rule;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use checker::{ClassFinding, FieldTypeChecker};
pub use config::{
    AnalyzerConfig, Config, ConfigError, RuleConfig, RuleSection, DEFAULT_TARGET_SUFFIXES,
};
pub use descriptor::{
    ClassDescriptor, DescriptorError, FieldDescriptor, SourceUnit, TypeRef, Visibility,
};
pub use rule::{FieldTypeRule, FieldTypeRuleBox};
pub use types::{LintResult, Location, Severity, Suggestion, Violation};
