//! Field-type checking over a class containment tree.
//!
//! The pipeline for one class is:
//!
//! ```text
//! is_target_class ─ no ─▶ pass, nothing visited
//!        │ yes
//!        ▼
//! validate_fields (is_in_scope && !satisfies_type ⇒ "Class.field")
//!        │
//!        ▼
//! nested classes, in declaration order, through the same pipeline
//! ```
//!
//! A failing level never stops the walk: sibling fields and nested classes
//! are always visited.

use crate::config::RuleConfig;
use crate::descriptor::{ClassDescriptor, FieldDescriptor};
use crate::rule::FieldTypeRule;

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Violations found at one class level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassFinding {
    /// Originating source file.
    pub file: PathBuf,
    /// Qualified name of the failing class.
    pub class_name: String,
    /// `Class.field` identifiers in field declaration order.
    pub identifiers: Vec<String>,
}

impl ClassFinding {
    /// Joins the identifiers into one newline-separated message.
    #[must_use]
    pub fn message(&self) -> String {
        self.identifiers.join("\n")
    }
}

/// Runs one rule, under one immutable scope, over class descriptors.
#[derive(Clone, Copy)]
pub struct FieldTypeChecker<'a> {
    rule: &'a dyn FieldTypeRule,
    config: &'a RuleConfig,
}

impl<'a> FieldTypeChecker<'a> {
    /// Creates a checker for `rule` restricted by `config`.
    #[must_use]
    pub fn new(rule: &'a dyn FieldTypeRule, config: &'a RuleConfig) -> Self {
        Self { rule, config }
    }

    /// Decides whether the class is subject to checking at all.
    ///
    /// The file is accepted for parity with other selectors; admission only
    /// depends on the class simple name.
    #[must_use]
    pub fn is_target_class(&self, _file: &Path, class: &ClassDescriptor) -> bool {
        self.config.is_target_name(class.simple_name())
    }

    /// Returns true if the field is checked: the rule targets it and its
    /// name is not ignored.
    #[must_use]
    pub fn is_in_scope(&self, field: &FieldDescriptor) -> bool {
        self.rule.is_target_field(field) && !self.config.is_ignored(&field.name)
    }

    /// Checks the public fields of this class level only.
    ///
    /// Returns `"{qualified_name}.{field}"` for every in-scope field whose
    /// type fails the rule, in declaration order.
    #[must_use]
    pub fn validate_fields(&self, class: &ClassDescriptor) -> Vec<String> {
        class
            .public_fields()
            .filter(|field| self.is_in_scope(field) && !self.rule.satisfies_type(field))
            .map(|field| format!("{}.{}", class.qualified_name, field.name))
            .collect()
    }

    /// Validates a class and walks its nested classes.
    ///
    /// Returns the newline-joined violations of `class` itself, or `None`
    /// when it is not a target or has none. Failing nested classes are
    /// pushed onto `nested` in pre-order; they never affect the return value.
    pub fn validate(
        &self,
        file: &Path,
        class: &ClassDescriptor,
        nested: &mut Vec<ClassFinding>,
    ) -> Option<String> {
        if !self.is_target_class(file, class) {
            trace!("{}: not a target of {}", class.qualified_name, self.rule.name());
            return None;
        }

        let identifiers = self.validate_fields(class);
        for inner in &class.nested_classes {
            self.walk(file, inner, nested);
        }

        if identifiers.is_empty() {
            None
        } else {
            Some(identifiers.join("\n"))
        }
    }

    /// Checks the whole admitted subtree and returns every failing class,
    /// top level first, then nested classes depth-first.
    #[must_use]
    pub fn check(&self, file: &Path, class: &ClassDescriptor) -> Vec<ClassFinding> {
        let mut findings = Vec::new();
        self.walk(file, class, &mut findings);
        findings
    }

    fn walk(&self, file: &Path, class: &ClassDescriptor, out: &mut Vec<ClassFinding>) {
        if !self.is_target_class(file, class) {
            trace!("{}: not a target of {}", class.qualified_name, self.rule.name());
            return;
        }

        let identifiers = self.validate_fields(class);
        if !identifiers.is_empty() {
            out.push(ClassFinding {
                file: file.to_path_buf(),
                class_name: class.qualified_name.clone(),
                identifiers,
            });
        }

        for inner in &class.nested_classes {
            self.walk(file, inner, out);
        }
    }
}
