//! Rule to forbid primitive-typed public fields on data classes.
//!
//! # Rationale
//!
//! Form and result classes are bound from, and rendered to, external input.
//! A primitive field cannot express "not provided": an absent `age` silently
//! becomes `0`. Boxed types keep the absence visible as `null`.
//!
//! # Detected Patterns
//!
//! - `public int age;`
//! - `public boolean[] flags;`
//!
//! Static fields are constants and are not checked.

use field_lint_core::{FieldDescriptor, FieldTypeRule, Severity};

/// Rule code for no-primitive-fields.
pub const CODE: &str = "FT001";

/// Rule name for no-primitive-fields.
pub const NAME: &str = "no-primitive-fields";

/// Forbids primitive (and primitive-array) field types.
#[derive(Debug, Clone)]
pub struct NoPrimitiveFields {
    /// Severity level.
    pub severity: Severity,
    /// Whether `int[]`-style arrays are also rejected.
    pub check_arrays: bool,
}

impl Default for NoPrimitiveFields {
    fn default() -> Self {
        Self::new()
    }
}

impl NoPrimitiveFields {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
            check_arrays: true,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets whether primitive arrays are rejected.
    #[must_use]
    pub fn check_arrays(mut self, check: bool) -> Self {
        self.check_arrays = check;
        self
    }
}

impl FieldTypeRule for NoPrimitiveFields {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids primitive field types in favor of boxed types"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn suggestion(&self) -> Option<&'static str> {
        Some("Use the boxed wrapper type (e.g. `Integer` instead of `int`)")
    }

    fn is_target_field(&self, field: &FieldDescriptor) -> bool {
        !field.is_static
    }

    fn satisfies_type(&self, field: &FieldDescriptor) -> bool {
        let mut ty = field.declared_type.clone();
        if self.check_arrays {
            while let Some(component) = ty.component() {
                ty = component;
            }
        }
        !ty.is_primitive()
    }
}
