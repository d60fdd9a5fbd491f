//! Rule trait for defining field-type rules.

use crate::descriptor::FieldDescriptor;
use crate::types::Severity;

/// A convention rule over the declared types of public fields.
///
/// Implementors supply the two plug-in points: which fields the rule cares
/// about, and what a well-typed field looks like. Target-class selection,
/// the ignore list, recursion into nested classes and message assembly are
/// handled by [`FieldTypeChecker`](crate::FieldTypeChecker).
///
/// # Example
///
/// ```ignore
/// use field_lint_core::{FieldDescriptor, FieldTypeRule};
///
/// pub struct NoPrimitiveFields;
///
/// impl FieldTypeRule for NoPrimitiveFields {
///     fn name(&self) -> &'static str { "no-primitive-fields" }
///     fn code(&self) -> &'static str { "FT001" }
///
///     fn is_target_field(&self, field: &FieldDescriptor) -> bool {
///         !field.is_static
///     }
///
///     fn satisfies_type(&self, field: &FieldDescriptor) -> bool {
///         !field.declared_type.is_primitive()
///     }
/// }
/// ```
pub trait FieldTypeRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-primitive-fields").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "FT001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Optional hint attached to every violation of this rule.
    fn suggestion(&self) -> Option<&'static str> {
        None
    }

    /// Decides whether a field is subject to this rule at all.
    ///
    /// Fields rejected here are never validated or reported.
    fn is_target_field(&self, field: &FieldDescriptor) -> bool;

    /// Returns true if the field's declared type is acceptable.
    ///
    /// Must be a pure function of the declared type and must not panic.
    /// Unrecognized types are a policy decision of the rule.
    fn satisfies_type(&self, field: &FieldDescriptor) -> bool;
}

/// Type alias for boxed `FieldTypeRule` trait objects.
pub type FieldTypeRuleBox = Box<dyn FieldTypeRule>;
