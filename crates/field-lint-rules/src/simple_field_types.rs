//! Rule to restrict data-class fields to simple serializable types.
//!
//! # Rationale
//!
//! Forms and content results cross a serialization boundary (request
//! binding, JSON rendering). Keeping their fields to strings, numbers,
//! dates and containers of those avoids leaking entities or services into
//! the wire format.
//!
//! # Accepted Types
//!
//! - Primitives and their boxed wrappers, `String`
//! - `BigDecimal`, `BigInteger`, `java.time` local/offset types
//! - `List`/`Set`/`Map`/`Optional` whose arguments are themselves accepted
//! - Arrays of accepted types
//! - Classes nested inside the declaring class (checked on their own)
//! - Anything added with [`SimpleFieldTypes::allow_types`]
//!
//! Everything else, including raw containers, is a violation.

use field_lint_core::{FieldDescriptor, FieldTypeRule, Severity, TypeRef};
use std::collections::BTreeSet;

/// Rule code for simple-field-types.
pub const CODE: &str = "FT002";

/// Rule name for simple-field-types.
pub const NAME: &str = "simple-field-types";

const DEFAULT_ALLOWED: &[&str] = &[
    "boolean",
    "byte",
    "char",
    "short",
    "int",
    "long",
    "float",
    "double",
    "java.lang.String",
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Character",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Float",
    "java.lang.Double",
    "java.math.BigDecimal",
    "java.math.BigInteger",
    "java.time.LocalDate",
    "java.time.LocalDateTime",
    "java.time.LocalTime",
    "java.time.OffsetDateTime",
    "java.time.ZonedDateTime",
];

const CONTAINERS: &[&str] = &[
    "java.util.List",
    "java.util.Set",
    "java.util.Map",
    "java.util.Optional",
];

/// Restricts field types to an allowlist of simple serializable types.
#[derive(Debug, Clone)]
pub struct SimpleFieldTypes {
    /// Severity level.
    pub severity: Severity,
    allowed: BTreeSet<String>,
}

impl Default for SimpleFieldTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleFieldTypes {
    /// Creates a new rule with the default allowlist.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
            allowed: DEFAULT_ALLOWED.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Adds qualified type names to the allowlist.
    #[must_use]
    pub fn allow_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed.extend(types.into_iter().map(Into::into));
        self
    }

    /// Unqualified names (`String`) match any allowlisted `x.y.String`.
    fn is_allowed_name(&self, name: &str) -> bool {
        if self.allowed.contains(name) {
            return true;
        }
        !name.contains('.')
            && self
                .allowed
                .iter()
                .any(|a| a.rsplit('.').next() == Some(name))
    }

    fn is_container(ty: &TypeRef) -> bool {
        CONTAINERS.contains(&ty.name.as_str())
            || (!ty.name.contains('.')
                && CONTAINERS
                    .iter()
                    .any(|c| c.rsplit('.').next() == Some(ty.name.as_str())))
    }

    fn is_simple(&self, ty: &TypeRef, declaring_class: &str) -> bool {
        if let Some(component) = ty.component() {
            return self.is_simple(&component, declaring_class);
        }
        if Self::is_container(ty) {
            return ty.is_parameterized()
                && ty
                    .arguments
                    .iter()
                    .all(|arg| self.is_simple(arg, declaring_class));
        }
        if is_nested_in(&ty.name, declaring_class) {
            return true;
        }
        !ty.is_parameterized() && self.is_allowed_name(&ty.name)
    }
}

fn is_nested_in(type_name: &str, declaring_class: &str) -> bool {
    type_name
        .strip_prefix(declaring_class)
        .is_some_and(|rest| rest.starts_with('$') || rest.starts_with('.'))
}

impl FieldTypeRule for SimpleFieldTypes {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Restricts field types to simple serializable types"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn suggestion(&self) -> Option<&'static str> {
        Some("Use String, numbers, dates or a nested Part class; add project types via `allowed_types`")
    }

    fn is_target_field(&self, field: &FieldDescriptor) -> bool {
        !field.is_static && !field.is_final
    }

    fn satisfies_type(&self, field: &FieldDescriptor) -> bool {
        self.is_simple(&field.declared_type, &field.declaring_class)
    }
}
