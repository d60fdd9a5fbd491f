//! Rule to forbid raw (unparameterized) collection fields.
//!
//! # Detected Patterns
//!
//! - `public List items;`
//! - `public Map<String, List> groups;` (raw type in an argument)
//!
//! # Exemptions
//!
//! Static fields, and fields carrying one of the exemption annotations
//! (`@Transient`, `@JsonIgnore` by default), are not checked.

use field_lint_core::{FieldDescriptor, FieldTypeRule, Severity, TypeRef};

/// Rule code for no-raw-collections.
pub const CODE: &str = "FT003";

/// Rule name for no-raw-collections.
pub const NAME: &str = "no-raw-collections";

const COLLECTIONS: &[&str] = &[
    "Iterable",
    "Collection",
    "List",
    "ArrayList",
    "LinkedList",
    "Set",
    "HashSet",
    "LinkedHashSet",
    "TreeSet",
    "SortedSet",
    "Map",
    "HashMap",
    "LinkedHashMap",
    "TreeMap",
    "SortedMap",
    "Optional",
];

/// Forbids collection types without generic element types.
#[derive(Debug, Clone)]
pub struct NoRawCollections {
    /// Severity level.
    pub severity: Severity,
    /// Annotation simple names that exempt a field.
    pub exempt_annotations: Vec<String>,
}

impl Default for NoRawCollections {
    fn default() -> Self {
        Self::new()
    }
}

impl NoRawCollections {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
            exempt_annotations: vec!["Transient".to_string(), "JsonIgnore".to_string()],
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Replaces the exemption annotations.
    #[must_use]
    pub fn exempt_annotations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exempt_annotations = names.into_iter().map(Into::into).collect();
        self
    }
}

/// `java.util.*`, `java.lang.Iterable` and unqualified names count; other
/// packages do not.
fn is_collection(ty: &TypeRef) -> bool {
    let known_package = !ty.name.contains('.')
        || ty.name.starts_with("java.util.")
        || ty.name == "java.lang.Iterable";
    known_package && COLLECTIONS.contains(&ty.simple_name())
}

fn has_raw_collection(ty: &TypeRef) -> bool {
    if let Some(component) = ty.component() {
        return has_raw_collection(&component);
    }
    if is_collection(ty) && !ty.is_parameterized() {
        return true;
    }
    ty.arguments.iter().any(has_raw_collection)
}

impl FieldTypeRule for NoRawCollections {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids raw collection types without element type arguments"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn suggestion(&self) -> Option<&'static str> {
        Some("Declare the element type, e.g. `List<String>`")
    }

    fn is_target_field(&self, field: &FieldDescriptor) -> bool {
        !field.is_static
            && !self
                .exempt_annotations
                .iter()
                .any(|a| field.has_annotation(a))
    }

    fn satisfies_type(&self, field: &FieldDescriptor) -> bool {
        !has_raw_collection(&field.declared_type)
    }
}
