//! Resolved class metadata consumed by the checker.
//!
//! Descriptors are produced by an upstream extraction stage (a compiler
//! plugin, a bytecode reader, ...) and handed over as JSON manifests, one
//! per source file. The checker never looks at source text; it only walks
//! these values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Primitive type names that have no generic arguments and no identity.
const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

/// A resolved type reference, e.g. `java.util.List<java.lang.String>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Qualified or primitive name. Arrays carry a `[]` suffix per dimension.
    pub name: String,
    /// Generic type arguments, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeRef>,
}

impl TypeRef {
    /// Creates a non-generic type reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Creates a parameterized type reference.
    #[must_use]
    pub fn generic(name: impl Into<String>, arguments: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Returns the name without its package prefix (`java.lang.String` → `String`).
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Returns true for array types (`int[]`, `String[][]`).
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.name.ends_with("[]")
    }

    /// Returns the component type of an array, stripping one dimension.
    #[must_use]
    pub fn component(&self) -> Option<TypeRef> {
        self.name.strip_suffix("[]").map(|base| TypeRef {
            name: base.trim_end().to_string(),
            arguments: self.arguments.clone(),
        })
    }

    /// Returns true for primitive (non-array) types.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        PRIMITIVES.contains(&self.name.as_str())
    }

    /// Returns true if the reference carries generic arguments.
    #[must_use]
    pub fn is_parameterized(&self) -> bool {
        !self.arguments.is_empty()
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (base, dims) = match self.name.find("[]") {
            Some(idx) => (&self.name[..idx], &self.name[idx..]),
            None => (self.name.as_str(), ""),
        };
        let simple = base.rsplit('.').next().unwrap_or(base);
        write!(f, "{simple}")?;
        if !self.arguments.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }
        write!(f, "{dims}")
    }
}

/// Field access level.
///
/// Manifests spell it in lower case (`"public"`); upper case is accepted too.
/// Any other value fails the manifest instead of hiding the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Publicly accessible field. Only these are checked.
    #[default]
    #[serde(alias = "PUBLIC")]
    Public,
    /// Protected field.
    #[serde(alias = "PROTECTED")]
    Protected,
    /// Package-private field.
    #[serde(alias = "PACKAGE", alias = "package-private")]
    Package,
    /// Private field.
    #[serde(alias = "PRIVATE")]
    Private,
}

/// Snapshot of one field at check time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Qualified name of the class declaring this field.
    pub declaring_class: String,
    /// Field name.
    pub name: String,
    /// Declared type of the field.
    pub declared_type: TypeRef,
    /// Field visibility.
    #[serde(default)]
    pub visibility: Visibility,
    /// Whether the field is static.
    #[serde(default)]
    pub is_static: bool,
    /// Whether the field is final.
    #[serde(default)]
    pub is_final: bool,
    /// Annotation names present on the field (qualified or simple).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

impl FieldDescriptor {
    /// Creates a public, non-static, non-final field without annotations.
    #[must_use]
    pub fn new(
        declaring_class: impl Into<String>,
        name: impl Into<String>,
        declared_type: TypeRef,
    ) -> Self {
        Self {
            declaring_class: declaring_class.into(),
            name: name.into(),
            declared_type,
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
            annotations: Vec::new(),
        }
    }

    /// Sets the visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the field static.
    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Marks the field final.
    #[must_use]
    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    /// Adds an annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    /// Returns true if the field is public.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Checks for an annotation by simple name, ignoring package and `@`.
    #[must_use]
    pub fn has_annotation(&self, simple_name: &str) -> bool {
        self.annotations.iter().any(|a| {
            let a = a.trim_start_matches('@');
            a.rsplit('.').next().unwrap_or(a) == simple_name
        })
    }
}

/// One class and its immediate structural children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Fully qualified name (`com.example.UserForm`, `com.example.OuterForm$InnerPart`).
    pub qualified_name: String,
    /// Declared fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// Declared nested classes in declaration order.
    #[serde(default)]
    pub nested_classes: Vec<ClassDescriptor>,
}

impl ClassDescriptor {
    /// Creates a class with no fields and no nested classes.
    #[must_use]
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            fields: Vec::new(),
            nested_classes: Vec::new(),
        }
    }

    /// Adds a public field declared on this class.
    #[must_use]
    pub fn field(self, name: impl Into<String>, declared_type: TypeRef) -> Self {
        let field = FieldDescriptor::new(self.qualified_name.clone(), name, declared_type);
        self.with_field(field)
    }

    /// Adds a pre-built field descriptor.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a nested class.
    #[must_use]
    pub fn with_nested(mut self, nested: ClassDescriptor) -> Self {
        self.nested_classes.push(nested);
        self
    }

    /// Returns the name without package or enclosing-class prefix.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        let name = self
            .qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name);
        name.rsplit('$').next().unwrap_or(name)
    }

    /// Iterates public fields in declaration order.
    pub fn public_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_public())
    }

    /// Counts this class and every class nested below it.
    #[must_use]
    pub fn tree_size(&self) -> usize {
        1 + self
            .nested_classes
            .iter()
            .map(ClassDescriptor::tree_size)
            .sum::<usize>()
    }
}

/// Errors loading a descriptor manifest.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    /// IO error reading the manifest.
    #[error("Failed to read descriptor {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Manifest is not valid descriptor JSON.
    #[error("Invalid descriptor {path}: {source}")]
    Json {
        /// Path of the malformed manifest.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// All classes extracted from one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// The originating source file. Used as a label only.
    pub source: PathBuf,
    /// Top-level classes declared in the file.
    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,
}

impl SourceUnit {
    /// Creates a unit for the given source path.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, classes: Vec<ClassDescriptor>) -> Self {
        Self {
            source: source.into(),
            classes,
        }
    }

    /// Parses a manifest from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a source unit.
    pub fn from_json(content: &str) -> Result<Self, DescriptorError> {
        serde_json::from_str(content).map_err(|e| DescriptorError::Json {
            path: PathBuf::from("<memory>"),
            source: e,
        })
    }

    /// Loads a manifest from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, DescriptorError> {
        let content = std::fs::read_to_string(path).map_err(|e| DescriptorError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| DescriptorError::Json {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
