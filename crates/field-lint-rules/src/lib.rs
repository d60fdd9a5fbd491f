//! # field-lint-rules
//!
//! Built-in field-type rules for field-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | FT001 | `no-primitive-fields` | Forbids primitive field types in favor of boxed types |
//! | FT002 | `simple-field-types` | Restricts field types to simple serializable types |
//! | FT003 | `no-raw-collections` | Forbids collection types without element type arguments |
//!
//! ## Usage
//!
//! ```ignore
//! use field_lint_core::Analyzer;
//! use field_lint_rules::{NoPrimitiveFields, NoRawCollections};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./build/descriptors")
//!     .rule(NoPrimitiveFields::new())
//!     .rule(NoRawCollections::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod no_primitive_fields;
pub mod no_raw_collections;
mod presets;
pub mod simple_field_types;

pub use no_primitive_fields::NoPrimitiveFields;
pub use no_raw_collections::NoRawCollections;
pub use presets::{all_rules, recommended_rules, rule_by_name, strict_rules, Preset};
pub use simple_field_types::SimpleFieldTypes;

/// Re-export core types for convenience.
pub use field_lint_core::{FieldTypeRule, Severity, Violation};
