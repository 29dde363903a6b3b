//! # tsgen
//!
//! Generate TypeScript declarations and Zod validation schemas from an ORM
//! datamodel.
//!
//! The input is the datamodel block of a DMMF document: entity models,
//! enumerations, and composite type aliases. One generation run resolves
//! every rendered name up front, then maps each model and enum through pure
//! string-producing emitters and concatenates the fragments into one text
//! blob per artifact. The output is meant to be written to disk and handed
//! to an external formatter; nothing here performs I/O.
//!
//! ## Architecture
//!
//! - [`dmmf`] - Datamodel descriptors and the closed scalar-tag set
//! - [`config`] - Rendering options, one instance per run
//! - [`names`] - Affixed-name resolution shared by every emitter
//! - [`ts`] - TypeScript declaration emitters (types, models, enums)
//! - [`zod`] - Zod validation-schema emitters
//! - [`sql`] - Illustrative raw-SQL query-builder namespaces
//! - [`generate`] - Artifact assembly
//! - [`error`] - Error types and handling
//!
//! ## Example
//!
//! ```rust
//! use tsgen::{declaration_file, Datamodel, Field, GeneratorConfig, Model, ScalarType};
//!
//! let datamodel = Datamodel {
//!     models: vec![Model::new(
//!         "User",
//!         vec![
//!             Field::scalar("id", ScalarType::Int).id(),
//!             Field::scalar("email", ScalarType::String).optional(),
//!         ],
//!     )],
//!     enums: vec![],
//!     types: vec![],
//! };
//!
//! let config = GeneratorConfig {
//!     header_comment: String::new(),
//!     ..GeneratorConfig::default()
//! };
//! let output = declaration_file(&datamodel, &config).unwrap();
//! assert!(output.contains("export interface User"));
//! ```

pub mod config;
pub mod dmmf;
pub mod error;
pub mod generate;
pub mod names;
pub mod sql;
pub mod ts;
pub mod zod;

// Re-export main types for convenience
pub use config::{EnumShape, GeneratorConfig, ModelShape};
pub use dmmf::{Datamodel, DatamodelEnum, EnumValue, Field, FieldKind, Model, ScalarType};
pub use error::{Error, Result};
pub use generate::{declaration_file, validation_file};
pub use names::NameMaps;
