//! Zod validation-schema emitters.
//!
//! Parallel to the TypeScript emitters in [`crate::ts`] but targeting
//! runtime-validation declarations. Relation fields are skipped entirely:
//! validation schemas only cover scalar and enum fields.

pub mod emitter;
pub mod type_map;

pub use emitter::{enum_schema, model_schema};
pub use type_map::field_schema;
