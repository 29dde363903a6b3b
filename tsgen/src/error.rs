//! Error types for schema generation.
//!
//! Generation is all-or-nothing per artifact: any of these errors aborts the
//! run with no partial output.

use thiserror::Error;

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning a datamodel into source text.
///
/// The first two groups indicate the input metadata is inconsistent with the
/// generator's vocabulary; `NameCollision` is a configuration problem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A scalar field carries a type tag the generator has no mapping for.
    #[error("unknown scalar type: {0}")]
    UnknownScalarType(String),

    /// A relation or model reference names a model that is not in the datamodel.
    #[error("unknown model name: {0}")]
    UnknownModelName(String),

    /// An enum field references an enum that is not in the datamodel.
    #[error("unknown enum name: {0}")]
    UnknownEnumName(String),

    /// A relation's linking field has no referenced key field to point at.
    #[error("relation through '{model}.{field}' has no referenced key field")]
    MissingRelationReference { model: String, field: String },

    /// Two raw names render to the same identifier after affixing.
    #[error("'{left}' and '{right}' both render as '{rendered}' after affixing")]
    NameCollision {
        left: String,
        right: String,
        rendered: String,
    },
}
