//! Generator configuration.
//!
//! A flat record of rendering options, deserialized from the camelCase keys
//! the generator block passes through. Every emitter call in one generation
//! run receives the same configuration instance.

use serde::Deserialize;

/// Rendering options for one generation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub enum_prefix: String,
    pub enum_suffix: String,
    pub model_prefix: String,
    pub model_suffix: String,
    pub type_prefix: String,
    pub type_suffix: String,

    /// Namespace used to qualify documentation type annotations when a
    /// global type map is configured.
    pub namespace: Option<String>,

    /// Namespace for documentation type annotations. When unset, annotated
    /// types are emitted verbatim.
    pub namespace_type: Option<String>,

    /// Name of a global type map inside `namespace`; annotated types become
    /// indexed accesses into it.
    pub use_type: Option<String>,

    /// Comment placed at the top of every artifact. Empty disables it.
    pub header_comment: String,

    /// Top-level shape of rendered models.
    pub model_type: ModelShape,

    /// Textual shape of rendered enumerations.
    pub enum_type: EnumShape,

    /// Representation of date/time fields. Either one form or a pipe-joined
    /// union of two, e.g. `"Date | string"`.
    pub date_type: String,

    /// Representation of big-integer fields.
    pub big_int_type: String,

    /// Representation of decimal fields.
    pub decimal_type: String,

    /// Representation of byte-buffer fields.
    pub bytes_type: String,

    /// Raw code block injected before the generated declarations.
    pub prefix_code: Option<String>,

    /// Raw code block injected after the generated declarations.
    pub suffix_code: Option<String>,

    /// Output path for the validation-schema artifact. Unset disables it.
    pub zod_output: Option<String>,

    /// Render relation fields with an optional marker.
    pub optional_relations: bool,

    /// Drop relation fields from model output entirely.
    pub omit_relations: bool,

    /// Render not-required fields with an optional marker in addition to
    /// the nullable union.
    pub optional_nullables: bool,

    /// Fail on scalar tags the validation-schema path has no mapping for,
    /// matching the declaration path, instead of degrading to `z.any()`.
    pub strict_validation_types: bool,

    /// Hand the output to an external formatter after writing.
    pub prettier: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enum_prefix: String::new(),
            enum_suffix: String::new(),
            model_prefix: String::new(),
            model_suffix: String::new(),
            type_prefix: String::new(),
            type_suffix: String::new(),
            namespace: None,
            namespace_type: None,
            use_type: None,
            header_comment: "This file was auto-generated. Any manual edits will be overwritten."
                .to_string(),
            model_type: ModelShape::Interface,
            enum_type: EnumShape::StringUnion,
            date_type: "Date".to_string(),
            big_int_type: "bigint".to_string(),
            decimal_type: "Decimal".to_string(),
            bytes_type: "Buffer".to_string(),
            prefix_code: None,
            suffix_code: None,
            zod_output: None,
            optional_relations: true,
            omit_relations: false,
            optional_nullables: false,
            strict_validation_types: false,
            prettier: false,
        }
    }
}

/// Top-level shape selector for rendered models.
///
/// An unrecognized selector string is rejected at deserialization, carrying
/// the offending value in the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelShape {
    /// `export interface Name { … }` — open-ended.
    Interface,
    /// `export type Name = { … };` — closed literal.
    Type,
}

/// Shape selector for rendered enumerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EnumShape {
    /// `export type E = "A" | "B";`
    #[serde(rename = "stringUnion")]
    StringUnion,
    /// `export enum E { A = "A", … }`
    #[serde(rename = "enum")]
    Enum,
    /// Frozen record plus derived value-union type alias.
    #[serde(rename = "object")]
    Object,
}
