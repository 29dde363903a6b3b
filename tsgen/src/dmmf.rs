//! Datamodel descriptors.
//!
//! These types mirror the datamodel block of the DMMF document produced by
//! the upstream schema compiler. They are immutable inputs: the generator
//! never mutates a descriptor, it only reads them while producing text.
//!
//! All descriptors deserialize from the camelCase JSON the schema compiler
//! emits. The builder-style constructors exist for tests and for callers
//! that assemble a datamodel in code.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// A complete datamodel: entity models, enumerations, and composite type
/// aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datamodel {
    /// Entity models ("tables").
    #[serde(default)]
    pub models: Vec<Model>,

    /// Closed sets of named string values.
    #[serde(default)]
    pub enums: Vec<DatamodelEnum>,

    /// Composite type aliases. Rendered like models but resolved through the
    /// type name map.
    #[serde(default)]
    pub types: Vec<Model>,
}

/// An entity definition with named, typed fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub name: String,

    /// Fields in declaration order. Output preserves this order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// One field of a model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,

    pub kind: FieldKind,

    /// The raw type tag: a scalar tag for scalar fields, the referenced
    /// model name for object fields, the enum name for enum fields.
    #[serde(rename = "type")]
    pub field_type: String,

    #[serde(default = "default_true")]
    pub is_required: bool,

    #[serde(default)]
    pub is_list: bool,

    /// Whether this field is part of the model's primary key.
    #[serde(default)]
    pub is_id: bool,

    #[serde(default)]
    pub has_default_value: bool,

    /// Default value marker as the schema compiler serialized it.
    #[serde(default)]
    pub default: Option<serde_json::Value>,

    /// Inline documentation attached to the field. May carry a type
    /// annotation recognized by the type mapper.
    #[serde(default)]
    pub documentation: Option<String>,

    /// For object fields: the linking columns on this model.
    #[serde(default)]
    pub relation_from_fields: Option<Vec<String>>,

    /// For object fields: the referenced key columns on the target model.
    #[serde(default)]
    pub relation_to_fields: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}

impl Field {
    fn bare(name: impl Into<String>, kind: FieldKind, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            field_type: field_type.into(),
            is_required: true,
            is_list: false,
            is_id: false,
            has_default_value: false,
            default: None,
            documentation: None,
            relation_from_fields: None,
            relation_to_fields: None,
        }
    }

    /// Create a scalar field with the given type tag.
    pub fn scalar(name: impl Into<String>, scalar: ScalarType) -> Self {
        Self::bare(name, FieldKind::Scalar, scalar.tag())
    }

    /// Create an object-relation field referencing `model`.
    pub fn object(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self::bare(name, FieldKind::Object, model)
    }

    /// Create an enum field referencing `enum_name`.
    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self::bare(name, FieldKind::Enum, enum_name)
    }

    /// Create a field of a kind the generator cannot type.
    pub fn unsupported(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self::bare(name, FieldKind::Unsupported, raw_type)
    }

    /// Mark the field as not required (nullable in output).
    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    /// Mark the field as list-valued.
    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    /// Mark the field as part of the primary key.
    pub fn id(mut self) -> Self {
        self.is_id = true;
        self
    }

    /// Attach inline documentation.
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Attach a default-value marker.
    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.has_default_value = true;
        self.default = Some(default);
        self
    }

    /// Attach relation linkage (object fields only).
    pub fn with_relation(mut self, from: &[&str], to: &[&str]) -> Self {
        self.relation_from_fields = Some(from.iter().map(|s| s.to_string()).collect());
        self.relation_to_fields = Some(to.iter().map(|s| s.to_string()).collect());
        self
    }

    /// First linking column of this field's relation, if any.
    pub fn relation_from(&self) -> Option<&str> {
        self.relation_from_fields
            .as_deref()
            .and_then(|fields| fields.first())
            .map(String::as_str)
    }

    /// First referenced key column of this field's relation, if any.
    pub fn relation_to(&self) -> Option<&str> {
        self.relation_to_fields
            .as_deref()
            .and_then(|fields| fields.first())
            .map(String::as_str)
    }
}

/// Field kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Scalar,
    Object,
    Enum,
    Unsupported,
}

/// An enumeration: a closed, ordered set of named string values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatamodelEnum {
    pub name: String,
    pub values: Vec<EnumValue>,
}

impl DatamodelEnum {
    pub fn new(name: impl Into<String>, values: &[&str]) -> Self {
        Self {
            name: name.into(),
            values: values
                .iter()
                .map(|v| EnumValue {
                    name: v.to_string(),
                })
                .collect(),
        }
    }
}

/// One enumeration value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
}

/// The closed set of scalar type tags the generator knows how to map.
///
/// Tags arrive as strings in the DMMF document; parsing one that is not in
/// this set is the `UnknownScalarType` schema-mismatch error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Boolean,
    Int,
    Float,
    Json,
    DateTime,
    BigInt,
    Decimal,
    Bytes,
}

impl ScalarType {
    /// The tag as it appears in the DMMF document.
    pub fn tag(&self) -> &'static str {
        match self {
            ScalarType::String => "String",
            ScalarType::Boolean => "Boolean",
            ScalarType::Int => "Int",
            ScalarType::Float => "Float",
            ScalarType::Json => "Json",
            ScalarType::DateTime => "DateTime",
            ScalarType::BigInt => "BigInt",
            ScalarType::Decimal => "Decimal",
            ScalarType::Bytes => "Bytes",
        }
    }
}

impl FromStr for ScalarType {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "String" => Ok(ScalarType::String),
            "Boolean" => Ok(ScalarType::Boolean),
            "Int" => Ok(ScalarType::Int),
            "Float" => Ok(ScalarType::Float),
            "Json" => Ok(ScalarType::Json),
            "DateTime" => Ok(ScalarType::DateTime),
            "BigInt" => Ok(ScalarType::BigInt),
            "Decimal" => Ok(ScalarType::Decimal),
            "Bytes" => Ok(ScalarType::Bytes),
            other => Err(Error::UnknownScalarType(other.to_string())),
        }
    }
}
