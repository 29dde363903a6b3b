//! Scalar-to-TypeScript type mappings.
//!
//! | Scalar tag | TypeScript type |
//! |------------|-----------------|
//! | `String`   | `string` |
//! | `Boolean`  | `boolean` |
//! | `Int`      | `number` |
//! | `Float`    | `number` |
//! | `Json`     | `JsonValue` (custom helper) |
//! | `DateTime` | configured `dateType` |
//! | `BigInt`   | configured `bigIntType` |
//! | `Decimal`  | configured `decimalType` |
//! | `Bytes`    | configured `bytesType` |
//!
//! Configured representations may be a pipe-joined union of two forms; those
//! are parenthesized so array/nullable suffixes applied later bind to the
//! whole union.

use crate::config::GeneratorConfig;
use crate::dmmf::ScalarType;

/// Zero-dependency helper types the output can reference.
///
/// The generated file must not import anything, so the representations that
/// would normally come from the ORM's client package are declared inline —
/// but only when a model actually used them. The model emitter records each
/// use; the assembler prepends the matching declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CustomType {
    BufferObject,
    Decimal,
    JsonValue,
}

impl CustomType {
    /// The type name as it appears in mapped output.
    pub fn name(&self) -> &'static str {
        match self {
            CustomType::BufferObject => "BufferObject",
            CustomType::Decimal => "Decimal",
            CustomType::JsonValue => "JsonValue",
        }
    }

    /// The helper's declaration, compatible with the ORM client's own type.
    pub fn declaration(&self) -> &'static str {
        match self {
            CustomType::BufferObject => {
                "type BufferObject = { type: \"Buffer\"; data: number[] };"
            }
            CustomType::Decimal => "type Decimal = { valueOf(): string };",
            CustomType::JsonValue => {
                "type JsonValue = string | number | boolean | { [key in string]?: JsonValue } | Array<JsonValue> | null;"
            }
        }
    }

    /// Match a mapped type string back to the helper it references.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "BufferObject" => Some(CustomType::BufferObject),
            "Decimal" => Some(CustomType::Decimal),
            "JsonValue" => Some(CustomType::JsonValue),
            _ => None,
        }
    }
}

/// Map a scalar tag to its TypeScript type under `config`.
pub fn scalar_type(scalar: ScalarType, config: &GeneratorConfig) -> String {
    match scalar {
        ScalarType::String => "string".to_string(),
        ScalarType::Boolean => "boolean".to_string(),
        ScalarType::Int | ScalarType::Float => "number".to_string(),
        ScalarType::Json => "JsonValue".to_string(),
        ScalarType::DateTime => configured(&config.date_type),
        ScalarType::BigInt => configured(&config.big_int_type),
        ScalarType::Decimal => configured(&config.decimal_type),
        ScalarType::Bytes => configured(&config.bytes_type),
    }
}

/// Union representations are grouped before suffixing.
fn configured(representation: &str) -> String {
    if representation.contains('|') {
        format!("({representation})")
    } else {
        representation.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GeneratorConfig {
        GeneratorConfig::default()
    }

    #[test]
    fn test_fixed_mappings() {
        assert_eq!(scalar_type(ScalarType::String, &config()), "string");
        assert_eq!(scalar_type(ScalarType::Boolean, &config()), "boolean");
        assert_eq!(scalar_type(ScalarType::Int, &config()), "number");
        assert_eq!(scalar_type(ScalarType::Float, &config()), "number");
        assert_eq!(scalar_type(ScalarType::Json, &config()), "JsonValue");
    }

    #[test]
    fn test_configured_mappings() {
        assert_eq!(scalar_type(ScalarType::DateTime, &config()), "Date");
        assert_eq!(scalar_type(ScalarType::BigInt, &config()), "bigint");
        assert_eq!(scalar_type(ScalarType::Decimal, &config()), "Decimal");
        assert_eq!(scalar_type(ScalarType::Bytes, &config()), "Buffer");
    }

    #[test]
    fn test_union_representation_is_parenthesized() {
        let config = GeneratorConfig {
            date_type: "Date | string".to_string(),
            big_int_type: "bigint | string".to_string(),
            ..GeneratorConfig::default()
        };
        assert_eq!(scalar_type(ScalarType::DateTime, &config), "(Date | string)");
        assert_eq!(scalar_type(ScalarType::BigInt, &config), "(bigint | string)");
    }

    #[test]
    fn test_custom_type_round_trip() {
        for custom in [
            CustomType::BufferObject,
            CustomType::Decimal,
            CustomType::JsonValue,
        ] {
            assert_eq!(CustomType::from_type_name(custom.name()), Some(custom));
        }
        assert_eq!(CustomType::from_type_name("string"), None);
    }

    #[test]
    fn test_custom_type_declarations_are_self_contained() {
        for custom in [
            CustomType::BufferObject,
            CustomType::Decimal,
            CustomType::JsonValue,
        ] {
            let declaration = custom.declaration();
            assert!(declaration.starts_with("type "));
            assert!(declaration.ends_with(';'));
            assert!(!declaration.contains("import"));
        }
    }
}
