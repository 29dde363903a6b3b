//! Field-to-Zod schema mappings.
//!
//! | Scalar tag | Zod schema |
//! |------------|------------|
//! | `String`   | `z.string()` |
//! | `Boolean`  | `z.boolean()` |
//! | `Int`      | `z.number().int()` |
//! | `Float`    | `z.number()` |
//! | `Json`     | `z.any()` (`z.array(z.any())` for an `[]` default) |
//! | `DateTime` | `z.string().datetime()` or `z.date()` per `dateType` |
//! | `BigInt`   | `z.bigint()` |
//! | `Decimal`  | `z.number()` |
//! | `Bytes`    | `z.instanceof(Buffer)` |
//!
//! Modifiers are applied in fixed order: array wrap, then `.nullable()`,
//! then `.optional()` under the optional-nullables policy.

use crate::config::GeneratorConfig;
use crate::dmmf::{Field, FieldKind, ScalarType};
use crate::error::{Error, Result};
use crate::names::NameMaps;

/// Map one field to its Zod schema expression.
///
/// A scalar tag with no mapping degrades to `z.any()` unless
/// `strictValidationTypes` is set, in which case it is the same fatal error
/// the declaration path raises.
pub fn field_schema(
    field: &Field,
    config: &GeneratorConfig,
    names: &NameMaps,
) -> Result<String> {
    let base = match field.kind {
        FieldKind::Enum => names
            .enumeration(&field.field_type)
            .ok_or_else(|| Error::UnknownEnumName(field.field_type.clone()))?
            .to_string(),
        FieldKind::Unsupported => "z.any()".to_string(),
        FieldKind::Scalar | FieldKind::Object => {
            match field.field_type.parse::<ScalarType>() {
                Ok(scalar) => scalar_schema(scalar, field, config),
                Err(_) if !config.strict_validation_types => "z.any()".to_string(),
                Err(err) => return Err(err),
            }
        }
    };

    let mut schema = base;
    if field.is_list {
        schema = format!("z.array({schema})");
    }
    if !field.is_required {
        schema.push_str(".nullable()");
    }
    if config.optional_nullables && !field.is_required {
        schema.push_str(".optional()");
    }

    Ok(schema)
}

fn scalar_schema(scalar: ScalarType, field: &Field, config: &GeneratorConfig) -> String {
    match scalar {
        ScalarType::String => "z.string()".to_string(),
        ScalarType::Boolean => "z.boolean()".to_string(),
        ScalarType::Int => "z.number().int()".to_string(),
        ScalarType::Float => "z.number()".to_string(),
        ScalarType::Json => match &field.default {
            Some(serde_json::Value::String(marker)) if marker == "[]" => {
                "z.array(z.any())".to_string()
            }
            _ => "z.any()".to_string(),
        },
        ScalarType::DateTime => {
            if config.date_type == "string" {
                "z.string().datetime()".to_string()
            } else {
                "z.date()".to_string()
            }
        }
        ScalarType::BigInt => "z.bigint()".to_string(),
        ScalarType::Decimal => "z.number()".to_string(),
        ScalarType::Bytes => "z.instanceof(Buffer)".to_string(),
    }
}
