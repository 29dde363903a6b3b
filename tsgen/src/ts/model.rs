//! Model emitter.
//!
//! Renders an entity model as one `interface`/`type` declaration, one line
//! per field in declaration order. Relation linking columns are substituted
//! with the referenced model's key type, documentation annotations override
//! the mapped type, and every custom-helper use is recorded in the run's
//! usage set.

use std::collections::BTreeSet;

use crate::config::{GeneratorConfig, ModelShape};
use crate::dmmf::{Field, FieldKind, Model, ScalarType};
use crate::error::{Error, Result};
use crate::names::NameMaps;
use crate::ts::annotations::TypeAnnotation;
use crate::ts::type_map::{scalar_type, CustomType};

/// Render `model` as a TypeScript declaration.
pub fn model_declaration(
    config: &GeneratorConfig,
    model: &Model,
    names: &NameMaps,
    used_custom_types: &mut BTreeSet<CustomType>,
) -> Result<String> {
    let mut lines = Vec::new();
    for field in &model.fields {
        if let Some(line) = field_line(config, model, field, names, used_custom_types)? {
            lines.push(line);
        }
    }
    let fields = lines.join("\n");

    let name = names
        .model_or_type(&model.name)
        .ok_or_else(|| Error::UnknownModelName(model.name.clone()))?;

    Ok(match config.model_type {
        ModelShape::Interface => format!("export interface {name} {{\n{fields}\n}}"),
        ModelShape::Type => format!("export type {name} = {{\n{fields}\n}};"),
    })
}

/// Render one field, or `None` when the omit-relations policy drops it.
fn field_line(
    config: &GeneratorConfig,
    model: &Model,
    field: &Field,
    names: &NameMaps,
    used_custom_types: &mut BTreeSet<CustomType>,
) -> Result<Option<String>> {
    // Modifier order is fixed: array suffix, then nullable union. The
    // optional marker on the name is forced per-call or follows the
    // optional-nullables policy.
    let definition = |resolved: &str, optional: bool, is_list: bool| {
        let optional_marker = optional || (!field.is_required && config.optional_nullables);
        format!(
            "  {}{}{}: {}{}{};",
            doc_comment(field.documentation.as_deref()),
            field.name,
            if optional_marker { "?" } else { "" },
            resolved,
            if is_list { "[]" } else { "" },
            if field.is_required { "" } else { " | null" },
        )
    };

    match field.kind {
        FieldKind::Scalar => {
            let scalar: ScalarType = field.field_type.parse()?;
            let resolved = scalar_type(scalar, config);
            if let Some(custom) = CustomType::from_type_name(&resolved) {
                used_custom_types.insert(custom);
            }

            // A scalar that is the linking column of a relation renders as
            // the referenced model's key type instead of its own mapping.
            let relation = model
                .fields
                .iter()
                .find(|f| f.relation_from() == Some(field.name.as_str()));
            if let Some(relation) = relation {
                if let Some(alias) = names.type_alias(&relation.field_type) {
                    return Ok(Some(definition(alias, false, field.is_list)));
                }
                let Some(model_name) = names.model(&relation.field_type) else {
                    return Err(Error::UnknownModelName(relation.field_type.clone()));
                };
                let key = relation
                    .relation_to()
                    .ok_or_else(|| Error::MissingRelationReference {
                        model: model.name.clone(),
                        field: field.name.clone(),
                    })?;
                return Ok(Some(definition(
                    &format!("{model_name}['{key}']"),
                    false,
                    field.is_list,
                )));
            }

            if let Some(annotation) = field.documentation.as_deref().and_then(TypeAnnotation::parse)
            {
                // Annotated types replace the whole mapping, array suffix
                // included.
                return Ok(Some(definition(&annotation.resolve(config), false, false)));
            }

            Ok(Some(definition(&resolved, false, field.is_list)))
        }
        FieldKind::Object => {
            if let Some(alias) = names.type_alias(&field.field_type) {
                // Aliased-type relations are never optional or omitted.
                return Ok(Some(definition(alias, false, field.is_list)));
            }
            let Some(model_name) = names.model(&field.field_type) else {
                return Err(Error::UnknownModelName(field.field_type.clone()));
            };
            if config.omit_relations {
                return Ok(None);
            }
            Ok(Some(definition(
                model_name,
                config.optional_relations,
                field.is_list,
            )))
        }
        FieldKind::Enum => {
            let enum_name = names
                .enumeration(&field.field_type)
                .ok_or_else(|| Error::UnknownEnumName(field.field_type.clone()))?;
            Ok(Some(definition(enum_name, false, field.is_list)))
        }
        FieldKind::Unsupported => Ok(Some(definition("any", false, field.is_list))),
    }
}

/// Render a field's documentation comment, block form when it spans lines.
fn doc_comment(documentation: Option<&str>) -> String {
    match documentation {
        None => String::new(),
        Some(comment) if comment.is_empty() => String::new(),
        Some(comment) if comment.contains('\n') => {
            format!("/**\n * {}\n */\n", comment.replace('\n', "\n * "))
        }
        Some(comment) => format!("/** {comment} */\n"),
    }
}
