//! Zod schema emitter for models and enums.

use crate::config::GeneratorConfig;
use crate::dmmf::{DatamodelEnum, FieldKind, Model};
use crate::error::{Error, Result};
use crate::names::NameMaps;
use crate::zod::type_map::field_schema;

/// Render `model` as a `z.object()` schema declaration.
///
/// Relation fields are excluded: the schema validates the model's own
/// columns, not the joined rows.
pub fn model_schema(
    config: &GeneratorConfig,
    model: &Model,
    names: &NameMaps,
) -> Result<String> {
    let name = names
        .model_or_type(&model.name)
        .ok_or_else(|| Error::UnknownModelName(model.name.clone()))?;

    let fields = model
        .fields
        .iter()
        .filter(|field| field.kind != FieldKind::Object)
        .map(|field| {
            let schema = field_schema(field, config, names)?;
            Ok(format!("  {}: {}", field.name, schema))
        })
        .collect::<Result<Vec<_>>>()?
        .join(",\n");

    Ok(format!("export const {name} = z.object({{\n{fields}\n}});"))
}

/// Render `data` as a `z.enum()` declaration over its ordered value list.
pub fn enum_schema(data: &DatamodelEnum, names: &NameMaps) -> Result<String> {
    let name = names
        .enumeration(&data.name)
        .ok_or_else(|| Error::UnknownEnumName(data.name.clone()))?;

    let values = data
        .values
        .iter()
        .map(|value| format!("\"{}\"", value.name))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("export const {name} = z.enum([{values}]);"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dmmf::{Datamodel, Field, ScalarType};

    fn setup(model: Model) -> (GeneratorConfig, Model, NameMaps) {
        let datamodel = Datamodel {
            models: vec![model.clone()],
            enums: vec![DatamodelEnum::new("Gender", &["Male", "Female", "Other"])],
            types: vec![],
        };
        let config = GeneratorConfig::default();
        let names = NameMaps::resolve(&datamodel, &config).unwrap();
        (config, model, names)
    }

    #[test]
    fn test_model_schema() {
        let (config, model, names) = setup(Model::new(
            "Person",
            vec![
                Field::scalar("id", ScalarType::Int).id(),
                Field::scalar("email", ScalarType::String).optional(),
                Field::enumeration("gender", "Gender"),
            ],
        ));

        let rendered = model_schema(&config, &model, &names).unwrap();
        assert_eq!(
            rendered,
            "export const Person = z.object({\n  id: z.number().int(),\n  email: z.string().nullable(),\n  gender: Gender\n});"
        );
    }

    #[test]
    fn test_model_schema_skips_relations() {
        let (config, model, names) = setup(Model::new(
            "Person",
            vec![
                Field::scalar("id", ScalarType::Int).id(),
                Field::object("friends", "Person")
                    .list()
                    .with_relation(&[], &[]),
            ],
        ));

        let rendered = model_schema(&config, &model, &names).unwrap();
        assert!(!rendered.contains("friends"));
        assert!(rendered.contains("id: z.number().int()"));
    }

    #[test]
    fn test_unknown_model_is_fatal() {
        let (config, _, names) = setup(Model::new("Person", vec![]));
        let stray = Model::new("Stray", vec![]);
        let err = model_schema(&config, &stray, &names).unwrap_err();
        assert_eq!(err, Error::UnknownModelName("Stray".to_string()));
    }

    #[test]
    fn test_enum_schema() {
        let (_, _, names) = setup(Model::new("Person", vec![]));
        let data = DatamodelEnum::new("Gender", &["Male", "Female", "Other"]);
        assert_eq!(
            enum_schema(&data, &names).unwrap(),
            "export const Gender = z.enum([\"Male\", \"Female\", \"Other\"]);"
        );
    }

    #[test]
    fn test_enum_schema_unknown_name_is_fatal() {
        let (_, _, names) = setup(Model::new("Person", vec![]));
        let data = DatamodelEnum::new("Role", &["Admin"]);
        let err = enum_schema(&data, &names).unwrap_err();
        assert_eq!(err, Error::UnknownEnumName("Role".to_string()));
    }
}
