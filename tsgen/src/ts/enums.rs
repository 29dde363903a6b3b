//! Enum emitter.
//!
//! Renders an enumeration in one of three mutually exclusive shapes selected
//! by configuration: a string-literal union, a frozen key/value object with
//! a derived value-union alias, or a nominal `enum` whose members equal
//! their own names.

use crate::config::{EnumShape, GeneratorConfig};
use crate::dmmf::DatamodelEnum;
use crate::error::{Error, Result};
use crate::names::NameMaps;

/// Render `data` as a TypeScript declaration.
pub fn enum_declaration(
    config: &GeneratorConfig,
    data: &DatamodelEnum,
    names: &NameMaps,
) -> Result<String> {
    let name = names
        .enumeration(&data.name)
        .ok_or_else(|| Error::UnknownEnumName(data.name.clone()))?;

    Ok(match config.enum_type {
        EnumShape::StringUnion => {
            let values = data
                .values
                .iter()
                .map(|value| format!("\"{}\"", value.name))
                .collect::<Vec<_>>()
                .join(" | ");
            format!("export type {name} = {values};")
        }
        EnumShape::Enum => {
            let values = data
                .values
                .iter()
                .map(|value| format!("  {} = \"{}\"", value.name, value.name))
                .collect::<Vec<_>>()
                .join(",\n");
            format!("export enum {name} {{\n{values}\n}}")
        }
        EnumShape::Object => {
            let values = data
                .values
                .iter()
                .map(|value| format!("  {}: \"{}\"", value.name, value.name))
                .collect::<Vec<_>>()
                .join(",\n");
            format!(
                "export const {name} = {{\n{values}\n}} as const;\n\n\
                 export type {name} = (typeof {name})[keyof typeof {name}];"
            )
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dmmf::Datamodel;

    fn render(shape: EnumShape) -> String {
        let data = DatamodelEnum::new("Gender", &["Male", "Female", "Other"]);
        let datamodel = Datamodel {
            models: vec![],
            enums: vec![data.clone()],
            types: vec![],
        };
        let config = GeneratorConfig {
            enum_type: shape,
            ..GeneratorConfig::default()
        };
        let names = NameMaps::resolve(&datamodel, &config).unwrap();
        enum_declaration(&config, &data, &names).unwrap()
    }

    #[test]
    fn test_string_union() {
        assert_eq!(
            render(EnumShape::StringUnion),
            "export type Gender = \"Male\" | \"Female\" | \"Other\";"
        );
    }

    #[test]
    fn test_tagged_enum() {
        assert_eq!(
            render(EnumShape::Enum),
            "export enum Gender {\n  Male = \"Male\",\n  Female = \"Female\",\n  Other = \"Other\"\n}"
        );
    }

    #[test]
    fn test_object_shape() {
        let rendered = render(EnumShape::Object);
        assert_eq!(
            rendered,
            "export const Gender = {\n  Male: \"Male\",\n  Female: \"Female\",\n  Other: \"Other\"\n} as const;\n\nexport type Gender = (typeof Gender)[keyof typeof Gender];"
        );
    }

    #[test]
    fn test_object_shape_cardinality() {
        let rendered = render(EnumShape::Object);
        // One frozen entry per value, and the derived alias over the record.
        assert_eq!(rendered.matches(':').count(), 3);
        assert!(rendered.contains("(typeof Gender)[keyof typeof Gender]"));
    }

    #[test]
    fn test_affixed_name() {
        let data = DatamodelEnum::new("Gender", &["Male"]);
        let datamodel = Datamodel {
            models: vec![],
            enums: vec![data.clone()],
            types: vec![],
        };
        let config = GeneratorConfig {
            enum_prefix: "E".to_string(),
            enum_suffix: "Kind".to_string(),
            ..GeneratorConfig::default()
        };
        let names = NameMaps::resolve(&datamodel, &config).unwrap();
        let rendered = enum_declaration(&config, &data, &names).unwrap();
        assert_eq!(rendered, "export type EGenderKind = \"Male\";");
    }

    #[test]
    fn test_round_trip_value_order() {
        let values = ["Apple", "Banana", "Orange", "Pear"];
        let data = DatamodelEnum::new("Fruit", &values);
        let datamodel = Datamodel {
            models: vec![],
            enums: vec![data.clone()],
            types: vec![],
        };
        let config = GeneratorConfig::default();
        let names = NameMaps::resolve(&datamodel, &config).unwrap();
        let rendered = enum_declaration(&config, &data, &names).unwrap();

        // Re-parse the rendered union and recover the ordered value list.
        let list = rendered
            .strip_prefix("export type Fruit = ")
            .and_then(|rest| rest.strip_suffix(';'))
            .unwrap();
        let parsed: Vec<&str> = list
            .split(" | ")
            .map(|part| part.trim_matches('"'))
            .collect();
        assert_eq!(parsed, values);
    }
}
