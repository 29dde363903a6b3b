//! End-to-end generation tests over the Person/Address/Gender fixture
//! datamodel.

use tsgen::{declaration_file, validation_file, Datamodel, EnumShape, GeneratorConfig, ModelShape};

fn fixture_datamodel() -> Datamodel {
    serde_json::from_str(include_str!("fixtures/datamodel.json"))
        .expect("fixture datamodel parses")
}

fn fixture_config() -> GeneratorConfig {
    GeneratorConfig {
        header_comment: String::new(),
        ..GeneratorConfig::default()
    }
}

#[test]
fn validation_output_matches_fixture_byte_for_byte() {
    let output = validation_file(&fixture_datamodel(), &fixture_config()).unwrap();
    assert_eq!(output, include_str!("fixtures/expected_zod.ts"));
}

#[test]
fn declaration_output_covers_fixture() {
    let output = declaration_file(&fixture_datamodel(), &fixture_config()).unwrap();

    // Helper types are declared only because Data uses Json fields.
    assert!(output.contains("type JsonValue = string | number | boolean"));
    assert!(!output.contains("type BufferObject"));

    // Enums before models.
    assert!(output.contains("export type Gender = \"Male\" | \"Female\" | \"Other\";"));
    let gender = output.find("export type Gender").unwrap();
    let person = output.find("export interface Person").unwrap();
    assert!(gender < person);

    // The relation's linking column renders as the referenced key type, and
    // the relation field itself follows the optional-relations default.
    assert!(output.contains("  addressId: Address['id'];"));
    assert!(output.contains("  address?: Address;"));

    // Nullable scalars carry the union suffix, lists the array suffix.
    assert!(output.contains("  email: string | null;"));
    assert!(output.contains("  stringArrayField: string[];"));
    assert!(output.contains("  optionalBytesField: Buffer | null;"));
    assert!(output.contains("  dateField: Date;"));
}

#[test]
fn declaration_output_honors_shape_options() {
    let config = GeneratorConfig {
        model_type: ModelShape::Type,
        enum_type: EnumShape::Object,
        optional_nullables: true,
        ..fixture_config()
    };
    let output = declaration_file(&fixture_datamodel(), &config).unwrap();

    assert!(output.contains("export type Person = {"));
    assert!(output.contains("} as const;"));
    assert!(output.contains("export type Gender = (typeof Gender)[keyof typeof Gender];"));
    assert!(output.contains("  email?: string | null;"));
}

#[test]
fn validation_output_honors_optional_nullables() {
    let config = GeneratorConfig {
        optional_nullables: true,
        ..fixture_config()
    };
    let output = validation_file(&fixture_datamodel(), &config).unwrap();
    assert!(output.contains("  email: z.string().nullable().optional(),"));
    assert!(output.contains("  optionalEnumField: DataTest.nullable().optional(),"));
}

#[test]
fn omit_relations_only_affects_declarations() {
    let config = GeneratorConfig {
        omit_relations: true,
        ..fixture_config()
    };
    let declarations = declaration_file(&fixture_datamodel(), &config).unwrap();
    assert!(!declarations.contains("address?"));
    assert!(declarations.contains("  addressId: Address['id'];"));

    // The validation artifact never carried relations to begin with.
    let validations = validation_file(&fixture_datamodel(), &config).unwrap();
    assert_eq!(
        validations,
        include_str!("fixtures/expected_zod.ts"),
        "relation policies must not change validation output"
    );
}

#[test]
fn affixes_apply_across_artifacts() {
    let config = GeneratorConfig {
        model_suffix: "Model".to_string(),
        enum_prefix: "E".to_string(),
        ..fixture_config()
    };

    let declarations = declaration_file(&fixture_datamodel(), &config).unwrap();
    assert!(declarations.contains("export interface PersonModel {"));
    assert!(declarations.contains("  addressId: AddressModel['id'];"));
    assert!(declarations.contains("  gender: EGender;"));

    let validations = validation_file(&fixture_datamodel(), &config).unwrap();
    assert!(validations.contains("export const PersonModel = z.object({"));
    assert!(validations.contains("export const EGender = z.enum("));
    assert!(validations.contains("  gender: EGender,"));
}
