//! Artifact assembly.
//!
//! Builds the name maps once, runs every emitter over the datamodel, and
//! concatenates the fragments into one text blob per artifact kind. Any
//! emitter error aborts the whole artifact; there is no partial output.

use std::collections::BTreeSet;

use crate::config::GeneratorConfig;
use crate::dmmf::Datamodel;
use crate::error::Result;
use crate::names::NameMaps;
use crate::ts;
use crate::zod;

/// Render the TypeScript declaration artifact.
///
/// Block order: header comment, injected prefix code, the custom helper
/// types the models actually used, enums, models, composite types, injected
/// suffix code. Blocks are separated by blank lines.
pub fn declaration_file(datamodel: &Datamodel, config: &GeneratorConfig) -> Result<String> {
    let names = NameMaps::resolve(datamodel, config)?;
    let mut used_custom_types = BTreeSet::new();

    let mut declarations = Vec::new();
    for item in &datamodel.enums {
        declarations.push(ts::enum_declaration(config, item, &names)?);
    }
    for model in datamodel.models.iter().chain(&datamodel.types) {
        declarations.push(ts::model_declaration(
            config,
            model,
            &names,
            &mut used_custom_types,
        )?);
    }

    let mut blocks = Vec::new();
    if !config.header_comment.is_empty() {
        blocks.push(header_block(&config.header_comment));
    }
    if let Some(code) = &config.prefix_code {
        blocks.push(code.clone());
    }
    for custom in &used_custom_types {
        blocks.push(custom.declaration().to_string());
    }
    blocks.extend(declarations);
    if let Some(code) = &config.suffix_code {
        blocks.push(code.clone());
    }

    Ok(format!("{}\n", blocks.join("\n\n")))
}

/// Render the Zod validation-schema artifact.
///
/// Enum schemas come first so model schemas can reference them by name.
pub fn validation_file(datamodel: &Datamodel, config: &GeneratorConfig) -> Result<String> {
    let names = NameMaps::resolve(datamodel, config)?;

    let mut blocks = Vec::new();
    if !config.header_comment.is_empty() {
        blocks.push(header_block(&config.header_comment));
    }
    blocks.push("import { z } from \"zod\";".to_string());
    for item in &datamodel.enums {
        blocks.push(zod::enum_schema(item, &names)?);
    }
    for model in datamodel.models.iter().chain(&datamodel.types) {
        blocks.push(zod::model_schema(config, model, &names)?);
    }

    Ok(format!("{}\n", blocks.join("\n\n")))
}

fn header_block(comment: &str) -> String {
    comment
        .lines()
        .map(|line| format!("// {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
