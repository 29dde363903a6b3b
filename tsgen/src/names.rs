//! Name resolution.
//!
//! Rendered identifiers are `prefix + raw + suffix`, computed once per run
//! and memoized here. The maps are read-only once built and are threaded
//! explicitly through every emitter call so runs stay independent.

use std::collections::HashMap;

use crate::config::GeneratorConfig;
use crate::dmmf::Datamodel;
use crate::error::{Error, Result};

/// Rendered-name maps for one generation run.
#[derive(Debug, Clone, Default)]
pub struct NameMaps {
    models: HashMap<String, String>,
    enums: HashMap<String, String>,
    types: HashMap<String, String>,
}

impl NameMaps {
    /// Build the maps for `datamodel` under the configured affixes.
    ///
    /// Models, enums, and composite types share one output namespace, so a
    /// collision between any two rendered names is fatal.
    pub fn resolve(datamodel: &Datamodel, config: &GeneratorConfig) -> Result<Self> {
        let mut maps = Self::default();
        let mut rendered_owners: HashMap<String, String> = HashMap::new();

        let mut claim = |raw: &str, rendered: String| -> Result<String> {
            if let Some(owner) = rendered_owners.get(&rendered) {
                return Err(Error::NameCollision {
                    left: owner.clone(),
                    right: raw.to_string(),
                    rendered,
                });
            }
            rendered_owners.insert(rendered.clone(), raw.to_string());
            Ok(rendered)
        };

        for model in &datamodel.models {
            let rendered = affixed(&config.model_prefix, &model.name, &config.model_suffix);
            let rendered = claim(&model.name, rendered)?;
            maps.models.insert(model.name.clone(), rendered);
        }
        for item in &datamodel.enums {
            let rendered = affixed(&config.enum_prefix, &item.name, &config.enum_suffix);
            let rendered = claim(&item.name, rendered)?;
            maps.enums.insert(item.name.clone(), rendered);
        }
        for alias in &datamodel.types {
            let rendered = affixed(&config.type_prefix, &alias.name, &config.type_suffix);
            let rendered = claim(&alias.name, rendered)?;
            maps.types.insert(alias.name.clone(), rendered);
        }

        Ok(maps)
    }

    /// Rendered name of a model.
    pub fn model(&self, raw: &str) -> Option<&str> {
        self.models.get(raw).map(String::as_str)
    }

    /// Rendered name of an enumeration.
    pub fn enumeration(&self, raw: &str) -> Option<&str> {
        self.enums.get(raw).map(String::as_str)
    }

    /// Rendered name of a composite type alias.
    pub fn type_alias(&self, raw: &str) -> Option<&str> {
        self.types.get(raw).map(String::as_str)
    }

    /// Rendered name of a model, falling back to the type-alias map.
    ///
    /// Composite types render through the model emitters but live in their
    /// own map, so lookups for a top-level declaration go through both.
    pub fn model_or_type(&self, raw: &str) -> Option<&str> {
        self.model(raw).or_else(|| self.type_alias(raw))
    }
}

fn affixed(prefix: &str, raw: &str, suffix: &str) -> String {
    format!("{prefix}{raw}{suffix}")
}
