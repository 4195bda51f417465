//! Placeholder substitution.

use std::collections::HashMap;

use crate::domain::entities::name::NameVariantSet;

/// The values behind the closed placeholder-token set.
///
/// Rendering is literal text replacement: each `{{Token}}` occurrence is
/// swapped for its value, nothing else is interpreted. Unknown `{{...}}`
/// sequences pass through untouched, so host-framework template syntax in
/// stub bodies survives scaffolding.
///
/// The entity tokens come from the seed name; `{{EntityNamespace}}` always
/// carries the *module's* namespace — an entity lives in its module's
/// namespace, not in one of its own.
#[derive(Debug, Clone)]
pub struct StubContext {
    variables: HashMap<&'static str, String>,
}

impl StubContext {
    /// Context for module creation: the module seeds its own entity files.
    pub fn for_module(module: &NameVariantSet) -> Self {
        Self::build(module, module)
    }

    /// Context for adding an entity to an existing module.
    pub fn for_entity(entity: &NameVariantSet, module: &NameVariantSet) -> Self {
        Self::build(entity, module)
    }

    fn build(seed: &NameVariantSet, module: &NameVariantSet) -> Self {
        let mut variables = HashMap::new();
        variables.insert("EntityName", seed.studly().to_string());
        variables.insert("entityName", seed.camel().to_string());
        variables.insert("EntityNameKebab", seed.kebab().to_string());
        variables.insert("EntityNameKebabPlural", seed.kebab_plural().to_string());
        variables.insert("EntityNameSnake", seed.snake().to_string());
        variables.insert("EntityNameSnakePlural", seed.snake_plural().to_string());
        variables.insert("EntityNamespace", module.namespace_path().to_string());
        Self { variables }
    }

    /// Substitutes every known token in `template`.
    pub fn render(&self, template: &str) -> String {
        let mut output = template.to_string();
        for (key, value) in &self.variables {
            output = output.replace(&format!("{{{{{key}}}}}"), value);
        }
        output
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}
