use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CountdownError, CountdownResult};
use crate::style::model::StyleDefinition;
use crate::style::presets::builtin_styles;

static BUILTIN: LazyLock<StyleRegistry> = LazyLock::new(|| StyleRegistry::index(builtin_styles()));

/// Ordered, immutable catalog of named styles.
///
/// The built-in catalog is created on first use and lives for the rest of the process. Custom
/// registries (built from style packs) are ordinary owned values.
#[derive(Clone, Debug)]
pub struct StyleRegistry {
    styles: Vec<StyleDefinition>,
    by_name: HashMap<String, usize>,
}

impl StyleRegistry {
    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static StyleRegistry {
        &BUILTIN
    }

    /// Validate `defs` and build a registry preserving their order.
    pub fn from_definitions(defs: Vec<StyleDefinition>) -> CountdownResult<Self> {
        let mut seen = HashMap::with_capacity(defs.len());
        for (i, def) in defs.iter().enumerate() {
            def.validate()?;
            if seen.insert(def.name.as_str(), i).is_some() {
                return Err(CountdownError::validation(format!(
                    "duplicate style name '{}'",
                    def.name
                )));
            }
        }
        Ok(Self::index(defs))
    }

    /// Copy of this registry with `defs` replacing same-named entries in place and any new names
    /// appended in the order given.
    pub fn with_overrides(&self, defs: Vec<StyleDefinition>) -> CountdownResult<Self> {
        let mut styles = self.styles.clone();
        for def in defs {
            match styles.iter().position(|s| s.name == def.name) {
                Some(i) => styles[i] = def,
                None => styles.push(def),
            }
        }
        Self::from_definitions(styles)
    }

    /// Style names in registry order.
    pub fn list(&self) -> Vec<&str> {
        self.styles.iter().map(|s| s.name.as_str()).collect()
    }

    /// Look a style up by name.
    pub fn get(&self, name: &str) -> CountdownResult<&StyleDefinition> {
        self.by_name
            .get(name)
            .map(|&i| &self.styles[i])
            .ok_or_else(|| CountdownError::unsupported_style(name))
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Definitions in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.styles.iter()
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the registry holds no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    fn index(styles: Vec<StyleDefinition>) -> Self {
        let by_name = styles
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.clone(), i))
            .collect();
        Self { styles, by_name }
    }
}

/// A JSON document carrying extra or replacement style definitions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StylePack {
    /// Definitions in the order they should be listed.
    pub styles: Vec<StyleDefinition>,
}

impl StylePack {
    /// Parse a style pack from JSON text.
    pub fn from_json_str(json: &str) -> CountdownResult<Self> {
        serde_json::from_str(json).map_err(|e| CountdownError::serde(format!("style pack: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/registry.rs"]
mod tests;
