//! Order template catalog
//!
//! Example payloads shown to the user when they pick an order type.
//! Loaded once at startup and injected into the dispatcher; the
//! templates are display-only and never validated against submissions.

use anyhow::Context;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Static mapping from order-type name to an example JSON payload
#[derive(Debug)]
pub struct TemplateCatalog {
    templates: HashMap<String, Value>,
}

impl TemplateCatalog {
    /// Load the catalog from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read order templates: {}", path.display()))?;

        Self::from_yaml(&raw)
    }

    /// Parse the catalog from YAML text
    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        let templates: HashMap<String, Value> =
            serde_yaml::from_str(raw).context("Failed to parse order templates")?;

        Ok(Self { templates })
    }

    /// Example payload for an order type; unknown types yield an empty object
    pub fn template(&self, order_type: &str) -> Value {
        self.templates
            .get(order_type)
            .cloned()
            .unwrap_or_else(|| Value::Object(Default::default()))
    }

    /// Pretty-printed template for display
    pub fn render(&self, order_type: &str) -> String {
        serde_json::to_string_pretty(&self.template(order_type))
            .unwrap_or_else(|_| "{}".to_string())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
