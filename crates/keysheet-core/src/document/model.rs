//! Typed cheatsheet document built from validated YAML.

use serde_yaml::{Mapping, Value};

use crate::error::{KeysheetError, Result};

/// Target keyboard and system for a cheatsheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutInfo {
    pub keyboard: String,
    pub system: String,
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self {
            keyboard: "US".to_string(),
            system: "Darwin".to_string(),
        }
    }
}

/// One shortcut: mandatory description plus opaque passthrough fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShortcutEntry {
    pub description: String,
    /// Author-supplied fields the core does not interpret.
    pub extra: Mapping,
}

/// A named group of shortcuts. Entries keep the author's order.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub name: String,
    pub entries: Vec<(String, ShortcutEntry)>,
}

/// UI-agnostic cheatsheet document.
///
/// Read-only input to normalization and rendering; constructed once per
/// file and discarded after the page is written.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortcutDocument {
    pub title: String,
    pub layout: LayoutInfo,
    /// Keys are free text commands, not keyboard notation.
    pub allow_text: bool,
    /// Render the keyboard figure for the document's layout.
    pub render_keys: bool,
    /// Categories in author order.
    pub shortcuts: Vec<Category>,
}

fn value_str(value: &Value) -> Option<&str> {
    value.as_str()
}

impl ShortcutDocument {
    /// Build the typed document from a parsed YAML value.
    ///
    /// Assumes the value already passed validation; structural surprises
    /// still come back as errors rather than panics.
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = value
            .as_mapping()
            .ok_or_else(|| KeysheetError::InvalidDocument("document is not a mapping".into()))?;

        let title = root
            .get(Value::from("title"))
            .and_then(value_str)
            .ok_or_else(|| KeysheetError::InvalidDocument("missing 'title'".into()))?
            .to_string();

        let allow_text = root
            .get(Value::from("AllowText"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let render_keys = root
            .get(Value::from("RenderKeys"))
            .and_then(Value::as_bool)
            .unwrap_or(true);

        let mut layout = LayoutInfo::default();
        if let Some(layout_map) = root.get(Value::from("layout")).and_then(Value::as_mapping) {
            if let Some(keyboard) = layout_map.get(Value::from("keyboard")).and_then(value_str) {
                layout.keyboard = keyboard.to_string();
            }
            if let Some(system) = layout_map.get(Value::from("system")).and_then(value_str) {
                layout.system = system.to_string();
            }
        }

        let shortcuts_map = root
            .get(Value::from("shortcuts"))
            .and_then(Value::as_mapping)
            .ok_or_else(|| {
                KeysheetError::InvalidDocument("missing 'shortcuts' mapping".into())
            })?;

        let mut shortcuts = Vec::with_capacity(shortcuts_map.len());
        for (category_name, category_value) in shortcuts_map {
            let name = value_str(category_name)
                .ok_or_else(|| {
                    KeysheetError::InvalidDocument("category name is not a string".into())
                })?
                .to_string();
            let entries_map = category_value.as_mapping().ok_or_else(|| {
                KeysheetError::InvalidDocument(format!(
                    "category '{}' is not a mapping of shortcuts",
                    name
                ))
            })?;

            let mut entries = Vec::with_capacity(entries_map.len());
            for (key, details) in entries_map {
                let raw_key = value_str(key)
                    .ok_or_else(|| {
                        KeysheetError::InvalidDocument(format!(
                            "shortcut key in category '{}' is not a string",
                            name
                        ))
                    })?
                    .to_string();
                entries.push((raw_key, ShortcutEntry::from_value(details, &name)?));
            }
            shortcuts.push(Category { name, entries });
        }

        Ok(Self {
            title,
            layout,
            allow_text,
            render_keys,
            shortcuts,
        })
    }
}

impl ShortcutEntry {
    fn from_value(details: &Value, category: &str) -> Result<Self> {
        let map = details.as_mapping().ok_or_else(|| {
            KeysheetError::InvalidDocument(format!(
                "shortcut in category '{}' is not a mapping",
                category
            ))
        })?;

        let mut description = None;
        let mut extra = Mapping::new();
        for (field, field_value) in map {
            if field.as_str() == Some("description") {
                description = field_value.as_str().map(str::to_string);
            } else {
                extra.insert(field.clone(), field_value.clone());
            }
        }

        let description = description.ok_or_else(|| {
            KeysheetError::InvalidDocument(format!(
                "shortcut in category '{}' has no 'description'",
                category
            ))
        })?;

        Ok(Self { description, extra })
    }
}
