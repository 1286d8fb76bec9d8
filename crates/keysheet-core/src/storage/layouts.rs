//! Keyboard layout and system symbol data.
//!
//! Both data files ship embedded in the binary. An explicit `--layouts`
//! directory or a copy in the user's config directory overrides them, per
//! file. Problems with override files come back as warnings and fall back
//! to the embedded defaults; loading never fails.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use keysheet_notation::{SymbolMap, SystemMappings};
use serde_yaml::Value;

use crate::error::{KeysheetError, Result};
use crate::storage::yaml::parse_yaml_content;

const EMBEDDED_KEYBOARD_LAYOUTS: &str = include_str!("../../data/keyboard_layouts.yaml");
const EMBEDDED_SYSTEM_MAPPINGS: &str = include_str!("../../data/system_mappings.yaml");

pub const KEYBOARD_LAYOUTS_FILE: &str = "keyboard_layouts.yaml";
pub const SYSTEM_MAPPINGS_FILE: &str = "system_mappings.yaml";

/// Keyboard figures keyed by layout name, each a list of key-cap rows.
#[derive(Clone, Debug, Default)]
pub struct KeyboardLayouts {
    layouts: HashMap<String, Vec<Vec<String>>>,
}

impl KeyboardLayouts {
    /// Build from a parsed `keyboard_layouts.yaml` value.
    ///
    /// Expected shape: `NAME: {layout: [[key, ...], ...]}`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = value.as_mapping().ok_or_else(|| {
            KeysheetError::InvalidDocument("keyboard layouts must be a mapping".into())
        })?;

        let mut layouts = HashMap::new();
        for (name, entry) in root {
            let name = name
                .as_str()
                .ok_or_else(|| {
                    KeysheetError::InvalidDocument("keyboard layout name is not a string".into())
                })?
                .to_string();
            let rows_value = entry
                .get("layout")
                .and_then(Value::as_sequence)
                .ok_or_else(|| {
                    KeysheetError::InvalidDocument(format!(
                        "keyboard layout '{}' has no 'layout' row list",
                        name
                    ))
                })?;

            let mut rows = Vec::with_capacity(rows_value.len());
            for row in rows_value {
                let keys = row.as_sequence().ok_or_else(|| {
                    KeysheetError::InvalidDocument(format!(
                        "keyboard layout '{}' has a non-list row",
                        name
                    ))
                })?;
                rows.push(
                    keys.iter()
                        .map(|key| match key.as_str() {
                            Some(text) => text.to_string(),
                            // Bare digits and similar scalars are fine as key caps.
                            None => serde_yaml::to_string(key)
                                .map(|s| s.trim().to_string())
                                .unwrap_or_default(),
                        })
                        .collect(),
                );
            }
            layouts.insert(name, rows);
        }
        Ok(Self { layouts })
    }

    /// Key-cap rows for a keyboard, or `None` when the layout is unknown.
    pub fn rows(&self, keyboard: &str) -> Option<&[Vec<String>]> {
        self.layouts.get(keyboard).map(Vec::as_slice)
    }

    pub fn contains(&self, keyboard: &str) -> bool {
        self.layouts.contains_key(keyboard)
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

/// Build the per-system symbol maps from a parsed `system_mappings.yaml`
/// value. Expected shape: `SYSTEM: {keyname: glyph, ...}`.
pub fn system_mappings_from_value(value: &Value) -> Result<SystemMappings> {
    let root = value.as_mapping().ok_or_else(|| {
        KeysheetError::InvalidDocument("system mappings must be a mapping".into())
    })?;

    let mut mappings = SystemMappings::new();
    for (system, entries) in root {
        let system = system.as_str().ok_or_else(|| {
            KeysheetError::InvalidDocument("system name is not a string".into())
        })?;
        let entries = entries.as_mapping().ok_or_else(|| {
            KeysheetError::InvalidDocument(format!(
                "system '{}' must map key names to symbols",
                system
            ))
        })?;

        let mut map = SymbolMap::new();
        for (name, glyph) in entries {
            let (Some(name), Some(glyph)) = (name.as_str(), glyph.as_str()) else {
                return Err(KeysheetError::InvalidDocument(format!(
                    "system '{}' has a non-string mapping entry",
                    system
                )));
            };
            map.insert(name, glyph);
        }
        mappings.insert(system, map);
    }
    Ok(mappings)
}

/// Everything the generator needs to know about keyboards and symbols.
#[derive(Clone, Debug)]
pub struct LayoutData {
    pub keyboards: KeyboardLayouts,
    pub systems: SystemMappings,
}

/// Load layout data with the override chain: explicit directory, then the
/// user's config directory, then the embedded defaults.
///
/// Returns warnings instead of failing so a broken override file degrades
/// to the shipped data.
pub fn load_layout_data(explicit_dir: Option<&Path>) -> (LayoutData, Vec<String>) {
    let mut warnings = Vec::new();

    let keyboards = match read_override(explicit_dir, KEYBOARD_LAYOUTS_FILE, &mut warnings) {
        Some((path, content)) => match parse_yaml_content(&content)
            .and_then(|value| KeyboardLayouts::from_value(&value))
        {
            Ok(parsed) => parsed,
            Err(err) => {
                warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                builtin_keyboard_layouts()
            }
        },
        None => builtin_keyboard_layouts(),
    };

    let systems = match read_override(explicit_dir, SYSTEM_MAPPINGS_FILE, &mut warnings) {
        Some((path, content)) => match parse_yaml_content(&content)
            .and_then(|value| system_mappings_from_value(&value))
        {
            Ok(parsed) => parsed,
            Err(err) => {
                warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                builtin_system_mappings()
            }
        },
        None => builtin_system_mappings(),
    };

    (LayoutData { keyboards, systems }, warnings)
}

fn builtin_keyboard_layouts() -> KeyboardLayouts {
    parse_yaml_content(EMBEDDED_KEYBOARD_LAYOUTS)
        .and_then(|value| KeyboardLayouts::from_value(&value))
        .unwrap_or_default()
}

fn builtin_system_mappings() -> SystemMappings {
    parse_yaml_content(EMBEDDED_SYSTEM_MAPPINGS)
        .and_then(|value| system_mappings_from_value(&value))
        .unwrap_or_default()
}

fn user_layouts_dir() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "keysheet")?;
    Some(proj.config_dir().to_path_buf())
}

/// First readable override for `file`, with its path. A missing file in an
/// explicitly requested directory warns; a missing user-config copy is
/// simply skipped.
fn read_override(
    explicit_dir: Option<&Path>,
    file: &str,
    warnings: &mut Vec<String>,
) -> Option<(PathBuf, String)> {
    let mut candidates: Vec<(PathBuf, bool)> = Vec::new();
    if let Some(dir) = explicit_dir {
        candidates.push((dir.join(file), true));
    }
    if let Some(dir) = user_layouts_dir() {
        candidates.push((dir.join(file), false));
    }

    for (path, explicit) in candidates {
        if !path.exists() {
            if explicit {
                warnings.push(format!("Layout file not found: {}", path.display()));
            }
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => return Some((path, content)),
            Err(err) => warnings.push(format!("Failed to read {}: {}", path.display(), err)),
        }
    }
    None
}
