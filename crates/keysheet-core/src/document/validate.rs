//! Structural validation of cheatsheet YAML before typed conversion.
//!
//! Runs on the raw parsed value and collects every problem instead of
//! stopping at the first, so authors can fix a file in one pass.

use regex::Regex;
use serde_yaml::Value;

const VALID_KEYBOARDS: [&str; 5] = ["US", "UK", "DE", "FR", "ES"];
const VALID_SYSTEMS: [&str; 3] = ["Darwin", "Linux", "Windows"];

/// Character set allowed in keyboard-notation shortcut keys.
fn shortcut_format() -> Regex {
    Regex::new(r#"^[A-Za-z0-9+⌘⌥⌃⇧←→↑↓\s\-\|\[\],.:/`"?<>=\\]+$"#).unwrap()
}

/// Validate a parsed document. Empty output means the document is valid.
pub fn validate_document(value: &Value) -> Vec<String> {
    if value.is_null() {
        return vec!["Empty YAML file".to_string()];
    }
    let Some(root) = value.as_mapping() else {
        return vec!["Document must be a mapping".to_string()];
    };

    let mut errors = Vec::new();
    errors.extend(validate_required_keys(root));
    errors.extend(validate_title(root));
    errors.extend(validate_render_options(root));
    errors.extend(validate_layout(root));
    errors.extend(validate_shortcuts(root));
    errors
}

fn validate_required_keys(root: &serde_yaml::Mapping) -> Vec<String> {
    ["title", "shortcuts"]
        .into_iter()
        .filter(|key| !root.contains_key(Value::from(*key)))
        .map(|key| format!("Missing required top-level key: '{}'", key))
        .collect()
}

fn validate_title(root: &serde_yaml::Mapping) -> Vec<String> {
    match root.get(Value::from("title")) {
        Some(title) if !title.is_string() => vec!["Title must be a string".to_string()],
        _ => Vec::new(),
    }
}

fn validate_render_options(root: &serde_yaml::Mapping) -> Vec<String> {
    let mut errors = Vec::new();
    let render_keys = root.get(Value::from("RenderKeys"));
    let allow_text = root.get(Value::from("AllowText"));

    if let Some(value) = render_keys
        && !value.is_bool()
    {
        errors.push("RenderKeys must be a boolean value (true/false)".to_string());
    }
    if let Some(value) = allow_text
        && !value.is_bool()
    {
        errors.push("AllowText must be a boolean value (true/false)".to_string());
    }

    let allow_text = allow_text.and_then(Value::as_bool).unwrap_or(false);
    let render_keys = render_keys.and_then(Value::as_bool).unwrap_or(true);
    if allow_text && render_keys {
        errors.push("AllowText can only be true when RenderKeys is false".to_string());
    }
    errors
}

fn validate_layout(root: &serde_yaml::Mapping) -> Vec<String> {
    let Some(layout) = root.get(Value::from("layout")) else {
        return Vec::new();
    };
    let Some(layout) = layout.as_mapping() else {
        return vec!["Layout must be a mapping".to_string()];
    };

    let mut errors = Vec::new();
    if let Some(keyboard) = layout.get(Value::from("keyboard"))
        && !keyboard
            .as_str()
            .is_some_and(|k| VALID_KEYBOARDS.contains(&k))
    {
        errors.push(format!(
            "Invalid keyboard layout. Must be one of: {}",
            VALID_KEYBOARDS.join(", ")
        ));
    }
    if let Some(system) = layout.get(Value::from("system"))
        && !system.as_str().is_some_and(|s| VALID_SYSTEMS.contains(&s))
    {
        errors.push(format!(
            "Invalid system. Must be one of: {}",
            VALID_SYSTEMS.join(", ")
        ));
    }
    errors
}

fn validate_shortcuts(root: &serde_yaml::Mapping) -> Vec<String> {
    let Some(shortcuts) = root.get(Value::from("shortcuts")) else {
        return Vec::new();
    };
    let Some(shortcuts) = shortcuts.as_mapping() else {
        return vec!["Shortcuts must be a mapping".to_string()];
    };

    let allow_text = root
        .get(Value::from("AllowText"))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let format = shortcut_format();

    let mut errors = Vec::new();
    for (category_name, category) in shortcuts {
        let category_name = category_name.as_str().unwrap_or("<non-string>");
        let Some(category) = category.as_mapping() else {
            errors.push(format!(
                "Category '{}' must contain a mapping of shortcuts",
                category_name
            ));
            continue;
        };

        for (key, details) in category {
            let key = key.as_str().unwrap_or("<non-string>");
            match details.as_mapping() {
                Some(details) => match details.get(Value::from("description")) {
                    Some(description) if description.is_string() => {}
                    Some(_) => errors.push(format!(
                        "Description for shortcut '{}' in category '{}' must be a string",
                        key, category_name
                    )),
                    None => errors.push(format!(
                        "Shortcut '{}' in category '{}' must have a 'description' key",
                        key, category_name
                    )),
                },
                None => errors.push(format!(
                    "Shortcut '{}' in category '{}' must have a 'description' key",
                    key, category_name
                )),
            }

            if !allow_text && !format.is_match(key) {
                errors.push(format!(
                    "Invalid shortcut format: '{}' in category '{}'",
                    key, category_name
                ));
            }
        }
    }
    errors
}
