//! Loading of cheatsheet documents and layout data.

mod layouts;
mod yaml;

pub use layouts::{
    KEYBOARD_LAYOUTS_FILE, KeyboardLayouts, LayoutData, SYSTEM_MAPPINGS_FILE, load_layout_data,
    system_mappings_from_value,
};
pub use yaml::{load_yaml, parse_yaml_content};
