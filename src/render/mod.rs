//! HTML rendering boundary.
//!
//! Templates are embedded in the binary; a `--templates` directory may
//! override them per file. Key HTML is pre-rendered by [`keys`] and passed
//! to the template unescaped; everything else goes through handlebars'
//! own escaping.

pub mod keys;

use std::path::Path;

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;

use keysheet_core::document::{NormalizedShortcuts, ShortcutDocument};

const CHEATSHEET_TEMPLATE: &str = include_str!("../../templates/cheatsheet.html.hbs");
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html.hbs");

/// One generated page, as listed on the index.
#[derive(Clone, Debug, Serialize)]
pub struct IndexEntry {
    pub title: String,
    pub filename: String,
}

#[derive(Serialize)]
struct EntryContext {
    key_html: String,
    description: String,
}

#[derive(Serialize)]
struct CategoryContext {
    name: String,
    entries: Vec<EntryContext>,
}

#[derive(Serialize)]
struct CheatsheetContext<'a> {
    title: &'a str,
    keyboard: &'a str,
    system: &'a str,
    allow_text: bool,
    render_keys: bool,
    categories: Vec<CategoryContext>,
    keyboard_rows: Option<&'a [Vec<String>]>,
}

#[derive(Serialize)]
struct IndexContext<'a> {
    cheatsheets: &'a [IndexEntry],
}

pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Build the template registry. Overrides are looked up as
    /// `cheatsheet.html.hbs` and `index.html.hbs` in the given directory.
    pub fn new(template_dir: Option<&Path>) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string("cheatsheet", CHEATSHEET_TEMPLATE)
            .context("embedded cheatsheet template is invalid")?;
        registry
            .register_template_string("index", INDEX_TEMPLATE)
            .context("embedded index template is invalid")?;

        if let Some(dir) = template_dir {
            for name in ["cheatsheet", "index"] {
                let path = dir.join(format!("{}.html.hbs", name));
                if path.exists() {
                    registry
                        .register_template_file(name, &path)
                        .with_context(|| {
                            format!("failed to load template override {}", path.display())
                        })?;
                }
            }
        }

        Ok(Self { registry })
    }

    /// Render one cheatsheet page.
    pub fn render_cheatsheet(
        &self,
        doc: &ShortcutDocument,
        shortcuts: &NormalizedShortcuts,
        keyboard_rows: Option<&[Vec<String>]>,
    ) -> Result<String> {
        let categories = shortcuts
            .iter()
            .map(|category| CategoryContext {
                name: category.name.clone(),
                entries: category
                    .entries
                    .iter()
                    .map(|(key, entry)| EntryContext {
                        key_html: if doc.allow_text {
                            keys::render_command_html(key)
                        } else {
                            keys::render_key_html(key)
                        },
                        description: entry.description.clone(),
                    })
                    .collect(),
            })
            .collect();

        let context = CheatsheetContext {
            title: &doc.title,
            keyboard: &doc.layout.keyboard,
            system: &doc.layout.system,
            allow_text: doc.allow_text,
            render_keys: doc.render_keys,
            categories,
            keyboard_rows,
        };
        Ok(self.registry.render("cheatsheet", &context)?)
    }

    /// Render the index page linking all generated cheatsheets.
    pub fn render_index(&self, cheatsheets: &[IndexEntry]) -> Result<String> {
        Ok(self.registry.render("index", &IndexContext { cheatsheets })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keysheet_core::document::{Category, ShortcutDocument, ShortcutEntry, normalize_shortcuts};
    use keysheet_notation::SymbolMap;

    fn sample_doc(allow_text: bool) -> ShortcutDocument {
        ShortcutDocument {
            title: "Sample Tool".to_string(),
            layout: Default::default(),
            allow_text,
            render_keys: !allow_text,
            shortcuts: vec![Category {
                name: "General".to_string(),
                entries: vec![(
                    if allow_text { "git status" } else { "CMD+C" }.to_string(),
                    ShortcutEntry {
                        description: "Do the thing".to_string(),
                        extra: serde_yaml::Mapping::new(),
                    },
                )],
            }],
        }
    }

    fn darwin() -> SymbolMap {
        SymbolMap::from_entries([("cmd", "⌘")])
    }

    #[test]
    fn cheatsheet_page_contains_title_and_keys() {
        let doc = sample_doc(false);
        let normalized = normalize_shortcuts(&doc, &darwin());
        let html = Renderer::new(None)
            .unwrap()
            .render_cheatsheet(&doc, &normalized, None)
            .unwrap();
        assert!(html.contains("Sample Tool"));
        assert!(html.contains("modifier-symbol"));
        assert!(html.contains("<kbd>C</kbd>"));
        assert!(html.contains("Do the thing"));
        // The sentinels never reach the page.
        assert!(!html.contains("<sep>") && !html.contains("<seq>"));
    }

    #[test]
    fn allow_text_commands_render_as_plain_text() {
        let doc = sample_doc(true);
        let normalized = normalize_shortcuts(&doc, &darwin());
        let html = Renderer::new(None)
            .unwrap()
            .render_cheatsheet(&doc, &normalized, None)
            .unwrap();
        assert!(html.contains("git status"));
        assert!(!html.contains("<kbd>"));
    }

    #[test]
    fn keyboard_rows_render_when_given() {
        let doc = sample_doc(false);
        let normalized = normalize_shortcuts(&doc, &darwin());
        let rows = vec![vec!["Esc".to_string(), "F1".to_string()]];
        let html = Renderer::new(None)
            .unwrap()
            .render_cheatsheet(&doc, &normalized, Some(&rows))
            .unwrap();
        assert!(html.contains("keyboard-row"));
        assert!(html.contains("<kbd>Esc</kbd>"));
    }

    #[test]
    fn index_page_links_every_sheet() {
        let sheets = vec![
            IndexEntry {
                title: "Alpha".to_string(),
                filename: "alpha_cheatsheet.html".to_string(),
            },
            IndexEntry {
                title: "Beta".to_string(),
                filename: "beta_cheatsheet.html".to_string(),
            },
        ];
        let html = Renderer::new(None).unwrap().render_index(&sheets).unwrap();
        assert!(html.contains("alpha_cheatsheet.html"));
        assert!(html.contains("Beta"));
    }

    #[test]
    fn template_override_replaces_the_embedded_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html.hbs"), "OVERRIDE {{cheatsheets.[0].title}}")
            .unwrap();
        let renderer = Renderer::new(Some(dir.path())).unwrap();
        let sheets = vec![IndexEntry {
            title: "Alpha".to_string(),
            filename: "alpha_cheatsheet.html".to_string(),
        }];
        assert_eq!(renderer.render_index(&sheets).unwrap(), "OVERRIDE Alpha");
    }
}
