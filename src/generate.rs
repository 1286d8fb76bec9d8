//! Batch generation pipeline: YAML documents in, HTML pages out.
//!
//! One failing document is logged and skipped; it never stops the batch.
//! The index page is written only when at least one sheet succeeded.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use keysheet_core::document::{
    ShortcutDocument, fix_content, lint_content, normalize_shortcuts, validate_document,
};
use keysheet_core::storage::{LayoutData, parse_yaml_content};

use crate::render::{IndexEntry, Renderer};

pub const INDEX_FILE: &str = "index.html";

pub struct GenerateOptions {
    pub output_dir: PathBuf,
    /// Rewrite each source file with the textual auto-fixes before
    /// generating from it.
    pub fix: bool,
}

/// Output file name for a cheatsheet page.
pub fn output_file_name(title: &str) -> String {
    format!("{}_cheatsheet.html", title.to_lowercase().replace(' ', "_"))
}

/// Generate one cheatsheet page and return its index entry.
pub fn generate_file(
    path: &Path,
    renderer: &Renderer,
    layouts: &LayoutData,
    options: &GenerateOptions,
) -> Result<IndexEntry> {
    let mut content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    if options.fix {
        let (fixed, fixes) = fix_content(&content);
        if !fixes.is_empty() {
            fs::write(path, &fixed)
                .with_context(|| format!("failed to write fixes to {}", path.display()))?;
            for fix in &fixes {
                tracing::info!(file = %path.display(), "{}", fix);
            }
            content = fixed;
        }
    }

    let value = parse_yaml_content(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let errors = validate_document(&value);
    if !errors.is_empty() {
        bail!("validation failed: {}", errors.join("; "));
    }
    for warning in lint_content(&content) {
        tracing::warn!(file = %path.display(), "{}", warning);
    }

    let doc = ShortcutDocument::from_value(&value)?;
    let symbols = layouts.systems.for_system(&doc.layout.system);
    let normalized = normalize_shortcuts(&doc, &symbols);

    let keyboard_rows = if doc.render_keys {
        let rows = layouts.keyboards.rows(&doc.layout.keyboard);
        if rows.is_none() {
            tracing::warn!(
                keyboard = doc.layout.keyboard,
                "no keyboard figure for layout, skipping it"
            );
        }
        rows
    } else {
        None
    };

    let html = renderer.render_cheatsheet(&doc, &normalized, keyboard_rows)?;

    fs::create_dir_all(&options.output_dir).with_context(|| {
        format!("failed to create output directory {}", options.output_dir.display())
    })?;
    let filename = output_file_name(&doc.title);
    let output_path = options.output_dir.join(&filename);
    fs::write(&output_path, html)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    tracing::info!(output = %output_path.display(), "cheatsheet generated");

    Ok(IndexEntry {
        title: doc.title,
        filename,
    })
}

/// Generate every file, then the index. Returns the successful sheets.
pub fn generate_all(
    files: &[PathBuf],
    renderer: &Renderer,
    layouts: &LayoutData,
    options: &GenerateOptions,
) -> Vec<IndexEntry> {
    let mut sheets = Vec::new();
    for file in files {
        match generate_file(file, renderer, layouts, options) {
            Ok(entry) => sheets.push(entry),
            Err(err) => {
                tracing::error!(file = %file.display(), error = %err, "skipping cheatsheet");
            }
        }
    }

    if !sheets.is_empty() {
        match renderer.render_index(&sheets) {
            Ok(html) => {
                let index_path = options.output_dir.join(INDEX_FILE);
                match fs::write(&index_path, html) {
                    Ok(()) => tracing::info!(output = %index_path.display(), "index generated"),
                    Err(err) => {
                        tracing::error!(error = %err, "failed to write index page");
                    }
                }
            }
            Err(err) => tracing::error!(error = %err, "failed to render index page"),
        }
    }

    sheets
}

/// Validate and lint files without generating. Returns the number of
/// invalid files; problems go to stderr for the author.
pub fn check_files(files: &[PathBuf]) -> usize {
    let mut invalid = 0;
    for file in files {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("{}: {}", file.display(), err);
                invalid += 1;
                continue;
            }
        };

        let errors = match parse_yaml_content(&content) {
            Ok(value) => validate_document(&value),
            Err(err) => vec![err.to_string()],
        };
        for warning in lint_content(&content) {
            eprintln!("{}: warning: {}", file.display(), warning);
        }

        if errors.is_empty() {
            println!("{}: OK", file.display());
        } else {
            for error in &errors {
                eprintln!("{}: {}", file.display(), error);
            }
            invalid += 1;
        }
    }
    invalid
}

/// All `*.yaml` files in a directory, sorted for deterministic runs.
pub fn yaml_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keysheet_core::storage::load_layout_data;

    #[test]
    fn output_file_names_are_lowercased_and_underscored() {
        assert_eq!(output_file_name("VS Code"), "vs_code_cheatsheet.html");
        assert_eq!(output_file_name("tmux"), "tmux_cheatsheet.html");
    }

    #[test]
    fn generates_a_page_from_a_document_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("sample.yaml");
        std::fs::write(
            &source,
            "title: Sample\nlayout:\n  system: Darwin\nshortcuts:\n  General:\n    CMD+C:\n      description: Copy\n",
        )
        .unwrap();

        let (layouts, _) = load_layout_data(None);
        let renderer = Renderer::new(None).unwrap();
        let options = GenerateOptions {
            output_dir: dir.path().join("out"),
            fix: false,
        };

        let entry = generate_file(&source, &renderer, &layouts, &options).unwrap();
        assert_eq!(entry.filename, "sample_cheatsheet.html");
        let html = std::fs::read_to_string(options.output_dir.join(&entry.filename)).unwrap();
        assert!(html.contains("modifier-symbol"));
        assert!(html.contains("<kbd>C</kbd>"));
    }

    #[test]
    fn invalid_document_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("bad.yaml");
        std::fs::write(&source, "title: Bad\n").unwrap();

        let (layouts, _) = load_layout_data(None);
        let renderer = Renderer::new(None).unwrap();
        let options = GenerateOptions {
            output_dir: dir.path().join("out"),
            fix: false,
        };

        let err = generate_file(&source, &renderer, &layouts, &options).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn fix_rewrites_the_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("fixme.yaml");
        std::fs::write(
            &source,
            "title: Fixme\nRenderKeys: false\nshortcuts:\n  General:\n    ctrl+c:\n      description: Copy\n",
        )
        .unwrap();

        let (layouts, _) = load_layout_data(None);
        let renderer = Renderer::new(None).unwrap();
        let options = GenerateOptions {
            output_dir: dir.path().join("out"),
            fix: true,
        };

        generate_file(&source, &renderer, &layouts, &options).unwrap();
        let rewritten = std::fs::read_to_string(&source).unwrap();
        assert!(rewritten.contains("CTRL+c"));
    }

    #[test]
    fn batch_skips_broken_files_and_writes_the_index() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.yaml");
        let bad = dir.path().join("bad.yaml");
        std::fs::write(
            &good,
            "title: Good\nRenderKeys: false\nshortcuts:\n  General:\n    CTRL+C:\n      description: Copy\n",
        )
        .unwrap();
        std::fs::write(&bad, "shortcuts: {}\n").unwrap();

        let (layouts, _) = load_layout_data(None);
        let renderer = Renderer::new(None).unwrap();
        let options = GenerateOptions {
            output_dir: dir.path().join("out"),
            fix: false,
        };

        let sheets = generate_all(&[good, bad], &renderer, &layouts, &options);
        assert_eq!(sheets.len(), 1);
        let index = std::fs::read_to_string(options.output_dir.join(INDEX_FILE)).unwrap();
        assert!(index.contains("good_cheatsheet.html"));
    }

    #[test]
    fn yaml_files_are_discovered_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.yaml", "a.yaml", "notes.txt"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        let files = yaml_files_in(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.yaml", "b.yaml"]);
    }
}
