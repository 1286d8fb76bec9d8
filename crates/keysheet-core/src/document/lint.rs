//! Line-level linting and textual auto-fixes for cheatsheet YAML.
//!
//! The linter reports style problems; the fixer rewrites the raw text
//! without re-serializing, so author comments and quoting survive.

use regex::Regex;

const MAX_LINE_LENGTH: usize = 100;

/// Modifier glyphs and the names the fixer replaces them with.
const GLYPH_NAMES: [(&str, &str); 4] = [("⌘", "CMD"), ("⌃", "CTRL"), ("⌥", "ALT"), ("⇧", "SHIFT")];

/// Lint raw YAML text. Returns one warning per finding.
pub fn lint_content(content: &str) -> Vec<String> {
    let mut warnings = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let number = i + 1;
        if line.trim_end().chars().count() > MAX_LINE_LENGTH {
            warnings.push(format!(
                "Line {} is longer than {} characters",
                number, MAX_LINE_LENGTH
            ));
        }
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent % 2 != 0 {
            warnings.push(format!("Line {} has inconsistent indentation", number));
        }
        if line != line.trim_end() {
            warnings.push(format!("Line {} has trailing whitespace", number));
        }
    }
    warnings
}

/// Apply textual fixes to raw YAML text.
///
/// Returns the fixed text and a description of every fix applied. When the
/// second element is empty the text came back unchanged.
pub fn fix_content(content: &str) -> (String, Vec<String>) {
    let mut fixes = Vec::new();
    let mut fixed = content.to_string();

    for (glyph, name) in GLYPH_NAMES {
        if fixed.contains(glyph) {
            fixed = fixed.replace(glyph, name);
            fixes.push(format!("Replaced '{}' with '{}'", glyph, name));
        }
    }

    for name in ["cmd", "ctrl", "alt", "shift"] {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", name)).unwrap();
        let upper = name.to_uppercase();
        if pattern.find_iter(&fixed).any(|m| m.as_str() != upper) {
            fixed = pattern.replace_all(&fixed, upper.as_str()).to_string();
            fixes.push(format!("Converted '{}' to uppercase", name));
        }
    }

    let mut lines = Vec::new();
    for line in fixed.lines() {
        let stripped = line.trim_start_matches(' ');
        let indent = line.len() - stripped.len();
        let even_indent = (indent / 2) * 2;
        if even_indent != indent {
            fixes.push(format!("Fixed indentation in line: {}", line.trim()));
        }
        let mut rebuilt = " ".repeat(even_indent);
        rebuilt.push_str(stripped.trim_end());
        lines.push(rebuilt);
    }
    let mut fixed = lines.join("\n");
    if content.ends_with('\n') {
        fixed.push('\n');
    }

    (fixed, fixes)
}
