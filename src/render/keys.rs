//! HTML for normalized shortcut keys.
//!
//! A normalized key is token text joined by the `<sep>`/`<seq>` rendering
//! sentinels. This splits it back apart, escapes each token, wraps tokens
//! in `<kbd>` and the four modifier glyphs in their style marker, and joins
//! with visible separator marks.

use handlebars::html_escape;
use keysheet_notation::{SEP, SEQ, is_modifier_glyph};

const SEP_HTML: &str = r#"<span class="key-sep">+</span>"#;
const SEQ_HTML: &str = r#"<span class="key-seq">then</span>"#;

/// Render one normalized shortcut key.
///
/// A raw fallback string (one that never went through the parser) contains
/// no sentinels and comes out as a single `<kbd>`.
pub fn render_key_html(normalized: &str) -> String {
    let mut out = String::new();
    let mut rest = normalized;
    loop {
        let boundary = match (rest.find(SEP), rest.find(SEQ)) {
            (None, None) => None,
            (Some(at), None) => Some((at, false)),
            (None, Some(at)) => Some((at, true)),
            (Some(sep_at), Some(seq_at)) => {
                if sep_at < seq_at {
                    Some((sep_at, false))
                } else {
                    Some((seq_at, true))
                }
            }
        };

        match boundary {
            Some((at, sequential)) => {
                push_token(&mut out, &rest[..at]);
                out.push_str(if sequential { SEQ_HTML } else { SEP_HTML });
                rest = &rest[at + if sequential { SEQ.len() } else { SEP.len() }..];
            }
            None => {
                push_token(&mut out, rest);
                return out;
            }
        }
    }
}

/// Render a free-text command (`allow_text` documents): escaped, no key
/// caps.
pub fn render_command_html(command: &str) -> String {
    format!(r#"<code class="command">{}</code>"#, html_escape(command))
}

fn push_token(out: &mut String, token: &str) {
    let escaped = html_escape(token);
    if is_modifier_glyph(token) {
        out.push_str(r#"<kbd><span class="modifier-symbol">"#);
        out.push_str(&escaped);
        out.push_str("</span></kbd>");
    } else {
        out.push_str("<kbd>");
        out.push_str(&escaped);
        out.push_str("</kbd>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_key_is_one_kbd() {
        assert_eq!(render_key_html("Esc"), "<kbd>Esc</kbd>");
    }

    #[test]
    fn simultaneous_keys_join_with_plus() {
        assert_eq!(
            render_key_html("Ctrl<sep>C"),
            r#"<kbd>Ctrl</kbd><span class="key-sep">+</span><kbd>C</kbd>"#
        );
    }

    #[test]
    fn chord_steps_join_with_then() {
        assert_eq!(
            render_key_html("Ctrl<sep>B<seq>D"),
            concat!(
                r#"<kbd>Ctrl</kbd><span class="key-sep">+</span><kbd>B</kbd>"#,
                r#"<span class="key-seq">then</span><kbd>D</kbd>"#
            )
        );
    }

    #[test]
    fn modifier_glyphs_get_the_style_marker() {
        assert_eq!(
            render_key_html("⌘<sep>C"),
            concat!(
                r#"<kbd><span class="modifier-symbol">⌘</span></kbd>"#,
                r#"<span class="key-sep">+</span><kbd>C</kbd>"#
            )
        );
    }

    #[test]
    fn arrow_glyphs_are_plain_key_caps() {
        assert_eq!(render_key_html("↑"), "<kbd>↑</kbd>");
    }

    #[test]
    fn token_text_is_escaped() {
        assert_eq!(render_key_html("Ctrl<sep>>"), r#"<kbd>Ctrl</kbd><span class="key-sep">+</span><kbd>&gt;</kbd>"#);
    }

    #[test]
    fn raw_fallback_text_stays_one_key_cap() {
        // A malformed key that kept its raw text never contains sentinels.
        assert_eq!(render_key_html("Ctrl+"), "<kbd>Ctrl+</kbd>");
    }

    #[test]
    fn commands_render_escaped_without_key_caps() {
        let html = render_command_html("kubectl get pods -o wide");
        assert!(html.starts_with(r#"<code class="command">"#));
        assert!(html.contains("kubectl get pods -o wide"));
        assert!(!render_command_html("a < b").contains("a < b"));
    }
}
