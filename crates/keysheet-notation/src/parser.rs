//! Shortcut notation tokenizer.
//!
//! A raw shortcut string is a sequence of key names interleaved with
//! combinator delimiters: `+` joins keys pressed together, `>` joins the
//! steps of a chord. A delimiter directly after a combinator names the
//! delimiter character itself as a key, so `Ctrl++` is Ctrl plus the `+`
//! key and `CTRL>>` is CTRL followed by the `>` key.

use thiserror::Error;

use crate::symbols::SymbolMap;

/// Rendering sentinel for a simultaneous-press boundary.
pub const SEP: &str = "<sep>";
/// Rendering sentinel for a sequential-chord boundary.
pub const SEQ: &str = "<seq>";

/// Relation between a token and the token before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    /// Keys pressed together (`+` in source notation).
    Simultaneous,
    /// Release, then press the next step of a chord (`>` in source notation).
    Sequential,
}

impl Combinator {
    fn from_delimiter(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Combinator::Simultaneous),
            '>' => Some(Combinator::Sequential),
            _ => None,
        }
    }

    /// The sentinel the template layer splits on.
    pub fn sentinel(self) -> &'static str {
        match self {
            Combinator::Simultaneous => SEP,
            Combinator::Sequential => SEQ,
        }
    }
}

/// One key extracted from a raw shortcut string.
///
/// `joined` is the combinator between this token and the previous one;
/// it is `None` only for the first token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedToken {
    pub text: String,
    pub joined: Option<Combinator>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty shortcut")]
    Empty,

    #[error("dangling '{delimiter}' at byte {position}")]
    DanglingCombinator { delimiter: char, position: usize },

    #[error("unexpected '{found}' after literal '{literal}' key")]
    AfterLiteral { literal: char, found: char },
}

/// Tokenize a raw shortcut string.
///
/// Single left-to-right pass. Whitespace around tokens and delimiters is
/// insignificant; each token text comes out trimmed.
pub fn parse_shortcut(raw: &str) -> Result<Vec<ParsedToken>, NotationError> {
    let mut tokens: Vec<ParsedToken> = Vec::new();
    // Combinator seen but not yet attached to its right-hand token.
    let mut pending: Option<Combinator> = None;
    let mut buf = String::new();
    // Set when the current token was a literal delimiter key; such a token
    // is complete and only a combinator (or whitespace) may follow it.
    let mut literal: Option<char> = None;

    for (position, ch) in raw.char_indices() {
        if let Some(kind) = Combinator::from_delimiter(ch) {
            if !buf.trim().is_empty() {
                tokens.push(ParsedToken {
                    text: buf.trim().to_string(),
                    joined: pending.take(),
                });
                buf.clear();
                pending = Some(kind);
            } else if literal.take().is_some() {
                pending = Some(kind);
            } else if let Some(joined) = pending.take() {
                // Empty span between two delimiters: this one is a key.
                tokens.push(ParsedToken {
                    text: ch.to_string(),
                    joined: Some(joined),
                });
                buf.clear();
                literal = Some(ch);
            } else {
                return Err(NotationError::DanglingCombinator {
                    delimiter: ch,
                    position,
                });
            }
        } else if let Some(lit) = literal {
            if !ch.is_whitespace() {
                return Err(NotationError::AfterLiteral {
                    literal: lit,
                    found: ch,
                });
            }
        } else {
            buf.push(ch);
        }
    }

    if !buf.trim().is_empty() {
        tokens.push(ParsedToken {
            text: buf.trim().to_string(),
            joined: pending.take(),
        });
    } else if let Some(kind) = pending {
        return Err(NotationError::DanglingCombinator {
            delimiter: match kind {
                Combinator::Simultaneous => '+',
                Combinator::Sequential => '>',
            },
            position: raw.len(),
        });
    }

    if tokens.is_empty() {
        return Err(NotationError::Empty);
    }
    Ok(tokens)
}

/// Join token texts with the canonical rendering sentinels.
pub fn join_tokens(tokens: &[ParsedToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        if let Some(joined) = token.joined {
            out.push_str(joined.sentinel());
        }
        out.push_str(&token.text);
    }
    out
}

/// Parse, symbol-substitute and join one raw shortcut string.
///
/// This is the per-key entry point of the normalization pipeline. It never
/// fails: malformed notation falls back to the untouched raw string with a
/// logged warning.
pub fn display_shortcut(raw: &str, symbols: &SymbolMap) -> String {
    match parse_shortcut(raw) {
        Ok(tokens) => {
            let mut out = String::new();
            for token in &tokens {
                if let Some(joined) = token.joined {
                    out.push_str(joined.sentinel());
                }
                out.push_str(&symbols.resolve(&token.text));
            }
            out
        }
        Err(err) => {
            tracing::warn!(shortcut = raw, error = %err, "could not tokenize shortcut, keeping raw text");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(raw: &str) -> String {
        display_shortcut(raw, &SymbolMap::new())
    }

    #[test]
    fn three_keys() {
        assert_eq!(display("Ctrl+Shift+A"), "Ctrl<sep>Shift<sep>A");
    }

    #[test]
    fn plus_key() {
        assert_eq!(display("Ctrl++"), "Ctrl<sep>+");
    }

    #[test]
    fn angle_bracket_key() {
        assert_eq!(display("CTRL+>"), "CTRL<sep>>");
    }

    #[test]
    fn simple_chord() {
        assert_eq!(display("Super+T>W>S"), "Super<sep>T<seq>W<seq>S");
    }

    #[test]
    fn composed_chord() {
        assert_eq!(display("CTRL+C>CTRL+K"), "CTRL<sep>C<seq>CTRL<sep>K");
    }

    #[test]
    fn angle_bracket_in_chord() {
        assert_eq!(display("CTRL>>"), "CTRL<seq>>");
    }

    #[test]
    fn plus_key_in_chord() {
        assert_eq!(display("CTRL>+"), "CTRL<seq>+");
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_eq!(display("Ctrl + C"), "Ctrl<sep>C");
        assert_eq!(display("Ctrl + Shift + A"), "Ctrl<sep>Shift<sep>A");
        assert_eq!(display("Ctrl + +"), "Ctrl<sep>+");
        assert_eq!(display("CTRL + >"), "CTRL<sep>>");
        assert_eq!(display("Super + T > W > S"), "Super<sep>T<seq>W<seq>S");
        assert_eq!(display("CTRL + C > CTRL + K"), "CTRL<sep>C<seq>CTRL<sep>K");
        assert_eq!(display("CTRL > >"), "CTRL<seq>>");
        assert_eq!(display("CTRL > +"), "CTRL<seq>+");
    }

    #[test]
    fn single_key_passes_through_trimmed() {
        assert_eq!(display("  Esc  "), "Esc");
        assert_eq!(display("PageDown"), "PageDown");
    }

    #[test]
    fn separator_count_is_token_count_minus_one() {
        for raw in ["Ctrl+Shift+A", "Super+T>W>S", "CTRL+C>CTRL+K", "Esc"] {
            let tokens = parse_shortcut(raw).unwrap();
            let joined = join_tokens(&tokens);
            let separators = joined.matches(SEP).count() + joined.matches(SEQ).count();
            assert_eq!(separators, tokens.len() - 1, "{}", raw);
        }
    }

    #[test]
    fn first_token_has_no_combinator() {
        let tokens = parse_shortcut("CTRL+C>CTRL+K").unwrap();
        assert_eq!(tokens[0].joined, None);
        assert!(tokens[1..].iter().all(|t| t.joined.is_some()));
    }

    #[test]
    fn doubled_delimiter_is_literal_final_token() {
        for (raw, literal) in [("Alt++", "+"), ("Alt>>", ">")] {
            let tokens = parse_shortcut(raw).unwrap();
            assert_eq!(tokens.last().unwrap().text, literal);
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(parse_shortcut(""), Err(NotationError::Empty));
        assert_eq!(parse_shortcut("   "), Err(NotationError::Empty));
    }

    #[test]
    fn leading_delimiter_is_dangling() {
        assert!(matches!(
            parse_shortcut("+Ctrl"),
            Err(NotationError::DanglingCombinator { delimiter: '+', .. })
        ));
    }

    #[test]
    fn trailing_delimiter_is_dangling() {
        assert!(matches!(
            parse_shortcut("Ctrl+"),
            Err(NotationError::DanglingCombinator { delimiter: '+', .. })
        ));
    }

    #[test]
    fn key_text_abutting_literal_key_is_rejected() {
        assert!(matches!(
            parse_shortcut("Ctrl++C"),
            Err(NotationError::AfterLiteral { literal: '+', found: 'C' })
        ));
    }

    #[test]
    fn malformed_input_falls_back_to_raw_text() {
        assert_eq!(display("Ctrl+"), "Ctrl+");
        assert_eq!(display("+Ctrl"), "+Ctrl");
        assert_eq!(display(""), "");
    }

    #[test]
    fn literal_key_may_continue_a_chord() {
        assert_eq!(display("Ctrl+++Shift"), "Ctrl<sep>+<sep>Shift");
    }
}
