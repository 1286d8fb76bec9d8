//! keysheet-notation - shortcut notation parsing + symbol resolution.

pub mod parser;
pub mod symbols;

pub use parser::{
    Combinator, NotationError, ParsedToken, SEP, SEQ, display_shortcut, join_tokens,
    parse_shortcut,
};
pub use symbols::{SymbolMap, SystemMappings, arrow_symbol, is_modifier_glyph};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_resolves_and_joins_in_one_pass() {
        let map = SymbolMap::from_entries([("cmd", "⌘"), ("ctrl", "⌃")]);
        assert_eq!(display_shortcut("CMD+C>CTRL+K", &map), "⌘<sep>C<seq>⌃<sep>K");
    }

    #[test]
    fn no_delimiter_input_gets_no_separators() {
        let map = SymbolMap::from_entries([("enter", "⏎")]);
        let out = display_shortcut("  Enter ", &map);
        assert_eq!(out, "⏎");
        assert!(!out.contains(SEP) && !out.contains(SEQ));
    }
}
