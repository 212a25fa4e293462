//! The scanner family: one extractor per identifier string shape
//!
//! Each extractor answers "do I own the start of this string?" via `handles`
//! and, if so, extracts the identifier substring via `extract_from_start`.
//! Ownership is decided by the first character, so exactly one extractor
//! claims any given non-empty string:
//!
//! - `"` → quoted selector (optionally with position/attribute suffixes)
//! - `$` → variable parameter (`$elements.`, `$data.`, `$env.` with default)
//! - anything else → literal parameter up to the first unescaped space

use super::value_and_position;

/// Escape character inside quoted selectors and literal parameters
const ESCAPE: char = '\\';

/// Two-method capability shared by every scanner in the family
pub trait IdentifierStringTypeExtractor {
    /// Does this extractor own the start of `string`?
    fn handles(&self, string: &str) -> bool;

    /// Extract the identifier substring from the start of `string`.
    /// Returns None when the extractor does not own the string or the
    /// shape it owns is unterminated.
    fn extract_from_start(&self, string: &str) -> Option<String>;
}

// === LITERAL PARAMETERS ===

/// Claims strings not starting with `"` or `$`: page element references,
/// import names, bare keywords. Extraction stops at the first unescaped
/// space, or consumes the whole string if there is none.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiteralParameterExtractor;

impl IdentifierStringTypeExtractor for LiteralParameterExtractor {
    fn handles(&self, string: &str) -> bool {
        !string.is_empty() && !string.starts_with('"') && !string.starts_with('$')
    }

    fn extract_from_start(&self, string: &str) -> Option<String> {
        if !self.handles(string) {
            return None;
        }

        let mut previous: Option<char> = None;
        for (index, character) in string.char_indices() {
            if character == ' ' && previous != Some(ESCAPE) {
                return Some(string[..index].to_string());
            }
            previous = Some(character);
        }

        Some(string.to_string())
    }
}

// === QUOTED SELECTORS ===

/// Claims strings starting with `"`. Walks quote positions treating `\"` as
/// non-terminating, so selector text may itself contain comparison keywords
/// ("is", "to") or escaped quotes without ending the identifier early.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuotedStringExtractor;

impl IdentifierStringTypeExtractor for QuotedStringExtractor {
    fn handles(&self, string: &str) -> bool {
        string.starts_with('"')
    }

    fn extract_from_start(&self, string: &str) -> Option<String> {
        if !self.handles(string) {
            return None;
        }

        let mut previous: Option<char> = None;
        for (index, character) in string.char_indices().skip(1) {
            if character == '"' && previous != Some(ESCAPE) {
                return Some(string[..index + 1].to_string());
            }
            previous = Some(character);
        }

        // Unterminated quote: nothing to claim
        None
    }
}

// === QUOTED SELECTORS WITH SUFFIXES ===

/// The richer quoted-selector variant used for page element identifiers:
/// after the closing quote it also consumes an optional `:position` suffix
/// and an optional `.attribute_name` suffix. A suffix that does not parse
/// (a position that is not digits/first/last, an empty attribute name) is
/// silently left unconsumed for later stages to reinterpret.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageElementIdentifierExtractor {
    quoted_extractor: QuotedStringExtractor,
}

impl PageElementIdentifierExtractor {
    fn consume_position_suffix<'a>(&self, remainder: &'a str) -> &'a str {
        let Some(after_colon) = remainder.strip_prefix(':') else {
            return remainder;
        };

        let token_length = after_colon
            .char_indices()
            .find(|(_, character)| *character == ' ' || *character == '.')
            .map(|(index, _)| index)
            .unwrap_or(after_colon.len());

        match value_and_position::parse_token(&after_colon[..token_length]) {
            Some(_) => &after_colon[token_length..],
            None => remainder,
        }
    }

    fn consume_attribute_suffix<'a>(&self, remainder: &'a str) -> &'a str {
        let Some(after_dot) = remainder.strip_prefix('.') else {
            return remainder;
        };

        let name_length = after_dot
            .char_indices()
            .find(|(_, character)| *character == ' ')
            .map(|(index, _)| index)
            .unwrap_or(after_dot.len());

        if name_length == 0 {
            return remainder;
        }

        &after_dot[name_length..]
    }
}

impl IdentifierStringTypeExtractor for PageElementIdentifierExtractor {
    fn handles(&self, string: &str) -> bool {
        self.quoted_extractor.handles(string)
    }

    fn extract_from_start(&self, string: &str) -> Option<String> {
        let quoted = self.quoted_extractor.extract_from_start(string)?;

        let remainder = &string[quoted.len()..];
        let remainder = self.consume_position_suffix(remainder);
        let remainder = self.consume_attribute_suffix(remainder);

        Some(string[..string.len() - remainder.len()].to_string())
    }
}

// === VARIABLE PARAMETERS ===

/// Claims strings starting with `$`. A bare space terminates the identifier
/// unless a `|` has opened a default-value clause
/// (`$env.KEY|"default value"`); inside the clause only a quote-space pair
/// or end-of-string terminates.
#[derive(Debug, Default, Clone, Copy)]
pub struct VariableParameterExtractor;

impl IdentifierStringTypeExtractor for VariableParameterExtractor {
    fn handles(&self, string: &str) -> bool {
        string.starts_with('$')
    }

    fn extract_from_start(&self, string: &str) -> Option<String> {
        if !self.handles(string) {
            return None;
        }

        let mut in_default_clause = false;
        let mut previous: Option<char> = None;
        for (index, character) in string.char_indices() {
            if in_default_clause {
                if character == ' ' && previous == Some('"') {
                    return Some(string[..index].to_string());
                }
            } else if character == '|' {
                in_default_clause = true;
            } else if character == ' ' {
                return Some(string[..index].to_string());
            }
            previous = Some(character);
        }

        Some(string.to_string())
    }
}
