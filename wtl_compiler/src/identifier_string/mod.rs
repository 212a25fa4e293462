//! Identifier substring extraction for WTL source lines
//!
//! This module answers one question: given the argument portion of an action
//! or assertion line, where does the identifier end? The grammar is
//! context-sensitive at the string level (quoted selectors may contain
//! comparison keywords, escaped quotes, position and attribute suffixes), so
//! extraction is done by small hand-written scanners rather than a grammar
//! engine.
//!
//! ## Key components
//!
//! - **[`IdentifierStringExtractor`]** - first-match-wins orchestration over
//!   the scanner family
//! - **[`IdentifierStringTypeExtractor`]** - the two-method capability each
//!   scanner implements (`handles`, `extract_from_start`)
//! - **[`value_and_position`]** - position-suffix stripping and normalization
//!
//! All scanning is defined over Unicode scalar values via `char_indices`;
//! byte offsets are only ever used at char boundaries.

pub mod extractor;
pub mod type_extractors;
pub mod value_and_position;

pub use extractor::IdentifierStringExtractor;
pub use type_extractors::{
    IdentifierStringTypeExtractor, LiteralParameterExtractor, PageElementIdentifierExtractor,
    QuotedStringExtractor, VariableParameterExtractor,
};
