//! First-match-wins orchestration over the scanner family

use super::type_extractors::{
    IdentifierStringTypeExtractor, LiteralParameterExtractor, PageElementIdentifierExtractor,
    VariableParameterExtractor,
};

/// Finds where the identifier substring ends at the start of an action or
/// assertion argument string. Holds an ordered extractor list; the first
/// extractor that claims the string performs the extraction.
pub struct IdentifierStringExtractor {
    extractors: Vec<Box<dyn IdentifierStringTypeExtractor>>,
}

impl IdentifierStringExtractor {
    pub fn new() -> Self {
        Self {
            extractors: vec![
                Box::new(VariableParameterExtractor),
                Box::new(PageElementIdentifierExtractor::default()),
                Box::new(LiteralParameterExtractor),
            ],
        }
    }

    /// Extract the identifier substring belonging to the start of `string`.
    pub fn extract_from_start(&self, string: &str) -> Option<String> {
        self.extractors
            .iter()
            .find(|extractor| extractor.handles(string))
            .and_then(|extractor| extractor.extract_from_start(string))
    }
}

impl Default for IdentifierStringExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_shape_is_claimed_by_exactly_one_extractor() {
        let extractor = IdentifierStringExtractor::new();

        assert_eq!(
            extractor.extract_from_start("\".selector\" is \"value\""),
            Some("\".selector\"".to_string())
        );
        assert_eq!(
            extractor.extract_from_start("$elements.name.attr exists"),
            Some("$elements.name.attr".to_string())
        );
        assert_eq!(
            extractor.extract_from_start("page_import.elements.button exists"),
            Some("page_import.elements.button".to_string())
        );
    }

    #[test]
    fn test_empty_string_is_unclaimed() {
        let extractor = IdentifierStringExtractor::new();

        assert_eq!(extractor.extract_from_start(""), None);
    }

    #[test]
    fn test_quoted_selector_with_suffixes() {
        let extractor = IdentifierStringExtractor::new();

        assert_eq!(
            extractor.extract_from_start("\"//h1\":last.title is $data.expected"),
            Some("\"//h1\":last.title".to_string())
        );
    }
}
