//! Shape classification for full identifier strings
//!
//! Classification is regex-shape-based, not semantic: each predicate tests
//! whether a string has the surface form of a CSS selector, XPath
//! expression, attribute-suffixed selector or `$elements.` parameter
//! reference. Malformed input deliberately falls into the page element
//! reference bucket rather than failing here; the fallback identifier
//! factory is the single place that rejects invalid shapes for that bucket.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Prefix shared by element parameter references
pub const ELEMENT_PARAMETER_PREFIX: &str = "$elements.";

/// Quoted selector, optionally with a trailing position suffix
static ELEMENT_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^".+"(:(-?[0-9]+|first|last))?$"#).expect("element identifier pattern")
});

/// Element identifier shape followed by `.attribute_name`
static ATTRIBUTE_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^".+"(:(-?[0-9]+|first|last))?\.[^\s".]+$"#).expect("attribute identifier pattern")
});

/// The four classification buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierType {
    ElementSelector,
    AttributeSelector,
    ElementParameterReference,
    PageElementReference,
}

impl IdentifierType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ElementSelector => "element-selector",
            Self::AttributeSelector => "attribute-selector",
            Self::ElementParameterReference => "element-parameter-reference",
            Self::PageElementReference => "page-element-reference",
        }
    }
}

/// Quoted selector whose content does not start with `/`
pub fn is_css_selector(identifier_string: &str) -> bool {
    ELEMENT_IDENTIFIER.is_match(identifier_string) && !identifier_string.starts_with("\"/")
}

/// Quoted selector whose content starts with `/`
pub fn is_xpath_expression(identifier_string: &str) -> bool {
    ELEMENT_IDENTIFIER.is_match(identifier_string) && identifier_string.starts_with("\"/")
}

pub fn is_element_identifier(identifier_string: &str) -> bool {
    ELEMENT_IDENTIFIER.is_match(identifier_string)
}

pub fn is_attribute_identifier(identifier_string: &str) -> bool {
    ATTRIBUTE_IDENTIFIER.is_match(identifier_string)
}

pub fn is_element_parameter_reference(identifier_string: &str) -> bool {
    identifier_string.starts_with(ELEMENT_PARAMETER_PREFIX)
}

/// Classify a full identifier string into one of the four buckets.
///
/// Priority: element identifier, then element parameter reference, then
/// attribute identifier. Everything else lands in the page element
/// reference bucket by design; that leniency keeps classification total and
/// leaves rejection of malformed references to the fallback factory.
pub fn find_type(identifier_string: &str) -> IdentifierType {
    if is_element_identifier(identifier_string) {
        IdentifierType::ElementSelector
    } else if is_element_parameter_reference(identifier_string) {
        IdentifierType::ElementParameterReference
    } else if is_attribute_identifier(identifier_string) {
        IdentifierType::AttributeSelector
    } else {
        IdentifierType::PageElementReference
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSS_SAMPLES: &[&str] = &[
        "\".selector\"",
        "\"a[href=value]\"",
        "\".selector\":3",
        "\".selector\":first",
        "\".selector\":last",
        "\".selector\":-2",
    ];

    const XPATH_SAMPLES: &[&str] = &[
        "\"//h1\"",
        "\"//div[@class='heading']\"",
        "\"//h1\":last",
    ];

    const ELEMENT_PARAMETER_SAMPLES: &[&str] =
        &["$elements.name", "$elements.name.attribute_name"];

    const ATTRIBUTE_SAMPLES: &[&str] = &[
        "\".selector\".attribute_name",
        "\".selector\":3.attribute_name",
        "\"//h1\":first.id",
    ];

    const PAGE_ELEMENT_SAMPLES: &[&str] = &[
        "page_import.elements.button",
        "invalid-page-model-element-reference",
        "$data.name",
    ];

    #[test]
    fn test_css_and_xpath_partition_element_identifiers() {
        for sample in CSS_SAMPLES {
            assert!(is_css_selector(sample), "sample: {sample}");
            assert!(!is_xpath_expression(sample), "sample: {sample}");
            assert!(is_element_identifier(sample), "sample: {sample}");
        }
        for sample in XPATH_SAMPLES {
            assert!(is_xpath_expression(sample), "sample: {sample}");
            assert!(!is_css_selector(sample), "sample: {sample}");
            assert!(is_element_identifier(sample), "sample: {sample}");
        }
    }

    #[test]
    fn test_classification_assigns_exactly_one_type_per_sample() {
        let expectations: &[(&[&str], IdentifierType)] = &[
            (CSS_SAMPLES, IdentifierType::ElementSelector),
            (XPATH_SAMPLES, IdentifierType::ElementSelector),
            (
                ELEMENT_PARAMETER_SAMPLES,
                IdentifierType::ElementParameterReference,
            ),
            (ATTRIBUTE_SAMPLES, IdentifierType::AttributeSelector),
            (PAGE_ELEMENT_SAMPLES, IdentifierType::PageElementReference),
        ];

        for (samples, expected) in expectations {
            for sample in *samples {
                assert_eq!(find_type(sample), *expected, "sample: {sample}");
            }
        }
    }

    #[test]
    fn test_predicate_disjointness() {
        for sample in ATTRIBUTE_SAMPLES {
            assert!(!is_element_identifier(sample), "sample: {sample}");
            assert!(!is_element_parameter_reference(sample), "sample: {sample}");
        }
        for sample in ELEMENT_PARAMETER_SAMPLES {
            assert!(!is_element_identifier(sample), "sample: {sample}");
            assert!(!is_attribute_identifier(sample), "sample: {sample}");
        }
        for sample in PAGE_ELEMENT_SAMPLES {
            assert!(!is_element_identifier(sample), "sample: {sample}");
            assert!(!is_attribute_identifier(sample), "sample: {sample}");
            assert!(!is_element_parameter_reference(sample), "sample: {sample}");
        }
    }

    #[test]
    fn test_serde_round_trip() {
        for identifier_type in [
            IdentifierType::ElementSelector,
            IdentifierType::AttributeSelector,
            IdentifierType::ElementParameterReference,
            IdentifierType::PageElementReference,
        ] {
            let json = serde_json::to_string(&identifier_type).unwrap();
            let restored: IdentifierType = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, identifier_type);
        }
    }

    #[test]
    fn test_malformed_input_falls_back_to_page_element_reference() {
        // never "unknown": the fallback bucket absorbs everything unclassified
        for sample in ["", "\".unterminated", "plain words", "$unknown.prefix"] {
            assert_eq!(
                find_type(sample),
                IdentifierType::PageElementReference,
                "sample: {sample}"
            );
        }
    }
}
