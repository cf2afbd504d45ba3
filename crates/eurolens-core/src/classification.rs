//! The closed classification set and its presentation styles.
//!
//! The remote service returns the classification as a camelCase string
//! (`"europeanCountry"`, `"europeanAlly"`, …). Each variant maps to a fixed
//! [`ClassificationStyle`]: a pure lookup, never data carried on the wire.

use serde::{Deserialize, Serialize};

/// Verdict describing a product/company's relationship to Europe, or a
/// non-product subject the model recognized instead.
///
/// Values not in this set (a server-side vocabulary addition) deserialize
/// as [`Classification::Unknown`] rather than failing the whole result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Classification {
    EuropeanCountry,
    EuropeanAlly,
    EuropeanSceptic,
    EuropeanAdversary,
    Neutral,
    Cat,
    Dog,
    Animal,
    Human,
    #[serde(other)]
    Unknown,
}

/// Fixed presentation attributes for one [`Classification`] variant.
///
/// `color` is a hex RGB string; `symbol` names an icon in the presentation
/// layer's catalogue. Neither comes from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationStyle {
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub symbol: &'static str,
}

impl Classification {
    /// Returns the presentation style for this classification.
    #[must_use]
    pub fn style(self) -> &'static ClassificationStyle {
        match self {
            Classification::EuropeanCountry => &ClassificationStyle {
                title: "European",
                description: "This product comes from a company headquartered in Europe.",
                color: "#1E7B34",
                symbol: "checkmark.seal",
            },
            Classification::EuropeanAlly => &ClassificationStyle {
                title: "European Ally",
                description: "The company is based in a country closely aligned with Europe.",
                color: "#2D6CB5",
                symbol: "hand.thumbsup",
            },
            Classification::EuropeanSceptic => &ClassificationStyle {
                title: "European Sceptic",
                description: "The company is based in a country with a mixed stance towards Europe.",
                color: "#C77D1E",
                symbol: "questionmark.diamond",
            },
            Classification::EuropeanAdversary => &ClassificationStyle {
                title: "European Adversary",
                description: "The company is based in a country with an adversarial stance towards Europe.",
                color: "#B3261E",
                symbol: "xmark.octagon",
            },
            Classification::Neutral => &ClassificationStyle {
                title: "Neutral",
                description: "The company's origin has no clear alignment either way.",
                color: "#6B7280",
                symbol: "minus.circle",
            },
            Classification::Cat => &ClassificationStyle {
                title: "That's a cat",
                description: "No product here, just a cat.",
                color: "#8B5CF6",
                symbol: "cat",
            },
            Classification::Dog => &ClassificationStyle {
                title: "That's a dog",
                description: "No product here, just a dog.",
                color: "#8B5CF6",
                symbol: "dog",
            },
            Classification::Animal => &ClassificationStyle {
                title: "That's an animal",
                description: "No product here; an animal was recognized instead.",
                color: "#8B5CF6",
                symbol: "pawprint",
            },
            Classification::Human => &ClassificationStyle {
                title: "That's a person",
                description: "No product here; a person was recognized instead.",
                color: "#8B5CF6",
                symbol: "person",
            },
            Classification::Unknown => &ClassificationStyle {
                title: "Unknown",
                description: "The subject could not be identified.",
                color: "#6B7280",
                symbol: "questionmark.circle",
            },
        }
    }

    /// True for the "fully European" verdict, where alternative suggestions
    /// carry no meaning.
    #[must_use]
    pub fn is_fully_european(self) -> bool {
        matches!(self, Classification::EuropeanCountry)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.style().title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_are_camel_case() {
        let json = serde_json::to_string(&Classification::EuropeanCountry).unwrap();
        assert_eq!(json, "\"europeanCountry\"");
        let json = serde_json::to_string(&Classification::EuropeanAdversary).unwrap();
        assert_eq!(json, "\"europeanAdversary\"");
    }

    #[test]
    fn deserializes_known_values() {
        let c: Classification = serde_json::from_str("\"europeanAlly\"").unwrap();
        assert_eq!(c, Classification::EuropeanAlly);
        let c: Classification = serde_json::from_str("\"dog\"").unwrap();
        assert_eq!(c, Classification::Dog);
    }

    #[test]
    fn unrecognized_value_falls_back_to_unknown() {
        let c: Classification = serde_json::from_str("\"martian\"").unwrap();
        assert_eq!(c, Classification::Unknown);
    }

    #[test]
    fn every_variant_has_a_style() {
        let all = [
            Classification::EuropeanCountry,
            Classification::EuropeanAlly,
            Classification::EuropeanSceptic,
            Classification::EuropeanAdversary,
            Classification::Neutral,
            Classification::Cat,
            Classification::Dog,
            Classification::Animal,
            Classification::Human,
            Classification::Unknown,
        ];
        for c in all {
            let style = c.style();
            assert!(!style.title.is_empty());
            assert!(style.color.starts_with('#'));
        }
    }

    #[test]
    fn only_european_country_is_fully_european() {
        assert!(Classification::EuropeanCountry.is_fully_european());
        assert!(!Classification::EuropeanAlly.is_fully_european());
        assert!(!Classification::Unknown.is_fully_european());
    }
}
