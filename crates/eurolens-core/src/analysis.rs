//! Server-authoritative analysis result model.
//!
//! Field names match the service's snake_case wire keys one-to-one, so the
//! serde derive is the whole translation table. The only exceptions are the
//! camelCase classification values (handled in [`crate::classification`])
//! and locally generated identifiers, which never touch the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classification::Classification;

/// The structured output of one image or text analysis call.
///
/// Immutable once received. `classification` is always present; every other
/// field is best-effort and may be absent depending on what the model could
/// identify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Server-assigned identifier; absent for some flows.
    #[serde(default)]
    pub id: Option<i64>,
    /// Free-text model rationale, internal/debug only.
    #[serde(default)]
    pub thinking: Option<String>,
    #[serde(default)]
    pub identified_product_name: Option<String>,
    #[serde(default)]
    pub identified_company: Option<String>,
    /// Country code of the identified company's headquarters.
    #[serde(default)]
    pub identified_headquarters: Option<String>,
    #[serde(default)]
    pub identification_rationale: Option<String>,
    #[serde(default)]
    pub raw_country: Option<String>,
    pub classification: Classification,
    #[serde(default)]
    pub potential_alternative_thinking: Option<String>,
    #[serde(default)]
    pub potential_alternative: Option<String>,
    /// Only meaningful when `classification` is not the fully-European case.
    #[serde(default)]
    pub potential_alternatives: Option<Vec<EuropeanAlternative>>,
}

impl AnalysisResult {
    /// The alternatives worth presenting: empty when the verdict is already
    /// fully European, otherwise whatever the server suggested.
    #[must_use]
    pub fn presentable_alternatives(&self) -> &[EuropeanAlternative] {
        if self.classification.is_fully_european() {
            return &[];
        }
        self.potential_alternatives.as_deref().unwrap_or(&[])
    }
}

fn fresh_alternative_id() -> Uuid {
    Uuid::new_v4()
}

/// A European product suggested as a replacement for the identified one.
///
/// `id` is generated locally when the result is decoded or reloaded; it is
/// stable within one result and exists purely for list identity. It is not
/// persisted and must not be used to deduplicate against server data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EuropeanAlternative {
    #[serde(skip_serializing, default = "fresh_alternative_id")]
    pub id: Uuid,
    pub product_name: String,
    pub company: String,
    pub description: String,
    /// Country code of the alternative's company, when known.
    #[serde(default)]
    pub country: Option<String>,
}

// Equality is structural over the server fields; the locally generated id
// is excluded.
impl PartialEq for EuropeanAlternative {
    fn eq(&self, other: &Self) -> bool {
        self.product_name == other.product_name
            && self.company == other.company
            && self.description == other.description
            && self.country == other.country
    }
}

impl Eq for EuropeanAlternative {}
