//! Listing record shape as scraped from the listing portal.
//!
//! Only the text-bearing fields the screening layer cares about are typed;
//! everything else is kept in a flattened map so the full record survives a
//! serialize round-trip and can be embedded verbatim into analysis prompts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One semi-structured listing record. Every group is optional; absent
/// fields are treated as "no evidence" by the screening layer, never as an
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseListing {
    #[serde(rename = "Identifiers", skip_serializing_if = "Option::is_none")]
    pub identifiers: Option<Identifiers>,
    #[serde(rename = "ListingDescription", skip_serializing_if = "Option::is_none")]
    pub description: Option<ListingDescription>,
    #[serde(rename = "KenmerkSections", skip_serializing_if = "Vec::is_empty")]
    pub feature_sections: Vec<FeatureSection>,
    #[serde(rename = "AddressDetails", skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressDetails>,
    #[serde(rename = "Labels", skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<ListingLabel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Identifiers {
    #[serde(rename = "TinyId", skip_serializing_if = "Option::is_none")]
    pub tiny_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingDescription {
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A labeled block of feature rows ("kenmerken") from the listing page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSection {
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "KenmerkenList", skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<FeaturePair>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturePair {
    #[serde(rename = "Label", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressDetails {
    #[serde(rename = "SubTitle", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "City", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Labels appear either as bare strings or as `{ "Text": ... }` objects
/// depending on the scraper version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingLabel {
    Text(String),
    Tagged {
        #[serde(rename = "Text", default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
}

impl HouseListing {
    /// Listing identifier from the scraped record, when present.
    pub fn tiny_id(&self) -> Option<&str> {
        self.identifiers
            .as_ref()
            .and_then(|ids| ids.tiny_id.as_deref())
    }

    pub fn city(&self) -> Option<&str> {
        self.address.as_ref().and_then(|addr| addr.city.as_deref())
    }

    /// Flatten every present text-bearing field into one lowercase blob for
    /// pattern scanning. Field order is fixed; absent fields are skipped
    /// silently and never contribute an empty match target.
    pub fn screening_text(&self) -> String {
        let mut texts: Vec<&str> = Vec::new();

        if let Some(description) = &self.description {
            if let Some(body) = &description.description {
                texts.push(body);
            }
            if let Some(title) = &description.title {
                texts.push(title);
            }
        }

        for section in &self.feature_sections {
            if let Some(title) = &section.title {
                texts.push(title);
            }
            for feature in &section.features {
                if let Some(value) = &feature.value {
                    texts.push(value);
                }
                if let Some(label) = &feature.label {
                    texts.push(label);
                }
            }
        }

        if let Some(address) = &self.address {
            if let Some(subtitle) = &address.subtitle {
                texts.push(subtitle);
            }
        }

        for label in &self.labels {
            match label {
                ListingLabel::Text(text) => texts.push(text),
                ListingLabel::Tagged { text: Some(text) } => texts.push(text),
                ListingLabel::Tagged { text: None } => {}
            }
        }

        texts.join(" ").to_lowercase()
    }

    /// Convenience constructor used heavily in tests and demos.
    pub fn from_description(description: &str) -> Self {
        Self {
            description: Some(ListingDescription {
                title: None,
                description: Some(description.to_string()),
            }),
            ..Self::default()
        }
    }
}
