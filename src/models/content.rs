//! Content copy for the generated page sections.

use serde::{Deserialize, Serialize};

/// A single benefit card: short title plus a one-line description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    /// Card title (e.g. "Fast Performance").
    pub title: String,
    /// Supporting description shown under the title.
    pub description: String,
}

impl Benefit {
    /// Creates a benefit from title and description.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Contact details rendered into the contact section.
///
/// All fields are optional; absent values fall back to fixed placeholder
/// strings at composition time. There is no email field: the contact
/// pattern always renders a fixed placeholder address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactInfo {
    /// Phone number shown in the contact section.
    #[serde(default)]
    pub phone: Option<String>,
    /// WhatsApp number (stored with the project; not rendered).
    #[serde(default)]
    pub whatsapp: Option<String>,
    /// Street address shown in the contact section.
    #[serde(default)]
    pub address: Option<String>,
}

/// User-authored copy for the generated page.
///
/// Every field is optional; the pattern composer substitutes its defaults
/// for anything missing, so an empty `ContentConfig` still yields a
/// complete page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContentConfig {
    /// Hero headline.
    #[serde(default)]
    pub headline: Option<String>,
    /// Benefit cards; only the first three are rendered.
    #[serde(default)]
    pub benefits: Vec<Benefit>,
    /// Call-to-action button text.
    #[serde(default)]
    pub cta: Option<String>,
    /// Contact details.
    #[serde(default)]
    pub contact: ContactInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_deserializes() {
        let content: ContentConfig = serde_json::from_str("{}").unwrap();
        assert!(content.headline.is_none());
        assert!(content.benefits.is_empty());
        assert!(content.cta.is_none());
        assert!(content.contact.phone.is_none());
    }

    #[test]
    fn test_full_content_roundtrip() {
        let content = ContentConfig {
            headline: Some("Build faster".to_string()),
            benefits: vec![Benefit::new("Quick", "Ships in minutes")],
            cta: Some("Start now".to_string()),
            contact: ContactInfo {
                phone: Some("+49 30 1234567".to_string()),
                whatsapp: None,
                address: Some("Hauptstr. 1, Berlin".to_string()),
            },
        };
        let json = serde_json::to_string(&content).unwrap();
        let parsed: ContentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, content);
    }
}
