#![allow(dead_code)]

//! The college record returned by the inference service.

use serde::{Deserialize, Serialize};

/// Sentinel the inference service returns in `logoUrl` when no publicly
/// accessible logo exists for a college.
pub const NO_LOGO: &str = "NO_LOGO";

/// One recommended college, exactly as decoded from the inference reply.
///
/// All fields except `website` are required on the wire; `website` defaults
/// to the empty string, which the result surface treats as "not clickable".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub name: String,
    pub city: String,
    pub cutoff_range: String,
    pub description: String,
    pub logo_url: String,
    #[serde(default)]
    pub website: String,
}

impl College {
    /// True when `logoUrl` carries a real URL rather than the sentinel.
    pub fn has_logo(&self) -> bool {
        !self.logo_url.is_empty() && self.logo_url != NO_LOGO
    }

    /// A record is rendered as a link only when a website is known.
    pub fn is_clickable(&self) -> bool {
        !self.website.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_website_defaults_to_empty() {
        let json = r#"{
            "name": "Sample Ayurvedic College",
            "city": "Lucknow",
            "cutoffRange": "350-420",
            "description": "Government college with an attached hospital.",
            "logoUrl": "NO_LOGO"
        }"#;
        let college: College = serde_json::from_str(json).unwrap();
        assert_eq!(college.website, "");
        assert!(!college.is_clickable());
    }

    #[test]
    fn test_no_logo_sentinel() {
        let with_logo = College {
            name: "A".into(),
            city: "B".into(),
            cutoff_range: "100-200".into(),
            description: "C".into(),
            logo_url: "https://example.com/logo.png".into(),
            website: "https://example.com".into(),
        };
        assert!(with_logo.has_logo());
        assert!(with_logo.is_clickable());

        let without = College {
            logo_url: NO_LOGO.into(),
            ..with_logo
        };
        assert!(!without.has_logo());
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let college = College {
            name: "A".into(),
            city: "B".into(),
            cutoff_range: "100-200".into(),
            description: "C".into(),
            logo_url: NO_LOGO.into(),
            website: String::new(),
        };
        let value = serde_json::to_value(&college).unwrap();
        assert!(value.get("cutoffRange").is_some());
        assert!(value.get("logoUrl").is_some());
        assert!(value.get("cutoff_range").is_none());
    }
}
