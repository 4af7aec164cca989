//! Form-side data model: the closed category/state enumerations, the
//! validated request input, and the fixed "try an example" presets.
//!
//! Category and state are enums rather than free strings so that an invalid
//! value is unrepresentable past the validation boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NEET reservation category. The wire form is the hyphenated label shown in
/// the form dropdown (e.g. "General-PWD").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    General,
    #[serde(rename = "OBC")]
    Obc,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "ST")]
    St,
    #[serde(rename = "EWS")]
    Ews,
    #[serde(rename = "General-PWD")]
    GeneralPwd,
    #[serde(rename = "OBC-PWD")]
    ObcPwd,
    #[serde(rename = "SC-PWD")]
    ScPwd,
    #[serde(rename = "ST-PWD")]
    StPwd,
    #[serde(rename = "EWS-PWD")]
    EwsPwd,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::General,
        Category::Obc,
        Category::Sc,
        Category::St,
        Category::Ews,
        Category::GeneralPwd,
        Category::ObcPwd,
        Category::ScPwd,
        Category::StPwd,
        Category::EwsPwd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Obc => "OBC",
            Category::Sc => "SC",
            Category::St => "ST",
            Category::Ews => "EWS",
            Category::GeneralPwd => "General-PWD",
            Category::ObcPwd => "OBC-PWD",
            Category::ScPwd => "SC-PWD",
            Category::StPwd => "ST-PWD",
            Category::EwsPwd => "EWS-PWD",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// Indian state or union territory, as listed in the form dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum IndiaState {
    AndamanAndNicobarIslands,
    AndhraPradesh,
    ArunachalPradesh,
    Assam,
    Bihar,
    Chandigarh,
    Chhattisgarh,
    DadraAndNagarHaveliAndDamanAndDiu,
    Delhi,
    Goa,
    Gujarat,
    Haryana,
    HimachalPradesh,
    JammuAndKashmir,
    Jharkhand,
    Karnataka,
    Kerala,
    Ladakh,
    Lakshadweep,
    MadhyaPradesh,
    Maharashtra,
    Manipur,
    Meghalaya,
    Mizoram,
    Nagaland,
    Odisha,
    Puducherry,
    Punjab,
    Rajasthan,
    Sikkim,
    TamilNadu,
    Telangana,
    Tripura,
    UttarPradesh,
    Uttarakhand,
    WestBengal,
}

impl IndiaState {
    pub const ALL: [IndiaState; 36] = [
        IndiaState::AndamanAndNicobarIslands,
        IndiaState::AndhraPradesh,
        IndiaState::ArunachalPradesh,
        IndiaState::Assam,
        IndiaState::Bihar,
        IndiaState::Chandigarh,
        IndiaState::Chhattisgarh,
        IndiaState::DadraAndNagarHaveliAndDamanAndDiu,
        IndiaState::Delhi,
        IndiaState::Goa,
        IndiaState::Gujarat,
        IndiaState::Haryana,
        IndiaState::HimachalPradesh,
        IndiaState::JammuAndKashmir,
        IndiaState::Jharkhand,
        IndiaState::Karnataka,
        IndiaState::Kerala,
        IndiaState::Ladakh,
        IndiaState::Lakshadweep,
        IndiaState::MadhyaPradesh,
        IndiaState::Maharashtra,
        IndiaState::Manipur,
        IndiaState::Meghalaya,
        IndiaState::Mizoram,
        IndiaState::Nagaland,
        IndiaState::Odisha,
        IndiaState::Puducherry,
        IndiaState::Punjab,
        IndiaState::Rajasthan,
        IndiaState::Sikkim,
        IndiaState::TamilNadu,
        IndiaState::Telangana,
        IndiaState::Tripura,
        IndiaState::UttarPradesh,
        IndiaState::Uttarakhand,
        IndiaState::WestBengal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndiaState::AndamanAndNicobarIslands => "Andaman and Nicobar Islands",
            IndiaState::AndhraPradesh => "Andhra Pradesh",
            IndiaState::ArunachalPradesh => "Arunachal Pradesh",
            IndiaState::Assam => "Assam",
            IndiaState::Bihar => "Bihar",
            IndiaState::Chandigarh => "Chandigarh",
            IndiaState::Chhattisgarh => "Chhattisgarh",
            IndiaState::DadraAndNagarHaveliAndDamanAndDiu => {
                "Dadra and Nagar Haveli and Daman and Diu"
            }
            IndiaState::Delhi => "Delhi",
            IndiaState::Goa => "Goa",
            IndiaState::Gujarat => "Gujarat",
            IndiaState::Haryana => "Haryana",
            IndiaState::HimachalPradesh => "Himachal Pradesh",
            IndiaState::JammuAndKashmir => "Jammu and Kashmir",
            IndiaState::Jharkhand => "Jharkhand",
            IndiaState::Karnataka => "Karnataka",
            IndiaState::Kerala => "Kerala",
            IndiaState::Ladakh => "Ladakh",
            IndiaState::Lakshadweep => "Lakshadweep",
            IndiaState::MadhyaPradesh => "Madhya Pradesh",
            IndiaState::Maharashtra => "Maharashtra",
            IndiaState::Manipur => "Manipur",
            IndiaState::Meghalaya => "Meghalaya",
            IndiaState::Mizoram => "Mizoram",
            IndiaState::Nagaland => "Nagaland",
            IndiaState::Odisha => "Odisha",
            IndiaState::Puducherry => "Puducherry",
            IndiaState::Punjab => "Punjab",
            IndiaState::Rajasthan => "Rajasthan",
            IndiaState::Sikkim => "Sikkim",
            IndiaState::TamilNadu => "Tamil Nadu",
            IndiaState::Telangana => "Telangana",
            IndiaState::Tripura => "Tripura",
            IndiaState::UttarPradesh => "Uttar Pradesh",
            IndiaState::Uttarakhand => "Uttarakhand",
            IndiaState::WestBengal => "West Bengal",
        }
    }
}

impl fmt::Display for IndiaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndiaState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndiaState::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or(())
    }
}

impl From<IndiaState> for String {
    fn from(s: IndiaState) -> String {
        s.as_str().to_string()
    }
}

impl TryFrom<String> for IndiaState {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
            .map_err(|_| format!("unknown state: {s}"))
    }
}

/// A fully validated prediction request. Only the validator constructs this,
/// so every instance satisfies the field invariants (score 0..=720, mobile
/// exactly 10 digits).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInput {
    pub score: u16,
    pub category: Category,
    pub state: IndiaState,
    pub mobile: String,
}

/// One "try an example" preset. Applying a preset overwrites score, category
/// and state in the form without submitting.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Preset {
    pub score: u16,
    pub category: Category,
    pub state: IndiaState,
}

/// The four fixed example presets shown under the form.
pub const PRESETS: [Preset; 4] = [
    Preset {
        score: 580,
        category: Category::Obc,
        state: IndiaState::UttarPradesh,
    },
    Preset {
        score: 450,
        category: Category::Sc,
        state: IndiaState::Rajasthan,
    },
    Preset {
        score: 620,
        category: Category::General,
        state: IndiaState::Maharashtra,
    },
    Preset {
        score: 350,
        category: Category::St,
        state: IndiaState::MadhyaPradesh,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for cat in Category::ALL {
            assert_eq!(cat.as_str().parse::<Category>(), Ok(cat));
        }
    }

    #[test]
    fn test_category_wire_form_is_label() {
        let json = serde_json::to_string(&Category::GeneralPwd).unwrap();
        assert_eq!(json, "\"General-PWD\"");
        let back: Category = serde_json::from_str("\"OBC\"").unwrap();
        assert_eq!(back, Category::Obc);
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!("NRI".parse::<Category>().is_err());
        assert!("obc".parse::<Category>().is_err());
    }

    #[test]
    fn test_state_list_is_complete() {
        assert_eq!(IndiaState::ALL.len(), 36);
        assert_eq!(
            IndiaState::ALL[0].as_str(),
            "Andaman and Nicobar Islands"
        );
        assert_eq!(IndiaState::ALL[35].as_str(), "West Bengal");
    }

    #[test]
    fn test_state_labels_round_trip() {
        for st in IndiaState::ALL {
            assert_eq!(st.as_str().parse::<IndiaState>(), Ok(st));
        }
    }

    #[test]
    fn test_state_serde_uses_display_label() {
        let json = serde_json::to_string(&IndiaState::UttarPradesh).unwrap();
        assert_eq!(json, "\"Uttar Pradesh\"");
        let back: IndiaState = serde_json::from_str("\"Tamil Nadu\"").unwrap();
        assert_eq!(back, IndiaState::TamilNadu);
    }

    #[test]
    fn test_unknown_state_rejected() {
        assert!("Atlantis".parse::<IndiaState>().is_err());
        let err: Result<IndiaState, _> = serde_json::from_str("\"Atlantis\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_presets_are_within_form_bounds() {
        for preset in PRESETS {
            assert!(preset.score <= 720);
        }
        assert_eq!(PRESETS.len(), 4);
        assert_eq!(PRESETS[0].state, IndiaState::UttarPradesh);
    }
}
