use serde::{Deserialize, Serialize};

/// Gender codes as stored in user records.
///
/// The wire value is the single-letter code; `label` is what tables and
/// forms display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
    #[serde(rename = "Z")]
    Undisclosed,
}

impl Gender {
    pub const ALL: [Self; 4] = [Self::Male, Self::Female, Self::Other, Self::Undisclosed];

    /// Parse a stored code. Unknown codes map to `None`; cells render the
    /// raw code in that case rather than guessing.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            "O" => Some(Self::Other),
            "Z" => Some(Self::Undisclosed),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "O",
            Self::Undisclosed => "Z",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::Undisclosed => "I prefer not to say",
        }
    }

    /// Display label for a stored code, falling back to the code itself
    /// when it is not one of M/F/O/Z.
    pub fn display(code: &str) -> String {
        match Self::from_code(code) {
            Some(gender) => gender.label().to_owned(),
            None => code.to_owned(),
        }
    }
}
