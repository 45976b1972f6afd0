//! The closed set of Kenyan counties a user or listing may be located in.

use std::fmt;

use serde::{Deserialize, Serialize};

use delamere_core::AppError;

/// All 47 counties, spelled as the marketplace accepts them.
pub const KENYAN_COUNTIES: [&str; 47] = [
    "Mombasa",
    "Kwale",
    "Kilifi",
    "Tana River",
    "Lamu",
    "Taita/Taveta",
    "Garissa",
    "Wajir",
    "Mandera",
    "Marsabit",
    "Isiolo",
    "Meru",
    "Tharaka-Nithi",
    "Embu",
    "Kitui",
    "Machakos",
    "Makueni",
    "Nyandarua",
    "Nyeri",
    "Kirinyaga",
    "Murang'a",
    "Kiambu",
    "Turkana",
    "West Pokot",
    "Samburu",
    "Trans Nzoia",
    "Uasin Gishu",
    "Elgeyo/Marakwet",
    "Nandi",
    "Baringo",
    "Laikipia",
    "Nakuru",
    "Narok",
    "Kajiado",
    "Kericho",
    "Bomet",
    "Kakamega",
    "Vihiga",
    "Bungoma",
    "Busia",
    "Siaya",
    "Kisumu",
    "Homa Bay",
    "Migori",
    "Kisii",
    "Nyamira",
    "Nairobi",
];

/// A county name known to be a member of [`KENYAN_COUNTIES`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "String", into = "String")]
#[sqlx(transparent)]
pub struct County(String);

impl County {
    /// Parses a county name. Matching is exact.
    pub fn parse(name: &str) -> Result<Self, AppError> {
        if is_known(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::validation(format!("Unknown county: '{name}'")))
        }
    }

    /// Returns the county name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns whether `name` is one of the 47 counties.
pub fn is_known(name: &str) -> bool {
    KENYAN_COUNTIES.contains(&name)
}

impl TryFrom<String> for County {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_known(&value) {
            Ok(Self(value))
        } else {
            Err(AppError::validation(format!("Unknown county: '{value}'")))
        }
    }
}

impl From<County> for String {
    fn from(county: County) -> Self {
        county.0
    }
}

impl fmt::Display for County {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
