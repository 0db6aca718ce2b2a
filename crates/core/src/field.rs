//! Registration form field identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A named, independently validated input on the registration form.
///
/// Variants are declared in form order; `Ord` follows that order so
/// results keyed by field iterate the way the form reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    GivenName,
    MiddleName,
    FamilyName,
    Gender,
    TelephoneNumber,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::GivenName,
        FieldName::MiddleName,
        FieldName::FamilyName,
        FieldName::Gender,
        FieldName::TelephoneNumber,
    ];

    /// Wire name, as used in candidate records and error mappings.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::GivenName => "givenName",
            FieldName::MiddleName => "middleName",
            FieldName::FamilyName => "familyName",
            FieldName::Gender => "gender",
            FieldName::TelephoneNumber => "telephoneNumber",
        }
    }

    /// Accessibility label the presentation layer puts on this field's
    /// error text, e.g. `"givenNameError"`.
    pub fn error_label(self) -> String {
        format!("{}Error", self.as_str())
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// Options offered by the gender selection input.
///
/// The schema only requires a non-empty gender; restricting input to
/// these codes is the selection widget's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
    Unknown,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Gender::Male, Gender::Female, Gender::Other, Gender::Unknown];

    /// Value submitted for this option.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "O",
            Gender::Unknown => "U",
        }
    }

    /// Text shown for this option.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::Unknown => "Unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Gender> {
        Gender::ALL.into_iter().find(|g| g.code() == code)
    }
}
