//! Serializable schema documents.
//!
//! A [`SchemaDefinition`] is the on-disk / over-the-wire form of a schema.
//! It is checked and compiled into a [`Schema`](super::schema::Schema)
//! before use.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::field::FieldName;

pub const GIVEN_NAME_REQUIRED: &str = "Given name is required";
pub const FAMILY_NAME_REQUIRED: &str = "Family name is required";
pub const GENDER_REQUIRED: &str = "Gender is required";
pub const TELEPHONE_DIGITS_ONLY: &str = "Telephone number should only contain digits";

/// Digits only; `+`, spaces and parentheses are rejected.
pub const DIGITS_ONLY_PATTERN: &str = "^[0-9]*$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    Pattern,
}

/// One rule as declared in a schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RuleDefinition {
    pub rule_type: RuleKind,
    #[validate(length(min = 1, message = "rule message must not be empty"))]
    pub message: String,
    /// Regex source; only meaningful for [`RuleKind::Pattern`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "pattern must not be empty"))]
    pub pattern: Option<String>,
}

impl RuleDefinition {
    pub fn required(message: &str) -> Self {
        Self {
            rule_type: RuleKind::Required,
            message: message.to_string(),
            pattern: None,
        }
    }

    pub fn pattern(pattern: &str, message: &str) -> Self {
        Self {
            rule_type: RuleKind::Pattern,
            message: message.to_string(),
            pattern: Some(pattern.to_string()),
        }
    }
}

/// A field and its rules, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct FieldDefinition {
    pub field: FieldName,
    #[serde(default)]
    #[validate(nested)]
    pub rules: Vec<RuleDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SchemaDefinition {
    #[validate(nested)]
    pub fields: Vec<FieldDefinition>,
}

impl SchemaDefinition {
    /// The registration form's rule set.
    pub fn patient_registration() -> Self {
        Self {
            fields: vec![
                FieldDefinition {
                    field: FieldName::GivenName,
                    rules: vec![RuleDefinition::required(GIVEN_NAME_REQUIRED)],
                },
                FieldDefinition {
                    field: FieldName::MiddleName,
                    rules: vec![],
                },
                FieldDefinition {
                    field: FieldName::FamilyName,
                    rules: vec![RuleDefinition::required(FAMILY_NAME_REQUIRED)],
                },
                FieldDefinition {
                    field: FieldName::Gender,
                    rules: vec![RuleDefinition::required(GENDER_REQUIRED)],
                },
                FieldDefinition {
                    field: FieldName::TelephoneNumber,
                    rules: vec![RuleDefinition::pattern(
                        DIGITS_ONLY_PATTERN,
                        TELEPHONE_DIGITS_ONLY,
                    )],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn built_in_definition_passes_validation() {
        assert!(SchemaDefinition::patient_registration().validate().is_ok());
    }

    #[test]
    fn empty_message_fails_validation() {
        let def = SchemaDefinition {
            fields: vec![FieldDefinition {
                field: FieldName::GivenName,
                rules: vec![RuleDefinition::required("")],
            }],
        };
        assert!(def.validate().is_err());
    }

    #[test]
    fn empty_pattern_fails_validation() {
        let def = SchemaDefinition {
            fields: vec![FieldDefinition {
                field: FieldName::TelephoneNumber,
                rules: vec![RuleDefinition::pattern("", "digits")],
            }],
        };
        assert!(def.validate().is_err());
    }

    #[test]
    fn deserializes_document() {
        let def: SchemaDefinition = serde_json::from_value(json!({
            "fields": [
                {"field": "middleName"},
                {"field": "telephoneNumber", "rules": [
                    {"rule_type": "pattern", "pattern": "^[0-9]+$", "message": "digits"}
                ]}
            ]
        }))
        .unwrap();

        assert_eq!(def.fields.len(), 2);
        assert!(def.fields[0].rules.is_empty());
        assert_eq!(
            def.fields[1].rules[0],
            RuleDefinition::pattern("^[0-9]+$", "digits")
        );
    }

    #[test]
    fn required_rule_omits_pattern_when_serialized() {
        let json = serde_json::to_value(RuleDefinition::required("needed")).unwrap();
        assert_eq!(json, json!({"rule_type": "required", "message": "needed"}));
    }

    #[test]
    fn unknown_rule_type_is_rejected() {
        let result = serde_json::from_value::<RuleDefinition>(json!({
            "rule_type": "max_length", "message": "too long"
        }));
        assert!(result.is_err());
    }
}
