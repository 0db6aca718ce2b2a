//! Validation rule and result types.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// A compiled rule: a predicate on a field value plus its failure message.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Fails when the value is absent or empty.
    Required { message: String },
    /// Fails when a non-empty value does not match `regex`.
    Pattern { regex: Regex, message: String },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Rule::Required {
            message: message.into(),
        }
    }

    pub fn pattern(regex: Regex, message: impl Into<String>) -> Self {
        Rule::Pattern {
            regex,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message } | Rule::Pattern { message, .. } => message,
        }
    }

    /// Evaluate this rule against a field value. `None` means the field is
    /// absent from the record.
    pub fn check(&self, value: Option<&str>) -> FieldOutcome {
        let passes = match (self, value) {
            (Rule::Required { .. }, None) => false,
            (Rule::Required { .. }, Some(v)) => !v.is_empty(),
            // Pattern rules never enforce presence.
            (Rule::Pattern { .. }, None) => true,
            (Rule::Pattern { .. }, Some("")) => true,
            (Rule::Pattern { regex, .. }, Some(v)) => regex.is_match(v),
        };
        if passes {
            FieldOutcome::Valid
        } else {
            FieldOutcome::Invalid(self.message().to_string())
        }
    }
}

/// Outcome of evaluating one field's rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Valid,
    Invalid(String),
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldOutcome::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldOutcome::Valid => None,
            FieldOutcome::Invalid(message) => Some(message.as_str()),
        }
    }

    pub fn into_message(self) -> Option<String> {
        match self {
            FieldOutcome::Valid => None,
            FieldOutcome::Invalid(message) => Some(message),
        }
    }
}

/// Per-field error mapping for one evaluated record.
///
/// Holds an entry for every field the evaluator looked at; `None` means the
/// field passed. Serializes as `{"fieldName": "message" | null, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorResult {
    errors: BTreeMap<FieldName, Option<String>>,
}

impl ErrorResult {
    pub(crate) fn insert(&mut self, field: FieldName, outcome: FieldOutcome) {
        self.errors.insert(field, outcome.into_message());
    }

    /// `None` if the field was not evaluated, otherwise its error (if any).
    pub fn get(&self, field: FieldName) -> Option<Option<&str>> {
        self.errors.get(&field).map(Option::as_deref)
    }

    /// The field's error message, if it was evaluated and failed.
    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.get(field).flatten()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.values().all(Option::is_none)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.errors
            .iter()
            .filter(|(_, error)| error.is_some())
            .map(|(field, _)| *field)
    }

    /// Iterate every evaluated field in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, Option<&str>)> {
        self.errors
            .iter()
            .map(|(field, error)| (*field, error.as_deref()))
    }

    /// `(error label, message)` pairs for each failing field, ready for the
    /// presentation layer.
    pub fn labelled_messages(&self) -> impl Iterator<Item = (String, &str)> {
        self.errors
            .iter()
            .filter_map(|(field, error)| Some((field.error_label(), error.as_deref()?)))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl FromIterator<(FieldName, FieldOutcome)> for ErrorResult {
    fn from_iter<I: IntoIterator<Item = (FieldName, FieldOutcome)>>(iter: I) -> Self {
        let mut result = ErrorResult::default();
        for (field, outcome) in iter {
            result.insert(field, outcome);
        }
        result
    }
}
