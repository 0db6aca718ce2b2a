//! Compiled field schemas.

use std::sync::LazyLock;

use regex::Regex;
use validator::Validate;

use super::definition::{FieldDefinition, RuleDefinition, RuleKind, SchemaDefinition};
use super::rules::{FieldOutcome, Rule};
use crate::error::CoreError;
use crate::field::FieldName;

static PATIENT_REGISTRATION: LazyLock<Schema> = LazyLock::new(|| {
    Schema::from_definition(&SchemaDefinition::patient_registration())
        .expect("built-in registration schema is well formed")
});

/// The registration form's schema, compiled once per process.
pub fn patient_registration_schema() -> &'static Schema {
    &PATIENT_REGISTRATION
}

/// An ordered set of fields, each with rules in priority order.
///
/// Immutable once built. Patterns are compiled at construction, so
/// evaluation never fails.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<(FieldName, Vec<Rule>)>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Compile a schema document.
    ///
    /// Fails if the document has empty messages or patterns, a pattern rule
    /// without a pattern (or a required rule with one), a repeated field, or
    /// a regex that does not compile.
    pub fn from_definition(definition: &SchemaDefinition) -> Result<Self, CoreError> {
        definition
            .validate()
            .map_err(|e| CoreError::InvalidSchema(e.to_string()))?;

        let mut builder = Schema::builder();
        for field_def in &definition.fields {
            let rules = field_def
                .rules
                .iter()
                .map(|rule_def| compile_rule(field_def.field, rule_def))
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.field(field_def.field, rules);
        }
        builder.build()
    }

    /// Parse and compile a JSON schema document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let definition: SchemaDefinition =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidSchema(e.to_string()))?;
        Self::from_definition(&definition)
    }

    /// Export back to document form.
    pub fn to_definition(&self) -> SchemaDefinition {
        SchemaDefinition {
            fields: self
                .fields
                .iter()
                .map(|(field, rules)| FieldDefinition {
                    field: *field,
                    rules: rules.iter().map(rule_definition).collect(),
                })
                .collect(),
        }
    }

    /// Declared fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.fields.iter().map(|(field, _)| *field)
    }

    pub fn declares(&self, field: FieldName) -> bool {
        self.fields.iter().any(|(f, _)| *f == field)
    }

    /// Rules for `field`; empty if the field is undeclared or unconstrained.
    pub fn rules_for(&self, field: FieldName) -> &[Rule] {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Evaluate one field's rules in order; the first failure wins.
    pub fn check_field(&self, field: FieldName, value: Option<&str>) -> FieldOutcome {
        self.rules_for(field)
            .iter()
            .map(|rule| rule.check(value))
            .find(|outcome| !outcome.is_valid())
            .unwrap_or(FieldOutcome::Valid)
    }
}

/// Incremental [`Schema`] construction.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(FieldName, Vec<Rule>)>,
}

impl SchemaBuilder {
    pub fn field(mut self, field: FieldName, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((field, rules.into_iter().collect()));
        self
    }

    pub fn build(self) -> Result<Schema, CoreError> {
        for (i, (field, _)) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|(f, _)| f == field) {
                return Err(CoreError::DuplicateField(*field));
            }
        }
        Ok(Schema {
            fields: self.fields,
        })
    }
}

fn compile_rule(field: FieldName, def: &RuleDefinition) -> Result<Rule, CoreError> {
    match (def.rule_type, def.pattern.as_deref()) {
        (RuleKind::Required, None) => Ok(Rule::required(def.message.as_str())),
        (RuleKind::Required, Some(_)) => Err(CoreError::InvalidSchema(format!(
            "{field}: required rules take no pattern"
        ))),
        (RuleKind::Pattern, None) => Err(CoreError::InvalidSchema(format!(
            "{field}: pattern rules need a pattern"
        ))),
        (RuleKind::Pattern, Some(pattern)) => {
            let regex = Regex::new(pattern).map_err(|e| CoreError::InvalidPattern {
                field,
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
            Ok(Rule::pattern(regex, def.message.as_str()))
        }
    }
}

fn rule_definition(rule: &Rule) -> RuleDefinition {
    match rule {
        Rule::Required { message } => RuleDefinition::required(message),
        Rule::Pattern { regex, message } => RuleDefinition::pattern(regex.as_str(), message),
    }
}
