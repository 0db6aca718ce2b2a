//! Record evaluator -- pure logic, no I/O.

use super::rules::ErrorResult;
use super::schema::Schema;
use crate::record::CandidateRecord;

/// Evaluate every field present in `record`.
///
/// Each field maps to its first failing rule's message, or `None`. Fields
/// the schema does not constrain always pass. Fields missing from the
/// record are not reported.
pub fn validate(schema: &Schema, record: &CandidateRecord) -> ErrorResult {
    record
        .iter()
        .map(|(field, value)| (field, schema.check_field(field, Some(value))))
        .collect()
}

/// Evaluate every field the schema declares plus any extra record fields.
///
/// Declared fields missing from the record are evaluated as absent, so
/// required rules fail for them.
pub fn validate_submission(schema: &Schema, record: &CandidateRecord) -> ErrorResult {
    let mut result = validate(schema, record);
    for field in schema.fields() {
        if !record.contains(field) {
            result.insert(field, schema.check_field(field, None));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldName;
    use crate::validation::rules::Rule;
    use crate::validation::schema::patient_registration_schema;

    fn name_only_schema() -> Schema {
        Schema::builder()
            .field(FieldName::GivenName, [Rule::required("given")])
            .build()
            .unwrap()
    }

    #[test]
    fn only_present_fields_are_reported() {
        let record = CandidateRecord::new().with(FieldName::Gender, "");
        let result = validate(patient_registration_schema(), &record);
        assert_eq!(result.len(), 1);
        assert_eq!(result.error(FieldName::Gender), Some("Gender is required"));
        assert_eq!(result.get(FieldName::GivenName), None);
    }

    #[test]
    fn unconstrained_fields_map_to_none() {
        let record = CandidateRecord::new()
            .with(FieldName::GivenName, "Aaron")
            .with(FieldName::FamilyName, "");
        let result = validate(&name_only_schema(), &record);
        assert_eq!(result.get(FieldName::GivenName), Some(None));
        assert_eq!(result.get(FieldName::FamilyName), Some(None));
        assert!(result.is_valid());
    }

    #[test]
    fn empty_record_is_valid() {
        let result = validate(patient_registration_schema(), &CandidateRecord::new());
        assert!(result.is_empty());
        assert!(result.is_valid());
    }

    #[test]
    fn submission_reports_missing_required_fields() {
        let record = CandidateRecord::new().with(FieldName::GivenName, "Aaron");
        let result = validate_submission(patient_registration_schema(), &record);

        assert_eq!(result.len(), FieldName::ALL.len());
        assert_eq!(result.error(FieldName::GivenName), None);
        assert_eq!(
            result.error(FieldName::FamilyName),
            Some("Family name is required")
        );
        assert_eq!(result.error(FieldName::Gender), Some("Gender is required"));
        assert_eq!(result.get(FieldName::MiddleName), Some(None));
        assert_eq!(result.get(FieldName::TelephoneNumber), Some(None));
    }

    #[test]
    fn submission_keeps_undeclared_record_fields() {
        let record = CandidateRecord::new()
            .with(FieldName::GivenName, "Aaron")
            .with(FieldName::TelephoneNumber, "+1");
        let result = validate_submission(&name_only_schema(), &record);
        assert_eq!(result.len(), 2);
        assert_eq!(result.get(FieldName::TelephoneNumber), Some(None));
    }

    #[test]
    fn submission_of_complete_valid_record() {
        let record = CandidateRecord::new()
            .with(FieldName::GivenName, "Aaron")
            .with(FieldName::MiddleName, "A")
            .with(FieldName::FamilyName, "Aaronson")
            .with(FieldName::Gender, "M")
            .with(FieldName::TelephoneNumber, "0800001066");
        assert!(validate_submission(patient_registration_schema(), &record).is_valid());
    }

    #[test]
    fn validation_does_not_mutate_record() {
        let record = CandidateRecord::new().with(FieldName::GivenName, "");
        let before = record.clone();
        let _ = validate(patient_registration_schema(), &record);
        assert_eq!(record, before);
    }
}
