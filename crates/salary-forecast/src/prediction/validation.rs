use std::num::IntErrorKind;

use super::domain::{CandidateField, CandidateForm, CandidateProfile};

pub const MINIMUM_AGE: i64 = 18;

/// Reasons a candidate form cannot be priced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields to get a salary prediction (missing: {})", join_labels(.0))]
    MissingField(Vec<CandidateField>),
    #[error("Age must be 18 or above (got {age})")]
    InvalidAge { age: i64 },
    #[error("{field} must be a whole number (got '{raw}')")]
    MalformedNumber { field: CandidateField, raw: String },
    #[error("{field} is out of range (got '{raw}')")]
    OutOfRange { field: CandidateField, raw: String },
}

impl ValidationError {
    pub const fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => "missing_field",
            ValidationError::InvalidAge { .. } => "invalid_age",
            ValidationError::MalformedNumber { .. } => "malformed_number",
            ValidationError::OutOfRange { .. } => "out_of_range",
        }
    }

    /// Fields the caller should highlight.
    pub fn fields(&self) -> Vec<CandidateField> {
        match self {
            ValidationError::MissingField(fields) => fields.clone(),
            ValidationError::InvalidAge { .. } => vec![CandidateField::Age],
            ValidationError::MalformedNumber { field, .. }
            | ValidationError::OutOfRange { field, .. } => vec![*field],
        }
    }
}

fn join_labels(fields: &[CandidateField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn validate(form: &CandidateForm) -> Result<CandidateProfile, ValidationError> {
    let missing: Vec<CandidateField> = CandidateField::ALL
        .into_iter()
        .filter(|field| form.value(*field).trim().is_empty())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingField(missing));
    }

    let age = parse_whole(form, CandidateField::Age)?;
    if age < MINIMUM_AGE {
        return Err(ValidationError::InvalidAge { age });
    }
    let age = u32::try_from(age).map_err(|_| out_of_range(form, CandidateField::Age))?;

    let experience_years = parse_whole(form, CandidateField::ExperienceYears)?;
    if experience_years < 0 {
        return Err(malformed(form, CandidateField::ExperienceYears));
    }
    let experience_years = u32::try_from(experience_years)
        .map_err(|_| out_of_range(form, CandidateField::ExperienceYears))?;

    Ok(CandidateProfile {
        age,
        experience_years,
        job_field: form.job_field.trim().to_string(),
        job_title: form.job_title.trim().to_string(),
    })
}

fn parse_whole(form: &CandidateForm, field: CandidateField) -> Result<i64, ValidationError> {
    form.value(field)
        .trim()
        .parse::<i64>()
        .map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(form, field),
            _ => malformed(form, field),
        })
}

fn malformed(form: &CandidateForm, field: CandidateField) -> ValidationError {
    ValidationError::MalformedNumber {
        field,
        raw: form.value(field).trim().to_string(),
    }
}

fn out_of_range(form: &CandidateForm, field: CandidateField) -> ValidationError {
    ValidationError::OutOfRange {
        field,
        raw: form.value(field).trim().to_string(),
    }
}
