use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Raw candidate details exactly as a form submits them.
///
/// Numeric fields stay textual until validation so malformed values can be
/// reported instead of silently coerced. JSON numbers are accepted and kept
/// as their decimal text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateForm {
    #[serde(default, deserialize_with = "text_or_number")]
    pub age: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub experience_years: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub job_field: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub job_title: String,
}

impl CandidateForm {
    pub fn new(
        age: impl Into<String>,
        experience_years: impl Into<String>,
        job_field: impl Into<String>,
        job_title: impl Into<String>,
    ) -> Self {
        Self {
            age: age.into(),
            experience_years: experience_years.into(),
            job_field: job_field.into(),
            job_title: job_title.into(),
        }
    }

    pub(crate) fn value(&self, field: CandidateField) -> &str {
        match field {
            CandidateField::Age => &self.age,
            CandidateField::ExperienceYears => &self.experience_years,
            CandidateField::JobField => &self.job_field,
            CandidateField::JobTitle => &self.job_title,
        }
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Raw::Text(text)) => text,
        Some(Raw::Integer(value)) => value.to_string(),
        Some(Raw::Float(value)) => value.to_string(),
        None => String::new(),
    })
}

/// The four inputs a prediction requires, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CandidateField {
    Age,
    ExperienceYears,
    JobField,
    JobTitle,
}

impl CandidateField {
    pub const ALL: [CandidateField; 4] = [
        CandidateField::Age,
        CandidateField::ExperienceYears,
        CandidateField::JobField,
        CandidateField::JobTitle,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CandidateField::Age => "Age",
            CandidateField::ExperienceYears => "Experience (Years)",
            CandidateField::JobField => "Job Field",
            CandidateField::JobTitle => "Specific Job Title",
        }
    }

    /// Key used for this field on the wire.
    pub const fn key(self) -> &'static str {
        match self {
            CandidateField::Age => "age",
            CandidateField::ExperienceYears => "experienceYears",
            CandidateField::JobField => "jobField",
            CandidateField::JobTitle => "jobTitle",
        }
    }
}

impl fmt::Display for CandidateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Candidate details that passed validation and can be priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub age: u32,
    pub experience_years: u32,
    pub job_field: String,
    pub job_title: String,
}

/// Coarse demand signal derived from years of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketDemand {
    High,
    Moderate,
    Low,
}

impl MarketDemand {
    pub const fn label(self) -> &'static str {
        match self {
            MarketDemand::High => "High",
            MarketDemand::Moderate => "Moderate",
            MarketDemand::Low => "Low",
        }
    }
}

impl fmt::Display for MarketDemand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Salary range and indicators for one candidate. Amounts are whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub min_salary: u64,
    pub max_salary: u64,
    pub avg_salary: u64,
    pub market_demand: MarketDemand,
    pub experience_bonus_percent: f64,
}
