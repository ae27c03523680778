use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{CandidateForm, PredictionResult};
use super::service::SalaryPredictor;
use super::validation::ValidationError;

/// Failure that aborts a whole batch. Row-level validation problems never do.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read candidate batch: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid candidate CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("candidate batch exceeds {limit} rows")]
    TooManyRows { limit: usize },
}

/// Outcome of one CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRow {
    pub line: u64,
    pub job_title: String,
    pub outcome: Result<PredictionResult, ValidationError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub rows: Vec<BatchRow>,
}

impl BatchReport {
    pub fn summary(&self) -> BatchSummary {
        let accepted = self.rows.iter().filter(|row| row.outcome.is_ok()).count();
        BatchSummary {
            total: self.rows.len(),
            accepted,
            rejected: self.rows.len() - accepted,
        }
    }
}

/// Prices every candidate in a CSV export with `Age`, `Experience`,
/// `Job Field` and `Job Title` columns.
pub struct BatchPredictor<'a> {
    predictor: &'a SalaryPredictor,
    max_rows: Option<usize>,
}

impl<'a> BatchPredictor<'a> {
    pub fn new(predictor: &'a SalaryPredictor) -> Self {
        Self {
            predictor,
            max_rows: None,
        }
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    pub fn price_file<P: AsRef<Path>>(&self, path: P) -> Result<BatchReport, BatchError> {
        let file = std::fs::File::open(path)?;
        self.price_csv(file)
    }

    pub fn price_csv<R: Read>(&self, reader: R) -> Result<BatchReport, BatchError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut rows = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            if let Some(limit) = self.max_rows {
                if rows.len() >= limit {
                    return Err(BatchError::TooManyRows { limit });
                }
            }

            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let row: CandidateRow = record.deserialize(Some(&headers))?;
            let form = row.into_form();
            let outcome = self
                .predictor
                .predict(&form)
                .map(|outcome| outcome.result);

            rows.push(BatchRow {
                line,
                job_title: form.job_title.trim().to_string(),
                outcome,
            });
        }

        let report = BatchReport { rows };
        let summary = report.summary();
        info!(
            total = summary.total,
            accepted = summary.accepted,
            rejected = summary.rejected,
            "candidate batch priced"
        );
        Ok(report)
    }
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    #[serde(rename = "Age", default)]
    age: String,
    #[serde(rename = "Experience", default)]
    experience: String,
    #[serde(rename = "Job Field", default)]
    job_field: String,
    #[serde(rename = "Job Title", default)]
    job_title: String,
}

impl CandidateRow {
    fn into_form(self) -> CandidateForm {
        CandidateForm::new(self.age, self.experience, self.job_field, self.job_title)
    }
}
