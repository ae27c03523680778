//! Salary prediction: candidate validation, base rate catalog, pricing
//! formula, CSV batch intake, and the HTTP surface over them.

pub mod batch;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use batch::{BatchError, BatchPredictor, BatchReport, BatchRow, BatchSummary};
pub use catalog::{BaseRateCatalog, BaseRateLookup, JobField};
pub use domain::{CandidateField, CandidateForm, CandidateProfile, MarketDemand, PredictionResult};
pub use engine::{ForecastConfig, PredictionEngine};
pub use router::prediction_router;
pub use service::{PredictionOutcome, SalaryPredictor};
pub use validation::{validate, ValidationError, MINIMUM_AGE};
