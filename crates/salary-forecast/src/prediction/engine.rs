use serde::{Deserialize, Serialize};

use super::catalog::{BaseRateCatalog, BaseRateLookup};
use super::domain::{CandidateProfile, MarketDemand, PredictionResult};

/// Constants of the salary formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Percentage added to the average per year of experience.
    pub experience_step_percent: u32,
    /// Candidates strictly older than this receive the senior multiplier.
    pub senior_age_threshold: u32,
    pub senior_age_multiplier: f64,
    /// Half-width of the salary band relative to the average.
    pub variance_ratio: f64,
    /// Currency units per computation unit.
    pub currency_scale: f64,
    pub high_demand_after_years: u32,
    pub moderate_demand_after_years: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            experience_step_percent: 15,
            senior_age_threshold: 30,
            senior_age_multiplier: 1.1,
            variance_ratio: 0.25,
            currency_scale: 100_000.0,
            high_demand_after_years: 3,
            moderate_demand_after_years: 1,
        }
    }
}

/// Stateless pricer applying the forecast formula to validated profiles.
#[derive(Debug, Clone)]
pub struct PredictionEngine {
    config: ForecastConfig,
    catalog: BaseRateCatalog,
}

impl PredictionEngine {
    pub fn new(config: ForecastConfig, catalog: BaseRateCatalog) -> Self {
        Self { config, catalog }
    }

    pub fn standard() -> Self {
        Self::new(ForecastConfig::default(), BaseRateCatalog::standard())
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    pub fn catalog(&self) -> &BaseRateCatalog {
        &self.catalog
    }

    pub fn resolve_field(&self, job_field: &str) -> BaseRateLookup {
        self.catalog.lookup(job_field)
    }

    pub fn predict(&self, profile: &CandidateProfile) -> PredictionResult {
        let base_rate = self.resolve_field(&profile.job_field).base_rate;
        let years = f64::from(profile.experience_years);
        let step = f64::from(self.config.experience_step_percent);
        let step_ratio = step / 100.0;

        let experience_multiplier = 1.0 + years * step_ratio;
        let age_multiplier = self.age_multiplier(profile.age);

        let avg_units = base_rate * experience_multiplier * age_multiplier;
        let variance = avg_units * self.config.variance_ratio;

        PredictionResult {
            min_salary: self.to_currency(avg_units - variance),
            max_salary: self.to_currency(avg_units + variance),
            avg_salary: self.to_currency(avg_units),
            market_demand: self.market_demand(profile.experience_years),
            experience_bonus_percent: years * step,
        }
    }

    pub fn age_multiplier(&self, age: u32) -> f64 {
        if age > self.config.senior_age_threshold {
            self.config.senior_age_multiplier
        } else {
            1.0
        }
    }

    pub fn market_demand(&self, experience_years: u32) -> MarketDemand {
        if experience_years > self.config.high_demand_after_years {
            MarketDemand::High
        } else if experience_years > self.config.moderate_demand_after_years {
            MarketDemand::Moderate
        } else {
            MarketDemand::Low
        }
    }

    // Negative or non-finite amounts collapse to zero.
    fn to_currency(&self, units: f64) -> u64 {
        let amount = (units * self.config.currency_scale).round();
        if amount.is_finite() && amount > 0.0 {
            amount as u64
        } else {
            0
        }
    }
}

impl Default for PredictionEngine {
    fn default() -> Self {
        Self::standard()
    }
}
