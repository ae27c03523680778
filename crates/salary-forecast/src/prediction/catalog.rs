use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Job fields with a known base rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JobField {
    InformationTechnology,
    MechanicalEngineering,
    FinanceAndBanking,
    Healthcare,
    MarketingAndSales,
    HumanResources,
    DataScience,
    Cybersecurity,
}

impl JobField {
    pub const ALL: [JobField; 8] = [
        JobField::InformationTechnology,
        JobField::MechanicalEngineering,
        JobField::FinanceAndBanking,
        JobField::Healthcare,
        JobField::MarketingAndSales,
        JobField::HumanResources,
        JobField::DataScience,
        JobField::Cybersecurity,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            JobField::InformationTechnology => "Information Technology",
            JobField::MechanicalEngineering => "Mechanical Engineering",
            JobField::FinanceAndBanking => "Finance & Banking",
            JobField::Healthcare => "Healthcare",
            JobField::MarketingAndSales => "Marketing & Sales",
            JobField::HumanResources => "Human Resources",
            JobField::DataScience => "Data Science",
            JobField::Cybersecurity => "Cybersecurity",
        }
    }

    /// Exact label match after trimming surrounding whitespace.
    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL.into_iter().find(|field| field.label() == trimmed)
    }

    fn standard_rate(self) -> f64 {
        match self {
            JobField::InformationTechnology => 8.5,
            JobField::MechanicalEngineering => 6.5,
            JobField::FinanceAndBanking => 7.2,
            JobField::Healthcare => 7.8,
            JobField::MarketingAndSales => 5.5,
            JobField::HumanResources => 5.8,
            JobField::DataScience => 9.2,
            JobField::Cybersecurity => 8.8,
        }
    }
}

/// Immutable mapping from job field to relative earning potential.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseRateCatalog {
    rates: BTreeMap<JobField, f64>,
    default_rate: f64,
}

impl BaseRateCatalog {
    pub const STANDARD_DEFAULT_RATE: f64 = 5.0;

    pub fn new(rates: BTreeMap<JobField, f64>, default_rate: f64) -> Self {
        Self {
            rates,
            default_rate,
        }
    }

    pub fn standard() -> Self {
        let rates = JobField::ALL
            .into_iter()
            .map(|field| (field, field.standard_rate()))
            .collect();
        Self::new(rates, Self::STANDARD_DEFAULT_RATE)
    }

    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }

    /// Resolve a free-form job field. Unknown or unrated fields fall back to
    /// the default rate.
    pub fn lookup(&self, job_field: &str) -> BaseRateLookup {
        let field = JobField::from_label(job_field);
        match field.and_then(|field| self.rates.get(&field).map(|rate| (field, *rate))) {
            Some((field, base_rate)) => BaseRateLookup {
                field: Some(field),
                base_rate,
            },
            None => BaseRateLookup {
                field: None,
                base_rate: self.default_rate,
            },
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (JobField, f64)> + '_ {
        self.rates.iter().map(|(field, rate)| (*field, *rate))
    }
}

impl Default for BaseRateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseRateLookup {
    pub field: Option<JobField>,
    pub base_rate: f64,
}

impl BaseRateLookup {
    pub fn is_recognized(&self) -> bool {
        self.field.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_covers_every_field() {
        let catalog = BaseRateCatalog::standard();
        assert_eq!(catalog.entries().count(), JobField::ALL.len());
        for field in JobField::ALL {
            let lookup = catalog.lookup(field.label());
            assert_eq!(lookup.field, Some(field));
            assert!(lookup.base_rate > 0.0);
        }
    }

    #[test]
    fn lookup_uses_documented_rates() {
        let catalog = BaseRateCatalog::standard();
        assert_eq!(catalog.lookup("Data Science").base_rate, 9.2);
        assert_eq!(catalog.lookup("Finance & Banking").base_rate, 7.2);
        assert_eq!(catalog.lookup("  Healthcare ").base_rate, 7.8);
    }

    #[test]
    fn unknown_field_falls_back_to_default() {
        let catalog = BaseRateCatalog::standard();
        let lookup = catalog.lookup("Underwater Basket Weaving");
        assert!(!lookup.is_recognized());
        assert_eq!(lookup.base_rate, BaseRateCatalog::STANDARD_DEFAULT_RATE);

        let case_mismatch = catalog.lookup("data science");
        assert!(!case_mismatch.is_recognized());
    }

    #[test]
    fn custom_catalog_without_rate_uses_its_default() {
        let mut rates = BTreeMap::new();
        rates.insert(JobField::Healthcare, 4.0);
        let catalog = BaseRateCatalog::new(rates, 2.5);

        assert_eq!(catalog.lookup("Healthcare").base_rate, 4.0);
        let missing = catalog.lookup("Cybersecurity");
        assert_eq!(missing.field, None);
        assert_eq!(missing.base_rate, 2.5);
    }
}
