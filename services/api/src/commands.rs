use clap::Args;
use salary_forecast::error::AppError;
use salary_forecast::prediction::{
    BatchPredictor, BatchReport, CandidateForm, PredictionResult, SalaryPredictor,
};
use salary_forecast::report::{format_inr, PredictionView};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Candidate age in years (18 or above)
    #[arg(long)]
    pub(crate) age: String,
    /// Years of professional experience
    #[arg(long)]
    pub(crate) experience: String,
    /// Job field, e.g. "Data Science"
    #[arg(long)]
    pub(crate) job_field: String,
    /// Specific job title
    #[arg(long)]
    pub(crate) job_title: String,
    /// Print the raw prediction as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with Age, Experience, Job Field and Job Title columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print the results as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let PredictArgs {
        age,
        experience,
        job_field,
        job_title,
        json,
    } = args;

    let predictor = SalaryPredictor::standard();
    let form = CandidateForm::new(age, experience, job_field, job_title);
    let outcome = predictor.predict(&form)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.result)?);
        return Ok(());
    }

    render_prediction(&PredictionView::from_outcome(&outcome));
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let predictor = SalaryPredictor::standard();
    let report = BatchPredictor::new(&predictor).price_file(&args.csv)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&batch_rows(&report))?);
        return Ok(());
    }

    render_batch(&report);
    Ok(())
}

pub(crate) fn run_fields() -> Result<(), AppError> {
    let predictor = SalaryPredictor::standard();
    let catalog = predictor.engine().catalog();

    println!("Job fields");
    for (field, base_rate) in catalog.entries() {
        println!("- {}: base rate {:.1}", field.label(), base_rate);
    }
    println!("Other fields: base rate {:.1}", catalog.default_rate());
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchRowOutput<'a> {
    line: u64,
    job_title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    prediction: Option<&'a PredictionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn batch_rows(report: &BatchReport) -> Vec<BatchRowOutput<'_>> {
    report
        .rows
        .iter()
        .map(|row| BatchRowOutput {
            line: row.line,
            job_title: &row.job_title,
            prediction: row.outcome.as_ref().ok(),
            error: row.outcome.as_ref().err().map(|err| err.to_string()),
        })
        .collect()
}

fn render_prediction(view: &PredictionView) {
    println!("Salary prediction for {} ({})", view.job_title, view.job_field);
    if view.default_rate_applied {
        println!("Note: job field not in catalog, default base rate applied");
    }

    println!("\nSalary range");
    println!("- Minimum: {}", view.minimum);
    println!("- Expected: {}", view.expected);
    println!("- Maximum: {}", view.maximum);

    println!("\nMarket insights");
    println!("- Market demand: {}", view.market_demand);
    println!("- Experience bonus: {}", view.experience_bonus);

    println!("\nRecommendation: {}", view.recommendation);
}

fn render_batch(report: &BatchReport) {
    let summary = report.summary();
    println!(
        "Candidate batch: {} rows, {} priced, {} rejected",
        summary.total, summary.accepted, summary.rejected
    );

    for row in &report.rows {
        match &row.outcome {
            Ok(result) => println!(
                "- line {} | {} | {} - {} (expected {}) | demand {}",
                row.line,
                row.job_title,
                format_inr(result.min_salary),
                format_inr(result.max_salary),
                format_inr(result.avg_salary),
                result.market_demand
            ),
            Err(err) => println!("- line {} | {} | rejected: {}", row.line, row.job_title, err),
        }
    }
}
