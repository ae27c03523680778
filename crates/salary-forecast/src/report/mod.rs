mod currency;
pub mod views;

pub use currency::format_inr;
pub use views::PredictionView;
