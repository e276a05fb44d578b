pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HeadHunterClient, SuperJobClient};
pub use config::SurveyConfig;
pub use crate::core::survey::{render_report, run_survey, SalarySurvey};
pub use domain::model::{AggregateRow, ResultTable};
pub use utils::error::{Result, SurveyError};
