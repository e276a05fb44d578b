#[cfg(feature = "cli")]
pub mod cli;
pub mod survey_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use survey_config::{HeadHunterConfig, SuperJobConfig, SurveyConfig, SJ_TOKEN_ENV};
