use crate::config::survey_config::{SurveyConfig, SJ_TOKEN_ENV};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "salary-survey")]
#[command(about = "Average programmer salaries per language on HeadHunter and SuperJob")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Comma separated languages, overrides the configured list
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// SuperJob application key (falls back to SJ_TOKEN)
    #[arg(long)]
    pub sj_token: Option<String>,

    /// Key-value file loaded into the environment at startup, if present
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 合併設定檔、命令列與環境變數，並驗證結果
    pub fn survey_config(&self) -> Result<SurveyConfig> {
        let base = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                SurveyConfig::from_file(path)?
            }
            None => SurveyConfig::default(),
        };

        let api_key = self
            .sj_token
            .clone()
            .or_else(|| std::env::var(SJ_TOKEN_ENV).ok());

        let config = base
            .with_languages(self.languages.clone())
            .with_api_key(api_key);
        config.validate()?;

        Ok(config)
    }
}
