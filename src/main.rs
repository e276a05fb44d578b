use anyhow::Context;
use clap::Parser;
use salary_survey::utils::logger::{self, LogFormat};
use salary_survey::{render_report, run_survey, CliConfig};
use std::path::Path;

/// 檔案不存在時略過；格式錯誤則回報
fn load_env_file(path: &Path) -> anyhow::Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    dotenvy::from_path(path)
        .with_context(|| format!("failed to load environment file {}", path.display()))?;
    Ok(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, LogFormat::from_json_flag(cli.log_json));

    tracing::info!("Starting salary-survey");

    if load_env_file(&cli.env_file)? {
        tracing::debug!("Loaded environment from {}", cli.env_file.display());
    }

    let config = match cli.survey_config() {
        Ok(config) => {
            tracing::debug!("Languages: {}", config.survey.languages.join(", "));
            config
        }
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match run_survey(&config).await {
        Ok(tables) => {
            print!("{}", render_report(&tables));
        }
        Err(e) => {
            tracing::error!("❌ Survey failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
