use crate::adapters::{HeadHunterClient, SuperJobClient};
use crate::config::SurveyConfig;
use crate::core::estimator::summarize;
use crate::domain::model::ResultTable;
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

/// 依序對每個語言查詢來源並彙整成一張表
pub struct SalarySurvey {
    languages: Vec<String>,
}

impl SalarySurvey {
    pub fn new(languages: Vec<String>) -> Self {
        Self { languages }
    }

    pub async fn survey<S: VacancySource>(&self, source: &S) -> Result<ResultTable> {
        tracing::info!(
            "📥 Surveying {} for {} languages",
            source.name(),
            self.languages.len()
        );
        let mut table = ResultTable::new(source.title());

        for language in &self.languages {
            let outcome = source.fetch_all(language).await?;

            match summarize(language, &outcome) {
                Some(row) => {
                    tracing::info!(
                        "{} / {}: found {}, processed {}, average {}",
                        source.name(),
                        language,
                        row.vacancies_found,
                        row.vacancies_processed,
                        row.average_salary
                    );
                    table.push(row);
                }
                None => {
                    tracing::info!(
                        "{} / {}: skipped ({} found, none with a salary estimate)",
                        source.name(),
                        language,
                        outcome.found
                    );
                }
            }
        }

        tracing::info!("✅ {}: {} rows", source.name(), table.rows.len());
        Ok(table)
    }
}

/// 依序查詢兩個來源，HeadHunter 先、SuperJob 後
///
/// 兩個 client 都先建好再開始查詢，缺少 token 時不會送出任何請求。
pub async fn run_survey(config: &SurveyConfig) -> Result<Vec<ResultTable>> {
    let head_hunter = HeadHunterClient::new(config.head_hunter.clone())?;
    let super_job = SuperJobClient::new(config.super_job.clone())?;
    let survey = SalarySurvey::new(config.survey.languages.clone());

    let head_hunter_table = survey.survey(&head_hunter).await?;
    let super_job_table = survey.survey(&super_job).await?;

    Ok(vec![head_hunter_table, super_job_table])
}

/// 組出要印到 stdout 的內容，沒有任何資料列的表不印
pub fn render_report(tables: &[ResultTable]) -> String {
    let mut report = String::new();
    for table in tables {
        if table.is_empty() {
            tracing::info!("{}: no language produced a row, table omitted", table.title);
            continue;
        }
        report.push_str(&table.render());
        report.push_str("\n\n");
    }
    report
}
