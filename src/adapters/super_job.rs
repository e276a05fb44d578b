use crate::config::{SuperJobConfig, SJ_TOKEN_ENV};
use crate::domain::model::VacancyPage;
use crate::domain::ports::{SalaryBounds, VacancySource};
use crate::utils::error::{Result, SurveyError};
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;
use reqwest::Client;
use regex::Regex;
use serde::Deserialize;

const API_KEY_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Clone, Deserialize)]
pub struct SjVacancy {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub profession: String,
    /// 0 或 null 代表未提供
    #[serde(default)]
    pub payment_from: Option<u64>,
    #[serde(default)]
    pub payment_to: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl SalaryBounds for SjVacancy {
    fn salary_from(&self) -> Option<u64> {
        self.payment_from.filter(|&value| value > 0)
    }

    fn salary_to(&self) -> Option<u64> {
        self.payment_to.filter(|&value| value > 0)
    }
}

#[derive(Debug, Deserialize)]
struct SjSearchResponse {
    total: u64,
    #[serde(default)]
    more: bool,
    #[serde(default)]
    objects: Vec<SjVacancy>,
}

pub struct SuperJobClient {
    config: SuperJobConfig,
    api_key: String,
    client: Client,
}

impl SuperJobClient {
    /// 沒有 token 就無法查詢，啟動時即失敗
    pub fn new(config: SuperJobConfig) -> Result<Self> {
        let api_key = validate_required_field(SJ_TOKEN_ENV, &config.api_key)?.clone();
        if api_key.trim().is_empty() || is_unresolved_placeholder(&api_key) {
            return Err(SurveyError::MissingConfigError {
                field: SJ_TOKEN_ENV.to_string(),
            });
        }

        Ok(Self {
            config,
            api_key,
            client: Client::new(),
        })
    }
}

/// 設定檔中的 `${VAR}` 在變數未設定時會原樣保留，不能當成 token 送出
fn is_unresolved_placeholder(value: &str) -> bool {
    Regex::new(r"\$\{[^}]+\}")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

#[async_trait]
impl VacancySource for SuperJobClient {
    type Vacancy = SjVacancy;

    fn name(&self) -> &str {
        "SuperJob"
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    fn min_found(&self) -> u64 {
        self.config.min_found
    }

    fn max_pages(&self) -> u32 {
        self.config.max_pages
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage<SjVacancy>> {
        let keyword = format!("{} {}", self.config.query_prefix, language)
            .trim()
            .to_string();
        let params = [
            ("keyword", keyword),
            ("t", self.config.town.to_string()),
            ("page", page.to_string()),
            ("count", self.config.per_page.to_string()),
            ("currency", self.config.currency.clone()),
        ];

        tracing::debug!(
            "Making API request to: {} (keyword={:?}, page={})",
            self.config.endpoint,
            params[0].1,
            page
        );
        let response = self
            .client
            .get(&self.config.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&params)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(SurveyError::HttpStatusError {
                source_name: self.name().to_string(),
                status: response.status().as_u16(),
                url: response.url().to_string(),
            });
        }

        let body: SjSearchResponse = response.json().await?;

        Ok(VacancyPage {
            found: body.total,
            more: body.more,
            items: body.objects,
        })
    }
}
