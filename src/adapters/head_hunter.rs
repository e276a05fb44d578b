use crate::config::HeadHunterConfig;
use crate::domain::model::VacancyPage;
use crate::domain::ports::{SalaryBounds, VacancySource};
use crate::utils::error::{Result, SurveyError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct HhSalary {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhVacancy {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// hh.ru 對未公開薪資的職缺回傳 null
    #[serde(default)]
    pub salary: Option<HhSalary>,
}

impl SalaryBounds for HhVacancy {
    fn salary_from(&self) -> Option<u64> {
        self.salary
            .as_ref()
            .and_then(|salary| salary.from)
            .filter(|&value| value > 0)
    }

    fn salary_to(&self) -> Option<u64> {
        self.salary
            .as_ref()
            .and_then(|salary| salary.to)
            .filter(|&value| value > 0)
    }
}

#[derive(Debug, Deserialize)]
struct HhSearchResponse {
    found: u64,
    pages: u64,
    #[serde(default)]
    items: Vec<HhVacancy>,
}

pub struct HeadHunterClient {
    config: HeadHunterConfig,
    client: Client,
}

impl HeadHunterClient {
    pub fn new(config: HeadHunterConfig) -> Result<Self> {
        // api.hh.ru 會拒絕沒有 User-Agent 的請求
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self { config, client })
    }

    fn search_text(&self, language: &str) -> String {
        format!("{} {}", self.config.query_prefix, language)
            .trim()
            .to_string()
    }
}

#[async_trait]
impl VacancySource for HeadHunterClient {
    type Vacancy = HhVacancy;

    fn name(&self) -> &str {
        "HeadHunter"
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

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage<HhVacancy>> {
        let params = [
            ("text", self.search_text(language)),
            ("area", self.config.area.to_string()),
            ("page", page.to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("currency", self.config.currency.clone()),
            ("only_with_salary", "true".to_string()),
        ];

        tracing::debug!(
            "Making API request to: {} (text={:?}, page={})",
            self.config.endpoint,
            params[0].1,
            page
        );
        let response = self
            .client
            .get(&self.config.endpoint)
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

        let body: HhSearchResponse = response.json().await?;

        Ok(VacancyPage {
            found: body.found,
            more: u64::from(page) + 1 < body.pages,
            items: body.items,
        })
    }
}
