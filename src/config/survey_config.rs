use crate::domain::model::default_languages;
use crate::utils::error::{Result, SurveyError};
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::path::Path;

pub const SJ_TOKEN_ENV: &str = "SJ_TOKEN";

/// HeadHunter 只允許取前 2000 筆搜尋結果
const HH_RESULT_WINDOW: u32 = 2000;
/// SuperJob 只允許取前 500 筆搜尋結果
const SJ_RESULT_WINDOW: u32 = 500;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    pub survey: SurveySection,
    pub head_hunter: HeadHunterConfig,
    pub super_job: SuperJobConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SurveySection {
    pub languages: Vec<String>,
}

impl Default for SurveySection {
    fn default() -> Self {
        Self {
            languages: default_languages(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub title: String,
    pub endpoint: String,
    pub query_prefix: String,
    /// hh.ru 地區代碼，1 = 莫斯科
    pub area: u32,
    pub currency: String,
    pub per_page: u32,
    pub min_found: u64,
    pub max_pages: u32,
    pub user_agent: String,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            title: "HeadHunter Moscow".to_string(),
            endpoint: "https://api.hh.ru/vacancies/".to_string(),
            query_prefix: "Программист".to_string(),
            area: 1,
            currency: "RUR".to_string(),
            per_page: 100,
            min_found: 100,
            max_pages: 20,
            user_agent: concat!("salary-survey/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub title: String,
    pub endpoint: String,
    pub query_prefix: String,
    /// superjob.ru 城市代碼，4 = 莫斯科
    pub town: u32,
    pub currency: String,
    pub per_page: u32,
    pub min_found: u64,
    pub max_pages: u32,
    pub api_key: Option<String>,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            title: "SuperJob Moscow".to_string(),
            endpoint: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            query_prefix: "Программист".to_string(),
            town: 4,
            currency: "rub".to_string(),
            per_page: 100,
            min_found: 10,
            max_pages: 5,
            api_key: None,
        }
    }
}

impl SurveyConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SurveyError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，未填的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SurveyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SJ_TOKEN})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SurveyError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 命令列或環境變數提供的 token 優先於檔案
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
            self.super_job.api_key = Some(key);
        }
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        if !languages.is_empty() {
            self.survey.languages = languages;
        }
        self
    }
}

impl Validate for SurveyConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_languages("survey.languages", &self.survey.languages)?;
        self.head_hunter.validate()?;
        self.super_job.validate()?;
        Ok(())
    }
}

impl Validate for HeadHunterConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("head_hunter.endpoint", &self.endpoint)?;
        validation::validate_non_empty_string("head_hunter.currency", &self.currency)?;
        validation::validate_non_empty_string("head_hunter.user_agent", &self.user_agent)?;
        validation::validate_range("head_hunter.per_page", self.per_page, 1, 100)?;
        validation::validate_positive_number("head_hunter.max_pages", self.max_pages as usize, 1)?;

        if self.per_page.saturating_mul(self.max_pages) > HH_RESULT_WINDOW {
            return Err(SurveyError::ConfigValidationError {
                field: "head_hunter.max_pages".to_string(),
                message: format!(
                    "per_page × max_pages must not exceed {} (HeadHunter search window)",
                    HH_RESULT_WINDOW
                ),
            });
        }
        Ok(())
    }
}

impl Validate for SuperJobConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("super_job.endpoint", &self.endpoint)?;
        validation::validate_non_empty_string("super_job.currency", &self.currency)?;
        validation::validate_range("super_job.per_page", self.per_page, 1, 100)?;
        validation::validate_positive_number("super_job.max_pages", self.max_pages as usize, 1)?;

        if self.per_page.saturating_mul(self.max_pages) > SJ_RESULT_WINDOW {
            return Err(SurveyError::ConfigValidationError {
                field: "super_job.max_pages".to_string(),
                message: format!(
                    "per_page × max_pages must not exceed {} (SuperJob search window)",
                    SJ_RESULT_WINDOW
                ),
            });
        }
        Ok(())
    }
}
