use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{source_name} returned HTTP {status} for {url}")]
    HttpStatusError {
        source_name: String,
        status: u16,
        url: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl SurveyError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SurveyError::ApiError(e) if e.is_timeout() => {
                "The job search API did not answer in time".to_string()
            }
            SurveyError::ApiError(e) if e.is_decode() => {
                "The job search API returned a response that could not be read".to_string()
            }
            SurveyError::ApiError(_) => "Could not reach the job search API".to_string(),
            SurveyError::HttpStatusError {
                source_name,
                status,
                ..
            } => format!("{} rejected the request (HTTP {})", source_name, status),
            SurveyError::IoError(e) => format!("File access failed: {}", e),
            SurveyError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            SurveyError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            SurveyError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SurveyError::ApiError(_) => "Check your network connection and try again",
            SurveyError::HttpStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check that SJ_TOKEN holds a valid SuperJob application key"
            }
            SurveyError::HttpStatusError { status, .. } if *status == 429 => {
                "The API rate limit was hit; wait a minute before running again"
            }
            SurveyError::HttpStatusError { .. } => {
                "Check the configured endpoint and query parameters"
            }
            SurveyError::IoError(_) => "Check that the file exists and is readable",
            SurveyError::MissingConfigError { .. } => {
                "Set SJ_TOKEN in the environment or in a .env file, or pass --sj-token"
            }
            SurveyError::InvalidConfigValueError { .. }
            | SurveyError::ConfigValidationError { .. } => "Fix the configuration file and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, SurveyError>;
