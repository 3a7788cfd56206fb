use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("WebDriver session could not be created: {0}")]
    SessionError(#[from] fantoccini::error::NewSessionError),

    #[error("WebDriver command failed: {0}")]
    WebDriverError(#[from] fantoccini::error::CmdError),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid selector '{selector}': {message}")]
    SelectorError { selector: String, message: String },

    #[error("Source error: {message}")]
    SourceError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Fetch,
    Parse,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TallyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TallyError::SessionError(_)
            | TallyError::WebDriverError(_)
            | TallyError::HttpError(_)
            | TallyError::SourceError { .. } => ErrorCategory::Fetch,
            TallyError::SelectorError { .. } | TallyError::SerializationError(_) => {
                ErrorCategory::Parse
            }
            TallyError::ConfigValidationError { .. }
            | TallyError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TallyError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Fetch => ErrorSeverity::Medium,
            ErrorCategory::Parse | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TallyError::SessionError(_) => {
                "確認 chromedriver 已啟動，且 --webdriver-url 指向正確的位址"
            }
            TallyError::WebDriverError(_) => "頁面結構可能已改變，請以 --verbose 重新執行",
            TallyError::HttpError(_) => "檢查網路連線與目標 URL 是否可存取",
            TallyError::IoError(_) => "檢查檔案路徑與讀取權限",
            TallyError::SerializationError(_) => "回報此問題並附上 --verbose 輸出",
            TallyError::SelectorError { .. } => "確認 selector 是合法的 CSS 選擇器",
            TallyError::SourceError { .. } => "改用其他來源 (--source) 再試一次",
            TallyError::ConfigValidationError { .. }
            | TallyError::InvalidConfigValueError { .. } => "檢查設定檔與命令列參數",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Fetch => format!("Could not fetch the page: {}", self),
            ErrorCategory::Parse => format!("Could not read the page content: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;
