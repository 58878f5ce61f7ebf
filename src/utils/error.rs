use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Command `{command}` failed with exit code {code:?}: {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Source,
    Rendering,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 行程結束碼；任何錯誤都不可回傳 0
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EtlError::CommandFailed { .. } => ErrorCategory::Source,
            EtlError::TemplateError(_) | EtlError::ProcessingError { .. } => {
                ErrorCategory::Rendering
            }
            EtlError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 遠端指令失敗多半是暫時性的，可重試
            ErrorCategory::Source => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Rendering => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::IoError(_) => "Check that the template and output paths exist and are accessible",
            EtlError::TemplateError(_) => "Check the template syntax and the fields it references",
            EtlError::CommandFailed { .. } => {
                "Verify the listing program, its arguments and the remote host credentials"
            }
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
            EtlError::MissingConfigError { .. } => {
                "Provide the missing value in the configuration file or on the command line"
            }
            EtlError::ProcessingError { .. } => "Re-run with --verbose to inspect the parsed listing",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::IoError(e) => format!("File access failed: {}", e),
            EtlError::TemplateError(e) => format!("Could not render the template: {}", e),
            EtlError::CommandFailed { command, code, .. } => match code {
                Some(code) => format!("The command '{}' exited with status {}", command, code),
                None => format!("The command '{}' was terminated", command),
            },
            EtlError::MissingConfigError { field } => {
                format!("The setting '{}' is required", field)
            }
            other => other.to_string(),
        }
    }
}

/// 單一 binding 片段無法解析；僅丟棄該片段
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingParseError {
    #[error("empty binding fragment")]
    Empty,

    #[error("binding fragment '{0}' does not match '<protocol> <address>:<port>:<host>'")]
    Malformed(String),
}

/// 單一列表行無法解析；僅丟棄該行
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowParseError {
    #[error("row '{0}' does not match '<name> <state> {{<bindings>}}'")]
    Malformed(String),

    #[error("row '{row}' has an empty {field}")]
    MissingField { row: String, field: &'static str },
}

pub type Result<T> = std::result::Result<T, EtlError>;
