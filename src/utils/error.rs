use crate::domain::model::ServiceFailure;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Failed to read template '{path}': {source}")]
    TemplateRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Service(ServiceFailure),

    #[error("AssumeRole for {role_arn} returned no credentials")]
    MissingCredentials { role_arn: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to write deployment report: {0}")]
    Output(#[source] std::io::Error),
}

impl DeployError {
    pub fn service(operation: &str, code: Option<&str>, message: impl Into<String>) -> Self {
        Self::Service(ServiceFailure::new(operation, code, message))
    }

    pub fn as_service_failure(&self) -> Option<&ServiceFailure> {
        match self {
            Self::Service(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::TemplateRead { .. } => "Check that the template path exists and is readable UTF-8 text",
            Self::Service(failure) if failure.operation == "AssumeRole" => {
                "Check that the base profile may assume OrganizationAccountAccessRole in the target account"
            }
            Self::Service(_) => "Check the service message above; the stack state is unchanged by this tool",
            Self::MissingCredentials { .. } => "Retry the deployment; the identity service response was incomplete",
            Self::InvalidConfigValue { .. } => "Run with --help to see the expected arguments",
            Self::Output(_) => "Check that stdout is still open; the request may not have been sent",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfigValue { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;
