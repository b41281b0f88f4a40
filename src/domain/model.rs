use std::fmt;

/// Account identifier meaning "use the base identity directly".
pub const GENERAL_ACCOUNT: &str = "general";

/// Cross-account role assumed in member accounts.
pub const MEMBER_ROLE_NAME: &str = "OrganizationAccountAccessRole";

/// Session name sent with every assume-role request.
pub const ROLE_SESSION_NAME: &str = "cfn-deploy";

/// Capability acknowledged on every create and update request.
pub const NAMED_IAM_CAPABILITY: &str = "CAPABILITY_NAMED_IAM";

const VALIDATION_ERROR_CODE: &str = "ValidationError";
const STACK_NOT_FOUND_MARKER: &str = "does not exist";
const NO_UPDATES_MARKER: &str = "No updates are to be performed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountTarget {
    General,
    Member(String),
}

impl AccountTarget {
    pub fn parse(account: &str) -> Self {
        if account == GENERAL_ACCOUNT {
            Self::General
        } else {
            Self::Member(account.to_string())
        }
    }

    /// ARN of the role to assume, `None` for the base account.
    pub fn role_arn(&self) -> Option<String> {
        match self {
            Self::General => None,
            Self::Member(id) => Some(format!("arn:aws:iam::{}:role/{}", id, MEMBER_ROLE_NAME)),
        }
    }
}

impl fmt::Display for AccountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General => f.write_str(GENERAL_ACCOUNT),
            Self::Member(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    pub account: AccountTarget,
    pub region: String,
    pub stack_name: String,
    pub template_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBody(String);

impl TemplateBody {
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct TemporaryCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

impl fmt::Debug for TemporaryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemporaryCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &"** redacted **")
            .finish()
    }
}

/// Identity a stack service handle is built with. Exactly one per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCredentials {
    Base,
    Assumed(TemporaryCredentials),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackRequest {
    pub stack_name: String,
    pub template_body: TemplateBody,
    pub capabilities: Vec<String>,
}

impl StackRequest {
    pub fn new(stack_name: &str, template_body: TemplateBody) -> Self {
        Self {
            stack_name: stack_name.to_string(),
            template_body,
            capabilities: vec![NAMED_IAM_CAPABILITY.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StackDescription {
    pub stack_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    Created { stack_id: Option<String> },
    Updated { stack_id: Option<String> },
    NoUpdates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    StackNotFound,
    NoUpdatesToPerform,
    Other,
}

/// Error reported by a remote service call, with its machine-readable code
/// when the service supplied one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFailure {
    pub operation: String,
    pub code: Option<String>,
    pub message: String,
}

impl ServiceFailure {
    pub fn new(operation: &str, code: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.to_string(),
            code: code.map(str::to_string),
            message: message.into(),
        }
    }

    /// The orchestration service reports both benign conditions under
    /// `ValidationError`; the message marker tells them apart.
    pub fn kind(&self) -> FailureKind {
        if self.code.as_deref() != Some(VALIDATION_ERROR_CODE) {
            return FailureKind::Other;
        }

        if self.message.contains(STACK_NOT_FOUND_MARKER) {
            FailureKind::StackNotFound
        } else if self.message.contains(NO_UPDATES_MARKER) {
            FailureKind::NoUpdatesToPerform
        } else {
            FailureKind::Other
        }
    }
}

impl fmt::Display for ServiceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.message)?;
        if let Some(code) = &self.code {
            write!(f, " ({})", code)?;
        }
        Ok(())
    }
}
