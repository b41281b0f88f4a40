pub mod credentials;
pub mod deploy;

pub use crate::domain::model::{
    AccountTarget, DeployOutcome, DeploymentRequest, ResolvedCredentials, StackDescription,
    StackRequest, TemplateBody,
};
pub use crate::domain::ports::{IdentityService, StackService, StackServiceProvider, TemplateSource};
pub use crate::utils::error::Result;
