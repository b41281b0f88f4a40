use crate::domain::model::{
    ResolvedCredentials, StackDescription, StackRequest, TemplateBody, TemporaryCredentials,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The three orchestration-service calls a deployment needs.
#[async_trait]
pub trait StackService: Send + Sync {
    async fn describe_stack(&self, stack_name: &str) -> Result<StackDescription>;
    async fn create_stack(&self, request: &StackRequest) -> Result<Option<String>>;
    async fn update_stack(&self, request: &StackRequest) -> Result<Option<String>>;
}

#[async_trait]
pub trait IdentityService: Send + Sync {
    async fn assume_role(&self, role_arn: &str, session_name: &str)
        -> Result<TemporaryCredentials>;
}

/// Builds a stack service handle bound to the configured region.
pub trait StackServiceProvider: Send + Sync {
    type Service: StackService;

    fn connect(&self, credentials: &ResolvedCredentials) -> Self::Service;
}

pub trait TemplateSource: Send + Sync {
    fn read_template(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<TemplateBody>> + Send;
}
