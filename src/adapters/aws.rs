use crate::config::BaseIdentity;
use crate::core::{
    IdentityService, ResolvedCredentials, Result, StackDescription, StackRequest, StackService,
    StackServiceProvider,
};
use crate::domain::model::{ServiceFailure, TemporaryCredentials};
use crate::utils::error::DeployError;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_cloudformation::config::{Credentials, Region};
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_cloudformation::types::Capability;
use aws_sdk_cloudformation::Client as CloudFormationClient;
use aws_sdk_sts::Client as StsClient;

const ASSUMED_CREDENTIALS_SOURCE: &str = "cfn-deploy-assumed-role";

/// Maps an SDK failure to a [`ServiceFailure`], keeping the service's error
/// code and message. Transport failures have no code and carry the full
/// error chain as message.
fn service_failure<E, R>(operation: &str, err: SdkError<E, R>) -> DeployError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug + 'static,
{
    let (code, message) = match err.as_service_error() {
        Some(service_err) => (
            service_err.code().map(str::to_string),
            service_err.message().map(str::to_string),
        ),
        None => (None, None),
    };
    let message = message.unwrap_or_else(|| DisplayErrorContext(&err).to_string());

    tracing::debug!(operation, code = ?code, "Service call failed");
    DeployError::Service(ServiceFailure {
        operation: operation.to_string(),
        code,
        message,
    })
}

/// Base AWS configuration for one region, loaded from an explicit profile.
#[derive(Debug, Clone)]
pub struct AwsSession {
    base: SdkConfig,
}

impl AwsSession {
    /// Loading reads local profile files only; no request is sent.
    pub async fn load(identity: &BaseIdentity, region: &str) -> Self {
        tracing::debug!(profile = %identity.profile, region, "Loading base AWS configuration");
        let base = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(&identity.profile)
            .region(Region::new(region.to_string()))
            .load()
            .await;
        Self { base }
    }

    pub fn from_sdk_config(base: SdkConfig) -> Self {
        Self { base }
    }
}

#[async_trait]
impl IdentityService for AwsSession {
    async fn assume_role(
        &self,
        role_arn: &str,
        session_name: &str,
    ) -> Result<TemporaryCredentials> {
        let sts = StsClient::new(&self.base);
        let output = sts
            .assume_role()
            .role_arn(role_arn)
            .role_session_name(session_name)
            .send()
            .await
            .map_err(|e| service_failure("AssumeRole", e))?;

        let credentials = output
            .credentials()
            .ok_or_else(|| DeployError::MissingCredentials {
                role_arn: role_arn.to_string(),
            })?;

        Ok(TemporaryCredentials {
            access_key_id: credentials.access_key_id().to_string(),
            secret_access_key: credentials.secret_access_key().to_string(),
            session_token: credentials.session_token().to_string(),
        })
    }
}

impl StackServiceProvider for AwsSession {
    type Service = CloudFormationStackService;

    fn connect(&self, credentials: &ResolvedCredentials) -> CloudFormationStackService {
        let client = match credentials {
            ResolvedCredentials::Base => CloudFormationClient::new(&self.base),
            ResolvedCredentials::Assumed(assumed) => {
                let config = aws_sdk_cloudformation::config::Builder::from(&self.base)
                    .credentials_provider(Credentials::new(
                        assumed.access_key_id.clone(),
                        assumed.secret_access_key.clone(),
                        Some(assumed.session_token.clone()),
                        None,
                        ASSUMED_CREDENTIALS_SOURCE,
                    ))
                    .build();
                CloudFormationClient::from_conf(config)
            }
        };

        CloudFormationStackService::new(client)
    }
}

#[derive(Debug, Clone)]
pub struct CloudFormationStackService {
    client: CloudFormationClient,
}

impl CloudFormationStackService {
    pub fn new(client: CloudFormationClient) -> Self {
        Self { client }
    }
}

fn capabilities(request: &StackRequest) -> Vec<Capability> {
    request
        .capabilities
        .iter()
        .map(|c| Capability::from(c.as_str()))
        .collect()
}

#[async_trait]
impl StackService for CloudFormationStackService {
    async fn describe_stack(&self, stack_name: &str) -> Result<StackDescription> {
        let output = self
            .client
            .describe_stacks()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(|e| service_failure("DescribeStacks", e))?;

        Ok(StackDescription {
            stack_id: output
                .stacks()
                .first()
                .and_then(|stack| stack.stack_id())
                .map(str::to_string),
        })
    }

    async fn create_stack(&self, request: &StackRequest) -> Result<Option<String>> {
        let output = self
            .client
            .create_stack()
            .stack_name(&request.stack_name)
            .template_body(request.template_body.as_str())
            .set_capabilities(Some(capabilities(request)))
            .send()
            .await
            .map_err(|e| service_failure("CreateStack", e))?;

        Ok(output.stack_id().map(str::to_string))
    }

    async fn update_stack(&self, request: &StackRequest) -> Result<Option<String>> {
        let output = self
            .client
            .update_stack()
            .stack_name(&request.stack_name)
            .template_body(request.template_body.as_str())
            .set_capabilities(Some(capabilities(request)))
            .send()
            .await
            .map_err(|e| service_failure("UpdateStack", e))?;

        Ok(output.stack_id().map(str::to_string))
    }
}
