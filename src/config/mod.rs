use crate::domain::model::{AccountTarget, DeploymentRequest, GENERAL_ACCOUNT};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_account, validate_aws_region, validate_non_empty_string, validate_path,
    validate_stack_name, Validate,
};
use clap::Parser;

/// Named local profile the base identity is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseIdentity {
    pub profile: String,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "cfn-deploy")]
#[command(about = "Deploy CloudFormation templates to AWS accounts")]
pub struct CliConfig {
    /// Target account ID or 'general' for the master account
    pub account: String,

    /// AWS region for deployment
    pub region: String,

    /// Name of the CloudFormation stack
    pub stack_name: String,

    /// Path to the CloudFormation template file
    pub template_path: String,

    /// Local credential profile used as the base identity
    #[arg(long, default_value = GENERAL_ACCOUNT)]
    pub profile: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn deployment_request(&self) -> DeploymentRequest {
        DeploymentRequest {
            account: AccountTarget::parse(&self.account),
            region: self.region.clone(),
            stack_name: self.stack_name.clone(),
            template_path: self.template_path.clone(),
        }
    }

    pub fn base_identity(&self) -> BaseIdentity {
        BaseIdentity {
            profile: self.profile.clone(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_account("account", &self.account)?;
        validate_aws_region("region", &self.region)?;
        validate_stack_name("stack_name", &self.stack_name)?;
        validate_path("template_path", &self.template_path)?;
        validate_non_empty_string("profile", &self.profile)?;

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
