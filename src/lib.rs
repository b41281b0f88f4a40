pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{aws::AwsSession, template::LocalTemplateSource};
pub use crate::config::{BaseIdentity, CliConfig};
pub use crate::core::deploy::Deployer;
pub use crate::domain::model::{AccountTarget, DeployOutcome, DeploymentRequest};
pub use crate::utils::error::{DeployError, Result};
