use crate::core::{AccountTarget, IdentityService, ResolvedCredentials, Result};
use crate::domain::model::ROLE_SESSION_NAME;

/// Decides which identity a run acts as.
///
/// The base account is used as-is. Member accounts are reached by assuming
/// `OrganizationAccountAccessRole` with the base identity; a failed
/// assumption is returned unchanged and never falls back to the base identity.
pub struct CredentialResolver<I: IdentityService> {
    identity: I,
}

impl<I: IdentityService> CredentialResolver<I> {
    pub fn new(identity: I) -> Self {
        Self { identity }
    }

    pub async fn resolve(&self, account: &AccountTarget) -> Result<ResolvedCredentials> {
        let Some(role_arn) = account.role_arn() else {
            tracing::debug!("Using base identity for account {}", account);
            return Ok(ResolvedCredentials::Base);
        };

        tracing::info!(role_arn = %role_arn, "Assuming role");
        let credentials = self
            .identity
            .assume_role(&role_arn, ROLE_SESSION_NAME)
            .await?;
        tracing::debug!(access_key_id = %credentials.access_key_id, "Role assumed");

        Ok(ResolvedCredentials::Assumed(credentials))
    }
}
