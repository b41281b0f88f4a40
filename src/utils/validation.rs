use crate::domain::model::GENERAL_ACCOUNT;
use crate::utils::error::{DeployError, Result};

const ACCOUNT_ID_LENGTH: usize = 12;
const MAX_STACK_NAME_LENGTH: usize = 128;
const STACK_ARN_PREFIX: &str = "arn:aws:cloudformation:";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> DeployError {
    DeployError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_account(field_name: &str, account: &str) -> Result<()> {
    if account == GENERAL_ACCOUNT {
        return Ok(());
    }

    if account.len() != ACCOUNT_ID_LENGTH || !account.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(
            field_name,
            account,
            format!(
                "Account must be '{}' or a {}-digit account id",
                GENERAL_ACCOUNT, ACCOUNT_ID_LENGTH
            ),
        ));
    }

    Ok(())
}

pub fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    validate_non_empty_string(field_name, region)?;

    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(invalid(
            field_name,
            region,
            "AWS region can only contain lowercase letters, numbers, and hyphens",
        ));
    }

    Ok(())
}

pub fn validate_stack_name(field_name: &str, stack_name: &str) -> Result<()> {
    // existing stacks may also be addressed by their unique stack ID
    if let Some(rest) = stack_name.strip_prefix(STACK_ARN_PREFIX) {
        if rest.contains("stack/") && !rest.contains(char::is_whitespace) {
            return Ok(());
        }
        return Err(invalid(
            field_name,
            stack_name,
            "Stack ARN must look like arn:aws:cloudformation:<region>:<account>:stack/<name>/<id>",
        ));
    }

    if stack_name.is_empty() || stack_name.len() > MAX_STACK_NAME_LENGTH {
        return Err(invalid(
            field_name,
            stack_name,
            format!(
                "Stack name must be between 1 and {} characters",
                MAX_STACK_NAME_LENGTH
            ),
        ));
    }

    if !stack_name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(invalid(
            field_name,
            stack_name,
            "Stack name must start with a letter",
        ));
    }

    if !stack_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(invalid(
            field_name,
            stack_name,
            "Stack name can only contain letters, numbers, and hyphens",
        ));
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_account() {
        assert!(validate_account("account", "general").is_ok());
        assert!(validate_account("account", "123456789012").is_ok());
        assert!(validate_account("account", "").is_err());
        assert!(validate_account("account", "12345").is_err());
        assert!(validate_account("account", "12345678901a").is_err());
        assert!(validate_account("account", "GENERAL").is_err());
    }

    #[test]
    fn test_validate_aws_region() {
        assert!(validate_aws_region("region", "us-east-1").is_ok());
        assert!(validate_aws_region("region", "ap-southeast-2").is_ok());
        assert!(validate_aws_region("region", "").is_err());
        assert!(validate_aws_region("region", "US-EAST-1").is_err());
        assert!(validate_aws_region("region", "us east 1").is_err());
    }

    #[test]
    fn test_validate_stack_name() {
        assert!(validate_stack_name("stack_name", "network-baseline").is_ok());
        assert!(validate_stack_name("stack_name", "A1").is_ok());
        assert!(validate_stack_name("stack_name", "").is_err());
        assert!(validate_stack_name("stack_name", "1-starts-with-digit").is_err());
        assert!(validate_stack_name("stack_name", "has_underscore").is_err());
        assert!(validate_stack_name("stack_name", &"a".repeat(129)).is_err());
        assert!(validate_stack_name("stack_name", &"a".repeat(128)).is_ok());
    }

    #[test]
    fn test_validate_stack_name_accepts_stack_id() {
        assert!(validate_stack_name(
            "stack_name",
            "arn:aws:cloudformation:us-east-1:123456789012:stack/network/0a1b2c3d-0000-0000-0000-000000000000",
        )
        .is_ok());
        assert!(validate_stack_name("stack_name", "arn:aws:cloudformation:us-east-1").is_err());
        assert!(validate_stack_name(
            "stack_name",
            "arn:aws:cloudformation:us-east-1:123456789012:stack/net work/1",
        )
        .is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("template_path", "templates/vpc.yaml").is_ok());
        assert!(validate_path("template_path", "").is_err());
        assert!(validate_path("template_path", "bad\0path").is_err());
    }

    #[test]
    fn test_invalid_value_carries_field_name() {
        match validate_account("account", "abc") {
            Err(DeployError::InvalidConfigValue { field, value, .. }) => {
                assert_eq!(field, "account");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
