use anyhow::Result;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the binary against empty AWS config files so no local profile leaks in.
fn cfn_deploy(home: &TempDir, args: &[&str]) -> Result<Output> {
    let config_file = home.path().join("config");
    let credentials_file = home.path().join("credentials");
    std::fs::write(&config_file, "")?;
    std::fs::write(&credentials_file, "")?;

    let output = Command::new(env!("CARGO_BIN_EXE_cfn-deploy"))
        .args(args)
        .env("AWS_CONFIG_FILE", &config_file)
        .env("AWS_SHARED_CREDENTIALS_FILE", &credentials_file)
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .env_remove("AWS_PROFILE")
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_missing_template_exits_non_zero() -> Result<()> {
    let home = TempDir::new()?;
    let missing = home.path().join("does-not-exist.yaml");

    let output = cfn_deploy(
        &home,
        &["general", "us-east-1", "network", missing.to_str().unwrap()],
    )?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;
    assert!(!stdout.contains("Creating stack"));
    assert!(!stdout.contains("Updating stack"));
    assert!(stderr.contains("Failed to read template"));
    Ok(())
}

#[test]
fn test_invalid_account_exits_with_usage_code() -> Result<()> {
    let home = TempDir::new()?;
    let template = home.path().join("network.yaml");
    std::fs::write(&template, "Resources: {}\n")?;

    let output = cfn_deploy(
        &home,
        &["not-an-account", "us-east-1", "network", template.to_str().unwrap()],
    )?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("account"));
    Ok(())
}

#[test]
fn test_missing_arguments_are_rejected() -> Result<()> {
    let home = TempDir::new()?;

    let output = cfn_deploy(&home, &["general", "us-east-1"])?;

    assert!(!output.status.success());
    Ok(())
}
