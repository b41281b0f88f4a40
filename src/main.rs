use cfn_deploy::utils::{logger, validation::Validate};
use cfn_deploy::{AwsSession, CliConfig, DeployOutcome, Deployer, LocalTemplateSource};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        eprintln!("Hint: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let request = config.deployment_request();
    let session = AwsSession::load(&config.base_identity(), &request.region).await;
    let deployer = Deployer::new(LocalTemplateSource::new(), session.clone(), session);

    match deployer.run(&request).await {
        Ok(outcome) => match outcome {
            DeployOutcome::Created { stack_id } | DeployOutcome::Updated { stack_id } => {
                tracing::info!(stack_id = ?stack_id, "Deployment request accepted");
            }
            DeployOutcome::NoUpdates => {
                tracing::info!("Stack already matches the template");
            }
        },
        Err(e) => {
            tracing::error!("Deployment failed: {}", e);
            eprintln!("Error: {}", e);
            eprintln!("Hint: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
