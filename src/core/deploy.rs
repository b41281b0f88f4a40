use crate::core::credentials::CredentialResolver;
use crate::core::{
    DeployOutcome, DeploymentRequest, IdentityService, Result, StackRequest, StackService,
    StackServiceProvider, TemplateBody, TemplateSource,
};
use crate::domain::model::FailureKind;
use crate::utils::error::DeployError;
use std::io::Write;

/// Whether `stack_name` exists. A "does not exist" validation failure is a
/// negative answer; every other failure is returned unchanged.
pub async fn stack_exists<S: StackService + ?Sized>(service: &S, stack_name: &str) -> Result<bool> {
    match service.describe_stack(stack_name).await {
        Ok(description) => {
            tracing::debug!(stack_id = ?description.stack_id, "Stack {} found", stack_name);
            Ok(true)
        }
        Err(DeployError::Service(failure)) if failure.kind() == FailureKind::StackNotFound => {
            tracing::debug!("Stack {} not found", stack_name);
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Issues at most one create or update. The announcement line is written
/// before the request goes out; if it cannot be written nothing is sent.
pub async fn execute<S, W>(
    service: &S,
    request: &DeploymentRequest,
    template_body: TemplateBody,
    exists: bool,
    out: &mut W,
) -> Result<DeployOutcome>
where
    S: StackService + ?Sized,
    W: Write + ?Sized,
{
    let stack_request = StackRequest::new(&request.stack_name, template_body);

    if exists {
        report(
            out,
            &format!(
                "Updating stack {} in account {}...",
                request.stack_name, request.account
            ),
        )?;

        match service.update_stack(&stack_request).await {
            Ok(stack_id) => {
                tracing::info!(stack_id = ?stack_id, "Update accepted");
                Ok(DeployOutcome::Updated { stack_id })
            }
            Err(DeployError::Service(failure))
                if failure.kind() == FailureKind::NoUpdatesToPerform =>
            {
                report(out, "No updates required.")?;
                Ok(DeployOutcome::NoUpdates)
            }
            Err(e) => Err(e),
        }
    } else {
        report(
            out,
            &format!(
                "Creating stack {} in account {}...",
                request.stack_name, request.account
            ),
        )?;

        let stack_id = service.create_stack(&stack_request).await?;
        tracing::info!(stack_id = ?stack_id, "Create accepted");
        Ok(DeployOutcome::Created { stack_id })
    }
}

fn report<W: Write + ?Sized>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{}", line)
        .and_then(|_| out.flush())
        .map_err(DeployError::Output)
}

pub struct Deployer<T, I, P>
where
    T: TemplateSource,
    I: IdentityService,
    P: StackServiceProvider,
{
    templates: T,
    resolver: CredentialResolver<I>,
    provider: P,
}

impl<T, I, P> Deployer<T, I, P>
where
    T: TemplateSource,
    I: IdentityService,
    P: StackServiceProvider,
{
    pub fn new(templates: T, identity: I, provider: P) -> Self {
        Self {
            templates,
            resolver: CredentialResolver::new(identity),
            provider,
        }
    }

    pub async fn run(&self, request: &DeploymentRequest) -> Result<DeployOutcome> {
        let mut stdout = std::io::stdout();
        self.run_with_output(request, &mut stdout).await
    }

    /// Template read, credential resolution, existence check, then one
    /// create or update. Stops at the first fatal error.
    pub async fn run_with_output<W: Write + ?Sized>(
        &self,
        request: &DeploymentRequest,
        out: &mut W,
    ) -> Result<DeployOutcome> {
        tracing::info!(
            account = %request.account,
            region = %request.region,
            stack = %request.stack_name,
            "Starting deployment"
        );

        let template_body = self.templates.read_template(&request.template_path).await?;
        tracing::debug!(
            "Read {} bytes from {}",
            template_body.len(),
            request.template_path
        );

        let credentials = self.resolver.resolve(&request.account).await?;
        let service = self.provider.connect(&credentials);

        let exists = stack_exists(&service, &request.stack_name).await?;
        execute(&service, request, template_body, exists, out).await
    }
}
