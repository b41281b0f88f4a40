use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// SDK crates that log every credential lookup and request attempt at info.
const AWS_SDK_TARGETS: [&str; 4] = [
    "aws_config",
    "aws_smithy_runtime",
    "aws_sdk_sts",
    "aws_sdk_cloudformation",
];

/// Filter used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> String {
    let (own, sdk) = if verbose { ("debug", "info") } else { ("info", "warn") };

    let mut directives = vec![format!("cfn_deploy={}", own)];
    directives.extend(AWS_SDK_TARGETS.iter().map(|target| format!("{}={}", target, sdk)));
    directives.join(",")
}

/// Logs go to stderr; stdout is reserved for the deployment report.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_directives_hold_sdk_at_warn() {
        assert_eq!(
            default_directives(false),
            "cfn_deploy=info,aws_config=warn,aws_smithy_runtime=warn,aws_sdk_sts=warn,aws_sdk_cloudformation=warn"
        );
    }

    #[test]
    fn test_verbose_directives_raise_own_crate_to_debug() {
        let directives = default_directives(true);
        assert!(directives.starts_with("cfn_deploy=debug,"));
        assert!(directives.contains("aws_sdk_sts=info"));
        assert!(!directives.contains("=warn"));
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directives(verbose)).is_ok());
        }
    }
}
