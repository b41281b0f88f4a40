use crate::core::{Result, TemplateBody, TemplateSource};
use crate::utils::error::DeployError;

/// Reads templates from the local filesystem as UTF-8 text.
#[derive(Debug, Clone, Default)]
pub struct LocalTemplateSource;

impl LocalTemplateSource {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for LocalTemplateSource {
    async fn read_template(&self, path: &str) -> Result<TemplateBody> {
        let body = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DeployError::TemplateRead {
                path: path.to_string(),
                source,
            })?;

        Ok(TemplateBody::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_template_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stack.yaml");
        let content = "AWSTemplateFormatVersion: '2010-09-09'\nResources: {}\n";
        std::fs::write(&path, content).unwrap();

        let body = LocalTemplateSource::new()
            .read_template(path.to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(body.as_str(), content);
    }

    #[tokio::test]
    async fn test_missing_template_is_template_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yaml");

        let err = LocalTemplateSource::new()
            .read_template(path.to_str().unwrap())
            .await
            .unwrap_err();

        match err {
            DeployError::TemplateRead { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_non_utf8_template_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.yaml");
        std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        let result = LocalTemplateSource::new()
            .read_template(path.to_str().unwrap())
            .await;

        assert!(matches!(result, Err(DeployError::TemplateRead { .. })));
    }
}
