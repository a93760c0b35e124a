use super::LineageConfig;
use crate::core::error::LineageError;
use url::Url;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &LineageConfig) -> Result<(), LineageError> {
        let script = config.render.mermaid_script_url.trim();
        if script.is_empty() {
            return Err(LineageError::Config(
                "render.mermaid_script_url cannot be empty".to_string(),
            ));
        }

        let parsed = Url::parse(script).map_err(|err| {
            LineageError::Config(format!("invalid render.mermaid_script_url: {}", err))
        })?;
        if !matches!(parsed.scheme(), "http" | "https" | "file") {
            return Err(LineageError::Config(format!(
                "render.mermaid_script_url must use http, https or file, got '{}'",
                parsed.scheme()
            )));
        }

        Ok(())
    }
}
