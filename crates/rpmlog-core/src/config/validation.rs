//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    validate_query(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

fn validate_changelog(config: &Config) -> Result<()> {
    let changelog = &config.changelog;

    if changelog.recency_days == 0 {
        return Err(invalid("changelog.recency_days", "must be greater than zero").into());
    }

    if changelog.wrap_width <= changelog.continuation_indent.chars().count() {
        return Err(invalid(
            "changelog.wrap_width",
            "must be wider than the continuation indent",
        )
        .into());
    }

    if changelog.relevant_extensions.is_empty() {
        return Err(invalid("changelog.relevant_extensions", "cannot be empty").into());
    }

    for (i, ext) in changelog.relevant_extensions.iter().enumerate() {
        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(invalid(
                &format!("changelog.relevant_extensions[{}]", i),
                format!("'{}' must look like '.ext'", ext),
            )
            .into());
        }
    }

    Ok(())
}

fn validate_query(config: &Config) -> Result<()> {
    if config.query.program.trim().is_empty() {
        return Err(invalid("query.program", "program cannot be empty").into());
    }

    for tag in ["%{name}", "%{version}", "%{release}"] {
        if !config.query.query_format.contains(tag) {
            return Err(invalid("query.query_format", format!("must contain {}", tag)).into());
        }
    }

    Ok(())
}
