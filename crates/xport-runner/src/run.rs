use crate::cli::{ExportCommand, OutputFormat, RulesCommand};
use crate::config::load_effective_rules;
use crate::io::read_resource_document;
use serde_json::json;
use tracing::warn;
use xport_core::{content_digest_hex, RuleConfigError, RuleRegistry};
use xport_engine::{ExportError, ParameterizeOptions};
use xport_resources::{ExportableResource, ResourceError, ResourceType};

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("read file failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("input parse failed: {0}")]
    InputParse(String),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error("rules config load failed: {0}")]
    RulesLoad(#[from] RuleConfigError),
    #[error("no rules defined for resource type `{0}`")]
    NoRulesForType(String),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
    #[error("json encode failed: {0}")]
    JsonEncode(#[from] serde_json::Error),
    #[error("yaml encode failed: {0}")]
    YamlEncode(#[from] serde_yaml::Error),
}

pub fn execute_export(command: &ExportCommand) -> Result<String, RunnerError> {
    let resource_type = command.resource_type.parse::<ResourceType>()?;
    let document = read_resource_document(command.input.as_path())?;
    let resource = ExportableResource::decode(resource_type, document)?;
    let resource_name = command
        .name
        .clone()
        .unwrap_or_else(|| resource.name().to_string());

    let registry = if command.no_rules {
        None
    } else {
        Some(load_effective_rules(command.rules.as_deref())?)
    };
    let rules = registry
        .as_ref()
        .and_then(|registry| registry.get(resource_type.as_str()));

    let outcome = resource.export(
        resource_name.as_str(),
        rules,
        &ParameterizeOptions {
            strict: command.strict,
        },
    )?;
    for issue in &outcome.issues {
        warn!(resource_type = %resource_type, path = %issue.field_path, "{}", issue.message);
    }

    match command.format {
        OutputFormat::Text => Ok(outcome.content.trim_end_matches('\n').to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "resource_type": resource_type.as_str(),
            "resource_name": resource_name,
            "sha256": content_digest_hex(outcome.content.as_str()),
            "content": outcome.content,
            "issues": outcome.issues,
        }))
        .map_err(RunnerError::from),
    }
}

pub fn execute_rules(command: &RulesCommand) -> Result<String, RunnerError> {
    let registry = load_effective_rules(command.rules.as_deref())?;
    let selected = match &command.resource_type {
        Some(requested) => {
            let key = requested
                .parse::<ResourceType>()
                .map(|resource_type| resource_type.as_str().to_string())
                .unwrap_or_else(|_| requested.clone());
            let rules = registry
                .get(key.as_str())
                .ok_or_else(|| RunnerError::NoRulesForType(requested.clone()))?;
            RuleRegistry::new().with(key, rules.clone())
        }
        None => registry,
    };
    let yaml = serde_yaml::to_string(&selected)?;
    Ok(yaml.trim_end_matches('\n').to_string())
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
