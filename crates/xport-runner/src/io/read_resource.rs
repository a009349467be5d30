use crate::run::RunnerError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads a JSON or YAML resource document into a generic value, choosing the decoder by
/// extension and trying YAML then JSON otherwise.
pub fn read_resource_document(path: &Path) -> Result<Value, RunnerError> {
    let text = fs::read_to_string(path).map_err(|source| RunnerError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let value: Value = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(text.as_str())
            .map_err(|error| RunnerError::InputParse(format!("json decode error: {error}")))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(text.as_str())
            .map_err(|error| RunnerError::InputParse(format!("yaml decode error: {error}")))?,
        _ => serde_yaml::from_str(text.as_str())
            .or_else(|_| serde_json::from_str(text.as_str()))
            .map_err(|error| RunnerError::InputParse(error.to_string()))?,
    };
    if !value.is_object() {
        return Err(RunnerError::InputParse(format!(
            "resource document `{}` must be a mapping",
            path.display()
        )));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "read_resource_test.rs"]
mod tests;
