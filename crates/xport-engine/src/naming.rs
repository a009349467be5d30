use xport_core::FieldPath;

/// `ClientID` -> `CLIENT_ID`, `redirectUri` -> `REDIRECT_URI`, `My_Test_App` -> `MY_TEST_APP`.
pub fn to_upper_snake_case(input: &str) -> String {
    let chars = input.chars().collect::<Vec<_>>();
    let mut out = String::with_capacity(input.len() + 4);
    for (index, current) in chars.iter().copied().enumerate() {
        if index > 0 && current.is_ascii_uppercase() {
            let previous = chars[index - 1];
            if previous.is_ascii_lowercase() {
                out.push('_');
            } else if previous != '_'
                && chars
                    .get(index + 1)
                    .is_some_and(|next| next.is_ascii_lowercase())
            {
                out.push('_');
            }
        }
        out.push(current);
    }
    out.to_uppercase()
}

pub fn placeholder_name(resource_name: &str, field_name: &str) -> String {
    let prefix = to_upper_snake_case(resource_name.replace(' ', "_").as_str());
    format!("{prefix}_{}", to_upper_snake_case(field_name))
}

/// Placeholder for a rule path: only the last segment contributes to the name.
pub fn path_variable_name(resource_name: &str, path: &FieldPath) -> String {
    let field_name = path.last().map(|segment| segment.name()).unwrap_or_default();
    placeholder_name(resource_name, field_name)
}

#[cfg(test)]
#[path = "naming_test.rs"]
mod tests;
