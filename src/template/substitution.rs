//! Placeholder substitution for template bodies

/// Substitute `{{name}}` placeholders in a template body.
///
/// Placeholders without a matching variable are left as-is; they are template
/// authoring mistakes, not runtime errors.
pub fn substitute(body: &str, vars: &[(&str, &str)]) -> String {
    let mut result = body.to_string();

    for (key, value) in vars {
        let pattern = format!("{{{{{}}}}}", key);
        result = result.replace(&pattern, value);
    }

    result
}
