use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Substitute `{{ env.VAR }}` placeholders in raw config text
///
/// `{{ env.VAR | default("value") }}` falls back to `value` when `VAR` is
/// unset. Lines that are TOML comments are copied unchanged.
pub fn expand_env(input: &str) -> Result<String, String> {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let placeholder = PLACEHOLDER.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    });

    let mut lines = Vec::new();
    for line in input.split('\n') {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
            continue;
        }

        let mut expanded = String::with_capacity(line.len());
        let mut cursor = 0;
        for captures in placeholder.captures_iter(line) {
            let Some(whole) = captures.get(0) else { continue };
            expanded.push_str(&line[cursor..whole.start()]);
            expanded.push_str(&resolve(&captures)?);
            cursor = whole.end();
        }
        expanded.push_str(&line[cursor..]);
        lines.push(expanded);
    }

    Ok(lines.join("\n"))
}

fn resolve(captures: &Captures<'_>) -> Result<String, String> {
    let key = &captures[1];
    let Some(var) = key.strip_prefix("env.").filter(|var| !var.is_empty() && !var.contains('.')) else {
        return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
    };

    match (std::env::var(var), captures.get(2)) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.as_str().to_owned()),
        (Err(_), None) => Err(format!("environment variable not found: `{var}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let input = "[server]\nlisten_address = \"127.0.0.1:3000\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn substitutes_set_variable() {
        temp_env::with_var("WEFT_TEST_LISTEN", Some("0.0.0.0:9000"), || {
            let result = expand_env("listen_address = \"{{ env.WEFT_TEST_LISTEN }}\"").unwrap();
            assert_eq!(result, "listen_address = \"0.0.0.0:9000\"");
        });
    }

    #[test]
    fn default_applies_when_unset() {
        temp_env::with_var_unset("WEFT_TEST_FILTER", || {
            let result = expand_env("filter = \"{{ env.WEFT_TEST_FILTER | default(\"debug\") }}\"").unwrap();
            assert_eq!(result, "filter = \"debug\"");
        });
    }

    #[test]
    fn missing_variable_is_an_error() {
        temp_env::with_var_unset("WEFT_TEST_MISSING", || {
            let err = expand_env("x = \"{{ env.WEFT_TEST_MISSING }}\"").unwrap_err();
            assert!(err.contains("WEFT_TEST_MISSING"));
        });
    }

    #[test]
    fn non_env_scope_is_rejected() {
        let err = expand_env("x = \"{{ secrets.TOKEN }}\"").unwrap_err();
        assert!(err.contains("secrets.TOKEN"));
    }

    #[test]
    fn comment_lines_are_not_expanded() {
        temp_env::with_var_unset("WEFT_TEST_COMMENTED", || {
            let input = "# {{ env.WEFT_TEST_COMMENTED }}\nx = 1";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }
}
