// src/actions/parsing.rs
//! Parsing of inline handler expressions like `switchTab('install-manual')`.
use crate::core::prelude::*;
use crate::t;
use regex::Regex;
use std::sync::LazyLock;

static CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([A-Za-z_$][A-Za-z0-9_$]*)\s*\(\s*(?:'([^']*)'|"([^"]*)")?\s*\)$"#)
        .expect("valid call regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub arg: Option<String>,
}

/// Splits `expression` on `;` and parses every call. `return false` /
/// `return true` statements are skipped.
pub fn parse_expression(expression: &str) -> Result<Vec<Invocation>> {
    expression
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty() && !matches!(*stmt, "return false" | "return true"))
        .map(parse_call)
        .collect()
}

fn parse_call(statement: &str) -> Result<Invocation> {
    let caps = CALL
        .captures(statement)
        .ok_or_else(|| AppError::Validation(t!("action.parse_error", statement)))?;

    Ok(Invocation {
        name: caps[1].to_string(),
        arg: caps
            .get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, arg: Option<&str>) -> Invocation {
        Invocation {
            name: name.into(),
            arg: arg.map(Into::into),
        }
    }

    #[test]
    fn single_and_chained_calls() {
        assert_eq!(
            parse_expression("switchTab('install-manual')").unwrap(),
            vec![call("switchTab", Some("install-manual"))]
        );
        assert_eq!(
            parse_expression(r#"toggleMobileMenu(); switchLanguage("en"); return false;"#).unwrap(),
            vec![call("toggleMobileMenu", None), call("switchLanguage", Some("en"))]
        );
    }

    #[test]
    fn empty_string_argument_is_kept() {
        assert_eq!(
            parse_expression("copyOneliner('')").unwrap(),
            vec![call("copyOneliner", Some(""))]
        );
    }

    #[test]
    fn garbage_is_a_validation_error() {
        for bad in ["alert(1 + 2)", "switchTab('a'", "x = 1"] {
            assert!(
                matches!(parse_expression(bad), Err(AppError::Validation(_))),
                "{} should not parse",
                bad
            );
        }
    }
}
