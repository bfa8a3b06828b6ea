//! Token clean-up shared by both syntaxes.

use crate::model::AttributeValue;

const QUOTES: [char; 2] = ['"', '\''];

/// Remove one matching pair of surrounding quotes and trim what is left.
/// Tokens without a balanced pair are returned as-is.
pub fn strip_quotes(token: &str) -> &str {
    for quote in QUOTES {
        if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
            return token[1..token.len() - 1].trim();
        }
    }
    token
}

/// Type a raw token: all digits is an integer; all digits once every `.` is
/// removed is a float; anything else is a string.
///
/// This is a shape heuristic, not number validation. `-5` stays a string,
/// and `1.2.3` looks like a float but cannot be parsed, so it falls back to
/// a string as well.
pub fn coerce(raw: &str) -> AttributeValue {
    if is_digits(raw) {
        if let Ok(n) = raw.parse::<i64>() {
            return AttributeValue::Integer(n);
        }
    }
    let undotted: String = raw.chars().filter(|c| *c != '.').collect();
    if is_digits(&undotted) {
        // A float that overflows to infinity cannot be written back as JSON.
        if let Some(n) = raw.parse::<f64>().ok().filter(|n| n.is_finite()) {
            return AttributeValue::Float(n);
        }
    }
    AttributeValue::String(raw.to_string())
}

/// Coerce a value that came out of a mapping literal. Numbers the literal
/// already typed are kept as they are.
pub fn coerce_value(value: AttributeValue) -> AttributeValue {
    match value {
        AttributeValue::String(s) => coerce(&s),
        typed => typed,
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_matching_quotes() {
        assert_eq!(strip_quotes("\"John\""), "John");
        assert_eq!(strip_quotes("'John'"), "John");
        assert_eq!(strip_quotes("\" padded \""), "padded");
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn leaves_unbalanced_quotes_alone() {
        assert_eq!(strip_quotes("\"John"), "\"John");
        assert_eq!(strip_quotes("'John\""), "'John\"");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("plain"), "plain");
    }

    #[test]
    fn digits_become_integers() {
        assert_eq!(coerce("123"), AttributeValue::Integer(123));
        assert_eq!(coerce("007"), AttributeValue::Integer(7));
    }

    #[test]
    fn dotted_digits_become_floats() {
        assert_eq!(coerce("1.5"), AttributeValue::Float(1.5));
        assert_eq!(coerce(".5"), AttributeValue::Float(0.5));
        assert_eq!(coerce("5."), AttributeValue::Float(5.0));
    }

    #[test]
    fn heuristic_misses_stay_strings() {
        assert_eq!(coerce("-5"), AttributeValue::String("-5".into()));
        assert_eq!(coerce("1.2.3"), AttributeValue::String("1.2.3".into()));
        assert_eq!(coerce("1e5"), AttributeValue::String("1e5".into()));
        assert_eq!(coerce("."), AttributeValue::String(".".into()));
        assert_eq!(coerce(""), AttributeValue::String("".into()));
    }

    #[test]
    fn oversized_integers_fall_back_to_float() {
        assert_eq!(
            coerce("99999999999999999999"),
            AttributeValue::Float(99999999999999999999.0)
        );
    }

    #[test]
    fn digits_too_large_for_a_float_stay_strings() {
        let huge = "9".repeat(400);
        assert_eq!(coerce(&huge), AttributeValue::String(huge.clone()));
        let dotted = format!("{}.5", huge);
        assert_eq!(coerce(&dotted), AttributeValue::String(dotted.clone()));
    }

    #[test]
    fn typed_values_are_not_recoerced() {
        assert_eq!(
            coerce_value(AttributeValue::Float(2.0)),
            AttributeValue::Float(2.0)
        );
        assert_eq!(
            coerce_value(AttributeValue::String("42".into())),
            AttributeValue::Integer(42)
        );
    }
}
