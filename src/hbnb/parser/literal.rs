//! Reader for the `{"name": value, ...}` literal accepted by `update`.
//!
//! Keys are single- or double-quoted strings. Values are quoted strings or
//! numbers (optional sign, fraction and exponent). Pairs come back in source
//! order; a repeated key appears twice and the later one wins when applied.

use crate::error::{HbnbError, Result};
use crate::model::AttributeValue;
use std::iter::Peekable;
use std::str::Chars;

pub fn parse_mapping(source: &str) -> Result<Vec<(String, AttributeValue)>> {
    let mut cursor = Cursor {
        chars: source.chars().peekable(),
    };
    cursor.skip_ws();
    cursor.expect('{')?;

    let mut pairs = Vec::new();
    loop {
        cursor.skip_ws();
        if cursor.eat('}') {
            break;
        }
        let key = match cursor.peek() {
            Some('"') | Some('\'') => cursor.string()?,
            Some(c) => return Err(malformed(format!("expected a quoted key, found '{}'", c))),
            None => return Err(malformed("unexpected end of input")),
        };
        cursor.skip_ws();
        cursor.expect(':')?;
        cursor.skip_ws();
        let value = cursor.value()?;
        pairs.push((key, value));

        cursor.skip_ws();
        if cursor.eat(',') {
            continue;
        }
        cursor.expect('}')?;
        break;
    }

    cursor.skip_ws();
    if let Some(c) = cursor.peek() {
        return Err(malformed(format!("unexpected '{}' after closing brace", c)));
    }
    Ok(pairs)
}

fn malformed(reason: impl Into<String>) -> HbnbError {
    HbnbError::MalformedMapping(reason.into())
}

struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Cursor<'_> {
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.chars.next();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.chars.next() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(malformed(format!("expected '{}', found '{}'", expected, c))),
            None => Err(malformed(format!("expected '{}', found end of input", expected))),
        }
    }

    fn string(&mut self) -> Result<String> {
        let quote = self
            .chars
            .next()
            .ok_or_else(|| malformed("unexpected end of input"))?;
        let mut out = String::new();
        loop {
            match self.chars.next() {
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.chars.next() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(c @ ('\\' | '\'' | '"')) => out.push(c),
                    Some(c) => {
                        out.push('\\');
                        out.push(c);
                    }
                    None => return Err(malformed("unterminated string")),
                },
                Some(c) => out.push(c),
                None => return Err(malformed("unterminated string")),
            }
        }
    }

    fn value(&mut self) -> Result<AttributeValue> {
        match self.peek() {
            Some('"') | Some('\'') => Ok(AttributeValue::String(self.string()?)),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.number(),
            Some(c) => Err(malformed(format!("unsupported value starting with '{}'", c))),
            None => Err(malformed("unexpected end of input")),
        }
    }

    fn number(&mut self) -> Result<AttributeValue> {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E' | '_') {
                text.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        let digits: String = text.chars().filter(|c| *c != '_').collect();
        let is_float = digits.contains(['.', 'e', 'E']);
        if !is_float {
            if let Ok(n) = digits.parse::<i64>() {
                return Ok(AttributeValue::Integer(n));
            }
        }
        match digits.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(AttributeValue::Float(n)),
            Ok(_) => Err(malformed(format!("number out of range '{}'", text))),
            Err(_) => Err(malformed(format!("invalid number '{}'", text))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> AttributeValue {
        AttributeValue::String(v.to_string())
    }

    #[test]
    fn reads_pairs_in_source_order() {
        let pairs = parse_mapping(r#"{"b": "x", 'a': 1, "c": 2.5}"#).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("b".to_string(), s("x")),
                ("a".to_string(), AttributeValue::Integer(1)),
                ("c".to_string(), AttributeValue::Float(2.5)),
            ]
        );
    }

    #[test]
    fn reads_signed_and_exponent_numbers() {
        let pairs = parse_mapping("{'lat': -37.77, 'n': -5, 'big': 1e3}").unwrap();
        assert_eq!(pairs[0].1, AttributeValue::Float(-37.77));
        assert_eq!(pairs[1].1, AttributeValue::Integer(-5));
        assert_eq!(pairs[2].1, AttributeValue::Float(1000.0));
    }

    #[test]
    fn handles_escapes_and_trailing_comma() {
        let pairs = parse_mapping(r#"{"text": "it\'s \"fine\"", }"#).unwrap();
        assert_eq!(pairs, vec![("text".to_string(), s("it's \"fine\""))]);
    }

    #[test]
    fn rejects_numbers_beyond_float_range() {
        let huge = format!("{{'n': {}}}", "9".repeat(400));
        for bad in ["{'n': 1e999}", "{'n': -1e999}", huge.as_str()] {
            let err = parse_mapping(bad).unwrap_err();
            assert!(err.to_string().contains("out of range"), "{}", bad);
        }
    }

    #[test]
    fn empty_mapping_has_no_pairs() {
        assert!(parse_mapping("{}").unwrap().is_empty());
        assert!(parse_mapping("  { }  ").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_literals() {
        for bad in [
            "{",
            "{\"a\" 1}",
            "{a: 1}",
            "{\"a\": 1",
            "{\"a\": True}",
            "{\"a\": [1]}",
            "{\"a\": 'open}",
            "{\"a\": 1} extra",
            "{\"a\": 1-2}",
            "\"a\": 1",
        ] {
            assert!(
                matches!(parse_mapping(bad), Err(HbnbError::MalformedMapping(_))),
                "accepted {}",
                bad
            );
        }
    }
}
