use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single loosely-typed scalar stored in a [`super::Row`].
///
/// Values are opaque to the store. The only thing a table ever does with
/// them is compare two of them for equality, so a number never equals a
/// [`Value::Text`] even when they print the same.
///
/// Integers are kept exact as [`Value::Integer`]. An integer equals a
/// [`Value::Float`] only when the float holds that same whole number, so
/// `1 == 1.0` but ids past 2^53 never collide with each other.
///
/// Serialised untagged, so a value is just a JSON scalar on disk.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

fn integer_equals_float(integer: i64, float: f64) -> bool {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    float.fract() == 0.0
        && float >= i64::MIN as f64
        && float < i64::MAX as f64
        && float as i64 == integer
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Integer(i), Value::Float(f)) | (Value::Float(f), Value::Integer(i)) => {
                integer_equals_float(*i, *f)
            }
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    pub fn parse_literal(token: &str) -> Value {
        //! Read a value the way a user types it on the command line.
        //!
        //! - `null`, `true` and `false` are keywords.
        //! - Whole numbers that fit an `i64` are a [`Value::Integer`],
        //! other finite numbers a [`Value::Float`].
        //! - Quotes (single or double) force text, so `"15"` stays a string.
        //! - Everything else is bare text.

        let token = token.trim();

        match token {
            "null" => return Value::Null,
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }

        for quote in ['"', '\''] {
            if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
                return Value::Text(token[1..token.len() - 1].to_string());
            }
        }

        if let Ok(integer) = token.parse::<i64>() {
            return Value::Integer(integer);
        }

        match token.parse::<f64>() {
            Ok(float) if float.is_finite() => Value::Float(float),
            _ => Value::Text(token.to_string()),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NIL"),
            Value::Bool(boolean) => write!(f, "{}", boolean),
            Value::Integer(integer) => write!(f, "{}", integer),
            Value::Float(float) => write!(f, "{}", float),
            Value::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn parse_literal_keywords() {
        assert_eq!(Value::parse_literal("null"), Value::Null);
        assert_eq!(Value::parse_literal("true"), Value::Bool(true));
        assert_eq!(Value::parse_literal(" false "), Value::Bool(false));
    }

    #[test]
    fn parse_literal_numbers_and_text() {
        assert!(matches!(Value::parse_literal("101"), Value::Integer(101)));
        assert!(matches!(Value::parse_literal("-2.5"), Value::Float(f) if f == -2.5));
        assert_eq!(Value::parse_literal("Ana"), Value::Text("Ana".to_string()));
        assert_eq!(Value::parse_literal("inf"), Value::Text("inf".to_string()));
    }

    #[test]
    fn parse_literal_quotes_force_text() {
        assert_eq!(Value::parse_literal("\"15\""), Value::Text("15".to_string()));
        assert_eq!(
            Value::parse_literal("'Ana Torres'"),
            Value::Text("Ana Torres".to_string())
        );
    }

    #[test]
    fn parse_literal_keeps_large_integers_exact() {
        assert!(matches!(
            Value::parse_literal("9007199254740993"),
            Value::Integer(9_007_199_254_740_993)
        ));
        assert_ne!(
            Value::parse_literal("9007199254740993"),
            Value::parse_literal("9007199254740992")
        );
    }

    #[test]
    fn integer_and_float_equal_only_on_whole_values() {
        assert_eq!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::from(1), Value::from(1.5));
        assert_ne!(Value::from(i64::MAX), Value::from(i64::MAX as f64));
        assert_ne!(
            Value::from(9_007_199_254_740_993_i64),
            Value::from(9_007_199_254_740_992.0)
        );
    }

    #[test]
    fn number_never_equals_text() {
        assert_ne!(Value::from(1), Value::from("1"));
        assert_eq!(Value::from(1), Value::from(1.0));
    }

    #[test]
    fn display_matches_cli_rendering() {
        assert_eq!(Value::Null.to_string(), "NIL");
        assert_eq!(Value::from(16).to_string(), "16");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
    }
}
