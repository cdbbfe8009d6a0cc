//! Wire <-> model transform pair for boolean fields
//!
//! Copyright (c) 2025 Dtospec Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// Wire literal for `true` on stringified fields
pub const TRUE_LITERAL: &str = "true";

/// Wire literal for `false` on stringified fields
pub const FALSE_LITERAL: &str = "false";

/// Exact, case-sensitive reading of a stringified boolean
pub fn parse_literal(s: &str) -> Option<bool> {
    match s {
        TRUE_LITERAL => Some(true),
        FALSE_LITERAL => Some(false),
        _ => None,
    }
}

/// Wire literal for a boolean
pub fn literal(value: bool) -> &'static str {
    if value {
        TRUE_LITERAL
    } else {
        FALSE_LITERAL
    }
}

/// Parse / serialize directions of a boolean field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanTransform {
    stringified: bool,
}

impl BooleanTransform {
    pub fn new(stringified: bool) -> Self {
        Self { stringified }
    }

    /// Wire -> model
    ///
    /// Only the two exact literals are converted, and only when stringified.
    /// Anything else is returned untouched for the rule to reject.
    pub fn parse(&self, raw: &Value) -> Value {
        if self.stringified {
            if let Value::String(s) = raw {
                if let Some(value) = parse_literal(s) {
                    tracing::trace!(literal = %s, "parsed stringified boolean");
                    return Value::Bool(value);
                }
            }
        }
        raw.clone()
    }

    /// Model -> wire
    pub fn serialize(&self, value: bool) -> Value {
        if self.stringified {
            Value::String(literal(value).to_string())
        } else {
            Value::Bool(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literal_table() {
        assert_eq!(parse_literal("true"), Some(true));
        assert_eq!(parse_literal("false"), Some(false));
        assert_eq!(parse_literal("True"), None);
        assert_eq!(parse_literal(" false"), None);
        assert_eq!(parse_literal(""), None);
        assert_eq!(literal(true), "true");
        assert_eq!(literal(false), "false");
    }

    #[test]
    fn test_plain_parse_is_identity() {
        let transform = BooleanTransform::new(false);
        assert_eq!(transform.parse(&json!("true")), json!("true"));
        assert_eq!(transform.parse(&json!(true)), json!(true));
        assert_eq!(transform.parse(&json!(0)), json!(0));
    }

    #[test]
    fn test_stringified_parse_converts_only_exact_literals() {
        let transform = BooleanTransform::new(true);
        assert_eq!(transform.parse(&json!("true")), json!(true));
        assert_eq!(transform.parse(&json!("false")), json!(false));
        assert_eq!(transform.parse(&json!(false)), json!(false));
        assert_eq!(transform.parse(&json!("TRUE")), json!("TRUE"));
        assert_eq!(transform.parse(&json!(1)), json!(1));
        assert_eq!(transform.parse(&Value::Null), Value::Null);
    }

    #[test]
    fn test_serialize() {
        assert_eq!(BooleanTransform::new(false).serialize(true), json!(true));
        assert_eq!(BooleanTransform::new(true).serialize(true), json!("true"));
        assert_eq!(BooleanTransform::new(true).serialize(false), json!("false"));
    }
}
