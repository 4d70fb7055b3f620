//! The record being judged: an open mapping of field names to scalar values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier field, matched by string form.
pub const ID: &str = "id";
/// Age field, checked by the validator and the age rule.
pub const AGE: &str = "age";
/// Verification flag, checked by the verified rule.
pub const VERIFIED: &str = "verified";
/// Region code, checked by the region rule.
pub const REGION: &str = "region";

/// A scalar field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Numeric view of the value. Booleans are not numbers.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Capitalized spellings; `list` output and id matching rely on them.
            Value::Null => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(n) => write!(f, "{n}"),
            // Debug keeps the fractional part: 5.0 stays "5.0", not "5".
            Value::Float(n) => write!(f, "{n:?}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A record: named fields with no fixed schema.
///
/// Only the validator and individual rules decide which fields matter.
/// Rules read through the defaulting accessors ([`Record::age_or_default`],
/// [`Record::is_verified`], [`Record::region_or_default`]) so a missing field
/// never makes a rule fail to produce a verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the four-field user record produced by the `add` command.
    pub fn user(id: impl Into<String>, age: i64, verified: bool, region: impl Into<String>) -> Self {
        Self::new()
            .with(ID, id.into())
            .with(AGE, age)
            .with(VERIFIED, verified)
            .with(REGION, region.into())
    }

    /// Builder-style field insert.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.fields.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// The id in string form, if the record has one.
    ///
    /// Ids are always compared by this form, so `Int(7)` and `Text("7")`
    /// identify the same record. Kept for compatibility with existing
    /// sessions that mix numeric and textual ids.
    pub fn id_string(&self) -> Option<String> {
        self.get(ID).map(Value::to_string)
    }

    /// Numeric age, or 0 when absent or non-numeric.
    pub fn age_or_default(&self) -> f64 {
        self.get(AGE).and_then(Value::as_number).unwrap_or(0.0)
    }

    /// True only when the verified flag is exactly boolean `true`.
    pub fn is_verified(&self) -> bool {
        self.get(VERIFIED).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Region code, or the empty string when absent or not text.
    pub fn region_or_default(&self) -> &str {
        self.get(REGION).and_then(Value::as_str).unwrap_or("")
    }

    /// One-line rendering used by `list`.
    pub fn summary(&self) -> String {
        let field = |key: &str| {
            self.get(key)
                .map(Value::to_string)
                .unwrap_or_else(|| "-".to_string())
        };
        format!(
            "id={} age={} verified={} region={}",
            field(ID),
            field(AGE),
            field(VERIFIED),
            field(REGION)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_record_fields() {
        let r = Record::user("u1", 25, true, "US");
        assert_eq!(r.get(ID), Some(&Value::Text("u1".into())));
        assert_eq!(r.get(AGE), Some(&Value::Int(25)));
        assert!(r.is_verified());
        assert_eq!(r.region_or_default(), "US");
    }

    #[test]
    fn defaults_for_missing_fields() {
        let r = Record::new();
        assert_eq!(r.age_or_default(), 0.0);
        assert!(!r.is_verified());
        assert_eq!(r.region_or_default(), "");
        assert_eq!(r.id_string(), None);
    }

    #[test]
    fn verified_must_be_boolean_true() {
        assert!(!Record::new().with(VERIFIED, "true").is_verified());
        assert!(!Record::new().with(VERIFIED, 1i64).is_verified());
    }

    #[test]
    fn id_string_form_matches_across_types() {
        let numeric = Record::new().with(ID, 7i64);
        let text = Record::new().with(ID, "7");
        assert_eq!(numeric.id_string(), text.id_string());
    }

    #[test]
    fn float_keeps_fraction_in_string_form() {
        assert_eq!(Value::Float(5.0).to_string(), "5.0");
        assert_eq!(Value::Float(17.5).to_string(), "17.5");
    }

    #[test]
    fn bool_and_null_use_capitalized_spelling() {
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Bool(false).to_string(), "False");
        assert_eq!(Value::Null.to_string(), "None");
        assert_eq!(Record::new().with(ID, true).id_string().as_deref(), Some("True"));
    }

    #[test]
    fn summary_line() {
        let r = Record::user("u2", 17, false, "UK");
        assert_eq!(r.summary(), "id=u2 age=17 verified=False region=UK");
    }

    #[test]
    fn deserializes_scalar_json() {
        let r: Record =
            serde_json::from_str(r#"{"id": 3, "age": 30.5, "verified": true, "region": null}"#)
                .unwrap();
        assert_eq!(r.get(ID), Some(&Value::Int(3)));
        assert_eq!(r.get(AGE), Some(&Value::Float(30.5)));
        assert_eq!(r.get(REGION), Some(&Value::Null));
        assert_eq!(r.region_or_default(), "");
    }
}
