//! Values extracted from framework state, ready for rendering.
//!
//! PHP hands us loosely typed data: scalars, arrays used as ordered maps,
//! arrays used as lists, and "nothing here" markers. [`Value`] is the closed
//! set of shapes the structure renderer accepts, so every variant has an
//! explicit rendering rule instead of runtime type sniffing.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

/// A single piece of framework state.
///
/// Mappings keep insertion order: a PHP array displays in the order it was
/// built, and the report must match what the application author wrote.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// PHP `null`; renders as `NULL`.
    Null,
    /// Boolean; renders as `true`/`false`.
    Bool(bool),
    /// Integer; renders in decimal.
    Int(i64),
    /// Float; renders via its `Display` form.
    Float(f64),
    /// String; renders as-is (report output is trusted debug context).
    Str(String),
    /// Explicit "no data" marker, distinct from an absent entry.
    Empty,
    /// Sequence; renders like a mapping keyed by decimal indices.
    List(Vec<Value>),
    /// Ordered mapping; iteration order is insertion order.
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Borrow the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the mapping entries, if this is a mapping.
    pub fn as_map(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a mapping entry by key. Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// True for `Empty` and for mappings/sequences with no entries.
    ///
    /// All of these render as the empty-array indicator.
    pub fn is_empty_container(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::List(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl<'de> Deserialize<'de> for Value {
    /// Deserializes any JSON value.
    ///
    /// Objects become [`Value::Map`] with entries in document order; the
    /// snapshot exporter writes arrays in PHP iteration order, and this is
    /// what carries that order through to the report.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("any JSON value")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Int(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Value, E>
            where
                E: de::Error,
            {
                // Values above i64::MAX are rare in framework dumps; keep
                // them displayable rather than failing the whole snapshot.
                Ok(i64::try_from(v)
                    .map(Value::Int)
                    .unwrap_or(Value::Float(v as f64)))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Float(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Str(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Str(v))
            }

            fn visit_unit<E>(self) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Value, E>
            where
                E: de::Error,
            {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(Value::Map(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).expect("valid JSON")
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(2.5f64), Value::Float(2.5));
        assert_eq!(Value::from("abc"), Value::Str("abc".to_string()));
        assert_eq!(
            Value::from(String::from("abc")),
            Value::Str("abc".to_string())
        );
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::Int(1).as_str(), None);
    }

    #[test]
    fn test_get_on_map() {
        let map = Value::Map(vec![
            ("a".to_string(), Value::Int(1)),
            ("b".to_string(), Value::Int(2)),
        ]);
        assert_eq!(map.get("b"), Some(&Value::Int(2)));
        assert_eq!(map.get("c"), None);
        assert_eq!(Value::Int(1).get("a"), None);
    }

    #[test]
    fn test_is_empty_container() {
        assert!(Value::Empty.is_empty_container());
        assert!(Value::Map(vec![]).is_empty_container());
        assert!(Value::List(vec![]).is_empty_container());
        assert!(!Value::Null.is_empty_container());
        assert!(!Value::Str(String::new()).is_empty_container());
        assert!(!Value::List(vec![Value::Null]).is_empty_container());
    }

    // ========================================
    // Deserialization
    // ========================================

    #[test]
    fn test_deserialize_scalars() {
        assert_eq!(parse("null"), Value::Null);
        assert_eq!(parse("true"), Value::Bool(true));
        assert_eq!(parse("false"), Value::Bool(false));
        assert_eq!(parse("7"), Value::Int(7));
        assert_eq!(parse("-7"), Value::Int(-7));
        assert_eq!(parse("1.5"), Value::Float(1.5));
        assert_eq!(parse("\"hi\""), Value::Str("hi".to_string()));
    }

    #[test]
    fn test_deserialize_u64_overflow_falls_back_to_float() {
        // One above i64::MAX.
        let v = parse("9223372036854775808");
        assert!(matches!(v, Value::Float(_)));
    }

    #[test]
    fn test_deserialize_containers() {
        assert_eq!(parse("[]"), Value::List(vec![]));
        assert_eq!(parse("{}"), Value::Map(vec![]));
        assert_eq!(
            parse("[1, \"a\"]"),
            Value::List(vec![Value::Int(1), Value::Str("a".to_string())])
        );
    }

    #[test]
    fn test_deserialize_preserves_map_order() {
        let v = parse(r#"{"zulu": 1, "alpha": 2, "mike": 3}"#);
        let entries = v.as_map().expect("map");
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn test_deserialize_nested() {
        let v = parse(r#"{"outer": {"inner": [null, {"deep": true}]}}"#);
        let inner = v.get("outer").and_then(|o| o.get("inner")).expect("inner");
        match inner {
            Value::List(items) => {
                assert_eq!(items[0], Value::Null);
                assert_eq!(items[1].get("deep"), Some(&Value::Bool(true)));
            }
            other => panic!("expected list, got {:?}", other),
        }
    }
}
