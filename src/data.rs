//! Plain data trees.
//!
//! [`Data`] is the value the [`DataConverter`](crate::DataConverter) walks. The
//! variant of every node is fixed when the tree is built: strings, sequences
//! and string-keyed mappings are containers the converter may rewrite, and
//! everything else is an [`Opaque`] leaf it passes through untouched.
//!
//! Trees are usually built from a `serde_json::Value` or deserialized from any
//! serde format:
//!
//! ```
//! use recase::Data;
//! use serde_json::json;
//!
//! let data = Data::from(json!({"userName": "ada", "tags": ["admin"], "age": 36}));
//! assert_eq!(data.kind(), "mapping");
//! assert!(data.as_mapping().unwrap()["age"].is_opaque());
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use regex::Regex;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serialize, Serializer};
use serde_json::{Number, Value};

/// String-keyed mapping, iterated in insertion order
pub type Mapping = IndexMap<String, Data>;

/// A node of a plain data tree
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    String(String),
    Sequence(Vec<Data>),
    Mapping(Mapping),
    Opaque(Opaque),
}

/// A leaf that is never converted or recursed into.
///
/// `Regex` and `Other` are reference counted, so cloning a tree shares them
/// rather than copying them.
#[derive(Clone)]
pub enum Opaque {
    Null,
    Bool(bool),
    Number(Number),
    DateTime(DateTime<Utc>),
    Regex(Arc<Regex>),
    /// Any host value with no plain-data representation
    Other(Arc<dyn Any + Send + Sync>),
}

/// Error type for conversions out of a data tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    Unrepresentable { kind: &'static str },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Unrepresentable { kind } => {
                write!(f, "Cannot represent {} value as JSON", kind)
            }
        }
    }
}

impl std::error::Error for DataError {}

impl Data {
    /// Wrap an arbitrary host value as an opaque leaf
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Data::Opaque(Opaque::Other(Arc::new(value)))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Data::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Data]> {
        match self {
            Data::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Data::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Data::Opaque(opaque) => Some(opaque),
            _ => None,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Data::Opaque(_))
    }

    /// Short name of the node variant, for messages
    pub fn kind(&self) -> &'static str {
        match self {
            Data::String(_) => "string",
            Data::Sequence(_) => "sequence",
            Data::Mapping(_) => "mapping",
            Data::Opaque(opaque) => opaque.kind(),
        }
    }
}

impl Opaque {
    pub fn kind(&self) -> &'static str {
        match self {
            Opaque::Null => "null",
            Opaque::Bool(_) => "bool",
            Opaque::Number(_) => "number",
            Opaque::DateTime(_) => "datetime",
            Opaque::Regex(_) => "regex",
            Opaque::Other(_) => "other",
        }
    }

    /// Whether both leaves are the same value.
    ///
    /// Shared leaves (`Regex`, `Other`) must be the same allocation; plain
    /// scalars compare by value.
    pub fn is_same(&self, other: &Opaque) -> bool {
        match (self, other) {
            (Opaque::Regex(a), Opaque::Regex(b)) => Arc::ptr_eq(a, b),
            (Opaque::Other(a), Opaque::Other(b)) => Arc::ptr_eq(a, b),
            _ => self == other,
        }
    }

    /// Borrow the host value of an `Other` leaf as `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Opaque::Other(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Opaque::Null, Opaque::Null) => true,
            (Opaque::Bool(a), Opaque::Bool(b)) => a == b,
            (Opaque::Number(a), Opaque::Number(b)) => a == b,
            (Opaque::DateTime(a), Opaque::DateTime(b)) => a == b,
            (Opaque::Regex(a), Opaque::Regex(b)) => a.as_str() == b.as_str(),
            (Opaque::Other(a), Opaque::Other(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opaque::Null => f.write_str("Null"),
            Opaque::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Opaque::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Opaque::DateTime(dt) => f.debug_tuple("DateTime").field(dt).finish(),
            Opaque::Regex(re) => f.debug_tuple("Regex").field(&re.as_str()).finish(),
            Opaque::Other(_) => f.write_str("Other(..)"),
        }
    }
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

// Constructors ----------------------------------------------------------------

impl From<&str> for Data {
    fn from(s: &str) -> Self {
        Data::String(s.to_string())
    }
}

impl From<String> for Data {
    fn from(s: String) -> Self {
        Data::String(s)
    }
}

impl From<Vec<Data>> for Data {
    fn from(items: Vec<Data>) -> Self {
        Data::Sequence(items)
    }
}

impl From<Mapping> for Data {
    fn from(map: Mapping) -> Self {
        Data::Mapping(map)
    }
}

impl From<Opaque> for Data {
    fn from(opaque: Opaque) -> Self {
        Data::Opaque(opaque)
    }
}

impl From<bool> for Data {
    fn from(b: bool) -> Self {
        Data::Opaque(Opaque::Bool(b))
    }
}

impl From<i64> for Data {
    fn from(n: i64) -> Self {
        Data::Opaque(Opaque::Number(n.into()))
    }
}

impl From<u64> for Data {
    fn from(n: u64) -> Self {
        Data::Opaque(Opaque::Number(n.into()))
    }
}

impl From<f64> for Data {
    /// Non-finite floats have no number representation and become `Null`.
    fn from(n: f64) -> Self {
        Data::Opaque(Number::from_f64(n).map_or(Opaque::Null, Opaque::Number))
    }
}

impl From<DateTime<Utc>> for Data {
    fn from(dt: DateTime<Utc>) -> Self {
        Data::Opaque(Opaque::DateTime(dt))
    }
}

impl From<Regex> for Data {
    fn from(re: Regex) -> Self {
        Data::Opaque(Opaque::Regex(Arc::new(re)))
    }
}

impl From<Value> for Data {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Data::String(s),
            Value::Array(items) => Data::Sequence(items.into_iter().map(Data::from).collect()),
            Value::Object(map) => {
                Data::Mapping(map.into_iter().map(|(k, v)| (k, Data::from(v))).collect())
            }
            Value::Null => Data::Opaque(Opaque::Null),
            Value::Bool(b) => Data::Opaque(Opaque::Bool(b)),
            Value::Number(n) => Data::Opaque(Opaque::Number(n)),
        }
    }
}

impl TryFrom<Data> for Value {
    type Error = DataError;

    fn try_from(data: Data) -> Result<Self, Self::Error> {
        let value = match data {
            Data::String(s) => Value::String(s),
            Data::Sequence(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Data::Mapping(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| Ok((k, Value::try_from(v)?)))
                    .collect::<Result<_, DataError>>()?,
            ),
            Data::Opaque(opaque) => match opaque {
                Opaque::Null => Value::Null,
                Opaque::Bool(b) => Value::Bool(b),
                Opaque::Number(n) => Value::Number(n),
                Opaque::DateTime(dt) => Value::String(format_datetime(&dt)),
                Opaque::Regex(re) => Value::String(re.as_str().to_string()),
                Opaque::Other(_) => return Err(DataError::Unrepresentable { kind: "other" }),
            },
        };
        Ok(value)
    }
}

// Serde -----------------------------------------------------------------------

impl Serialize for Data {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Data::String(s) => serializer.serialize_str(s),
            Data::Sequence(items) => serializer.collect_seq(items),
            Data::Mapping(map) => serializer.collect_map(map),
            Data::Opaque(opaque) => opaque.serialize(serializer),
        }
    }
}

impl Serialize for Opaque {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Opaque::Null => serializer.serialize_unit(),
            Opaque::Bool(b) => serializer.serialize_bool(*b),
            Opaque::Number(n) => n.serialize(serializer),
            Opaque::DateTime(dt) => serializer.serialize_str(&format_datetime(dt)),
            Opaque::Regex(re) => serializer.serialize_str(re.as_str()),
            Opaque::Other(_) => Err(ser::Error::custom(
                "opaque host value cannot be serialized",
            )),
        }
    }
}

struct DataVisitor;

impl<'de> Visitor<'de> for DataVisitor {
    type Value = Data;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, sequence, string-keyed map or scalar")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Data, E> {
        Ok(Data::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Data, E> {
        Ok(Data::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Data, E> {
        Ok(Data::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Data, E> {
        Number::from_f64(v)
            .map(|n| Data::Opaque(Opaque::Number(n)))
            .ok_or_else(|| E::custom(format!("non-finite number {}", v)))
    }

    // Integers wider than 64 bits degrade to floats, as serde_json does.
    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Data, E> {
        match i64::try_from(v) {
            Ok(n) => Ok(Data::from(n)),
            Err(_) => self.visit_f64(v as f64),
        }
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Data, E> {
        match u64::try_from(v) {
            Ok(n) => Ok(Data::from(n)),
            Err(_) => self.visit_f64(v as f64),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Data, E> {
        Ok(Data::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Data, E> {
        Ok(Data::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Data, E> {
        Ok(Data::Opaque(Opaque::Null))
    }

    fn visit_none<E: de::Error>(self) -> Result<Data, E> {
        Ok(Data::Opaque(Opaque::Null))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Data, D::Error> {
        Data::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Data, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(1024));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Data::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Data, A::Error> {
        let mut map = Mapping::with_capacity(access.size_hint().unwrap_or(0).min(1024));
        while let Some((key, value)) = access.next_entry::<String, Data>()? {
            map.insert(key, value);
        }
        Ok(Data::Mapping(map))
    }
}

impl<'de> Deserialize<'de> for Data {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DataVisitor)
    }
}
