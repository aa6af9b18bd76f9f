//! Recursive key/value rewriting of plain data trees.
//!
//! A [`DataConverter`] is configured once with a string converter and
//! [`ConvertOptions`], then applied to any number of trees. Each application
//! builds a new tree; the input is never modified.
//!
//! # Example
//!
//! ```
//! use recase::{convert_data, ConvertOptions, Data};
//! use serde_json::json;
//!
//! let upper_keys = convert_data(str::to_uppercase, ConvertOptions::new().keys(true));
//! let out = upper_keys(&Data::from(json!({"myTags": ["fooBar"]})));
//! assert_eq!(out, Data::from(json!({"MYTAGS": ["fooBar"]})));
//! ```
//!
//! Recursion follows the nesting of the input and has no depth limit.

use serde_json::Value;

use crate::case::StrConverter;
use crate::data::{Data, Mapping};

/// What a [`DataConverter`] rewrites. Both targets are off by default, which
/// makes the converter an identity transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Pass mapping keys through the converter (default `false`)
    pub keys: bool,
    /// Pass string values, including sequence items, through the converter
    /// (default `false`)
    pub values: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite both keys and values
    pub fn all() -> Self {
        Self { keys: true, values: true }
    }

    pub fn keys(mut self, enabled: bool) -> Self {
        self.keys = enabled;
        self
    }

    pub fn values(mut self, enabled: bool) -> Self {
        self.values = enabled;
        self
    }

    /// True when neither keys nor values are rewritten
    pub fn is_identity(&self) -> bool {
        !self.keys && !self.values
    }
}

/// Applies a string converter throughout a data tree.
///
/// Strings are rewritten when `values` is set, mapping keys when `keys` is
/// set. Sequences and mappings are rebuilt with the same shape and order.
/// [`Opaque`](crate::Opaque) leaves are returned as they are: shared leaves
/// keep pointing at the same allocation.
#[derive(Debug, Clone)]
pub struct DataConverter<F> {
    convert_str: F,
    options: ConvertOptions,
}

impl<F: StrConverter> DataConverter<F> {
    pub fn new(convert_str: F, options: ConvertOptions) -> Self {
        Self {
            convert_str,
            options,
        }
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Build a converted copy of `value`
    pub fn convert(&self, value: &Data) -> Data {
        match value {
            Data::String(s) => Data::String(self.value(s)),
            Data::Sequence(items) => {
                Data::Sequence(items.iter().map(|item| self.convert(item)).collect())
            }
            Data::Mapping(map) => Data::Mapping(
                map.iter()
                    .map(|(key, item)| (self.key(key), self.convert(item)))
                    .collect::<Mapping>(),
            ),
            Data::Opaque(opaque) => Data::Opaque(opaque.clone()),
        }
    }

    /// Like [`convert`](Self::convert), but reuses the nodes of `value`
    pub fn convert_owned(&self, value: Data) -> Data {
        match value {
            Data::String(s) if self.options.values => {
                Data::String(self.convert_str.convert_str(&s))
            }
            Data::Sequence(items) => Data::Sequence(
                items
                    .into_iter()
                    .map(|item| self.convert_owned(item))
                    .collect(),
            ),
            Data::Mapping(map) => Data::Mapping(
                map.into_iter()
                    .map(|(key, item)| {
                        let key = if self.options.keys { self.key(&key) } else { key };
                        (key, self.convert_owned(item))
                    })
                    .collect::<Mapping>(),
            ),
            other => other,
        }
    }

    /// Convert a JSON value directly.
    ///
    /// Numbers, booleans and null are leaves, like [`Opaque`](crate::Opaque)
    /// nodes of a [`Data`] tree.
    pub fn convert_json(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => Value::String(self.value(s)),
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.convert_json(item)).collect())
            }
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, item)| (self.key(key), self.convert_json(item)))
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    fn value(&self, s: &str) -> String {
        if self.options.values {
            self.convert_str.convert_str(s)
        } else {
            s.to_string()
        }
    }

    fn key(&self, key: &str) -> String {
        if !self.options.keys {
            return key.to_string();
        }
        let converted = self.convert_str.convert_str(key);
        tracing::trace!("Rewrote key '{}' -> '{}'", key, converted);
        converted
    }
}

/// Configure a converter once and get back a function applying it.
///
/// Shorthand for [`DataConverter::new`] followed by
/// [`DataConverter::convert`].
pub fn convert_data<F: StrConverter>(
    convert_str: F,
    options: ConvertOptions,
) -> impl Fn(&Data) -> Data {
    let converter = DataConverter::new(convert_str, options);
    move |value: &Data| converter.convert(value)
}
