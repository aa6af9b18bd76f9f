//! Encoding space-separated words into cased strings.

use std::borrow::Cow;

use super::StrConverter;

/// Joins lowercase words with a fixed separator.
///
/// The input is lowercased and split on single spaces; the words are then
/// joined with `sep`. Other punctuation is left inside its word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToSepCase {
    sep: Cow<'static, str>,
}

impl ToSepCase {
    /// `snake_case`
    pub const SNAKE: ToSepCase = ToSepCase { sep: Cow::Borrowed("_") };
    /// `kebab-case`
    pub const KEBAB: ToSepCase = ToSepCase { sep: Cow::Borrowed("-") };

    pub fn new(sep: impl Into<Cow<'static, str>>) -> Self {
        Self { sep: sep.into() }
    }

    pub fn separator(&self) -> &str {
        &self.sep
    }

    pub fn convert(&self, s: &str) -> String {
        s.to_lowercase().split(' ').collect::<Vec<_>>().join(&self.sep)
    }
}

impl StrConverter for ToSepCase {
    fn convert_str(&self, s: &str) -> String {
        self.convert(s)
    }
}

/// Build a converter joining words with `sep`
pub fn to_sep_case(sep: impl Into<Cow<'static, str>>) -> ToSepCase {
    ToSepCase::new(sep)
}

/// `"foo bar BAZ"` -> `"foo_bar_baz"`
pub fn to_snake_case(s: &str) -> String {
    ToSepCase::SNAKE.convert(s)
}

/// `"foo bar BAZ"` -> `"foo-bar-baz"`
pub fn to_kebab_case(s: &str) -> String {
    ToSepCase::KEBAB.convert(s)
}

/// Convert space-separated words to camelCase.
///
/// Every word is lowercased, then each word after the first gets its first
/// character uppercased. Characters without an uppercase form (digits,
/// punctuation) are kept as they are.
///
/// ```
/// use recase::to_camel_case;
///
/// assert_eq!(to_camel_case("foo bar BAZ Spam"), "fooBarBazSpam");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut words = lower.split(' ');
    let mut out = String::with_capacity(lower.len());

    if let Some(first) = words.next() {
        out.push_str(first);
    }
    for word in words {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}
