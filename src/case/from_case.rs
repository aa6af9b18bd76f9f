//! Decoding cased strings into space-separated lowercase words.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use super::StrConverter;

// An uppercase letter directly followed by a lowercase one starts a new word.
// Matches can never overlap, so `find_iter` sees every boundary.
static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z]").expect("valid camel boundary regex"));

/// Splits a string on a fixed separator and lowercases the pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromSepCase {
    sep: Cow<'static, str>,
}

impl FromSepCase {
    /// `snake_case`
    pub const SNAKE: FromSepCase = FromSepCase { sep: Cow::Borrowed("_") };
    /// `kebab-case`
    pub const KEBAB: FromSepCase = FromSepCase { sep: Cow::Borrowed("-") };

    pub fn new(sep: impl Into<Cow<'static, str>>) -> Self {
        Self { sep: sep.into() }
    }

    pub fn separator(&self) -> &str {
        &self.sep
    }

    pub fn convert(&self, s: &str) -> String {
        // An empty separator splits between every character.
        if self.sep.is_empty() {
            return s
                .chars()
                .map(|c| c.to_lowercase().collect::<String>())
                .collect::<Vec<_>>()
                .join(" ");
        }

        s.split(self.sep.as_ref())
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl StrConverter for FromSepCase {
    fn convert_str(&self, s: &str) -> String {
        self.convert(s)
    }
}

/// Build a converter splitting on `sep`
pub fn from_sep_case(sep: impl Into<Cow<'static, str>>) -> FromSepCase {
    FromSepCase::new(sep)
}

/// `"foo_Bar_BAZ"` -> `"foo bar baz"`
pub fn from_snake_case(s: &str) -> String {
    FromSepCase::SNAKE.convert(s)
}

/// `"foo-Bar-BAZ"` -> `"foo bar baz"`
pub fn from_kebab_case(s: &str) -> String {
    FromSepCase::KEBAB.convert(s)
}

/// Split a camelCase string into lowercase words.
///
/// A word starts at every uppercase letter that is followed by a lowercase
/// letter. Runs of uppercase letters are therefore not split away from the
/// preceding word: `"fooBARSpam"` becomes `"foobar spam"`, not
/// `"foo bar spam"`.
///
/// ```
/// use recase::from_camel_case;
///
/// assert_eq!(from_camel_case("fooBarBAZSpam5Foo6bar"), "foo barbaz spam5 foo6bar");
/// ```
pub fn from_camel_case(s: &str) -> String {
    let mut words = Vec::new();
    let mut start = 0;

    for boundary in CAMEL_BOUNDARY.find_iter(s) {
        if boundary.start() == 0 {
            continue;
        }
        words.push(s[start..boundary.start()].to_lowercase());
        start = boundary.start();
    }
    words.push(s[start..].to_lowercase());

    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{to_kebab_case, to_snake_case};

    #[test]
    fn test_from_camel_case() {
        assert_eq!(from_camel_case("fooBarBAZSpam5Foo6bar"), "foo barbaz spam5 foo6bar");
        assert_eq!(from_camel_case("FooBar"), "foo bar");
        assert_eq!(from_camel_case("foo"), "foo");
        assert_eq!(from_camel_case(""), "");
    }

    #[test]
    fn test_from_camel_case_keeps_acronyms_attached() {
        assert_eq!(from_camel_case("fooBARSpam"), "foobar spam");
        assert_eq!(from_camel_case("userID"), "userid");
        assert_eq!(from_camel_case("XMLHttpRequest"), "xml http request");
    }

    #[test]
    fn test_from_camel_case_ignores_non_cased_separators() {
        assert_eq!(from_camel_case("foo#bar.baz-spam_egg"), "foo#bar.baz-spam_egg");
    }

    #[test]
    fn test_from_snake_case() {
        assert_eq!(from_snake_case("foo_Bar_BAZ_sPAM_4test_test5"), "foo bar baz spam 4test test5");
        assert_eq!(from_snake_case("foo#bar.baz-spamEgg"), "foo#bar.baz-spamegg");
    }

    #[test]
    fn test_from_kebab_case() {
        assert_eq!(from_kebab_case("foo-Bar-BAZ-sPAM-4test-test5"), "foo bar baz spam 4test test5");
        assert_eq!(from_kebab_case("foo#bar.baz_spamEgg"), "foo#bar.baz_spamegg");
    }

    #[test]
    fn test_round_trip_on_lowercase_input() {
        for input in ["foo_bar", "a_1_b2", "single", "trailing_", "__x"] {
            assert_eq!(to_snake_case(&from_snake_case(input)), input);
        }
        for input in ["foo-bar", "x-request-id", "-lead"] {
            assert_eq!(to_kebab_case(&from_kebab_case(input)), input);
        }
    }

    #[test]
    fn test_custom_and_empty_separator() {
        assert_eq!(from_sep_case("::").convert("Std::Io::Error"), "std io error");
        assert_eq!(from_sep_case("").convert("AbC"), "a b c");
        assert_eq!(from_sep_case("").convert(""), "");
    }
}
