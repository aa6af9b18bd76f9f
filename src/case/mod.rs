//! String case conversion.
//!
//! Every convention is handled in two directions: *encoding* a space-separated
//! word sequence into a cased string (`to_*` functions) and *decoding* a cased
//! string back into lowercase words (`from_*` functions). Converting between
//! two conventions goes through the word form, see [`Recase`].
//!
//! All converters are total: any input string produces an output string.

pub mod from_case;
pub mod to_case;

use std::fmt;
use std::str::FromStr;

pub use from_case::{from_camel_case, from_kebab_case, from_sep_case, from_snake_case, FromSepCase};
pub use to_case::{to_camel_case, to_kebab_case, to_sep_case, to_snake_case, ToSepCase};

/// Compose two functions, applying `f` first and then `g`.
///
/// # Example
///
/// ```
/// use recase::pipe;
///
/// let describe = pipe(|n: i32| n * 2, |n: i32| format!("got {}", n));
/// assert_eq!(describe(21), "got 42");
/// ```
pub fn pipe<X, Y, Z, F, G>(f: F, g: G) -> impl Fn(X) -> Z
where
    F: Fn(X) -> Y,
    G: Fn(Y) -> Z,
{
    move |x| g(f(x))
}

/// A string-to-string conversion that can be handed to a
/// [`DataConverter`](crate::DataConverter).
///
/// Implemented for every `Fn(&str) -> String`, so plain functions such as
/// [`to_snake_case`] or `str::to_uppercase` work directly. Closures need an
/// annotated argument (`|s: &str| ...`) to be accepted for any lifetime.
pub trait StrConverter {
    /// Convert a single string
    fn convert_str(&self, s: &str) -> String;

    /// Chain another converter after this one.
    ///
    /// ```
    /// use recase::{from_camel_case, to_kebab_case, StrConverter};
    ///
    /// let camel_to_kebab = from_camel_case.then(to_kebab_case);
    /// assert_eq!(camel_to_kebab.convert_str("myFieldName"), "my-field-name");
    /// ```
    fn then<G>(self, next: G) -> Pipe<Self, G>
    where
        Self: Sized,
        G: StrConverter,
    {
        Pipe { first: self, second: next }
    }
}

impl<F> StrConverter for F
where
    F: Fn(&str) -> String,
{
    fn convert_str(&self, s: &str) -> String {
        self(s)
    }
}

/// Two string converters applied one after the other.
///
/// Built by [`StrConverter::then`].
#[derive(Debug, Clone, Copy)]
pub struct Pipe<F, G> {
    first: F,
    second: G,
}

impl<F: StrConverter, G: StrConverter> StrConverter for Pipe<F, G> {
    fn convert_str(&self, s: &str) -> String {
        self.second.convert_str(&self.first.convert_str(s))
    }
}

/// A named casing convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// Lowercase words separated by single spaces: `my field name`
    Words,
    /// `myFieldName`
    Camel,
    /// `my_field_name`
    Snake,
    /// `my-field-name`
    Kebab,
}

impl Case {
    /// All known conventions
    pub const ALL: [Case; 4] = [Case::Words, Case::Camel, Case::Snake, Case::Kebab];

    /// Canonical name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Case::Words => "words",
            Case::Camel => "camel",
            Case::Snake => "snake",
            Case::Kebab => "kebab",
        }
    }

    /// Split a string written in this convention into lowercase words
    pub fn decode(self, s: &str) -> String {
        match self {
            Case::Words => from_sep_case(" ").convert(s),
            Case::Camel => from_camel_case(s),
            Case::Snake => from_snake_case(s),
            Case::Kebab => from_kebab_case(s),
        }
    }

    /// Join space-separated words into this convention
    pub fn encode(self, words: &str) -> String {
        match self {
            Case::Words => to_sep_case(" ").convert(words),
            Case::Camel => to_camel_case(words),
            Case::Snake => to_snake_case(words),
            Case::Kebab => to_kebab_case(words),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = UnknownCase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "words" | "space" => Ok(Case::Words),
            "camel" => Ok(Case::Camel),
            "snake" => Ok(Case::Snake),
            "kebab" => Ok(Case::Kebab),
            _ => Err(UnknownCase(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognised case name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCase(pub String);

impl fmt::Display for UnknownCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown case '{}' (expected one of: words, camel, snake, kebab)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCase {}

/// Converts strings from one convention to another through the word form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recase {
    pub from: Case,
    pub to: Case,
}

impl Recase {
    pub fn new(from: Case, to: Case) -> Self {
        Self { from, to }
    }

    pub fn convert(&self, s: &str) -> String {
        self.to.encode(&self.from.decode(s))
    }
}

impl StrConverter for Recase {
    fn convert_str(&self, s: &str) -> String {
        self.convert(s)
    }
}
