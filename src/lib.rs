//! # Recase: String Case Conversion for Text and Plain Data
//!
//! Recase converts strings between casing conventions and rewrites the keys
//! and/or string values of nested plain data with any string converter.
//!
//! ## Features
//!
//! - **Case converters**: `to_camel_case`, `to_snake_case`, `to_kebab_case` and
//!   their inverses, plus separator-parameterised `to_sep_case` / `from_sep_case`
//! - **Data transformer**: [`DataConverter`] / [`convert_data`] walk a [`Data`]
//!   tree and rewrite mapping keys, string values, or both
//! - **Opaque leaves**: numbers, dates, regexes and arbitrary host values pass
//!   through unchanged and keep their identity
//! - **Documents**: read and write trees as JSON, NDJSON or YAML
//!
//! ## Example: normalising an API payload
//!
//! ```
//! use recase::{from_camel_case, to_snake_case, ConvertOptions, Data, DataConverter, StrConverter};
//! use serde_json::json;
//!
//! let payload = Data::from(json!({
//!     "userId": 42,
//!     "displayName": "Ada",
//!     "accountFlags": {"isAdmin": true}
//! }));
//!
//! let snake_keys = DataConverter::new(
//!     from_camel_case.then(to_snake_case),
//!     ConvertOptions::new().keys(true),
//! );
//!
//! assert_eq!(
//!     snake_keys.convert(&payload),
//!     Data::from(json!({
//!         "user_id": 42,
//!         "display_name": "Ada",
//!         "account_flags": {"is_admin": true}
//!     }))
//! );
//! ```
//!
//! ## Example: one-off string conversion
//!
//! ```
//! use recase::{Case, Recase};
//!
//! let kebab = Recase::new(Case::Snake, Case::Kebab);
//! assert_eq!(kebab.convert("max_retry_count"), "max-retry-count");
//! ```

// Core modules
pub mod case;
pub mod convert;
pub mod data;

// Document input/output
pub mod document;

// Re-export key types
pub use case::{
    from_camel_case, from_kebab_case, from_sep_case, from_snake_case, pipe, to_camel_case,
    to_kebab_case, to_sep_case, to_snake_case, Case, FromSepCase, Pipe, Recase, StrConverter,
    ToSepCase, UnknownCase,
};
pub use convert::{convert_data, ConvertOptions, DataConverter};
pub use data::{Data, DataError, Mapping, Opaque};
pub use document::{read_documents, write_documents, DocumentError, DocumentFormat};
