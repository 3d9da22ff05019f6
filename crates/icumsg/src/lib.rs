#![forbid(unsafe_code)]

//! ICU MessageFormat for localized user-interface messages.
//!
//! Given a pattern template, a bag of named arguments and a locale, this
//! crate renders a string with variable placeholders, `select` branches,
//! `plural`/`selectordinal` branches and typed number/date/time
//! placeholders resolved against the supplied data.
//!
//! # Primary responsibilities
//! - **Parsing**: a whitespace-tolerant recursive-descent parser builds an
//!   immutable pattern tree ([`parse`], [`ast`]).
//! - **Evaluation**: the tree is walked against an argument map, with `#`
//!   substitution and locale-driven branch selection (`eval`, internal).
//! - **Plural rules**: CLDR cardinal/ordinal category selection lives in
//!   the [`plural`] crate (re-exported here).
//! - **Caching**: parse output is memoized per facade when enabled.
//!
//! # How it fits in the system
//! The crate is a pure, synchronous library: no I/O, no catalog loading,
//! no global state. Hosts hold one [`MessageFormat`] per configuration
//! and call it from as many threads as they like.
//!
//! # Example
//!
//! ```
//! use icumsg::{Args, FormatOptions, MessageFormat};
//!
//! let mf = MessageFormat::new(FormatOptions::new().locale("en"));
//!
//! let out = mf
//!     .format(
//!         "{gender, select, female {She} male {He} other {They}} \
//!          found {n, plural, =0 {no results} one {one result} \
//!          other {# results}}.",
//!         &Args::new().set("gender", "female").set("n", 2),
//!     )
//!     .unwrap();
//! assert_eq!(out, "She found 2 results.");
//! ```

pub mod ast;
pub mod error;
pub mod parse;
pub mod registry;
pub mod value;
pub mod valuefmt;

mod cache;
mod eval;
mod message;

pub use error::{FormatError, MessageError, ParseError, RegistryError};
pub use message::{FormatOptions, MessageFormat, Pluralizer};
pub use registry::ValueFormatter;
pub use value::{Args, Value};
pub use valuefmt::{CustomValueFormatter, ValueKind};

#[cfg(feature = "serde")]
pub use value::ReflectError;

/// The CLDR plural rule engine backing `plural`/`selectordinal` nodes.
pub use icumsg_plural as plural;
