//! Dynamically-typed argument values and the argument map.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Numeric coercion | value is not a number or numeric string | `None` from [`Value::as_number`] |
//! | Temporal coercion | value is not a timestamp | `None` from [`Value::as_timestamp`] |
//! | Reflection of a non-map | `from_serialize` on a scalar/array | error |

use std::borrow::Cow;
use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use icumsg_plural::PluralOperands;

/// A single argument value.
///
/// Every value has a string form (used by `select` and by default
/// rendering); numeric and temporal forms exist only where coercion
/// succeeds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Number(f64),
    Timestamp(DateTime<Utc>),
    Bool(bool),
}

impl Value {
    /// Coerce to a real number. Numeric strings count, per ICU practice.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Coerce to an absolute instant.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// The select-key / default string form of this value.
    #[must_use]
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s),
            Self::Number(n) => Cow::Owned(format!("{n}")),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::Timestamp(ts) => Cow::Owned(ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }

    /// CLDR plural operands of this value, when numeric.
    ///
    /// A numeric string contributes its visible fraction digits ("1.50"
    /// has v=2), which an `f64` cannot carry.
    #[must_use]
    pub fn plural_operands(&self) -> Option<PluralOperands> {
        match self {
            Self::Number(n) => Some(PluralOperands::from_float(*n)),
            Self::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(v: Cow<'_, str>) -> Self {
        Self::Str(v.into_owned())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Number(f64::from(v))
    }
}

macro_rules! value_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::Number(v as f64)
            }
        })*
    };
}

value_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Self::Timestamp(v.with_timezone(&Utc))
    }
}

/// Named arguments for one format call.
///
/// Borrowed for the duration of the call and never retained. Lookup is
/// case-sensitive.
///
/// # Example
///
/// ```
/// use icumsg::Args;
///
/// let args = Args::new().set("name", "Ada").set("count", 3);
/// assert!(args.get("name").is_some());
/// assert!(args.get("Name").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Args {
    map: HashMap<String, Value>,
}

impl Args {
    /// An empty argument map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an argument.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.map.insert(name.into(), value.into());
    }

    /// Look up an argument by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Reflect the public string-keyed members of any serializable value
    /// into an argument map.
    ///
    /// The value must serialize to a map (a struct with named fields, a
    /// `HashMap`, a JSON object). Scalar members become their natural
    /// [`Value`] forms; null members are skipped; nested containers are
    /// carried as their JSON text.
    #[cfg(feature = "serde")]
    pub fn from_serialize<T: serde::Serialize>(value: &T) -> Result<Self, ReflectError> {
        let json = serde_json::to_value(value).map_err(ReflectError::Serialize)?;
        let serde_json::Value::Object(members) = json else {
            return Err(ReflectError::NotAMap);
        };
        let mut args = Self::new();
        for (name, member) in members {
            let value = match member {
                serde_json::Value::Null => continue,
                serde_json::Value::Bool(b) => Value::Bool(b),
                serde_json::Value::Number(n) => match n.as_f64() {
                    Some(f) => Value::Number(f),
                    None => Value::Str(n.to_string()),
                },
                serde_json::Value::String(s) => Value::Str(s),
                nested => Value::Str(nested.to_string()),
            };
            args.insert(name, value);
        }
        Ok(args)
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

/// Error from [`Args::from_serialize`].
#[cfg(feature = "serde")]
#[derive(Debug)]
pub enum ReflectError {
    /// The value failed to serialize at all.
    Serialize(serde_json::Error),
    /// The value serialized to something other than a map.
    NotAMap,
}

#[cfg(feature = "serde")]
impl core::fmt::Display for ReflectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Serialize(e) => write!(f, "arguments failed to serialize: {e}"),
            Self::NotAMap => f.write_str("arguments must serialize to a string-keyed map"),
        }
    }
}

#[cfg(feature = "serde")]
impl std::error::Error for ReflectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(e) => Some(e),
            Self::NotAMap => None,
        }
    }
}
