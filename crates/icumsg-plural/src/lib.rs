#![forbid(unsafe_code)]

//! CLDR plural rule engine.
//!
//! Maps a number to one of the six CLDR plural categories (`zero`, `one`,
//! `two`, `few`, `many`, `other`) under a locale's cardinal or ordinal
//! rules. The rule data lives in [`rules`] as a frozen table derived from
//! the CLDR plural rules; this crate only *consumes* that table.
//!
//! # Invariants
//!
//! 1. **Totality**: every rule function maps any operands to exactly one
//!    category; `Other` is the universal catch-all.
//! 2. **Determinism**: rules are pure functions of the operands.
//! 3. **Fallback chain terminates**: locale lookup tries the exact tag,
//!    then the primary language subtag, then falls back to a rule that
//!    answers `Other` for everything.
//!
//! # Example
//!
//! ```
//! use icumsg_plural::{select, PluralCategory, PluralOperands, RuleKind};
//!
//! let op = PluralOperands::from(1i64);
//! assert_eq!(select("en", RuleKind::Cardinal, &op), PluralCategory::One);
//!
//! let op = PluralOperands::from(3i64);
//! assert_eq!(select("en", RuleKind::Ordinal, &op), PluralCategory::Few);
//!
//! // "1.50" keeps its visible fraction digits, which matter to many rules.
//! let op: PluralOperands = "1.50".parse().unwrap();
//! assert_eq!(op.v, 2);
//! assert_eq!(select("en", RuleKind::Cardinal, &op), PluralCategory::Other);
//! ```

pub mod rules;

use core::fmt;
use core::str::FromStr;

/// The six CLDR plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// The CLDR keyword for this category.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }

    /// Parse a CLDR keyword (`"zero"` … `"other"`).
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "zero" => Some(Self::Zero),
            "one" => Some(Self::One),
            "two" => Some(Self::Two),
            "few" => Some(Self::Few),
            "many" => Some(Self::Many),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rule set to consult: cardinal ("1 file") or ordinal ("1st file").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Cardinal,
    Ordinal,
}

/// The CLDR plural operands of a numeric value.
///
/// Field names follow the CLDR definitions:
///
/// | Operand | Meaning |
/// |---------|---------|
/// | `n` | absolute value of the source number |
/// | `i` | integer digits of `n` |
/// | `v` | count of visible fraction digits, with trailing zeros |
/// | `w` | count of visible fraction digits, without trailing zeros |
/// | `f` | visible fraction digits as an integer, with trailing zeros |
/// | `t` | visible fraction digits as an integer, without trailing zeros |
///
/// Operands built from `f64` use the shortest decimal representation, so
/// trailing zeros are not observable (`v == w`, `f == t`). Build from a
/// string ([`FromStr`]) when the visible form matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PluralOperands {
    pub n: f64,
    pub i: u64,
    pub v: u64,
    pub w: u64,
    pub f: u64,
    pub t: u64,
}

/// Fraction digits beyond this many cannot change any rule outcome and
/// would overflow `f`/`t`; extra digits are dropped.
const MAX_FRACTION_DIGITS: usize = 18;

impl PluralOperands {
    /// Operands of an integer value.
    #[must_use]
    pub fn from_integer(value: i64) -> Self {
        let abs = value.unsigned_abs();
        Self {
            n: abs as f64,
            i: abs,
            v: 0,
            w: 0,
            f: 0,
            t: 0,
        }
    }

    /// Operands of a float value, using its shortest decimal form.
    ///
    /// Non-finite inputs yield operands that select `Other` everywhere.
    #[must_use]
    pub fn from_float(value: f64) -> Self {
        if !value.is_finite() {
            return Self {
                n: f64::INFINITY,
                i: 0,
                v: 0,
                w: 0,
                f: 0,
                t: 0,
            };
        }
        let n = value.abs();
        // `Display` for f64 is always plain decimal, never scientific.
        let repr = format!("{n}");
        match repr.split_once('.') {
            Some((int_part, frac_part)) => {
                let frac = &frac_part[..frac_part.len().min(MAX_FRACTION_DIGITS)];
                let trimmed = frac.trim_end_matches('0');
                Self {
                    n,
                    i: int_part.parse().unwrap_or(u64::MAX),
                    v: frac.len() as u64,
                    w: trimmed.len() as u64,
                    f: frac.parse().unwrap_or(0),
                    t: trimmed.parse().unwrap_or(0),
                }
            }
            None => Self {
                n,
                i: repr.parse().unwrap_or(u64::MAX),
                v: 0,
                w: 0,
                f: 0,
                t: 0,
            },
        }
    }
}

impl From<i64> for PluralOperands {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<u64> for PluralOperands {
    fn from(value: u64) -> Self {
        Self {
            n: value as f64,
            i: value,
            v: 0,
            w: 0,
            f: 0,
            t: 0,
        }
    }
}

impl From<f64> for PluralOperands {
    fn from(value: f64) -> Self {
        Self::from_float(value)
    }
}

/// Error from parsing a decimal string into [`PluralOperands`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandsError;

impl fmt::Display for OperandsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid decimal literal for plural operands")
    }
}

impl std::error::Error for OperandsError {}

impl FromStr for PluralOperands {
    type Err = OperandsError;

    /// Parse a plain decimal literal (`"42"`, `"-1.50"`), preserving the
    /// visible fraction digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsigned = s.strip_prefix('-').or_else(|| s.strip_prefix('+')).unwrap_or(s);
        if unsigned.is_empty() {
            return Err(OperandsError);
        }
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(OperandsError);
        }
        let digits_only = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if !digits_only(int_part) || !digits_only(frac_part) {
            return Err(OperandsError);
        }

        let n: f64 = unsigned.parse().map_err(|_| OperandsError)?;
        let frac = &frac_part[..frac_part.len().min(MAX_FRACTION_DIGITS)];
        let trimmed = frac.trim_end_matches('0');
        Ok(Self {
            n,
            i: int_part.parse().unwrap_or(if int_part.is_empty() { 0 } else { u64::MAX }),
            v: frac_part.len() as u64,
            w: trimmed.len() as u64,
            f: frac.parse().unwrap_or(0),
            t: trimmed.parse().unwrap_or(0),
        })
    }
}

/// A compiled plural rule: operands in, category out.
pub type RuleFn = fn(&PluralOperands) -> PluralCategory;

/// Select the plural category for `operands` under `locale`'s rules.
///
/// Lookup order: exact tag match (case-insensitive, `_` and `-`
/// equivalent), then the primary language subtag (`pt-BR` → `pt`), then a
/// default that answers [`PluralCategory::Other`] for every value.
#[must_use]
pub fn select(locale: &str, kind: RuleKind, operands: &PluralOperands) -> PluralCategory {
    match rule_for(locale, kind) {
        Some(rule) => rule(operands),
        None => PluralCategory::Other,
    }
}

/// Look up the compiled rule for a locale, if the table has one.
///
/// Same fallback as [`select`], except the absent case is observable.
#[must_use]
pub fn rule_for(locale: &str, kind: RuleKind) -> Option<RuleFn> {
    let tag = normalize_tag(locale);
    let lookup: fn(&str) -> Option<RuleFn> = match kind {
        RuleKind::Cardinal => rules::cardinal,
        RuleKind::Ordinal => rules::ordinal,
    };
    if let Some(rule) = lookup(&tag) {
        return Some(rule);
    }
    let primary = tag.split('-').next().unwrap_or(&tag);
    if primary != tag {
        return lookup(primary);
    }
    None
}

/// Lowercase and canonicalize separators so `pt_BR`, `PT-br` and `pt-BR`
/// hit the same table entry.
fn normalize_tag(locale: &str) -> String {
    locale
        .trim()
        .chars()
        .map(|c| match c {
            '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
