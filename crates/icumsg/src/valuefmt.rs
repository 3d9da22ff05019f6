//! Locale-sensitive rendering of numbers, dates and times.
//!
//! This is the built-in host locale service. It understands the style
//! keywords of `number`/`date`/`time` placeholders, picks digit
//! separators by primary language subtag, and hands unrecognized style
//! strings to chrono as raw format patterns. It is intentionally modest:
//! month and weekday names render in English, and currency symbols come
//! from a small table. Hosts wanting full CLDR-grade output install a
//! [`CustomValueFormatter`], which intercepts all three operations and
//! bypasses the built-in path whenever it returns `Some`.

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::FormatError;
use crate::value::Value;

/// Which of the three host operations a custom formatter is seeing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Date,
    Time,
}

/// User override for the host locale service.
///
/// Called with the raw value, the operation kind, the style string from
/// the placeholder (if any) and the locale tag. Returning `Some` bypasses
/// the built-in rendering; `None` falls through to it.
pub type CustomValueFormatter =
    Arc<dyn Fn(&Value, ValueKind, Option<&str>, &str) -> Option<String> + Send + Sync>;

/// Recognized `number` styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberStyle {
    Decimal,
    Integer,
    Percent,
    Currency,
    /// Anything else is handed to the host as-is.
    Skeleton(String),
}

impl NumberStyle {
    #[must_use]
    pub fn from_style(style: Option<&str>) -> Self {
        match style {
            None => Self::Decimal,
            Some("integer") => Self::Integer,
            Some("percent") => Self::Percent,
            Some("currency") => Self::Currency,
            Some(other) => Self::Skeleton(other.to_owned()),
        }
    }
}

/// Recognized `date` styles. Default is medium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateStyle {
    Short,
    Medium,
    Full,
    Pattern(String),
}

impl DateStyle {
    #[must_use]
    pub fn from_style(style: Option<&str>) -> Self {
        match style {
            None | Some("medium") => Self::Medium,
            Some("short") => Self::Short,
            Some("full") => Self::Full,
            Some(other) => Self::Pattern(other.to_owned()),
        }
    }
}

/// Recognized `time` styles. Default is short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeStyle {
    Short,
    Medium,
    Pattern(String),
}

impl TimeStyle {
    #[must_use]
    pub fn from_style(style: Option<&str>) -> Self {
        match style {
            None | Some("short") => Self::Short,
            Some("medium") => Self::Medium,
            Some(other) => Self::Pattern(other.to_owned()),
        }
    }
}

/// The host locale service plus the optional user override.
pub(crate) struct ValueFormat {
    custom: Option<CustomValueFormatter>,
}

impl ValueFormat {
    pub(crate) fn new(custom: Option<CustomValueFormatter>) -> Self {
        Self { custom }
    }

    pub(crate) fn number(
        &self,
        value: &Value,
        style: Option<&str>,
        locale: &str,
        arg: &str,
    ) -> Result<String, FormatError> {
        if let Some(custom) = &self.custom {
            if let Some(out) = custom(value, ValueKind::Number, style, locale) {
                return Ok(out);
            }
        }
        let n = value.as_number().ok_or_else(|| FormatError::TypeMismatch {
            name: arg.to_owned(),
            expected: "a number",
        })?;
        Ok(render_number(n, &NumberStyle::from_style(style), locale))
    }

    pub(crate) fn date(
        &self,
        value: &Value,
        style: Option<&str>,
        locale: &str,
        arg: &str,
    ) -> Result<String, FormatError> {
        if let Some(custom) = &self.custom {
            if let Some(out) = custom(value, ValueKind::Date, style, locale) {
                return Ok(out);
            }
        }
        let ts = value.as_timestamp().ok_or_else(|| FormatError::TypeMismatch {
            name: arg.to_owned(),
            expected: "a date or time",
        })?;
        Ok(render_date(&ts, &DateStyle::from_style(style), locale))
    }

    pub(crate) fn time(
        &self,
        value: &Value,
        style: Option<&str>,
        locale: &str,
        arg: &str,
    ) -> Result<String, FormatError> {
        if let Some(custom) = &self.custom {
            if let Some(out) = custom(value, ValueKind::Time, style, locale) {
                return Ok(out);
            }
        }
        let ts = value.as_timestamp().ok_or_else(|| FormatError::TypeMismatch {
            name: arg.to_owned(),
            expected: "a date or time",
        })?;
        Ok(render_time(&ts, &TimeStyle::from_style(style), locale))
    }
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

struct Separators {
    group: char,
    decimal: char,
}

fn separators(locale: &str) -> Separators {
    match primary(locale) {
        "de" | "da" | "el" | "es" | "id" | "it" | "nl" | "pt" | "ro" | "sl" | "tr" | "vi" => {
            Separators { group: '.', decimal: ',' }
        }
        "cs" | "et" | "fi" | "fr" | "hu" | "lt" | "lv" | "nb" | "nn" | "no" | "pl" | "ru"
        | "sk" | "sv" | "uk" => Separators {
            group: '\u{a0}',
            decimal: ',',
        },
        _ => Separators { group: ',', decimal: '.' },
    }
}

fn primary(locale: &str) -> &str {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .trim()
}

/// Insert grouping separators into a plain run of integer digits.
fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_owned();
    }
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Render the shortest decimal form of `n` with locale separators.
fn decimal_string(n: f64, seps: &Separators) -> String {
    if !n.is_finite() {
        return format!("{n}");
    }
    let repr = format!("{}", n.abs());
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (repr.as_str(), None),
    };
    let mut out = String::new();
    if n.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, seps.group));
    if let Some(frac) = frac_part {
        out.push(seps.decimal);
        out.push_str(frac);
    }
    out
}

/// Render with exactly `places` fraction digits.
fn fixed_string(n: f64, places: usize, seps: &Separators) -> String {
    if !n.is_finite() {
        return format!("{n}");
    }
    let repr = format!("{:.places$}", n.abs());
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (repr.as_str(), None),
    };
    let mut out = String::new();
    if n.is_sign_negative() && n.abs() != 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, seps.group));
    if let Some(frac) = frac_part {
        out.push(seps.decimal);
        out.push_str(frac);
    }
    out
}

pub(crate) fn render_number(n: f64, style: &NumberStyle, locale: &str) -> String {
    let seps = separators(locale);
    match style {
        NumberStyle::Decimal => decimal_string(n, &seps),
        NumberStyle::Integer => fixed_string(n.round(), 0, &seps),
        NumberStyle::Percent => {
            let mut out = fixed_string((n * 100.0).round(), 0, &seps);
            out.push('%');
            out
        }
        NumberStyle::Currency => {
            let (symbol, prefixed) = currency(locale);
            let amount = fixed_string(n, 2, &seps);
            if prefixed {
                format!("{symbol}{amount}")
            } else {
                format!("{amount}\u{a0}{symbol}")
            }
        }
        // Number skeletons are beyond the built-in host; plain decimal
        // keeps the call total instead of failing.
        NumberStyle::Skeleton(_) => decimal_string(n, &seps),
    }
}

fn currency(locale: &str) -> (&'static str, bool) {
    match primary(locale) {
        "en" => ("$", true),
        "ja" | "zh" => ("¥", true),
        "ko" => ("₩", true),
        "hi" | "bn" => ("₹", true),
        "he" => ("₪", true),
        "tr" => ("₺", true),
        "ru" => ("₽", false),
        "uk" => ("₴", false),
        "pl" => ("zł", false),
        "cs" | "sk" => ("Kč", false),
        "da" | "nb" | "nn" | "no" | "sv" => ("kr", false),
        "de" | "el" | "es" | "et" | "fi" | "fr" | "it" | "lt" | "lv" | "nl" | "pt" | "sl" => {
            ("€", false)
        }
        _ => ("¤", true),
    }
}

// ---------------------------------------------------------------------------
// Dates and times
// ---------------------------------------------------------------------------

/// chrono rejects malformed format strings when the output is written, so
/// raw patterns go through a fallible write with a style fallback.
fn try_pattern(ts: &DateTime<Utc>, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", ts.format(pattern)).ok()?;
    Some(out)
}

fn twelve_hour(locale: &str) -> bool {
    matches!(primary(locale), "en" | "hi" | "bn" | "ar" | "ko")
}

pub(crate) fn render_date(ts: &DateTime<Utc>, style: &DateStyle, locale: &str) -> String {
    let lang = primary(locale);
    let pattern = match style {
        DateStyle::Short => match lang {
            "en" => "%-m/%-d/%y",
            "de" => "%d.%m.%y",
            "fr" | "es" | "it" | "pt" => "%d/%m/%y",
            _ => "%Y-%m-%d",
        },
        DateStyle::Medium => match lang {
            "en" => "%b %-d, %Y",
            "de" => "%d.%m.%Y",
            "fr" | "es" | "it" | "pt" => "%-d %b %Y",
            _ => "%Y-%m-%d",
        },
        DateStyle::Full => match lang {
            "en" => "%A, %B %-d, %Y",
            "de" => "%A, %-d. %B %Y",
            _ => "%A, %-d %B %Y",
        },
        DateStyle::Pattern(p) => {
            return try_pattern(ts, p)
                .unwrap_or_else(|| render_date(ts, &DateStyle::Medium, locale));
        }
    };
    ts.format(pattern).to_string()
}

pub(crate) fn render_time(ts: &DateTime<Utc>, style: &TimeStyle, locale: &str) -> String {
    let pattern = match style {
        TimeStyle::Short => {
            if twelve_hour(locale) {
                "%-I:%M %p"
            } else {
                "%H:%M"
            }
        }
        TimeStyle::Medium => {
            if twelve_hour(locale) {
                "%-I:%M:%S %p"
            } else {
                "%H:%M:%S"
            }
        }
        TimeStyle::Pattern(p) => {
            return try_pattern(ts, p)
                .unwrap_or_else(|| render_time(ts, &TimeStyle::Short, locale));
        }
    };
    ts.format(pattern).to_string()
}
