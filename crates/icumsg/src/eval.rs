//! Pattern evaluation.
//!
//! Walks a parsed [`Pattern`] against an argument map and a locale,
//! writing into a scratch buffer that is returned only when every node
//! succeeds, so callers never observe partial output.
//!
//! # Invariants
//!
//! 1. Argument lookup is byte-for-byte case-sensitive.
//! 2. A missing argument is an error for every node kind that names one,
//!    including branching nodes.
//! 3. `=N` branches match the un-offset value; `#` renders the offset
//!    value (`value - offset`).
//! 4. The `#` context of the innermost enclosing plural wins; `select`
//!    branches inherit the context of their surroundings.

use std::collections::HashMap;

use icumsg_plural::{select as cldr_select, PluralOperands, RuleKind};

use crate::ast::{Node, Pattern};
use crate::error::FormatError;
use crate::message::Pluralizer;
use crate::registry::FormatterRegistry;
use crate::value::{Args, Value};
use crate::valuefmt::ValueFormat;

/// Everything a single format call needs, borrowed from the facade.
pub(crate) struct Scope<'a> {
    pub registry: &'a FormatterRegistry,
    pub values: &'a ValueFormat,
    pub pluralizers: &'a HashMap<String, Pluralizer>,
    pub args: &'a Args,
    pub locale: &'a str,
}

/// Evaluate a pattern to a finished string.
pub(crate) fn format_pattern(pattern: &Pattern, scope: &Scope<'_>) -> Result<String, FormatError> {
    let mut out = String::new();
    eval_into(pattern, scope, None, &mut out)?;
    Ok(out)
}

fn eval_into(
    pattern: &Pattern,
    scope: &Scope<'_>,
    hash: Option<f64>,
    out: &mut String,
) -> Result<(), FormatError> {
    for node in pattern.nodes() {
        match node {
            Node::Literal(text) => out.push_str(text),

            Node::Variable { name } => {
                let value = lookup(scope, name)?;
                match value {
                    Value::Number(_) => {
                        out.push_str(&scope.values.number(value, None, scope.locale, name)?);
                    }
                    Value::Timestamp(_) => {
                        out.push_str(&scope.values.date(value, None, scope.locale, name)?);
                    }
                    other => out.push_str(&other.as_key()),
                }
            }

            Node::Formatted { name, format, style } => {
                let value = lookup(scope, name)?;
                let style = style.as_deref();
                if let Some(entry) = scope.registry.get(format) {
                    let rendered = entry.format(value, style, scope.locale).map_err(|message| {
                        FormatError::Formatter {
                            name: format.clone(),
                            message,
                        }
                    })?;
                    out.push_str(&rendered);
                } else {
                    match format.as_str() {
                        "number" => out.push_str(&scope.values.number(value, style, scope.locale, name)?),
                        "date" => out.push_str(&scope.values.date(value, style, scope.locale, name)?),
                        "time" => out.push_str(&scope.values.time(value, style, scope.locale, name)?),
                        _ => {
                            return Err(FormatError::UnknownFormatter {
                                name: format.clone(),
                            })
                        }
                    }
                }
            }

            Node::Select { name, branches } => {
                let value = lookup(scope, name)?;
                let key = value.as_key();
                let branch = branches.get(&key).unwrap_or_else(|| branches.other());
                eval_into(branch, scope, hash, out)?;
            }

            Node::Plural {
                name,
                kind,
                offset,
                branches,
            } => {
                let value = lookup(scope, name)?;
                let n = value.as_number().ok_or_else(|| FormatError::TypeMismatch {
                    name: name.clone(),
                    expected: "a number",
                })?;
                let operands = value
                    .plural_operands()
                    .unwrap_or_else(|| PluralOperands::from_float(n));

                // Explicit matches see the original value, not n - offset.
                let branch = match branches.exact(n) {
                    Some(branch) => branch,
                    None => {
                        let keyword = keyword_for(scope, *kind, n, &operands);
                        branches.keyword(&keyword)
                    }
                };
                eval_into(branch, scope, Some(n - *offset as f64), out)?;
            }

            Node::Hash => match hash {
                Some(value) => {
                    out.push_str(&scope.values.number(
                        &Value::Number(value),
                        None,
                        scope.locale,
                        "#",
                    )?);
                }
                // Unreachable through the parser; render the character.
                None => out.push('#'),
            },
        }
    }
    Ok(())
}

fn lookup<'a>(scope: &'a Scope<'_>, name: &str) -> Result<&'a Value, FormatError> {
    scope.args.get(name).ok_or_else(|| FormatError::MissingArgument {
        name: name.to_owned(),
    })
}

/// The branch keyword for a numeric value: a user-installed pluralizer if
/// one covers the locale (exact tag, then primary subtag), otherwise the
/// CLDR tables.
fn keyword_for(scope: &Scope<'_>, kind: RuleKind, n: f64, operands: &PluralOperands) -> String {
    let tag = scope.locale;
    let found = scope.pluralizers.get(tag).or_else(|| {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        scope.pluralizers.get(primary)
    });
    if let Some(pluralizer) = found {
        return pluralizer(n, kind);
    }
    cldr_select(tag, kind, operands).as_str().to_owned()
}
