//! The formatter registry.
//!
//! The three branching types (`select`, `plural`, `selectordinal`) are
//! structural: the parser sub-parses their branch lists into the tree and
//! the evaluator selects branches directly, so they cannot be replaced.
//! Everything else dispatches by type keyword: user entries first (which
//! may shadow the built-in `number`/`date`/`time`), then the built-in
//! host service, then [`FormatError::UnknownFormatter`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::value::Value;

/// A value formatter registered under a type keyword.
///
/// Invoked at evaluation time with the raw argument value, the style text
/// from the placeholder (if any) and the active locale. Failures are
/// plain messages; the evaluator wraps them with the type keyword.
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: &Value, style: Option<&str>, locale: &str) -> Result<String, String>;
}

/// Closures are the common case for one-off formatters.
impl<F> ValueFormatter for F
where
    F: Fn(&Value, Option<&str>, &str) -> Result<String, String> + Send + Sync,
{
    fn format(&self, value: &Value, style: Option<&str>, locale: &str) -> Result<String, String> {
        self(value, style, locale)
    }
}

const BRANCHING_TYPES: [&str; 3] = ["select", "plural", "selectordinal"];

#[derive(Default)]
pub(crate) struct FormatterRegistry {
    entries: HashMap<String, Arc<dyn ValueFormatter>>,
}

impl FormatterRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry. Branching types are refused.
    pub(crate) fn register(
        &mut self,
        name: impl Into<String>,
        formatter: Arc<dyn ValueFormatter>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if BRANCHING_TYPES.contains(&name.as_str()) {
            return Err(RegistryError { name });
        }
        self.entries.insert(name, formatter);
        Ok(())
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Arc<dyn ValueFormatter>> {
        self.entries.get(name)
    }
}
