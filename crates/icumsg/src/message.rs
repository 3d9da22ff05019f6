//! The user-facing facade.
//!
//! [`MessageFormat`] binds the parser, the pattern cache, the formatter
//! registry, the pluralizer map and the host value formatter together.
//!
//! # Concurrency
//!
//! Format calls are synchronous, CPU-bound and safe to issue from many
//! threads against one shared instance. Configuration (registering
//! formatters, installing pluralizers) takes `&mut self` and is meant to
//! happen before the instance is shared.
//!
//! # Example
//!
//! ```
//! use icumsg::{Args, FormatOptions, MessageFormat};
//!
//! let mf = MessageFormat::new(FormatOptions::new().locale("en").use_cache(true));
//! let out = mf
//!     .format(
//!         "You have {n, plural, =0 {no items} one {one item} other {# items}}.",
//!         &Args::new().set("n", 3),
//!     )
//!     .unwrap();
//! assert_eq!(out, "You have 3 items.");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use icumsg_plural::RuleKind;

use crate::cache::PatternCache;
use crate::error::{MessageError, ParseError, RegistryError};
use crate::eval::{format_pattern, Scope};
use crate::parse;
use crate::registry::{FormatterRegistry, ValueFormatter};
use crate::value::Args;
use crate::valuefmt::{CustomValueFormatter, ValueFormat};

/// A language rule installed by the caller: maps a numeric value to a
/// branch keyword. The keyword may be one of the six CLDR categories or
/// any string the caller's patterns use as a branch key.
pub type Pluralizer = Arc<dyn Fn(f64, RuleKind) -> String + Send + Sync>;

/// Construction options for [`MessageFormat`].
#[derive(Clone, Default)]
pub struct FormatOptions {
    use_cache: bool,
    locale: Option<String>,
    custom_value_formatter: Option<CustomValueFormatter>,
}

impl FormatOptions {
    /// Defaults: no cache, locale `"en"`, no custom value formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Memoize parse output, keyed by exact pattern text, for the
    /// lifetime of the facade.
    #[must_use]
    pub fn use_cache(mut self, enabled: bool) -> Self {
        self.use_cache = enabled;
        self
    }

    /// The default locale tag for `format` calls.
    #[must_use]
    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = Some(tag.into());
        self
    }

    /// Install an override for number/date/time rendering.
    #[must_use]
    pub fn custom_value_formatter(mut self, formatter: CustomValueFormatter) -> Self {
        self.custom_value_formatter = Some(formatter);
        self
    }
}

/// The MessageFormat engine.
pub struct MessageFormat {
    locale: String,
    cache: Option<PatternCache>,
    registry: FormatterRegistry,
    values: ValueFormat,
    pluralizers: HashMap<String, Pluralizer>,
}

impl MessageFormat {
    #[must_use]
    pub fn new(options: FormatOptions) -> Self {
        Self {
            locale: options.locale.unwrap_or_else(|| "en".to_owned()),
            cache: options.use_cache.then(PatternCache::new),
            registry: FormatterRegistry::new(),
            values: ValueFormat::new(options.custom_value_formatter),
            pluralizers: HashMap::new(),
        }
    }

    /// The default locale tag.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Format `pattern` against `args` under the default locale.
    pub fn format(&self, pattern: &str, args: &Args) -> Result<String, MessageError> {
        self.format_localized(pattern, args, &self.locale)
    }

    /// Format `pattern` against `args` under an explicit locale.
    pub fn format_localized(
        &self,
        pattern: &str,
        args: &Args,
        locale: &str,
    ) -> Result<String, MessageError> {
        let tree = match &self.cache {
            Some(cache) => cache.get_or_parse(pattern)?,
            None => Arc::new(parse::parse(pattern)?),
        };
        let scope = Scope {
            registry: &self.registry,
            values: &self.values,
            pluralizers: &self.pluralizers,
            args,
            locale,
        };
        Ok(format_pattern(&tree, &scope)?)
    }

    /// Parse `pattern` without formatting it; useful for linting message
    /// catalogs ahead of time.
    pub fn check(&self, pattern: &str) -> Result<(), ParseError> {
        parse::parse(pattern).map(drop)
    }

    /// Install (or replace) the pluralizer for a locale tag.
    ///
    /// Format calls consult this map before the built-in CLDR tables:
    /// exact tag first, then the primary language subtag.
    pub fn set_pluralizer(&mut self, tag: impl Into<String>, pluralizer: Pluralizer) {
        self.pluralizers.insert(tag.into(), pluralizer);
    }

    /// The pluralizer registered for exactly `tag`, if any.
    #[must_use]
    pub fn pluralizer(&self, tag: &str) -> Option<&Pluralizer> {
        self.pluralizers.get(tag)
    }

    /// Remove a registered pluralizer, returning it.
    pub fn remove_pluralizer(&mut self, tag: &str) -> Option<Pluralizer> {
        self.pluralizers.remove(tag)
    }

    /// Register a value formatter under a type keyword.
    ///
    /// `number`, `date` and `time` may be shadowed; the branching types
    /// are structural and refuse replacement.
    pub fn register_formatter(
        &mut self,
        name: impl Into<String>,
        formatter: Arc<dyn ValueFormatter>,
    ) -> Result<(), RegistryError> {
        self.registry.register(name, formatter)
    }
}

impl Default for MessageFormat {
    fn default() -> Self {
        Self::new(FormatOptions::new())
    }
}
