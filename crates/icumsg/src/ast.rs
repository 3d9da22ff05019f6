//! The parsed pattern tree.
//!
//! A [`Pattern`] is an ordered list of [`Node`]s produced by the parser.
//! Trees are immutable after parsing and hold no references back into the
//! source text, so they are freely shareable across threads (the cache
//! hands out `Arc<Pattern>`).
//!
//! # Invariants
//!
//! 1. Branch key sets contain `other` and are duplicate-free (enforced at
//!    parse time).
//! 2. `Node::Hash` only occurs inside a plural/selectordinal branch body.
//! 3. Trees are acyclic by construction: sub-patterns are owned values.

use icumsg_plural::RuleKind;

/// An ordered sequence of pattern nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pattern {
    pub(crate) nodes: Vec<Node>,
}

impl Pattern {
    /// The nodes of this pattern, in source order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// One element of a pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A run of literal text (quotes already resolved).
    Literal(String),
    /// `{name}` — emit the argument, default-formatted for its type.
    Variable { name: String },
    /// `{name, type}` or `{name, type, style}` for a non-branching type.
    Formatted {
        name: String,
        format: String,
        style: Option<String>,
    },
    /// `{name, select, key {..} .. other {..}}`.
    Select {
        name: String,
        branches: SelectBranches,
    },
    /// `{name, plural, ..}` or `{name, selectordinal, ..}`.
    Plural {
        name: String,
        kind: RuleKind,
        offset: u64,
        branches: PluralBranches,
    },
    /// The `#` token inside a plural branch body.
    Hash,
}

/// Keyed branches of a `select` node, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectBranches {
    pub(crate) entries: Vec<(String, Pattern)>,
}

impl SelectBranches {
    /// Branch for `key`, byte-for-byte comparison.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Pattern> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, p)| p)
    }

    /// The mandatory `other` branch.
    #[must_use]
    pub fn other(&self) -> &Pattern {
        // Parser guarantees presence; an empty pattern is a safe fallback
        // should that ever be violated.
        static EMPTY: Pattern = Pattern { nodes: Vec::new() };
        self.get("other").unwrap_or(&EMPTY)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }
}

/// Branches of a plural/selectordinal node: explicit `=N` matches plus
/// keyword branches, each in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PluralBranches {
    pub(crate) exact: Vec<(i64, Pattern)>,
    pub(crate) keyed: Vec<(String, Pattern)>,
}

impl PluralBranches {
    /// The `=N` branch whose N equals `value` exactly, if any.
    #[must_use]
    pub fn exact(&self, value: f64) -> Option<&Pattern> {
        self.exact
            .iter()
            .find(|(n, _)| *n as f64 == value)
            .map(|(_, p)| p)
    }

    /// The branch for a plural keyword, falling back to `other`.
    #[must_use]
    pub fn keyword(&self, keyword: &str) -> &Pattern {
        self.keyed
            .iter()
            .find(|(k, _)| k == keyword)
            .or_else(|| self.keyed.iter().find(|(k, _)| k == "other"))
            .map(|(_, p)| p)
            .unwrap_or_else(|| {
                static EMPTY: Pattern = Pattern { nodes: Vec::new() };
                &EMPTY
            })
    }

    pub(crate) fn contains_exact(&self, n: i64) -> bool {
        self.exact.iter().any(|(k, _)| *k == n)
    }

    pub(crate) fn contains_keyword(&self, key: &str) -> bool {
        self.keyed.iter().any(|(k, _)| k == key)
    }
}
