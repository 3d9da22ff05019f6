//! Recursive-descent parser for the MessageFormat pattern language.
//!
//! Single pass over character indices with one character of lookahead; no
//! regular expressions, no token list. Offsets in [`ParseError`] are
//! character indices into the source.
//!
//! # Quote rules
//!
//! `''` is always a literal apostrophe. A lone `'` starts a quoted region
//! only when the next character is `{`, `}` or `#`; the region runs to the
//! next lone `'` (or end of pattern) and everything inside it is literal
//! text. Any other `'` is ordinary text, so `It's` needs no escaping.
//!
//! # Whitespace
//!
//! Spaces, tabs, newlines and carriage returns between structural tokens
//! are ignored. Whitespace inside literal text is preserved verbatim;
//! style text keeps its interior whitespace and loses only the edges.

use crate::ast::{Node, Pattern, PluralBranches, SelectBranches};
use crate::error::ParseError;
use icumsg_plural::RuleKind;

/// Nesting bound for placeholders inside branch bodies. Deeper patterns
/// are rejected rather than risking stack exhaustion on hostile input.
const MAX_DEPTH: usize = 32;

/// Parse a pattern source into a tree.
pub fn parse(source: &str) -> Result<Pattern, ParseError> {
    let mut parser = Parser::new(source);
    let pattern = parser.pattern(false, 0)?;
    if !parser.at_end() {
        return Err(parser.error_here("unmatched '}'"));
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(chars = parser.chars.len(), nodes = pattern.nodes().len(), "pattern parsed");
    Ok(pattern)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    // -- primitives ------------------------------------------------------

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_ahead(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn error_here(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.pos)
    }

    fn error_at(&self, message: impl Into<String>, offset: usize) -> ParseError {
        ParseError::new(message, offset)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.pos += 1;
        }
    }

    /// An identifier: alphanumerics and underscores. May be empty; callers
    /// decide whether that is an error.
    fn ident(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn digits(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    // -- pattern ---------------------------------------------------------

    /// Parse nodes until end of input or an unconsumed `}` (which closes
    /// the enclosing placeholder; the caller consumes it).
    fn pattern(&mut self, in_plural: bool, depth: usize) -> Result<Pattern, ParseError> {
        let mut nodes = Vec::new();
        let mut literal = String::new();

        loop {
            match self.peek() {
                None | Some('}') => break,
                Some('{') => {
                    flush(&mut literal, &mut nodes);
                    nodes.push(self.placeholder(in_plural, depth)?);
                }
                Some('#') if in_plural => {
                    flush(&mut literal, &mut nodes);
                    self.pos += 1;
                    nodes.push(Node::Hash);
                }
                Some('\'') => self.quoted(&mut literal),
                Some(c) => {
                    literal.push(c);
                    self.pos += 1;
                }
            }
        }

        flush(&mut literal, &mut nodes);
        Ok(Pattern { nodes })
    }

    /// Resolve a `'` at the current position into literal text.
    fn quoted(&mut self, out: &mut String) {
        match self.peek_ahead() {
            // `''` is a literal apostrophe everywhere.
            Some('\'') => {
                out.push('\'');
                self.pos += 2;
            }
            // Quoting starts only before a syntactic character.
            Some('{' | '}' | '#') => {
                self.pos += 1;
                loop {
                    match self.bump() {
                        // Unterminated region extends to end of pattern.
                        None => break,
                        Some('\'') => {
                            if self.peek() == Some('\'') {
                                out.push('\'');
                                self.pos += 1;
                            } else {
                                break;
                            }
                        }
                        Some(c) => out.push(c),
                    }
                }
            }
            _ => {
                out.push('\'');
                self.pos += 1;
            }
        }
    }

    // -- placeholders ----------------------------------------------------

    fn placeholder(&mut self, in_plural: bool, depth: usize) -> Result<Node, ParseError> {
        let start = self.pos;
        if depth >= MAX_DEPTH {
            return Err(self.error_at("placeholder nesting too deep", start));
        }
        self.pos += 1; // consume '{'
        self.skip_ws();

        let name = self.ident();
        if name.is_empty() {
            return Err(self.error_here("empty argument name"));
        }
        self.skip_ws();

        match self.peek() {
            Some('}') => {
                self.pos += 1;
                Ok(Node::Variable { name })
            }
            Some(',') => {
                self.pos += 1;
                self.skip_ws();
                let format = self.ident();
                if format.is_empty() {
                    return Err(self.error_here("missing format type"));
                }
                self.skip_ws();
                self.typed_placeholder(name, format, in_plural, depth)
            }
            None => Err(self.error_here("unexpected end of pattern")),
            Some(_) => Err(self.error_here("expected ',' or '}' after argument name")),
        }
    }

    fn typed_placeholder(
        &mut self,
        name: String,
        format: String,
        in_plural: bool,
        depth: usize,
    ) -> Result<Node, ParseError> {
        let branching = matches!(format.as_str(), "select" | "plural" | "selectordinal");
        match self.peek() {
            Some('}') => {
                self.pos += 1;
                if branching {
                    Err(self.error_at(format!("'{format}' requires branches"), self.pos - 1))
                } else {
                    Ok(Node::Formatted {
                        name,
                        format,
                        style: None,
                    })
                }
            }
            Some(',') => {
                self.pos += 1;
                self.skip_ws();
                match format.as_str() {
                    "select" => {
                        let branches = self.select_branches(in_plural, depth)?;
                        Ok(Node::Select { name, branches })
                    }
                    "plural" | "selectordinal" => {
                        let kind = if format == "plural" {
                            RuleKind::Cardinal
                        } else {
                            RuleKind::Ordinal
                        };
                        let (offset, branches) = self.plural_tail(depth)?;
                        Ok(Node::Plural {
                            name,
                            kind,
                            offset,
                            branches,
                        })
                    }
                    _ => {
                        let style = self.style_text()?;
                        Ok(Node::Formatted {
                            name,
                            format,
                            style: if style.is_empty() { None } else { Some(style) },
                        })
                    }
                }
            }
            None => Err(self.error_here("unexpected end of pattern")),
            Some(_) => Err(self.error_here("expected ',' or '}' after format type")),
        }
    }

    fn select_branches(
        &mut self,
        in_plural: bool,
        depth: usize,
    ) -> Result<SelectBranches, ParseError> {
        let mut branches = SelectBranches::default();
        loop {
            self.skip_ws();
            match self.peek() {
                None => return Err(self.error_here("unexpected end of pattern")),
                Some('}') => {
                    let close = self.pos;
                    self.pos += 1;
                    if branches.entries.is_empty() {
                        return Err(self.error_at("'select' requires branches", close));
                    }
                    if !branches.contains("other") {
                        return Err(self.error_at("missing 'other' branch in 'select'", close));
                    }
                    return Ok(branches);
                }
                Some(_) => {
                    let key_start = self.pos;
                    let key = self.ident();
                    if key.is_empty() {
                        return Err(self.error_here("expected branch key"));
                    }
                    if branches.contains(&key) {
                        return Err(self.error_at(format!("duplicate branch key '{key}'"), key_start));
                    }
                    let body = self.branch_body(in_plural, depth)?;
                    branches.entries.push((key, body));
                }
            }
        }
    }

    fn plural_tail(&mut self, depth: usize) -> Result<(u64, PluralBranches), ParseError> {
        let offset = self.offset_spec()?;
        let mut branches = PluralBranches::default();

        loop {
            self.skip_ws();
            match self.peek() {
                None => return Err(self.error_here("unexpected end of pattern")),
                Some('}') => {
                    let close = self.pos;
                    self.pos += 1;
                    if !branches.contains_keyword("other") {
                        return Err(self.error_at("missing 'other' branch", close));
                    }
                    return Ok((offset, branches));
                }
                Some('=') => {
                    let key_start = self.pos;
                    self.pos += 1;
                    let negative = self.peek() == Some('-');
                    if negative {
                        self.pos += 1;
                    }
                    let digits = self.digits();
                    if digits.is_empty() {
                        return Err(self.error_at("malformed explicit key, expected '=' and an integer", key_start));
                    }
                    let magnitude: i64 = digits
                        .parse()
                        .map_err(|_| self.error_at("explicit key out of range", key_start))?;
                    let n = if negative { -magnitude } else { magnitude };
                    if branches.contains_exact(n) {
                        return Err(self.error_at(format!("duplicate branch key '={n}'"), key_start));
                    }
                    let body = self.branch_body(true, depth)?;
                    branches.exact.push((n, body));
                }
                Some(_) => {
                    let key_start = self.pos;
                    let key = self.ident();
                    if key.is_empty() {
                        return Err(self.error_here("expected branch key"));
                    }
                    if branches.contains_keyword(&key) {
                        return Err(self.error_at(format!("duplicate branch key '{key}'"), key_start));
                    }
                    let body = self.branch_body(true, depth)?;
                    branches.keyed.push((key, body));
                }
            }
        }
    }

    /// `offset` `:` integer, if present. Backtracks when the next token is
    /// an ordinary branch key (including one spelled `offset`).
    fn offset_spec(&mut self) -> Result<u64, ParseError> {
        self.skip_ws();
        let saved = self.pos;
        if self.ident() != "offset" {
            self.pos = saved;
            return Ok(0);
        }
        self.skip_ws();
        if self.peek() != Some(':') {
            // A branch actually named "offset"; not an offset spec.
            self.pos = saved;
            return Ok(0);
        }
        self.pos += 1;
        self.skip_ws();
        let digit_start = self.pos;
        let digits = self.digits();
        if digits.is_empty() {
            return Err(self.error_at("malformed offset, expected 'offset:' and an integer", digit_start));
        }
        digits
            .parse()
            .map_err(|_| self.error_at("offset out of range", digit_start))
    }

    /// Whitespace, `{`, a sub-pattern, `}`.
    fn branch_body(&mut self, in_plural: bool, depth: usize) -> Result<Pattern, ParseError> {
        self.skip_ws();
        if self.peek() != Some('{') {
            return Err(self.error_here("expected '{' after branch key"));
        }
        self.pos += 1;
        let body = self.pattern(in_plural, depth + 1)?;
        if self.peek() != Some('}') {
            return Err(self.error_here("unexpected end of pattern"));
        }
        self.pos += 1;
        Ok(body)
    }

    /// Raw style text up to the `}` closing the placeholder, honoring
    /// quote rules and tracking brace depth.
    fn style_text(&mut self) -> Result<String, ParseError> {
        let mut out = String::new();
        let mut depth = 0usize;
        loop {
            match self.peek() {
                None => return Err(self.error_here("unexpected end of pattern")),
                Some('\'') => self.quoted(&mut out),
                Some('{') => {
                    depth += 1;
                    out.push('{');
                    self.pos += 1;
                }
                Some('}') => {
                    if depth == 0 {
                        self.pos += 1;
                        return Ok(out.trim_end().to_owned());
                    }
                    depth -= 1;
                    out.push('}');
                    self.pos += 1;
                }
                Some(c) => {
                    out.push(c);
                    self.pos += 1;
                }
            }
        }
    }
}

fn flush(literal: &mut String, nodes: &mut Vec<Node>) {
    if !literal.is_empty() {
        nodes.push(Node::Literal(std::mem::take(literal)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(source: &str) -> Vec<Node> {
        parse(source).expect(source).nodes.clone()
    }

    fn parse_err(source: &str) -> ParseError {
        parse(source).expect_err(source)
    }

    #[test]
    fn plain_literal() {
        assert_eq!(nodes("Hello!"), vec![Node::Literal("Hello!".into())]);
        assert_eq!(nodes(""), Vec::<Node>::new());
    }

    #[test]
    fn simple_variable() {
        assert_eq!(
            nodes("Hello, {name}!"),
            vec![
                Node::Literal("Hello, ".into()),
                Node::Variable { name: "name".into() },
                Node::Literal("!".into()),
            ]
        );
    }

    #[test]
    fn whitespace_inside_placeholder_ignored() {
        assert_eq!(nodes("{ name }"), nodes("{name}"));
        assert_eq!(nodes("{ n ,\nnumber ,\t integer }"), nodes("{n,number,integer}"));
    }

    #[test]
    fn formatted_with_and_without_style() {
        assert_eq!(
            nodes("{n, number}"),
            vec![Node::Formatted {
                name: "n".into(),
                format: "number".into(),
                style: None,
            }]
        );
        assert_eq!(
            nodes("{n, number, percent}"),
            vec![Node::Formatted {
                name: "n".into(),
                format: "number".into(),
                style: Some("percent".into()),
            }]
        );
    }

    #[test]
    fn style_keeps_interior_whitespace() {
        assert_eq!(
            nodes("{d, date, EEE, MMM d }"),
            vec![Node::Formatted {
                name: "d".into(),
                format: "date".into(),
                style: Some("EEE, MMM d".into()),
            }]
        );
    }

    #[test]
    fn style_tracks_brace_depth() {
        assert_eq!(
            nodes("{x, widget, a{b}c}"),
            vec![Node::Formatted {
                name: "x".into(),
                format: "widget".into(),
                style: Some("a{b}c".into()),
            }]
        );
    }

    #[test]
    fn select_branches_parse() {
        let parsed = nodes("{g, select, male{He} female{She} other{They}}");
        let Node::Select { name, branches } = &parsed[0] else {
            panic!("expected select node");
        };
        assert_eq!(name, "g");
        assert_eq!(branches.entries.len(), 3);
        assert!(branches.get("female").is_some());
    }

    #[test]
    fn plural_branches_parse() {
        let parsed = nodes("{n, plural, =0 {none} one {one} other {# things}}");
        let Node::Plural {
            kind,
            offset,
            branches,
            ..
        } = &parsed[0]
        else {
            panic!("expected plural node");
        };
        assert_eq!(*kind, RuleKind::Cardinal);
        assert_eq!(*offset, 0);
        assert_eq!(branches.exact.len(), 1);
        assert_eq!(branches.keyed.len(), 2);
        // `#` became a token inside the branch body.
        let other = branches.keyword("other");
        assert_eq!(
            other.nodes(),
            &[Node::Hash, Node::Literal(" things".into())]
        );
    }

    #[test]
    fn selectordinal_is_ordinal_kind() {
        let parsed = nodes("{n, selectordinal, one{#st} other{#th}}");
        let Node::Plural { kind, .. } = &parsed[0] else {
            panic!("expected plural node");
        };
        assert_eq!(*kind, RuleKind::Ordinal);
    }

    #[test]
    fn offset_is_parsed() {
        let parsed = nodes("{n, plural, offset:2 one{#} other{#}}");
        let Node::Plural { offset, .. } = &parsed[0] else {
            panic!("expected plural node");
        };
        assert_eq!(*offset, 2);

        let parsed = nodes("{n, plural, offset : 3 other{x}}");
        let Node::Plural { offset, .. } = &parsed[0] else {
            panic!("expected plural node");
        };
        assert_eq!(*offset, 3);
    }

    #[test]
    fn branch_named_offset_is_allowed() {
        let parsed = nodes("{k, select, offset{shifted} other{plain}}");
        let Node::Select { branches, .. } = &parsed[0] else {
            panic!("expected select node");
        };
        assert!(branches.get("offset").is_some());
    }

    #[test]
    fn hash_is_plain_text_outside_plural() {
        assert_eq!(nodes("a # b"), vec![Node::Literal("a # b".into())]);
        // ... including inside select branches not nested in a plural.
        let parsed = nodes("{g, select, other{# left}}");
        let Node::Select { branches, .. } = &parsed[0] else {
            panic!("expected select node");
        };
        assert_eq!(
            branches.other().nodes(),
            &[Node::Literal("# left".into())]
        );
    }

    #[test]
    fn hash_stays_live_in_select_nested_in_plural() {
        let parsed = nodes("{n, plural, other{{g, select, other{# left}}}}");
        let Node::Plural { branches, .. } = &parsed[0] else {
            panic!("expected plural node");
        };
        let Node::Select { branches: inner, .. } = &branches.keyword("other").nodes()[0] else {
            panic!("expected nested select");
        };
        assert_eq!(
            inner.other().nodes(),
            &[Node::Hash, Node::Literal(" left".into())]
        );
    }

    // -- quoting ---------------------------------------------------------

    #[test]
    fn doubled_quote_is_apostrophe() {
        assert_eq!(nodes("it''s"), vec![Node::Literal("it's".into())]);
    }

    #[test]
    fn quote_before_brace_quotes_region() {
        assert_eq!(
            nodes("Arg: '{escaped}' and text"),
            vec![Node::Literal("Arg: {escaped} and text".into())]
        );
    }

    #[test]
    fn plain_apostrophe_is_literal() {
        assert_eq!(nodes("It's fine"), vec![Node::Literal("It's fine".into())]);
    }

    #[test]
    fn unterminated_quote_extends_to_end() {
        assert_eq!(
            nodes("half '{open to the end"),
            vec![Node::Literal("half {open to the end".into())]
        );
    }

    #[test]
    fn doubled_quote_inside_region() {
        assert_eq!(
            nodes("'{a''b}'"),
            vec![Node::Literal("{a'b}".into())]
        );
    }

    #[test]
    fn quoted_hash_in_plural_is_literal() {
        let parsed = nodes("{n, plural, other{'#' = #}}");
        let Node::Plural { branches, .. } = &parsed[0] else {
            panic!("expected plural node");
        };
        assert_eq!(
            branches.keyword("other").nodes(),
            &[Node::Literal("# = ".into()), Node::Hash]
        );
    }

    // -- errors ----------------------------------------------------------

    #[test]
    fn unmatched_braces() {
        assert!(parse_err("{name").message.contains("unexpected end"));
        assert_eq!(parse_err("so }").message, "unmatched '}'");
        assert_eq!(parse_err("so }").offset, 3);
    }

    #[test]
    fn empty_argument_name() {
        assert_eq!(parse_err("{}").message, "empty argument name");
        assert_eq!(parse_err("{ , number}").message, "empty argument name");
    }

    #[test]
    fn missing_other_branch() {
        let e = parse_err("{n, plural, one{x}}");
        assert!(e.message.contains("missing 'other'"), "{e}");
        let e = parse_err("{g, select, a{x}}");
        assert!(e.message.contains("missing 'other'"), "{e}");
    }

    #[test]
    fn duplicate_branch_keys() {
        assert!(parse_err("{g, select, a{x} a{y} other{z}}")
            .message
            .contains("duplicate"));
        assert!(parse_err("{n, plural, =1{x} =1{y} other{z}}")
            .message
            .contains("duplicate"));
        // The same N spelled via keyword and via =N is not a duplicate.
        assert!(parse("{n, plural, one{x} =1{y} other{z}}").is_ok());
    }

    #[test]
    fn malformed_explicit_key() {
        assert!(parse_err("{n, plural, ={x} other{y}}")
            .message
            .contains("malformed explicit key"));
    }

    #[test]
    fn malformed_offset() {
        assert!(parse_err("{n, plural, offset: other{x}}")
            .message
            .contains("malformed offset"));
        assert!(parse_err("{n, plural, offset:99999999999999999999 other{x}}")
            .message
            .contains("out of range"));
    }

    #[test]
    fn branching_without_branches() {
        assert!(parse_err("{n, plural}").message.contains("requires branches"));
        assert!(parse_err("{g, select,}").message.contains("requires branches"));
        assert!(parse_err("{n, plural,}").message.contains("missing 'other'"));
    }

    #[test]
    fn error_offsets_are_character_indices() {
        // Multi-byte chars before the error must not skew the offset.
        let e = parse_err("héllo {");
        assert_eq!(e.offset, 7);
    }

    #[test]
    fn nesting_bound() {
        let mut src = String::new();
        for _ in 0..40 {
            src.push_str("{n, plural, other{");
        }
        assert!(parse_err(&src).message.contains("nesting too deep"));
    }
}
