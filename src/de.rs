//! Parsing `entry_points.txt` text.
//!
//! This module provides the [`Parser`] that turns text into an
//! [`EntryPointSet`]. Most users should call [`parse`](crate::parse) or
//! [`load`](crate::load) instead of driving the parser directly.
//!
//! ## Overview
//!
//! - **Line based**: every line is trimmed and classified on its own
//! - **Fail fast**: the first malformed line aborts parsing; no partial result
//!   is returned
//! - **Last one wins**: a repeated group/name pair replaces the earlier entry,
//!   and a repeated group header resumes the existing group
//!
//! ```rust
//! use entry_points_txt::de::Parser;
//!
//! let set = Parser::new("[g]\nfoo = a\n[h]\n[g]\nfoo = b\n").parse().unwrap();
//! // `h` never received an entry
//! assert_eq!(set.len(), 1);
//! assert_eq!(set.get_entry("g", "foo").unwrap().module(), "b");
//! ```

use crate::error::{ParseError, ParseErrorKind};
use crate::grammar::{is_comment, is_dotted_identifier, is_extra, is_group_name, strip};
use crate::{EntryPoint, EntryPointSet};
use tracing::{debug, trace};

type ParseResult<T> = std::result::Result<T, ParseErrorKind>;

/// The `entry_points.txt` parser.
///
/// Created via [`Parser::new`] and consumed by [`Parser::parse`].
pub struct Parser<'a> {
    input: &'a str,
    line: usize,
    group: Option<String>,
    result: EntryPointSet,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            line: 0,
            group: None,
            result: EntryPointSet::new(),
        }
    }

    /// Parses the whole input.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for the first line that violates the grammar.
    pub fn parse(mut self) -> std::result::Result<EntryPointSet, ParseError> {
        let input = self.input;
        for raw in input.lines() {
            self.line += 1;
            if let Err(kind) = self.parse_line(strip(raw)) {
                debug!(line = self.line, error = %kind, "rejected line");
                return Err(ParseError::new(self.line, kind));
            }
        }
        debug!(
            lines = self.line,
            groups = self.result.len(),
            "parsed entry points"
        );
        Ok(self.result)
    }

    fn parse_line(&mut self, line: &str) -> ParseResult<()> {
        if line.is_empty() || is_comment(line) {
            return Ok(());
        }
        if line.starts_with('[') {
            let group = parse_group_header(line)?;
            trace!(line = self.line, group = %group, "group header");
            self.group = Some(group);
            return Ok(());
        }
        let group = self
            .group
            .as_deref()
            .ok_or(ParseErrorKind::EntryBeforeGroup)?;
        let ep = parse_entry_line(group, line)?;
        trace!(line = self.line, group, name = ep.name(), "entry point");
        if let Some(previous) = self.result.insert(ep) {
            debug!(
                line = self.line,
                group,
                name = previous.name(),
                "entry point overrides an earlier definition"
            );
        }
        Ok(())
    }
}

/// Parses a trimmed line starting with `[` into a group name.
fn parse_group_header(line: &str) -> ParseResult<String> {
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ParseErrorKind::UnclosedGroupHeader)
        .map(strip)?;
    if inner.is_empty() {
        return Err(ParseErrorKind::EmptyGroupName);
    }
    if !is_group_name(inner) {
        return Err(ParseErrorKind::InvalidGroupName(inner.to_string()));
    }
    Ok(inner.to_string())
}

/// Parses a trimmed `name = module[:attribute] [extras]` line.
fn parse_entry_line(group: &str, line: &str) -> ParseResult<EntryPoint> {
    let (name, reference) = line
        .split_once('=')
        .ok_or_else(|| ParseErrorKind::MissingEquals(line.to_string()))?;
    let name = strip(name);
    if name.is_empty() {
        return Err(ParseErrorKind::EmptyName);
    }

    let (pre_bracket, post_bracket) = match reference.split_once('[') {
        Some((pre, post)) => (pre, Some(post)),
        None => (reference, None),
    };

    let (module, attribute) = match pre_bracket.split_once(':') {
        Some((module, attribute)) => (module, Some(attribute)),
        None => (pre_bracket, None),
    };
    let module = strip(module);
    if module.is_empty() {
        return Err(ParseErrorKind::EmptyModule);
    }
    if !is_dotted_identifier(module) {
        return Err(ParseErrorKind::InvalidModule(module.to_string()));
    }

    let attribute = attribute.map(parse_attribute).transpose()?;

    let extras = match post_bracket {
        Some(post) => parse_extras(post)?,
        None => Vec::new(),
    };

    Ok(EntryPoint::new(group, name, module)
        .with_optional_attribute(attribute)
        .with_extras(extras))
}

fn parse_attribute(raw: &str) -> ParseResult<String> {
    let attribute = strip(raw);
    if attribute.is_empty() {
        return Err(ParseErrorKind::MissingAttribute);
    }
    if !is_dotted_identifier(attribute) {
        return Err(ParseErrorKind::InvalidAttribute(attribute.to_string()));
    }
    Ok(attribute.to_string())
}

/// Parses everything after the `[` of an extras list.
fn parse_extras(post_bracket: &str) -> ParseResult<Vec<String>> {
    let (inner, trailing) = post_bracket
        .split_once(']')
        .ok_or(ParseErrorKind::UnclosedExtras)?;
    if !strip(trailing).is_empty() {
        return Err(ParseErrorKind::TrailingExtras);
    }
    let inner = strip(inner);
    if inner.is_empty() {
        return Ok(Vec::new());
    }
    inner
        .split(',')
        .map(|extra| {
            let extra = strip(extra);
            if is_extra(extra) {
                Ok(extra.to_string())
            } else {
                Err(ParseErrorKind::InvalidExtra(extra.to_string()))
            }
        })
        .collect()
}
