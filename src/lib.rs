//! # entry_points_txt
//!
//! Read & write `entry_points.txt` files.
//!
//! ## What is `entry_points.txt`?
//!
//! Python distributions declare their plugins and console scripts in a small
//! INI-like file. Each group lists named entry points, and each entry point
//! refers to a module, optionally an object inside it, and optionally the
//! extras needed to use it:
//!
//! ```text
//! [console_scripts]
//! foo = foo.__main__:main
//! bar = bar.cli:run [color]
//!
//! [my_app.plugins]
//! thing-of-things = one.two
//! ```
//!
//! ## Key Features
//!
//! - **Strict parsing**: every line is validated, and the first bad line is
//!   reported with the exact reason and its line number
//! - **Canonical output**: serialization normalizes whitespace and ordering of
//!   separators while keeping group and entry order
//! - **Ordered**: groups and entries keep insertion order, backed by `IndexMap`
//! - **Pluggable resolution**: [`EntryPoint::resolve`] walks a module and
//!   attribute path through any [`Resolver`] the host supplies
//!
//! ## Quick Start
//!
//! ```rust
//! use entry_points_txt::{parse, serialize, EntryPoint};
//!
//! let set = parse("[console_scripts]\nfoo = bar:baz[quux,glarch]\n").unwrap();
//!
//! let ep = set.get_entry("console_scripts", "foo").unwrap();
//! assert_eq!(
//!     ep,
//!     &EntryPoint::new("console_scripts", "foo", "bar")
//!         .with_attribute("baz")
//!         .with_extras(["quux", "glarch"])
//! );
//!
//! // Serialize back in canonical form
//! let text = serialize(&set).unwrap();
//! assert_eq!(text, "[console_scripts]\nfoo = bar:baz [quux,glarch]\n");
//! ```
//!
//! ### Writing a flat list
//!
//! ```rust
//! use entry_points_txt::{serialize_list, EntryPoint};
//!
//! let text = serialize_list(vec![
//!     EntryPoint::new("console_scripts", "foo", "bar").with_attribute("baz"),
//!     EntryPoint::new("console_scripts", "foo", "quux"),
//! ])
//! .unwrap();
//! assert_eq!(text, "[console_scripts]\nfoo = quux\n");
//! ```
//!
//! ## Format
//!
//! See the [`grammar`] module for the full grammar.

pub mod de;
pub mod entry_point;
pub mod error;
pub mod grammar;
pub mod map;
pub mod ser;

pub use de::Parser;
pub use entry_point::{EntryPoint, Resolver};
pub use error::{ConsistencyError, Error, ParseError, ParseErrorKind, ResolutionError, Result};
pub use map::{EntryPointSet, Group};
pub use ser::Serializer;

use std::io;
use std::str::FromStr;

/// Parses `entry_points.txt` text into an [`EntryPointSet`].
///
/// # Examples
///
/// ```rust
/// use entry_points_txt::parse;
///
/// let set = parse("[g]\nfoo = a\nfoo = b\n").unwrap();
/// assert_eq!(set.get_entry("g", "foo").unwrap().module(), "b");
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] for the first line that violates the grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(s: &str) -> Result<EntryPointSet> {
    Ok(Parser::new(s).parse()?)
}

/// Parses `entry_points.txt` text from UTF-8 bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the text is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(v: &[u8]) -> Result<EntryPointSet> {
    let s = std::str::from_utf8(v).map_err(|e| Error::io(&e.to_string()))?;
    parse(s)
}

/// Reads a whole stream and parses it.
///
/// # Examples
///
/// ```rust
/// use entry_points_txt::load;
/// use std::io::Cursor;
///
/// let set = load(Cursor::new(b"[console_scripts]\nfoo = bar\n")).unwrap();
/// assert!(set.get_entry("console_scripts", "foo").is_some());
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load<R>(mut reader: R) -> Result<EntryPointSet>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&string)
}

/// Serializes an [`EntryPointSet`] to canonical `entry_points.txt` text.
///
/// # Examples
///
/// ```rust
/// use entry_points_txt::{serialize, EntryPoint, EntryPointSet};
///
/// let mut set = EntryPointSet::new();
/// set.insert(EntryPoint::new("console_scripts", "foo", "bar"));
/// set.insert(EntryPoint::new("some.group", "thingy", "module")
///     .with_attribute("object")
///     .with_extras(["xtra"]));
///
/// assert_eq!(
///     serialize(&set).unwrap(),
///     "[console_scripts]\nfoo = bar\n\n[some.group]\nthingy = module:object [xtra]\n"
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::Consistency`] if a record is stored under a group or name
/// other than its own.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize(set: &EntryPointSet) -> Result<String> {
    let mut serializer = Serializer::new();
    serializer.serialize_set(set)?;
    Ok(serializer.into_inner())
}

/// Serializes a flat sequence of records.
///
/// Records are grouped by their own group in order of first appearance; a
/// later record with the same group and name replaces the earlier one.
///
/// # Errors
///
/// Never fails on consistency since every record is keyed by its own group
/// and name; the `Result` mirrors [`serialize`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_list<I>(eps: I) -> Result<String>
where
    I: IntoIterator<Item = EntryPoint>,
{
    serialize(&eps.into_iter().collect())
}

/// Serializes an [`EntryPointSet`] to a writer.
///
/// The text is rendered in memory first, so nothing is written when the set
/// is inconsistent.
///
/// # Errors
///
/// Returns an error if the set is inconsistent or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn dump<W>(set: &EntryPointSet, mut writer: W) -> Result<()>
where
    W: io::Write,
{
    let text = serialize(set)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Serializes a flat sequence of records to a writer. See [`serialize_list`].
///
/// # Errors
///
/// Returns an error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn dump_list<I, W>(eps: I, writer: W) -> Result<()>
where
    I: IntoIterator<Item = EntryPoint>,
    W: io::Write,
{
    dump(&eps.into_iter().collect(), writer)
}

impl FromStr for EntryPointSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let set: EntryPointSet = "[g]\nfoo = bar\n".parse().unwrap();
        assert_eq!(set.get_entry("g", "foo").unwrap().module(), "bar");
    }

    #[test]
    fn test_parse_slice_rejects_invalid_utf8() {
        let err = parse_slice(b"[g]\nfoo = \xff\n").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_roundtrip() {
        let text = "[console_scripts]\nfoo = bar : baz [ quux ]\n\n\n[gui]\nqux=m\n";
        let set = parse(text).unwrap();
        let canonical = serialize(&set).unwrap();
        assert_eq!(
            canonical,
            "[console_scripts]\nfoo = bar:baz [quux]\n\n[gui]\nqux = m\n"
        );
        assert_eq!(parse(&canonical).unwrap(), set);
    }

    #[test]
    fn test_dump_writes_nothing_on_mismatch() {
        let mut set = EntryPointSet::new();
        set.group_mut("g1")
            .insert("foo".to_string(), EntryPoint::new("g2", "foo", "m"));

        let mut buffer = Vec::new();
        let err = dump(&set, &mut buffer).unwrap_err();
        assert!(matches!(err, Error::Consistency(_)));
        assert!(buffer.is_empty());
    }
}
