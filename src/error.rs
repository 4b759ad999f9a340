//! Error types for parsing, serializing and resolving entry points.
//!
//! The crate distinguishes three disjoint kinds of failure:
//!
//! - **Parse errors** ([`ParseError`]): the input text is malformed. Parsing stops
//!   at the first offending line.
//! - **Consistency errors** ([`ConsistencyError`]): an [`EntryPointSet`](crate::EntryPointSet)
//!   stores a record under a group or name that differs from the record's own.
//!   Serialization fails before any output is produced.
//! - **Resolution errors** ([`ResolutionError`]): a [`Resolver`](crate::Resolver)
//!   could not import a module or look up an attribute.
//!
//! All of them convert into the crate-wide [`Error`].
//!
//! ## Examples
//!
//! ```rust
//! use entry_points_txt::{parse, Error};
//!
//! let err = parse("[bad-group]\nfoo = bar\n").unwrap_err();
//! assert_eq!(err.to_string(), "Invalid group name: 'bad-group'");
//!
//! if let Error::Parse(e) = err {
//!     assert_eq!(e.line(), 1);
//! }
//! ```

use regex::Regex;
use std::fmt::Write as _;
use std::sync::LazyLock;
use thiserror::Error;

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input text
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A record stored under keys that do not match its own group/name
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    /// Failure reported by a [`Resolver`](crate::Resolver)
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the underlying parse error, if this is one.
    #[must_use]
    pub fn as_parse(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// A syntax error in entry points text.
///
/// The `Display` output is only the diagnostic message; the 1-based line
/// number on which parsing stopped is available via [`ParseError::line`].
///
/// # Examples
///
/// ```rust
/// use entry_points_txt::{ParseError, ParseErrorKind};
///
/// let err = ParseError::new(3, ParseErrorKind::MissingAttribute);
/// assert_eq!(err.line(), 3);
/// assert_eq!(err.to_string(), "Missing attribute name after colon");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    line: usize,
    kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        ParseError { line, kind }
    }

    /// 1-based line number of the offending line.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// What went wrong on a rejected line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Group header missing closing bracket")]
    UnclosedGroupHeader,

    #[error("Empty group name")]
    EmptyGroupName,

    #[error("Invalid group name: {}", quote(.0))]
    InvalidGroupName(String),

    #[error("Entry point line occurs before any group headers")]
    EntryBeforeGroup,

    /// Carries the whole trimmed line
    #[error("Invalid line (no '='): {}", quote(.0))]
    MissingEquals(String),

    #[error("Empty entry point name")]
    EmptyName,

    #[error("Empty module name")]
    EmptyModule,

    #[error("Invalid module name: {}", quote(.0))]
    InvalidModule(String),

    #[error("Missing attribute name after colon")]
    MissingAttribute,

    #[error("Invalid attribute name: {}", quote(.0))]
    InvalidAttribute(String),

    #[error("Extras missing closing bracket")]
    UnclosedExtras,

    #[error("Trailing characters after extras")]
    TrailingExtras,

    #[error("Invalid extra: {}", quote(.0))]
    InvalidExtra(String),
}

/// A grouped collection whose keys disagree with the records stored under them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error(
        "Group mismatch: entry point with group {} placed under {} dict",
        quote(.found),
        quote(.key)
    )]
    GroupMismatch { key: String, found: String },

    #[error(
        "Name mismatch: entry point with name {} placed under key {}",
        quote(.found),
        quote(.key)
    )]
    NameMismatch { key: String, found: String },
}

/// Failure while resolving an entry point to an object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("No module named {}", quote(.0))]
    ModuleNotFound(String),

    #[error("{} has no attribute {}", quote(.object), quote(.attribute))]
    AttributeNotFound { object: String, attribute: String },

    #[error("{0}")]
    Other(String),
}

impl ResolutionError {
    pub fn custom<T: std::fmt::Display>(msg: T) -> Self {
        ResolutionError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Characters that are not printed as-is inside a quoted value: the `C` and
/// `Z` general categories, except the ASCII space.
static NON_PRINTABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{C}\p{Z}]$").expect("NON_PRINTABLE is a valid regex"));

fn is_printable(c: char) -> bool {
    let mut buf = [0u8; 4];
    c == ' ' || !NON_PRINTABLE.is_match(c.encode_utf8(&mut buf))
}

/// Quotes a value the way diagnostics display it: `'value'`, switching to
/// double quotes when the value contains `'` but no `"`. Non-printable
/// characters are written as `\xhh`, `\uhhhh` or `\Uhhhhhhhh`.
pub(crate) fn quote(s: &str) -> String {
    let q = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => {
                let code = c as u32;
                if code < 0x100 {
                    let _ = write!(out, "\\x{:02x}", code);
                } else if code < 0x10000 {
                    let _ = write!(out, "\\u{:04x}", code);
                } else {
                    let _ = write!(out, "\\U{:08x}", code);
                }
            }
            c => out.push(c),
        }
    }
    out.push(q);
    out
}
