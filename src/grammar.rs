//! The `entry_points.txt` grammar.
//!
//! # Overview
//!
//! An `entry_points.txt` file is a line-oriented, INI-like text file that maps
//! grouped names to objects inside Python modules:
//!
//! ```text
//! [console_scripts]
//! foo = foo.cli:main
//! bar = bar.__main__:run [color,progress]
//!
//! ; comment
//! # comment
//! [my.plugins]
//! thing-of-things = pkg.plugins
//! ```
//!
//! # Lines
//!
//! Every line is trimmed before it is classified:
//!
//! - Blank lines are ignored.
//! - Lines starting with `#` or `;` are comments.
//! - Lines starting with `[` are group headers. The interior of the brackets is
//!   trimmed and must match [`GROUP_PATTERN`].
//! - Everything else is an entry line `name = module[:attribute] [extra,...]`.
//!
//! # Entry lines
//!
//! | Part | Rule |
//! |------|------|
//! | name | anything non-empty before the first `=`, trimmed |
//! | module | dotted identifier path |
//! | attribute | optional, after the first `:`; dotted identifier path |
//! | extras | optional, inside `[...]`; comma separated, each matching [`EXTRA_PATTERN`] |
//!
//! A dotted identifier path is one or more identifiers joined by `.`. Each
//! identifier follows Python's rules (an `XID_Start` character or `_`, then
//! `XID_Continue` characters) and must not be a Python keyword (see
//! [`PYTHON_KEYWORDS`]).
//!
//! "Whitespace" means Unicode `White_Space` plus the separators
//! `U+001C`..=`U+001F`, as in Python's `str.strip`.
//!
//! # Canonical form
//!
//! Serialization writes groups in order, separated by one blank line, each
//! entry as `name = module[:attribute][ [extra1,extra2]]`. Groups without
//! entries are omitted.

use regex::Regex;
use std::sync::LazyLock;
use unicode_ident::{is_xid_continue, is_xid_start};

/// Prefixes that mark a (trimmed) line as a comment.
pub const COMMENT_PREFIXES: [char; 2] = ['#', ';'];

/// Group names: runs of letters, numbers (any `N` category, so `²` counts)
/// and `_`, separated by single dots.
pub const GROUP_PATTERN: &str = r"^[\p{L}\p{N}_]+(?:\.[\p{L}\p{N}_]+)*$";

/// Extras: alphanumeric at both ends, `.`, `_` and `-` allowed inside.
pub const EXTRA_PATTERN: &str = r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?$";

/// Python's reserved keywords; none of them may appear as a module or
/// attribute path segment.
pub const PYTHON_KEYWORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

static GROUP_RGX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(GROUP_PATTERN).expect("GROUP_PATTERN is a valid regex"));

static EXTRA_RGX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EXTRA_PATTERN).expect("EXTRA_PATTERN is a valid regex"));

fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Strips leading and trailing whitespace, including the `U+001C`..=`U+001F`
/// separators that `str::trim` keeps.
#[inline]
pub(crate) fn strip(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Returns `true` if the trimmed line is a comment.
#[inline]
pub(crate) fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIXES)
}

/// Returns `true` if `s` is a valid group name.
///
/// # Examples
///
/// ```rust
/// use entry_points_txt::grammar::is_group_name;
///
/// assert!(is_group_name("console_scripts"));
/// assert!(is_group_name("glarch.quux"));
/// assert!(!is_group_name("bad-group"));
/// assert!(!is_group_name("a..b"));
/// ```
#[must_use]
pub fn is_group_name(s: &str) -> bool {
    GROUP_RGX.is_match(s)
}

/// Returns `true` if `s` is a valid extra.
///
/// # Examples
///
/// ```rust
/// use entry_points_txt::grammar::is_extra;
///
/// assert!(is_extra("x"));
/// assert!(is_extra("socks.v5-ssl"));
/// assert!(!is_extra("-x"));
/// assert!(!is_extra(""));
/// ```
#[must_use]
pub fn is_extra(s: &str) -> bool {
    EXTRA_RGX.is_match(s)
}

/// Returns `true` if `s` is a Python keyword.
#[must_use]
pub fn is_keyword(s: &str) -> bool {
    PYTHON_KEYWORDS.contains(&s)
}

/// Returns `true` if `s` is a Python identifier: `_` or an `XID_Start`
/// character, followed by `XID_Continue` characters.
///
/// # Examples
///
/// ```rust
/// use entry_points_txt::grammar::is_identifier;
///
/// assert!(is_identifier("_private"));
/// assert!(is_identifier("e\u{301}"));
/// assert!(!is_identifier("a\u{b2}"));
/// ```
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || is_xid_start(c) => {}
        _ => return false,
    }
    chars.all(is_xid_continue)
}

/// Returns `true` if every `.`-separated segment of `s` is an identifier that
/// is not a keyword.
///
/// # Examples
///
/// ```rust
/// use entry_points_txt::grammar::is_dotted_identifier;
///
/// assert!(is_dotted_identifier("email.message"));
/// assert!(!is_dotted_identifier("email..message"));
/// assert!(!is_dotted_identifier("foo.class"));
/// assert!(!is_dotted_identifier("2fast"));
/// ```
#[must_use]
pub fn is_dotted_identifier(s: &str) -> bool {
    s.split('.').all(|part| is_identifier(part) && !is_keyword(part))
}
