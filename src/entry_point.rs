//! The entry point record.
//!
//! An [`EntryPoint`] binds a name inside a group to a Python module and,
//! optionally, an attribute path inside that module, together with a list of
//! extras needed to use it.
//!
//! ## Examples
//!
//! ```rust
//! use entry_points_txt::EntryPoint;
//!
//! let ep = EntryPoint::new("console_scripts", "foo", "bar")
//!     .with_attribute("baz")
//!     .with_extras(["quux", "glarch"]);
//!
//! assert_eq!(ep.to_line(), "foo = bar:baz [quux,glarch]");
//! ```
//!
//! ## Resolution
//!
//! Turning a record into the object it references needs a module loader,
//! which this crate does not provide. Callers plug one in through the
//! [`Resolver`] trait and call [`EntryPoint::resolve`].

use crate::error::ResolutionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry point.
///
/// Records are plain values: they are built once, either by the parser or by
/// calling [`EntryPoint::new`] and the `with_*` builders, and never change
/// afterwards. No validation happens at construction time; the parser only
/// produces well-formed records, and the serializer checks that a record sits
/// under its own group and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryPoint {
    group: String,
    name: String,
    module: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attribute: Option<String>,
    #[serde(default)]
    extras: Vec<String>,
}

impl EntryPoint {
    /// Creates an entry point referencing `module` itself, with no extras.
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        EntryPoint {
            group: group.into(),
            name: name.into(),
            module: module.into(),
            attribute: None,
            extras: Vec::new(),
        }
    }

    /// Sets the dotted attribute path inside the module.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Sets the attribute path, or clears it with `None`.
    #[must_use]
    pub fn with_optional_attribute(mut self, attribute: Option<String>) -> Self {
        self.attribute = attribute;
        self
    }

    /// Sets the extras. Order and duplicates are kept as given.
    #[must_use]
    pub fn with_extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras = extras.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// The attribute path, `None` when the entry point is the module itself.
    #[must_use]
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    #[must_use]
    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    /// Renders the record as a single line without group or trailing newline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entry_points_txt::EntryPoint;
    ///
    /// let ep = EntryPoint::new("group", "foo", "bar").with_extras(["xtra"]);
    /// assert_eq!(ep.to_line(), "foo = bar [xtra]");
    /// ```
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut line = String::with_capacity(self.name.len() + self.module.len() + 16);
        self.write_line(&mut line);
        line
    }

    /// Appends the [`to_line`](Self::to_line) form to `out`.
    pub(crate) fn write_line(&self, out: &mut String) {
        out.push_str(&self.name);
        out.push_str(" = ");
        out.push_str(&self.module);
        if let Some(attribute) = &self.attribute {
            out.push(':');
            out.push_str(attribute);
        }
        if !self.extras.is_empty() {
            out.push_str(" [");
            out.push_str(&self.extras.join(","));
            out.push(']');
        }
    }

    /// Resolves the referenced object: imports the module, then looks up each
    /// `.`-separated segment of the attribute path in turn.
    ///
    /// # Errors
    ///
    /// Returns whatever error the resolver reports for the import or for the
    /// first failed attribute lookup.
    pub fn resolve<R>(&self, resolver: &R) -> std::result::Result<R::Object, ResolutionError>
    where
        R: Resolver + ?Sized,
    {
        let mut object = resolver.import_module(&self.module)?;
        if let Some(attribute) = &self.attribute {
            for segment in attribute.split('.') {
                object = resolver.get_attribute(&object, segment)?;
            }
        }
        Ok(object)
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// A host-supplied module loader used by [`EntryPoint::resolve`].
///
/// # Examples
///
/// ```rust
/// use entry_points_txt::{EntryPoint, ResolutionError, Resolver};
///
/// struct Paths;
///
/// impl Resolver for Paths {
///     type Object = String;
///
///     fn import_module(&self, module: &str) -> Result<String, ResolutionError> {
///         Ok(module.to_string())
///     }
///
///     fn get_attribute(&self, object: &String, name: &str) -> Result<String, ResolutionError> {
///         Ok(format!("{object}.{name}"))
///     }
/// }
///
/// let ep = EntryPoint::new("g", "foo", "pkg.mod").with_attribute("Cls.method");
/// assert_eq!(ep.resolve(&Paths).unwrap(), "pkg.mod.Cls.method");
/// ```
pub trait Resolver {
    /// Whatever the host uses to represent loaded modules and their members.
    type Object;

    /// Loads a module by its dotted path.
    fn import_module(&self, module: &str) -> std::result::Result<Self::Object, ResolutionError>;

    /// Looks up a single (undotted) attribute on an object.
    fn get_attribute(
        &self,
        object: &Self::Object,
        name: &str,
    ) -> std::result::Result<Self::Object, ResolutionError>;
}
