//! Serializing entry points to `entry_points.txt` text.
//!
//! This module provides the [`Serializer`] that renders an [`EntryPointSet`]
//! in canonical form. Most users should call [`serialize`](crate::serialize),
//! [`serialize_list`](crate::serialize_list) or one of the `dump` functions.
//!
//! ## Output
//!
//! - Groups appear in iteration order, each as `[group]` followed by one line
//!   per entry
//! - A single blank line separates consecutive groups
//! - Groups with no entries produce no output at all
//!
//! ## Consistency
//!
//! Every record must sit under its own group and name. The serializer checks
//! this for the whole set before writing a single byte, so a rejected set
//! leaves the output untouched.
//!
//! ```rust
//! use entry_points_txt::ser::Serializer;
//! use entry_points_txt::{EntryPoint, EntryPointSet};
//!
//! let mut set = EntryPointSet::new();
//! set.insert(EntryPoint::new("console_scripts", "foo", "bar").with_attribute("main"));
//!
//! let mut serializer = Serializer::new();
//! serializer.serialize_set(&set).unwrap();
//! assert_eq!(serializer.into_inner(), "[console_scripts]\nfoo = bar:main\n");
//! ```

use crate::error::ConsistencyError;
use crate::EntryPointSet;
use tracing::{debug, trace};

/// The `entry_points.txt` serializer.
///
/// Accumulates text in memory; retrieve it with [`Serializer::into_inner`].
#[derive(Debug, Default)]
pub struct Serializer {
    output: String,
    groups_written: usize,
}

impl Serializer {
    pub fn new() -> Self {
        Serializer {
            // Enough for a handful of console scripts
            output: String::with_capacity(256),
            groups_written: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends `set` to the output.
    ///
    /// Groups from consecutive calls are separated like groups within one set.
    ///
    /// # Errors
    ///
    /// Returns a [`ConsistencyError`] if any record is stored under a group or
    /// name other than its own. Nothing is appended in that case.
    pub fn serialize_set(
        &mut self,
        set: &EntryPointSet,
    ) -> std::result::Result<(), ConsistencyError> {
        check_consistency(set)?;

        for (group, entries) in set {
            if entries.is_empty() {
                trace!(group = %group, "skipping empty group");
                continue;
            }
            if self.groups_written > 0 {
                self.output.push('\n');
            }
            self.output.push('[');
            self.output.push_str(group);
            self.output.push_str("]\n");
            for ep in entries.values() {
                ep.write_line(&mut self.output);
                self.output.push('\n');
            }
            self.groups_written += 1;
            trace!(group = %group, entries = entries.len(), "wrote group");
        }
        debug!(
            groups = self.groups_written,
            bytes = self.output.len(),
            "serialized entry points"
        );
        Ok(())
    }
}

/// Verifies that every record's group and name match the keys it is stored under.
fn check_consistency(set: &EntryPointSet) -> std::result::Result<(), ConsistencyError> {
    for (group, entries) in set {
        for (name, ep) in entries {
            if ep.group() != group {
                return Err(ConsistencyError::GroupMismatch {
                    key: group.clone(),
                    found: ep.group().to_string(),
                });
            }
            if ep.name() != name {
                return Err(ConsistencyError::NameMismatch {
                    key: name.clone(),
                    found: ep.name().to_string(),
                });
            }
        }
    }
    Ok(())
}
