//! Ordered collections of entry points.
//!
//! [`EntryPointSet`] is the grouped form that parsing produces and
//! serialization consumes: group name → entry name → [`EntryPoint`]. Both
//! levels are [`IndexMap`]s, so iteration (and therefore serialized output)
//! follows insertion order. Re-inserting an existing key replaces the value
//! but keeps the key's original position.
//!
//! A flat sequence of records folds into a set through [`FromIterator`] or
//! [`Extend`]; every record is keyed by its own group and name, later records
//! winning.
//!
//! ## Examples
//!
//! ```rust
//! use entry_points_txt::{EntryPoint, EntryPointSet};
//!
//! let set: EntryPointSet = vec![
//!     EntryPoint::new("console_scripts", "foo", "bar"),
//!     EntryPoint::new("gui_scripts", "qux", "quux"),
//!     EntryPoint::new("console_scripts", "foo", "baz"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let groups: Vec<_> = set.keys().cloned().collect();
//! assert_eq!(groups, vec!["console_scripts", "gui_scripts"]);
//! assert_eq!(set.get_entry("console_scripts", "foo").unwrap().module(), "baz");
//! ```

use crate::EntryPoint;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The entry points of a single group, keyed by entry name.
pub type Group = IndexMap<String, EntryPoint>;

/// An insertion-ordered mapping from group names to [`Group`]s.
///
/// Nothing stops a caller from storing a record under keys that differ from
/// its own group and name; [`serialize`](crate::serialize) rejects such sets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryPointSet(IndexMap<String, Group>);

impl EntryPointSet {
    /// Creates an empty `EntryPointSet`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entry_points_txt::EntryPointSet;
    ///
    /// let set = EntryPointSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        EntryPointSet(IndexMap::new())
    }

    /// Creates an empty `EntryPointSet` with room for `capacity` groups.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        EntryPointSet(IndexMap::with_capacity(capacity))
    }

    /// Stores `ep` under its own group and name, creating the group if needed.
    ///
    /// Returns the record previously stored under that pair, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entry_points_txt::{EntryPoint, EntryPointSet};
    ///
    /// let mut set = EntryPointSet::new();
    /// assert!(set.insert(EntryPoint::new("g", "foo", "a")).is_none());
    /// assert!(set.insert(EntryPoint::new("g", "foo", "b")).is_some());
    /// assert_eq!(set.get_entry("g", "foo").unwrap().module(), "b");
    /// ```
    pub fn insert(&mut self, ep: EntryPoint) -> Option<EntryPoint> {
        let name = ep.name().to_string();
        self.group_mut(ep.group()).insert(name, ep)
    }

    /// Returns the group named `group`, inserting an empty one at the end if
    /// it does not exist yet.
    pub fn group_mut(&mut self, group: &str) -> &mut Group {
        if !self.0.contains_key(group) {
            self.0.insert(group.to_string(), Group::new());
        }
        &mut self.0[group]
    }

    /// Replaces a whole group, returning the previous one.
    pub fn insert_group(&mut self, group: String, entries: Group) -> Option<Group> {
        self.0.insert(group, entries)
    }

    /// Removes a group, preserving the order of the remaining groups.
    pub fn remove_group(&mut self, group: &str) -> Option<Group> {
        self.0.shift_remove(group)
    }

    #[must_use]
    pub fn get(&self, group: &str) -> Option<&Group> {
        self.0.get(group)
    }

    /// Looks up a single entry point by group and name.
    #[must_use]
    pub fn get_entry(&self, group: &str, name: &str) -> Option<&EntryPoint> {
        self.0.get(group).and_then(|entries| entries.get(name))
    }

    /// Returns the number of groups, including empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the group names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Group> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Group> {
        self.0.values()
    }

    /// Returns an iterator over `(group name, group)` pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Group> {
        self.0.iter()
    }

    /// Returns every stored record, group by group.
    pub fn entries(&self) -> impl Iterator<Item = &EntryPoint> + '_ {
        self.0.values().flat_map(|entries| entries.values())
    }
}

impl From<IndexMap<String, Group>> for EntryPointSet {
    fn from(map: IndexMap<String, Group>) -> Self {
        EntryPointSet(map)
    }
}

impl From<EntryPointSet> for IndexMap<String, Group> {
    fn from(set: EntryPointSet) -> Self {
        set.0
    }
}

impl IntoIterator for EntryPointSet {
    type Item = (String, Group);
    type IntoIter = indexmap::map::IntoIter<String, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntryPointSet {
    type Item = (&'a String, &'a Group);
    type IntoIter = indexmap::map::Iter<'a, String, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Group)> for EntryPointSet {
    fn from_iter<T: IntoIterator<Item = (String, Group)>>(iter: T) -> Self {
        EntryPointSet(IndexMap::from_iter(iter))
    }
}

impl FromIterator<EntryPoint> for EntryPointSet {
    fn from_iter<T: IntoIterator<Item = EntryPoint>>(iter: T) -> Self {
        let mut set = EntryPointSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<EntryPoint> for EntryPointSet {
    fn extend<T: IntoIterator<Item = EntryPoint>>(&mut self, iter: T) {
        for ep in iter {
            self.insert(ep);
        }
    }
}
