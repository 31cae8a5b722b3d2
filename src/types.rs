/*!
 * Core types and data structures for the vcfilters application
 */

use std::collections::{BTreeMap, BTreeSet};

use strum::{Display, EnumString, IntoStaticStr};

use crate::utils::filter_name;

/// The item-group element kinds that carry file references in a project file.
///
/// Variant order fixes the emission order of the file item group, which
/// matches the alphabetical tag order the original .filters files use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, IntoStaticStr,
)]
pub enum ItemKind {
    /// Compiled translation units
    ClCompile,
    /// Header files
    ClInclude,
    /// Files carried along without build action
    None,
}

/// A single file reference extracted from the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Original `Include` attribute value, verbatim
    pub filename: String,
    /// Virtual folder the file is displayed under (empty for root-level files)
    pub filtername: String,
}

/// Everything collected from one project file: file entries per item kind,
/// plus the deduplicated set of filter names they map to.
///
/// Write-once during the scan pass, read-once during the write pass.
#[derive(Debug, Clone, Default)]
pub struct ProjectItems {
    groups: BTreeMap<ItemKind, Vec<FileEntry>>,
    filters: BTreeSet<String>,
}

impl ProjectItems {
    /// Record one file reference under the given item kind.
    ///
    /// Derives the filter name from the include path and registers it in the
    /// filter set. Empty include paths must be filtered out by the caller.
    pub fn insert(&mut self, kind: ItemKind, include: &str) {
        let mut entry = FileEntry {
            filename: include.to_owned(),
            filtername: String::new(),
        };

        if let Some(filter) = filter_name(include) {
            self.filters.insert(filter.to_owned());
            entry.filtername = filter.to_owned();
        }

        self.groups.entry(kind).or_default().push(entry);
    }

    /// Distinct filter names in lexicographic order
    pub fn filters(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(String::as_str)
    }

    /// Non-empty item groups in emission order, entries in document order
    pub fn groups(&self) -> impl Iterator<Item = (ItemKind, &[FileEntry])> {
        self.groups.iter().map(|(kind, entries)| (*kind, entries.as_slice()))
    }

    /// Entries recorded for one item kind
    pub fn entries(&self, kind: ItemKind) -> &[FileEntry] {
        self.groups.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of distinct filter names
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Total number of file entries across all groups
    pub fn entry_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// True when no file entries were collected
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }
}
