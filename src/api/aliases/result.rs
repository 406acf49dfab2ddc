use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};

/// Which aliases point at which indices, as reported by one `_aliases` call.
///
/// Every index in the response has an entry, including indices without
/// aliases. Indices iterate in name order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasesResult {
    indices: BTreeMap<String, IndexEntry>,
    #[serde(skip)]
    tolerated_anomalies: usize,
}

/// The aliases of a single index, sorted by name.
///
/// The server reports aliases without any order; the sort is only for
/// stable output.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    aliases: Vec<AliasEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AliasEntry {
    pub alias_name: String,
}

impl AliasesResult {
    pub(crate) fn new(indices: BTreeMap<String, IndexEntry>, tolerated_anomalies: usize) -> Self {
        Self {
            indices,
            tolerated_anomalies,
        }
    }

    /// Names of the indices that `alias_name` points at. Exact, case-sensitive
    /// match; empty when nothing matches.
    pub fn indices_by_alias(&self, alias_name: &str) -> Vec<&str> {
        self.indices
            .iter()
            .filter(|(_, entry)| entry.has_alias(alias_name))
            .map(|(index, _)| index.as_str())
            .collect()
    }

    pub fn index(&self, index_name: &str) -> Option<&IndexEntry> {
        self.indices.get(index_name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, IndexEntry> {
        self.indices.iter()
    }

    pub fn index_names(&self) -> impl Iterator<Item = &str> {
        self.indices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of index entries that did not have the expected
    /// `{"aliases": {..}}` shape and were recorded without aliases.
    pub fn tolerated_anomalies(&self) -> usize {
        self.tolerated_anomalies
    }
}

impl<'a> IntoIterator for &'a AliasesResult {
    type Item = (&'a String, &'a IndexEntry);
    type IntoIter = btree_map::Iter<'a, String, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IndexEntry {
    pub(crate) fn new(mut aliases: Vec<AliasEntry>) -> Self {
        aliases.sort();
        Self { aliases }
    }

    pub fn has_alias(&self, alias_name: &str) -> bool {
        self.aliases.iter().any(|a| a.alias_name == alias_name)
    }

    pub fn aliases(&self) -> &[AliasEntry] {
        &self.aliases
    }

    pub fn alias_names(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().map(|a| a.alias_name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl AliasEntry {
    pub fn new(alias_name: impl ToString) -> Self {
        Self {
            alias_name: alias_name.to_string(),
        }
    }
}
