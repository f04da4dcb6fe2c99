//! Ordered ontology table.
//!
//! [`OntologyTable`] maps term ids to records while preserving the order in
//! which each id first appeared in the source.

use std::collections::HashMap;

use crate::OboRecord;

/// Insertion-ordered mapping from term id to [`OboRecord`].
///
/// Re-inserting an existing id replaces its record but keeps the position
/// of the first appearance.
///
/// With the `serde` feature the table serializes as a list of
/// `[id, record]` pairs; the id index is rebuilt on load.
///
/// # Examples
///
/// ```
/// use obo_types::{OboRecord, OntologyTable};
///
/// let mut table = OntologyTable::new();
/// table.insert("HP:2".into(), OboRecord::new());
/// table.insert("HP:1".into(), OboRecord::new());
///
/// let ids: Vec<_> = table.ids().collect();
/// assert_eq!(ids, ["HP:2", "HP:1"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<(String, OboRecord)>", into = "Vec<(String, OboRecord)>")
)]
pub struct OntologyTable {
    records: Vec<(String, OboRecord)>,
    index: HashMap<String, usize>,
}

impl OntologyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under `id`.
    ///
    /// Returns the replaced record when `id` was already present.
    pub fn insert(&mut self, id: String, record: OboRecord) -> Option<OboRecord> {
        match self.index.get(&id) {
            Some(&i) => Some(std::mem::replace(&mut self.records[i].1, record)),
            None => {
                self.index.insert(id.clone(), self.records.len());
                self.records.push((id, record));
                None
            }
        }
    }

    /// Returns the record for `id`.
    pub fn get(&self, id: &str) -> Option<&OboRecord> {
        self.index.get(id).map(|&i| &self.records[i].1)
    }

    /// Returns a mutable reference to the record for `id`.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut OboRecord> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.records[i].1),
            None => None,
        }
    }

    /// Returns true if a record exists for `id`.
    pub fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over `(id, record)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OboRecord)> {
        self.records.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Iterates over term ids in first-appearance order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|(id, _)| id.as_str())
    }

    /// Iterates over records in first-appearance order.
    pub fn records(&self) -> impl Iterator<Item = &OboRecord> {
        self.records.iter().map(|(_, record)| record)
    }
}

impl From<Vec<(String, OboRecord)>> for OntologyTable {
    fn from(records: Vec<(String, OboRecord)>) -> Self {
        let mut table = Self::new();
        for (id, record) in records {
            table.insert(id, record);
        }
        table
    }
}

impl From<OntologyTable> for Vec<(String, OboRecord)> {
    fn from(table: OntologyTable) -> Self {
        table.records
    }
}
