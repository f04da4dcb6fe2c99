//! OBO term record type.
//!
//! This module provides [`OboRecord`], the tag/value content of a single
//! `[Term]` stanza, and [`TagValue`], the per-tag value shape.

use std::borrow::Cow;
use std::slice;

use crate::well_known;

/// Value held by one tag of a record.
///
/// Tags that the cardinality policy marks single-valued
/// (see [`well_known::SINGLE_VALUED_TAGS`]) hold a `Scalar`; every other tag
/// holds a `Sequence` in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum TagValue {
    /// A tag allowed at most once per stanza.
    Scalar(String),
    /// A repeatable tag, never empty once created by the parser.
    Sequence(Vec<String>),
}

impl TagValue {
    /// Returns the scalar value, or `None` for a sequence.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the sequence values, or `None` for a scalar.
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::Sequence(values) => Some(values),
        }
    }

    /// Returns every value as a slice (a scalar yields one element).
    pub fn values(&self) -> &[String] {
        match self {
            Self::Scalar(value) => slice::from_ref(value),
            Self::Sequence(values) => values,
        }
    }

    /// Renders the value for a table cell.
    ///
    /// Scalars are returned as-is; sequences are joined with `separator`.
    ///
    /// ```
    /// use obo_types::TagValue;
    ///
    /// let v = TagValue::Sequence(vec!["HP:1".into(), "HP:2".into()]);
    /// assert_eq!(v.join(", "), "HP:1, HP:2");
    /// ```
    pub fn join(&self, separator: &str) -> Cow<'_, str> {
        match self {
            Self::Scalar(value) => Cow::Borrowed(value),
            Self::Sequence(values) => Cow::Owned(values.join(separator)),
        }
    }
}

/// One ontology term, built from a single `[Term]` stanza.
///
/// Tags iterate in the order they first appeared in the stanza.
///
/// # Examples
///
/// ```
/// use obo_types::OboRecord;
///
/// let mut record = OboRecord::new();
/// record.set_scalar("id", "HP:0000118".to_string()).unwrap();
/// record.push_value("is_a", "HP:0000001".to_string());
///
/// assert_eq!(record.id(), Some("HP:0000118"));
/// assert_eq!(record.values("is_a"), ["HP:0000001".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OboRecord {
    tags: Vec<(String, TagValue)>,
}

impl OboRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `tag`, if present.
    pub fn get(&self, tag: &str) -> Option<&TagValue> {
        self.position(tag).map(|i| &self.tags[i].1)
    }

    /// Returns true if the record has a value for `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.position(tag).is_some()
    }

    /// Returns the scalar value of `tag`, if present and single-valued.
    pub fn scalar(&self, tag: &str) -> Option<&str> {
        self.get(tag).and_then(TagValue::as_scalar)
    }

    /// Returns all values of `tag` (empty if absent).
    pub fn values(&self, tag: &str) -> &[String] {
        self.get(tag).map(TagValue::values).unwrap_or_default()
    }

    /// Returns the term id.
    pub fn id(&self) -> Option<&str> {
        self.scalar(well_known::ID)
    }

    /// Returns the term name.
    pub fn name(&self) -> Option<&str> {
        self.scalar(well_known::NAME)
    }

    /// Assigns a single-valued tag.
    ///
    /// # Errors
    /// If the tag already has a value it is left untouched and the existing
    /// value is returned, rendered as a cell.
    pub fn set_scalar(&mut self, tag: &str, value: String) -> Result<(), String> {
        if let Some(existing) = self.get(tag) {
            return Err(existing.join(", ").into_owned());
        }
        self.tags.push((tag.to_string(), TagValue::Scalar(value)));
        Ok(())
    }

    /// Appends a value to a repeatable tag, creating the sequence if absent.
    ///
    /// Single-valued tags go through [`OboRecord::set_scalar`]; a scalar
    /// already stored under `tag` is left as is.
    pub fn push_value(&mut self, tag: &str, value: String) {
        debug_assert!(
            !well_known::is_single_valued(tag),
            "'{tag}' is single-valued"
        );
        match self.tags.iter_mut().find(|(t, _)| t == tag) {
            Some((_, TagValue::Sequence(values))) => values.push(value),
            Some((_, TagValue::Scalar(_))) => {}
            None => self
                .tags
                .push((tag.to_string(), TagValue::Sequence(vec![value]))),
        }
    }

    /// Iterates over `(tag, value)` pairs in first-appearance order.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.tags.iter().map(|(tag, value)| (tag.as_str(), value))
    }

    /// Returns the number of distinct tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if no tag has been set.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn position(&self, tag: &str) -> Option<usize> {
        self.tags.iter().position(|(t, _)| t == tag)
    }
}
