//! Summary statistics over a parsed ontology.
//!
//! A read-only pass that counts, per tag, how many records carry it and,
//! for repeatable tags, how many values they hold in total.

use std::collections::HashMap;

use obo_types::{OntologyTable, TagValue};

/// Usage statistics for one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStats {
    /// The tag name.
    pub tag: String,
    /// Number of records that have this tag.
    pub records_with_tag: usize,
    /// Total number of values across records, for repeatable tags only.
    pub total_values: Option<usize>,
}

impl TagStats {
    /// Returns the percentage of `total_records` that have this tag.
    pub fn percent_with_tag(&self, total_records: usize) -> f64 {
        if total_records == 0 {
            0.0
        } else {
            (self.records_with_tag as f64 / total_records as f64) * 100.0
        }
    }

    /// Returns the average number of values per record that has the tag.
    ///
    /// `None` for single-valued tags.
    pub fn values_per_record(&self) -> Option<f64> {
        let total = self.total_values?;
        if self.records_with_tag == 0 {
            return Some(0.0);
        }
        Some(total as f64 / self.records_with_tag as f64)
    }
}

/// Per-tag statistics for a whole table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OntologyStats {
    /// Number of records in the table.
    pub total_records: usize,
    /// Tags sorted by `records_with_tag`, most common first.
    ///
    /// Ties keep the order in which tags were first seen.
    pub tags: Vec<TagStats>,
}

impl OntologyStats {
    /// Computes statistics for `table`.
    pub fn from_table(table: &OntologyTable) -> Self {
        let mut tags: Vec<TagStats> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for record in table.records() {
            for (tag, value) in record.tags() {
                let i = *positions.entry(tag).or_insert_with(|| {
                    tags.push(TagStats {
                        tag: tag.to_string(),
                        records_with_tag: 0,
                        total_values: None,
                    });
                    tags.len() - 1
                });

                let stats = &mut tags[i];
                stats.records_with_tag += 1;
                if let TagValue::Sequence(values) = value {
                    *stats.total_values.get_or_insert(0) += values.len();
                }
            }
        }

        // stable sort keeps first-seen order among equal counts
        tags.sort_by(|a, b| b.records_with_tag.cmp(&a.records_with_tag));

        Self {
            total_records: table.len(),
            tags,
        }
    }

    /// Returns the statistics for one tag.
    pub fn get(&self, tag: &str) -> Option<&TagStats> {
        self.tags.iter().find(|t| t.tag == tag)
    }

    /// Renders one human-readable line per tag.
    pub fn lines(&self) -> Vec<String> {
        self.tags
            .iter()
            .map(|stats| {
                let mut line = format!(
                    "{} out of {} ({:.1}%) records have a {} tag",
                    stats.records_with_tag,
                    self.total_records,
                    stats.percent_with_tag(self.total_records),
                    stats.tag
                );
                if let Some(avg) = stats.values_per_record() {
                    line.push_str(&format!(
                        ", and have, on average, {avg:.1} values per record."
                    ));
                }
                line
            })
            .collect()
    }

    /// Logs the statistics at info level.
    pub fn log(&self, source: &str) {
        tracing::info!("Parsed {} terms from {}", self.total_records, source);
        for line in self.lines() {
            tracing::info!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    const INPUT: &str = "\
[Term]
id: A
name: a
is_a: X
is_a: Y
is_a: Z
[Term]
id: B
is_a: X
xref: R
[Term]
id: C
name: c
xref: S
[Term]
id: D
";

    #[test]
    fn test_counts_and_order() {
        let table = parse_str(INPUT).unwrap();
        let stats = OntologyStats::from_table(&table);

        assert_eq!(stats.total_records, 4);
        let order: Vec<_> = stats.tags.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(order, ["id", "name", "is_a", "xref"]);

        let is_a = stats.get("is_a").unwrap();
        assert_eq!(is_a.records_with_tag, 2);
        assert_eq!(is_a.total_values, Some(4));
        assert_eq!(is_a.values_per_record(), Some(2.0));
        assert!((is_a.percent_with_tag(4) - 50.0).abs() < 0.01);

        assert_eq!(stats.get("name").unwrap().total_values, None);
    }

    #[test]
    fn test_lines() {
        let table = parse_str(INPUT).unwrap();
        let lines = OntologyStats::from_table(&table).lines();

        assert_eq!(lines[0], "4 out of 4 (100.0%) records have a id tag");
        assert_eq!(
            lines[2],
            "2 out of 4 (50.0%) records have a is_a tag, and have, on average, 2.0 values per record."
        );
    }

    #[test]
    fn test_empty_table() {
        let stats = OntologyStats::from_table(&OntologyTable::new());
        assert_eq!(stats.total_records, 0);
        assert!(stats.tags.is_empty());
        assert!(stats.lines().is_empty());

        let tag = TagStats {
            tag: "id".into(),
            records_with_tag: 0,
            total_values: None,
        };
        assert_eq!(tag.percent_with_tag(0), 0.0);
    }
}
