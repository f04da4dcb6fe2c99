//! Loader-specific types for OBO file processing.

use obo_types::well_known;
use thiserror::Error;

/// Errors that can occur while reading, parsing or writing OBO data.
#[derive(Error, Debug)]
pub enum OboError {
    /// I/O error reading the input or writing the output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error while writing the TSV table.
    #[error("TSV writing error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP error fetching a remote ontology.
    #[cfg(feature = "network")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A line inside a `[Term]` stanza is not of the form `tag: value`.
    #[error("Unexpected line format at line {line_number}: {line}")]
    MalformedLine {
        /// 1-based line number in the input.
        line_number: usize,
        /// The offending line as read, without its terminator.
        line: String,
    },

    /// A single-valued tag appeared twice in one record.
    #[error("More than one '{tag}' found in {stanza_type} stanza: {existing}, {value}")]
    DuplicateSingleValuedTag {
        /// The repeated tag.
        tag: String,
        /// Name of the enclosing stanza type.
        stanza_type: String,
        /// The value already on the record.
        existing: String,
        /// The conflicting value.
        value: String,
    },

    /// A tag line appeared in a `[Term]` stanza before any `id` line.
    #[error("Tag '{tag}' at line {line_number} appears before any term id")]
    TagBeforeId {
        /// 1-based line number in the input.
        line_number: usize,
        /// The tag that had no record to attach to.
        tag: String,
    },

    /// The input is neither a URL nor an existing local file.
    #[error("File not found: {path}")]
    SourceUnavailable {
        /// The path that was requested.
        path: String,
    },
}

/// Result type for OBO operations.
pub type OboResult<T> = Result<T, OboError>;

/// Default separator for multi-valued cells.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Configuration for the TSV projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsvConfig {
    /// Tags to emit, one column each, in order.
    pub columns: Vec<String>,
    /// Separator used to join the values of multi-valued tags.
    pub separator: String,
}

impl Default for TsvConfig {
    fn default() -> Self {
        Self {
            columns: [
                well_known::ID,
                well_known::NAME,
                well_known::IS_A,
                well_known::NAMESPACE,
                well_known::DEF,
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl TsvConfig {
    /// Creates a config with the default columns and a custom separator.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Default::default()
        }
    }
}

/// Counters collected while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Total lines read.
    pub lines_read: usize,
    /// `[Term]` headers seen.
    pub term_stanzas: usize,
    /// Headers of any other stanza type.
    pub other_stanzas: usize,
    /// Lines dropped because they were outside a `[Term]` stanza.
    pub lines_skipped: usize,
    /// `id` lines that replaced an existing record.
    pub replaced_records: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tsv_config_default() {
        let config = TsvConfig::default();
        assert_eq!(config.columns, vec!["id", "name", "is_a", "namespace", "def"]);
        assert_eq!(config.separator, ", ");
    }

    #[test]
    fn test_tsv_config_with_separator() {
        let config = TsvConfig::with_separator("|");
        assert_eq!(config.columns.len(), 5);
        assert_eq!(config.separator, "|");
    }

    #[test]
    fn test_duplicate_tag_message() {
        let err = OboError::DuplicateSingleValuedTag {
            tag: "name".into(),
            stanza_type: "Term".into(),
            existing: "a".into(),
            value: "b".into(),
        };
        assert_eq!(
            err.to_string(),
            "More than one 'name' found in Term stanza: a, b"
        );
    }
}
