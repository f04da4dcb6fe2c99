//! # obo-loader
//!
//! Streaming parser and TSV emitter for OBO (Open Biomedical Ontologies)
//! flat files.
//!
//! The [`StanzaParser`] reads `[Term]` stanzas into an ordered
//! [`OntologyTable`](obo_types::OntologyTable); [`write_tsv`] projects that
//! table onto a fixed set of columns.
//!
//! ```rust
//! use obo_loader::{parse_str, to_tsv_string, TsvConfig};
//!
//! let table = parse_str("[Term]\nid: HP:0000001\nname: All\n")?;
//! let tsv = to_tsv_string(&table, &TsvConfig::default())?;
//! assert_eq!(tsv, "HP:0000001\tAll\t\t\t\n");
//! # Ok::<(), obo_loader::OboError>(())
//! ```
//!
//! ## Features
//!
//! - `network` (default): read ontologies straight from HTTP(S) URLs.

#![warn(missing_docs)]

mod parser;
mod source;
mod stats;
mod types;
mod writer;

pub use parser::{
    parse_lines, parse_reader, parse_reader_with_summary, parse_str, StanzaParser,
};
pub use source::{format_bytes, open_input, InputSource};
pub use stats::{OntologyStats, TagStats};
pub use types::{OboError, OboResult, ParseSummary, TsvConfig, DEFAULT_SEPARATOR};
pub use writer::{format_row, to_tsv_string, write_tsv, TsvWriter};

// Re-export obo-types for convenience
pub use obo_types;
