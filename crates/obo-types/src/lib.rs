//! # obo-types
//!
//! Type definitions for terms read from OBO (Open Biomedical Ontologies)
//! flat files.
//!
//! This crate provides the in-memory shape of a parsed ontology: one
//! [`OboRecord`] per `[Term]` stanza, collected into an insertion-ordered
//! [`OntologyTable`] keyed by term id.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!
//! ## Usage
//!
//! ```rust
//! use obo_types::{well_known, OboRecord, OntologyTable, TagValue};
//!
//! let mut record = OboRecord::new();
//! record.set_scalar(well_known::ID, "HP:0000118".to_string()).unwrap();
//! record.set_scalar(well_known::NAME, "Phenotypic abnormality".to_string()).unwrap();
//! record.push_value(well_known::IS_A, "HP:0000001".to_string());
//!
//! let mut table = OntologyTable::new();
//! table.insert("HP:0000118".to_string(), record);
//!
//! let term = table.get("HP:0000118").unwrap();
//! assert_eq!(
//!     term.get(well_known::IS_A),
//!     Some(&TagValue::Sequence(vec!["HP:0000001".to_string()]))
//! );
//! ```

#![warn(missing_docs)]

mod record;
mod stanza;
mod table;
pub mod well_known;

// Re-export all public types at crate root
pub use record::{OboRecord, TagValue};
pub use stanza::StanzaType;
pub use table::OntologyTable;
