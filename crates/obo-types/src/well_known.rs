//! Well-known OBO tag names.
//!
//! This module provides constants for the tags the converter projects into
//! its table, plus the per-stanza cardinality policy.
//!
//! # Examples
//!
//! ```
//! use obo_types::well_known;
//!
//! assert!(well_known::is_single_valued(well_known::NAME));
//! assert!(!well_known::is_single_valued(well_known::IS_A));
//! ```

// =============================================================================
// Single-Valued Tags
// =============================================================================

/// Term identifier, e.g. `HP:0000118`.
///
/// Every record is keyed by this tag.
pub const ID: &str = "id";

/// Human-readable term name.
pub const NAME: &str = "name";

/// Textual definition, usually quoted and followed by a dbxref list.
pub const DEF: &str = "def";

/// Free-text comment attached to the term.
pub const COMMENT: &str = "comment";

// =============================================================================
// Repeatable Tags
// =============================================================================

/// Parent term reference (`is_a: HP:0000001 ! All`).
pub const IS_A: &str = "is_a";

/// Ontology namespace, e.g. `biological_process`.
///
/// Not restricted by the format; a term may list several.
pub const NAMESPACE: &str = "namespace";

/// Stanza header name for ontology terms.
pub const TERM_STANZA: &str = "Term";

/// Tags allowed at most once per stanza.
pub const SINGLE_VALUED_TAGS: &[&str] = &[ID, NAME, DEF, COMMENT];

/// Returns true if `tag` may appear at most once per stanza.
pub fn is_single_valued(tag: &str) -> bool {
    SINGLE_VALUED_TAGS.contains(&tag)
}
