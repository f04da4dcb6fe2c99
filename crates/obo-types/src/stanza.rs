//! OBO stanza types.

use std::fmt;

use crate::well_known::TERM_STANZA;

/// The type named by a `[Type]` stanza header.
///
/// # Examples
///
/// ```
/// use obo_types::StanzaType;
///
/// assert_eq!(StanzaType::from_header("[Term]\n"), StanzaType::Term);
/// assert_eq!(
///     StanzaType::from_header("[Typedef]"),
///     StanzaType::Other("Typedef".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StanzaType {
    /// An ontology term, the only stanza kept by the parser.
    Term,
    /// Any other stanza (`Typedef`, `Instance`, ...).
    Other(String),
}

impl StanzaType {
    /// Parses a header line such as `[Term]`.
    ///
    /// Surrounding whitespace, the line terminator and the enclosing
    /// brackets are stripped.
    pub fn from_header(line: &str) -> Self {
        let name = line.trim().trim_matches(['[', ']']).trim();
        Self::from_name(name)
    }

    /// Creates a stanza type from its bare name.
    pub fn from_name(name: &str) -> Self {
        if name == TERM_STANZA {
            Self::Term
        } else {
            Self::Other(name.to_string())
        }
    }

    /// Returns the stanza name as written in the header.
    pub fn name(&self) -> &str {
        match self {
            Self::Term => TERM_STANZA,
            Self::Other(name) => name,
        }
    }

    /// Returns true for `[Term]` stanzas.
    pub fn is_term(&self) -> bool {
        matches!(self, Self::Term)
    }
}

impl fmt::Display for StanzaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
