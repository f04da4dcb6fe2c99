//! OBO stanza parser.
//!
//! Turns a line-oriented OBO stream into an [`OntologyTable`]. The parser
//! is one-pass: it pulls lines in order, never looks ahead, and keeps only
//! the current stanza type and the id of the record being filled.
//!
//! A record stays open until the next `id` line. Stanza headers do not close
//! it, so Term lines that precede their stanza's `id` extend the previous
//! record.
//!
//! Inline comments are stripped by cutting each line at its first `!`.
//! This does not respect quoting, so a `!` inside a quoted `def` value
//! truncates the value.

use std::io::BufRead;

use obo_types::{well_known, OboRecord, OntologyTable, StanzaType};

use crate::types::{OboError, OboResult, ParseSummary};

/// Streaming parser for `[Term]` stanzas.
///
/// Feed it lines with [`feed_line`](Self::feed_line) and collect the table
/// with [`finish`](Self::finish). Any error is fatal for the whole parse.
///
/// # Examples
///
/// ```
/// use obo_loader::StanzaParser;
///
/// let mut parser = StanzaParser::new();
/// for line in ["[Term]", "id: HP:0000118", "name: Phenotypic abnormality"] {
///     parser.feed_line(line)?;
/// }
/// let table = parser.finish();
/// assert_eq!(table.get("HP:0000118").unwrap().name(), Some("Phenotypic abnormality"));
/// # Ok::<(), obo_loader::OboError>(())
/// ```
#[derive(Debug, Default)]
pub struct StanzaParser {
    table: OntologyTable,
    stanza: Option<StanzaType>,
    current_id: Option<String>,
    summary: ParseSummary,
}

impl StanzaParser {
    /// Creates a parser positioned outside any stanza.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one line, with or without its terminator.
    ///
    /// # Errors
    /// Returns [`OboError::MalformedLine`] for a Term line without a
    /// `tag:value` shape, [`OboError::DuplicateSingleValuedTag`] when a
    /// single-valued tag repeats within a record, and
    /// [`OboError::TagBeforeId`] when a tag line comes before any `id`.
    pub fn feed_line(&mut self, line: &str) -> OboResult<()> {
        self.summary.lines_read += 1;
        let line_number = self.summary.lines_read;

        if line.starts_with('[') {
            let stanza = StanzaType::from_header(line);
            if stanza.is_term() {
                self.summary.term_stanzas += 1;
            } else {
                self.summary.other_stanzas += 1;
            }
            self.stanza = Some(stanza);
            return Ok(());
        }

        if self.stanza != Some(StanzaType::Term) {
            self.summary.lines_skipped += 1;
            return Ok(());
        }

        let content = strip_comment(line.trim());
        if content.is_empty() {
            return Ok(());
        }

        let (tag, value) = split_tag_value(content).ok_or_else(|| OboError::MalformedLine {
            line_number,
            line: line.trim_end_matches(['\r', '\n']).to_string(),
        })?;
        let value = value.trim().replace('"', "'");

        if tag == well_known::ID {
            if self.table.insert(value.clone(), OboRecord::new()).is_some() {
                self.summary.replaced_records += 1;
                tracing::warn!(
                    "Term id {} at line {} was already defined; keeping the later stanza",
                    value,
                    line_number
                );
            }
            self.current_id = Some(value.clone());
        }

        let record = self
            .current_id
            .as_deref()
            .and_then(|id| self.table.get_mut(id))
            .ok_or_else(|| OboError::TagBeforeId {
                line_number,
                tag: tag.to_string(),
            })?;

        if well_known::is_single_valued(tag) {
            record
                .set_scalar(tag, value.clone())
                .map_err(|existing| OboError::DuplicateSingleValuedTag {
                    tag: tag.to_string(),
                    stanza_type: well_known::TERM_STANZA.to_string(),
                    existing,
                    value,
                })?;
        } else {
            record.push_value(tag, value);
        }

        Ok(())
    }

    /// Returns the counters collected so far.
    pub fn summary(&self) -> &ParseSummary {
        &self.summary
    }

    /// Ends the input and returns the parsed table.
    pub fn finish(self) -> OntologyTable {
        self.finish_with_summary().0
    }

    /// Ends the input and returns the table together with parse counters.
    pub fn finish_with_summary(self) -> (OntologyTable, ParseSummary) {
        tracing::debug!(
            "Read {} lines: {} Term stanzas, {} other stanzas, {} lines skipped, {} records replaced",
            self.summary.lines_read,
            self.summary.term_stanzas,
            self.summary.other_stanzas,
            self.summary.lines_skipped,
            self.summary.replaced_records
        );
        (self.table, self.summary)
    }
}

/// Parses an in-memory sequence of lines.
pub fn parse_lines<I, S>(lines: I) -> OboResult<OntologyTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = StanzaParser::new();
    for line in lines {
        parser.feed_line(line.as_ref())?;
    }
    Ok(parser.finish())
}

/// Parses OBO text held in a string.
pub fn parse_str(text: &str) -> OboResult<OntologyTable> {
    parse_lines(text.lines())
}

/// Parses a buffered reader one line at a time.
///
/// # Errors
/// Read failures surface as [`OboError::Io`]; parse errors as in
/// [`StanzaParser::feed_line`].
pub fn parse_reader<R: BufRead>(reader: R) -> OboResult<OntologyTable> {
    parse_reader_with_summary(reader).map(|(table, _)| table)
}

/// Like [`parse_reader`], also returning the parse counters.
pub fn parse_reader_with_summary<R: BufRead>(
    mut reader: R,
) -> OboResult<(OntologyTable, ParseSummary)> {
    let mut parser = StanzaParser::new();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        parser.feed_line(&line)?;
    }

    Ok(parser.finish_with_summary())
}

/// Cuts the line at its first `!`.
fn strip_comment(line: &str) -> &str {
    match line.find('!') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Splits `tag:value` at the first colon; both sides must be non-empty.
fn split_tag_value(line: &str) -> Option<(&str, &str)> {
    let (tag, value) = line.split_once(':')?;
    if tag.is_empty() || value.is_empty() {
        return None;
    }
    Some((tag, value))
}
