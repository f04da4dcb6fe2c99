//! TSV table emitter.
//!
//! Projects every record of an [`OntologyTable`] onto a fixed column list
//! and writes one tab-separated line per record, without a header row.

use std::io::Write;

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use obo_types::{OboRecord, OntologyTable};

use crate::types::{OboError, OboResult, TsvConfig};

/// Projects one record onto the configured columns.
///
/// Missing tags render as an empty cell; sequences are joined with the
/// configured separator.
pub fn format_row(record: &OboRecord, config: &TsvConfig) -> Vec<String> {
    config
        .columns
        .iter()
        .map(|column| {
            record
                .get(column)
                .map(|value| value.join(&config.separator).into_owned())
                .unwrap_or_default()
        })
        .collect()
}

/// Writes projected rows to any [`Write`] destination.
///
/// Cells are written verbatim: no quoting and no escaping.
pub struct TsvWriter<W: Write> {
    writer: Option<Writer<W>>,
    config: TsvConfig,
}

impl<W: Write> TsvWriter<W> {
    /// Creates a writer with the given projection.
    pub fn new(destination: W, config: TsvConfig) -> Self {
        Self {
            writer: Some(tsv_writer(destination)),
            config,
        }
    }

    /// Writes one record as a row.
    pub fn write_record(&mut self, record: &OboRecord) -> OboResult<()> {
        let row = format_row(record, &self.config);

        // csv quotes a row with no bytes at all as `""`
        if row.iter().all(String::is_empty) && row.len() <= 1 {
            let mut destination = self.take_destination()?;
            let written = destination.write_all(b"\n");
            self.writer = Some(tsv_writer(destination));
            written?;
            return Ok(());
        }

        self.csv()?.write_record(&row)?;
        Ok(())
    }

    /// Writes every record of the table in iteration order.
    pub fn write_table(&mut self, table: &OntologyTable) -> OboResult<usize> {
        for record in table.records() {
            self.write_record(record)?;
        }
        Ok(table.len())
    }

    /// Flushes buffered rows to the destination.
    pub fn flush(&mut self) -> OboResult<()> {
        self.csv()?.flush()?;
        Ok(())
    }

    /// Flushes and returns the destination.
    pub fn into_inner(mut self) -> OboResult<W> {
        self.take_destination()
    }

    fn csv(&mut self) -> OboResult<&mut Writer<W>> {
        self.writer.as_mut().ok_or_else(writer_lost)
    }

    fn take_destination(&mut self) -> OboResult<W> {
        let writer = self.writer.take().ok_or_else(writer_lost)?;
        writer.into_inner().map_err(|e| OboError::Io(e.into_error()))
    }
}

fn tsv_writer<W: Write>(destination: W) -> Writer<W> {
    WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(destination)
}

fn writer_lost() -> OboError {
    OboError::Io(std::io::Error::new(
        std::io::ErrorKind::BrokenPipe,
        "TSV destination lost after a failed flush",
    ))
}

/// Writes the whole table to `destination` and flushes it.
///
/// Returns the number of rows written.
pub fn write_tsv<W: Write>(
    table: &OntologyTable,
    destination: W,
    config: &TsvConfig,
) -> OboResult<usize> {
    let mut writer = TsvWriter::new(destination, config.clone());
    let rows = writer.write_table(table)?;
    writer.flush()?;
    Ok(rows)
}

/// Renders the table as a TSV string.
pub fn to_tsv_string(table: &OntologyTable, config: &TsvConfig) -> OboResult<String> {
    let mut writer = TsvWriter::new(Vec::new(), config.clone());
    writer.write_table(table)?;
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    const GO_TERM: &str = "\
[Term]
id: GO:0000001
name: mitochondrion inheritance
namespace: biological_process
is_a: GO:0048308 ! organelle inheritance
is_a: GO:0048311 ! mitochondrion distribution
";

    #[test]
    fn test_emit_go_term() {
        let table = parse_str(GO_TERM).unwrap();
        let tsv = to_tsv_string(&table, &TsvConfig::default()).unwrap();
        assert_eq!(
            tsv,
            "GO:0000001\tmitochondrion inheritance\tGO:0048308, GO:0048311\tbiological_process\t\n"
        );
    }

    #[test]
    fn test_every_row_has_five_fields() {
        let input = "\
[Term]
id: HP:1
is_a: HP:a
is_a: HP:b
is_a: HP:c
[Term]
id: HP:2
name: only a name
[Term]
id: HP:3
def: \"defined\" [PMID:1]
namespace: a
namespace: b
";
        let table = parse_str(input).unwrap();
        let tsv = to_tsv_string(&table, &TsvConfig::default()).unwrap();

        let lines: Vec<_> = tsv.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(line.split('\t').count(), 5, "bad row: {line:?}");
        }
        assert_eq!(lines[0], "HP:1\t\tHP:a, HP:b, HP:c\t\t");
        assert_eq!(lines[1], "HP:2\tonly a name\t\t\t");
        assert_eq!(lines[2], "HP:3\t\t\ta, b\t'defined' [PMID:1]");
    }

    #[test]
    fn test_rows_follow_first_appearance_order() {
        let input = "[Term]\nid: B\n[Term]\nid: A\n[Term]\nid: B\nname: again\n";
        let table = parse_str(input).unwrap();
        let tsv = to_tsv_string(&table, &TsvConfig::default()).unwrap();
        assert_eq!(tsv, "B\tagain\t\t\t\nA\t\t\t\t\n");
    }

    #[test]
    fn test_custom_separator_and_columns() {
        let table = parse_str(GO_TERM).unwrap();
        let config = TsvConfig {
            columns: vec!["is_a".into(), "id".into(), "synonym".into()],
            separator: "|".into(),
        };
        let row = format_row(table.get("GO:0000001").unwrap(), &config);
        assert_eq!(row, vec!["GO:0048308|GO:0048311", "GO:0000001", ""]);
    }

    #[test]
    fn test_write_tsv_counts_rows() {
        let table = parse_str("[Term]\nid: A\n[Term]\nid: B\n").unwrap();
        let mut out = Vec::new();
        let rows = write_tsv(&table, &mut out, &TsvConfig::default()).unwrap();
        assert_eq!(rows, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "A\t\t\t\t\nB\t\t\t\t\n");
    }

    #[test]
    fn test_single_missing_column_is_blank_line() {
        let table = parse_str("[Term]\nid: A\n[Term]\nid: B\ndef: d\n[Term]\nid: C\n").unwrap();
        let config = TsvConfig {
            columns: vec!["def".into()],
            ..Default::default()
        };
        let tsv = to_tsv_string(&table, &config).unwrap();
        assert_eq!(tsv, "\nd\n\n");
    }

    #[test]
    fn test_no_columns_writes_blank_lines() {
        let table = parse_str("[Term]\nid: A\n[Term]\nid: B\n").unwrap();
        let config = TsvConfig {
            columns: Vec::new(),
            ..Default::default()
        };
        assert_eq!(to_tsv_string(&table, &config).unwrap(), "\n\n");
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let tsv = to_tsv_string(&OntologyTable::new(), &TsvConfig::default()).unwrap();
        assert!(tsv.is_empty());
    }
}
