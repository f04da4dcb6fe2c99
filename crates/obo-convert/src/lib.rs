//! # obo-convert
//!
//! Converts an OBO ontology into a TSV table.
//!
//! This crate wires the [`obo_loader`] parser and emitter together with
//! input resolution and optional statistics, and backs the `obo2tsv`
//! binary.

#![warn(missing_docs)]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use obo_loader::{
    parse_reader_with_summary, write_tsv, InputSource, OboResult, OntologyStats, TsvConfig,
};

/// Options for a single conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Where to write the table; standard output when `None`.
    pub output_path: Option<PathBuf>,
    /// Root term for subtree filtering. Accepted but not applied.
    pub root_id: Option<String>,
    /// Return every record instead of a computed root's subtree.
    pub return_all: bool,
    /// Compute and log per-tag statistics.
    pub verbose: bool,
    /// Column projection for the table.
    pub tsv: TsvConfig,
}

/// Counts reported by a finished conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Records in the parsed table.
    pub records: usize,
    /// Rows written to the output.
    pub rows_written: usize,
    /// Lines read from the input.
    pub lines_read: usize,
}

/// Parses the ontology at `input_path` and writes it out as TSV.
///
/// `input_path` may be an HTTP(S) URL, a `.gz` file or a plain file.
///
/// # Errors
/// Fails on an unavailable source, any parse error, or an I/O error on
/// the output. Nothing is written when parsing fails.
pub fn convert_obo_to_tsv(input_path: &str, options: &ConvertOptions) -> OboResult<ConvertSummary> {
    if let Some(root_id) = &options.root_id {
        tracing::warn!(
            "Subtree filtering by root id {} is not implemented; writing all terms",
            root_id
        );
    } else if !options.return_all {
        tracing::debug!("No root id given; writing all terms");
    }

    tracing::info!("Parsing {}", input_path);
    let source = InputSource::resolve(input_path)?;
    let (table, parse_summary) = parse_reader_with_summary(source.open()?)?;

    if options.verbose {
        OntologyStats::from_table(&table).log(input_path);
    }

    let rows_written = match &options.output_path {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            let rows = write_tsv(&table, &mut out, &options.tsv)?;
            out.flush()?;
            tracing::info!("Wrote {} rows to {}", rows, path.display());
            rows
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let rows = write_tsv(&table, &mut out, &options.tsv)?;
            out.flush()?;
            rows
        }
    };

    tracing::info!("Done");

    Ok(ConvertSummary {
        records: table.len(),
        rows_written,
        lines_read: parse_summary.lines_read,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use obo_loader::OboError;

    const HP_SAMPLE: &str = "\
format-version: 1.2
data-version: hp/releases/2024-01-01
ontology: hp

[Term]
id: HP:0000001
name: All

[Term]
id: HP:0000118
name: Phenotypic abnormality
def: \"A phenotypic abnormality.\" [HPO:probinson]
is_a: HP:0000001 ! All

[Typedef]
id: part_of
name: part of
";

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("obo-convert-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_convert_to_file() {
        let input = temp_path("hp.obo");
        let output = temp_path("hp.tsv");
        std::fs::write(&input, HP_SAMPLE).unwrap();

        let options = ConvertOptions {
            output_path: Some(output.clone()),
            verbose: true,
            ..Default::default()
        };
        let summary = convert_obo_to_tsv(input.to_str().unwrap(), &options).unwrap();

        assert_eq!(summary.records, 2);
        assert_eq!(summary.rows_written, 2);
        assert_eq!(summary.lines_read, 17);

        let tsv = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            tsv,
            "HP:0000001\tAll\t\t\t\n\
             HP:0000118\tPhenotypic abnormality\tHP:0000001\t\t'A phenotypic abnormality.' [HPO:probinson]\n"
        );

        std::fs::remove_file(&input).ok();
        std::fs::remove_file(&output).ok();
    }

    #[test]
    fn test_root_id_does_not_filter() {
        let input = temp_path("root.obo");
        let output = temp_path("root.tsv");
        std::fs::write(&input, HP_SAMPLE).unwrap();

        let options = ConvertOptions {
            output_path: Some(output.clone()),
            root_id: Some("HP:0000118".into()),
            ..Default::default()
        };
        let summary = convert_obo_to_tsv(input.to_str().unwrap(), &options).unwrap();
        assert_eq!(summary.rows_written, 2);

        std::fs::remove_file(&input).ok();
        std::fs::remove_file(&output).ok();
    }

    #[test]
    fn test_parse_error_writes_nothing() {
        let input = temp_path("bad.obo");
        let output = temp_path("bad.tsv");
        std::fs::write(&input, "[Term]\nid: HP:1\nname: a\nname: b\n").unwrap();

        let options = ConvertOptions {
            output_path: Some(output.clone()),
            ..Default::default()
        };
        let err = convert_obo_to_tsv(input.to_str().unwrap(), &options).unwrap_err();
        assert!(matches!(err, OboError::DuplicateSingleValuedTag { .. }));
        assert!(!output.exists());

        std::fs::remove_file(&input).ok();
    }

    #[test]
    fn test_missing_input() {
        let err = convert_obo_to_tsv("no-such-file.obo", &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, OboError::SourceUnavailable { .. }));
    }
}
