use crate::core::{AnalysisResults, MetricsRecord};
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column order of the tabular output.
pub const OUTPUT_COLUMNS: [&str; 14] = [
    "URL_ID",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    Terminal,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "terminal" => Ok(Self::Terminal),
            other => Err(format!(
                "unknown output format '{}' (expected csv, json or terminal)",
                other
            )),
        }
    }
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()>;
}

/// One output row in column order, values rendered as strings.
pub fn record_row(record: &MetricsRecord) -> [String; 14] {
    [
        record.url_id.clone(),
        record.positive_score.to_string(),
        record.negative_score.to_string(),
        record.polarity_score.to_string(),
        record.subjectivity_score.to_string(),
        record.avg_sentence_length.to_string(),
        record.percentage_complex_words.to_string(),
        record.fog_index.to_string(),
        record.avg_words_per_sentence().to_string(),
        record.complex_word_count.to_string(),
        record.word_count.to_string(),
        record.syllables_per_word.to_string(),
        record.personal_pronouns.to_string(),
        record.avg_word_length.to_string(),
    ]
}

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let mut csv_writer = csv::Writer::from_writer(&mut self.writer);
        csv_writer.write_record(OUTPUT_COLUMNS)?;
        for record in &results.records {
            csv_writer.write_record(record_row(record))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    article_count: usize,
    #[serde(flatten)]
    results: &'a AnalysisResults,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let report = JsonReport {
            article_count: results.article_count(),
            results,
        };
        let json = serde_json::to_string_pretty(&report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(OUTPUT_COLUMNS);

        for record in &results.records {
            table.add_row(display_row(record));
        }

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        self.write_summary(results)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_summary(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {} articles analyzed",
            "Summary:".bold(),
            results.article_count()
        )?;

        if results.failures.is_empty() {
            writeln!(self.writer, "  {}", "all articles read successfully".green())?;
        } else {
            writeln!(
                self.writer,
                "  {}",
                format!(
                    "{} articles could not be read and were scored as empty",
                    results.failures.len()
                )
                .yellow()
            )?;
            for failure in &results.failures {
                writeln!(self.writer, "    - {}: {}", failure.url_id, failure.message)?;
            }
        }
        Ok(())
    }
}

/// Row for on-screen display with rates rounded.
fn display_row(record: &MetricsRecord) -> Vec<String> {
    let rate = |v: f64| format!("{:.4}", v);
    vec![
        record.url_id.clone(),
        record.positive_score.to_string(),
        record.negative_score.to_string(),
        rate(record.polarity_score),
        rate(record.subjectivity_score),
        rate(record.avg_sentence_length),
        rate(record.percentage_complex_words),
        rate(record.fog_index),
        rate(record.avg_words_per_sentence()),
        record.complex_word_count.to_string(),
        record.word_count.to_string(),
        rate(record.syllables_per_word),
        record.personal_pronouns.to_string(),
        rate(record.avg_word_length),
    ]
}

/// Build a writer for `format` targeting `output`, or stdout when `None`.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Csv => Box::new(CsvWriter::new(sink)),
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}
