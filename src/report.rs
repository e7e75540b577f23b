//! Output formatting for prosecheck results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption
//!
//! Both render to a string so the CLI can print it or write it to a file.

use colored::*;
use serde::Serialize;

use crate::analyze::{AnalysisReport, Flag, FlagKind, ReadabilityReport, TextStats};

/// The analysis of one input file.
#[derive(Debug)]
pub struct FileReport {
    pub path: String,
    pub report: AnalysisReport,
}

impl FileReport {
    pub fn new(path: String, report: AnalysisReport) -> Self {
        Self { path, report }
    }
}

/// Total flag count across files.
pub fn total_flags(files: &[FileReport]) -> usize {
    files.iter().map(|f| f.report.flag_count()).sum()
}

// =============================================================================
// JSON Format
// =============================================================================

#[derive(Serialize)]
struct JsonReport<'a> {
    version: String,
    path: &'a str,
    config: &'a str,
    files_scanned: usize,
    flag_count: usize,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_flags: Option<usize>,
    files: Vec<JsonFileEntry<'a>>,
}

#[derive(Serialize)]
struct JsonFileEntry<'a> {
    path: &'a str,
    flag_count: usize,
    #[serde(flatten)]
    report: &'a AnalysisReport,
}

/// Render results as pretty-printed JSON.
pub fn render_json(
    path: &str,
    config_desc: &str,
    files: &[FileReport],
    passed: bool,
    max_flags: Option<usize>,
) -> anyhow::Result<String> {
    let entries: Vec<JsonFileEntry> = files
        .iter()
        .map(|f| JsonFileEntry {
            path: &f.path,
            flag_count: f.report.flag_count(),
            report: &f.report,
        })
        .collect();

    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path,
        config: config_desc,
        files_scanned: files.len(),
        flag_count: total_flags(files),
        passed,
        max_flags,
        files: entries,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Render results for the terminal.
pub fn render_pretty(
    path: &str,
    config_desc: &str,
    files: &[FileReport],
    passed: bool,
    max_flags: Option<usize>,
) -> String {
    let mut out = String::new();

    // Header
    out.push('\n');
    out.push_str(&format!(
        "  {} v{}\n\n",
        "prosecheck".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&format!("  {}{}\n", "Scanning: ".dimmed(), path));
    out.push_str(&format!("  {}{}\n\n", "Config:   ".dimmed(), config_desc));

    for file in files {
        write_file_section(&mut out, file);
    }

    write_final_status(&mut out, total_flags(files), passed, max_flags);
    out
}

fn write_file_section(out: &mut String, file: &FileReport) {
    let report = &file.report;

    if !report.flags.is_empty() {
        out.push_str(&format!(
            "  {} ({}): {}\n\n",
            "Flags".bold(),
            report.flag_count(),
            file.path.blue()
        ));
        for flag in &report.flags {
            write_flag(out, file, flag);
        }
    }

    if let Some(stats) = &report.stats {
        write_stats(out, &file.path, stats);
    }

    if let Some(readability) = &report.readability {
        write_readability(out, &file.path, readability);
    }
}

fn write_flag(out: &mut String, file: &FileReport, flag: &Flag) {
    let location = format!("{}:{}", file.path, flag.line());
    let (tag, summary, evidence) = match flag {
        Flag::Proximity { word, window, .. } => {
            (kind_tag(FlagKind::Proximity), format!("{:?} repeated", word), window)
        }
        Flag::CharThreshold { chars, sentence, .. } => (
            kind_tag(FlagKind::CharThreshold),
            format!("{} characters", chars),
            sentence,
        ),
        Flag::WordThreshold { words, sentence, .. } => (
            kind_tag(FlagKind::WordThreshold),
            format!("{} words", words),
            sentence,
        ),
    };
    out.push_str(&format!("    {} {:<24}{}\n", tag, summary, location.dimmed()));
    out.push_str(&format!("          {}\n\n", evidence));
}

fn kind_tag(kind: FlagKind) -> ColoredString {
    match kind {
        FlagKind::Proximity => "PROX ".yellow(),
        FlagKind::CharThreshold => "CHARS".red(),
        FlagKind::WordThreshold => "WORDS".red(),
    }
}

fn write_stats(out: &mut String, path: &str, stats: &TextStats) {
    out.push_str(&format!("  {} {}\n", "Statistics:".bold(), path.blue()));
    out.push_str(&format!("    Character Count:          {}\n", stats.character_count));
    out.push_str(&format!("    Letter Count:             {}\n", stats.letter_count));
    out.push_str(&format!("    Word Count:               {}\n", stats.word_count));
    out.push_str(&format!("    Sentence Count:           {}\n", stats.sentence_count));
    out.push_str(&format!(
        "    Average Sentence Length:  {:.3} words\n",
        stats.average_sentence_length
    ));
    out.push_str(&format!(
        "    Average Word Length:      {:.3} characters\n",
        stats.average_word_length
    ));
    out.push_str(&format!("    Unique Words:             {}\n", stats.unique_words));
    out.push_str(&format!(
        "    Lexical Density:          {:.1}%\n",
        stats.lexical_density
    ));
    if let Some(count) = stats.syllable_count {
        out.push_str(&format!("    Syllable Count:           {}\n", count));
    }

    let ranked = stats
        .top_words
        .iter()
        .map(|w| format!("{} ({})", w.word, w.count))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("    Top Twenty Words:         {}\n\n", ranked));
}

fn write_readability(out: &mut String, path: &str, readability: &ReadabilityReport) {
    out.push_str(&format!("  {} {}\n", "Readability:".bold(), path.blue()));
    out.push_str(&format!(
        "    Gunning-Fog:          {:.2}  {}\n",
        readability.gunning_fog,
        "(grade level)".dimmed()
    ));
    out.push_str(&format!(
        "    Coleman-Liau:         {:.2}  {}\n",
        readability.coleman_liau,
        "(grade level)".dimmed()
    ));
    out.push_str(&format!(
        "    Flesch Reading Ease:  {:.2}  {}\n\n",
        readability.flesch_reading_ease,
        format!("({})", readability.ease_band).dimmed()
    ));
}

fn write_final_status(out: &mut String, flags: usize, passed: bool, max_flags: Option<usize>) {
    out.push_str(&format!("  Total flags: {}", flags));
    if let Some(max) = max_flags {
        out.push_str(&format!("  {}", format!("Budget: {}", max).dimmed()));
        if passed {
            out.push_str(&format!("  {}", "PASSED".green()));
        } else {
            out.push_str(&format!("  {}", "FAILED".red()));
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::Flag;

    fn sample_files() -> Vec<FileReport> {
        vec![FileReport::new(
            "draft.txt".to_string(),
            AnalysisReport {
                flags: vec![Flag::Proximity {
                    line: 2,
                    word: "marble".to_string(),
                    window: "marble floors and marble".to_string(),
                }],
                stats: None,
                readability: None,
            },
        )]
    }

    #[test]
    fn test_json_shape() {
        let files = sample_files();
        let json = render_json("draft.txt", "(defaults)", &files, true, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["files_scanned"], 1);
        assert_eq!(value["flag_count"], 1);
        assert_eq!(value["passed"], true);
        assert!(value.get("max_flags").is_none());
        let flag = &value["files"][0]["flags"][0];
        assert_eq!(flag["kind"], "proximity");
        assert_eq!(flag["line"], 2);
        assert_eq!(flag["word"], "marble");
    }

    #[test]
    fn test_json_skips_absent_stats() {
        let files = sample_files();
        let json = render_json("draft.txt", "(defaults)", &files, false, Some(0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["files"][0].get("stats").is_none());
        assert_eq!(value["passed"], false);
        assert_eq!(value["max_flags"], 0);
    }

    #[test]
    fn test_pretty_contains_flag_evidence() {
        colored::control::set_override(false);
        let files = sample_files();
        let text = render_pretty("draft.txt", "(defaults)", &files, true, Some(5));
        assert!(text.contains("prosecheck"));
        assert!(text.contains("marble floors and marble"));
        assert!(text.contains("draft.txt:2"));
        assert!(text.contains("PASSED"));
    }
}
