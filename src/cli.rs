//! Command-line interface for prosecheck.

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

use crate::config::{self, AnalysisConfig, Config, DEFAULT_CONFIG_NAMES};
use crate::error::AnalysisError;
use crate::report::{self, FileReport};
use crate::Runner;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Prose quality gate - flag hard-to-read sentences and word echoes.
///
/// Prosecheck scans prose for three things known to make text harder to
/// read: sentences with too many words, sentences with too many
/// characters, and uncommon words repeated in close proximity. It also
/// reports descriptive statistics and standard readability indices.
#[derive(Parser)]
#[command(name = "prosecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze prose in a file or directory
    #[command(visible_alias = "lint")]
    Check(CheckArgs),
    /// Create a new prosecheck config from a template
    Init(InitArgs),
}

/// Arguments for the check command.
#[derive(Parser)]
pub struct CheckArgs {
    /// Path to analyze (file or directory)
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Flag repeated uncommon words within this token distance (0 = off)
    #[arg(short = 'p', long = "prox")]
    pub proximity: Option<usize>,

    /// Flag sentences with at least this many words (0 = off)
    #[arg(short = 'w', long = "word-count")]
    pub word_count: Option<usize>,

    /// Flag sentences with more than this many characters (0 = off)
    #[arg(short = 'c', long = "char-count")]
    pub char_count: Option<usize>,

    /// Run the proximity check even for common words
    #[arg(short = 'a', long)]
    pub track_all_words: bool,

    /// Use the extended common-word filter (overrides -a)
    #[arg(short = 'e', long = "extended-list")]
    pub extended_list: bool,

    /// Compute readability indices
    #[arg(short = 'i', long)]
    pub indices: bool,

    /// Turn off the general statistics
    #[arg(short = 'n', long = "no-stats")]
    pub no_stats: bool,

    /// Syllable dictionary file layered over the built-in one
    #[arg(long)]
    pub syllable_dict: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail (exit non-zero) when the flag total exceeds this budget
    #[arg(long)]
    pub max_flags: Option<usize>,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "prosecheck.yaml")]
    pub output: PathBuf,

    /// Template to use
    #[arg(short, long, default_value = "minimal")]
    pub template: String,

    /// List available templates
    #[arg(short, long)]
    pub list: bool,
}

/// Available config templates.
struct Template {
    name: &'static str,
    description: &'static str,
    content: &'static str,
}

/// All available templates.
static TEMPLATES: &[Template] = &[
    Template {
        name: "minimal",
        description: "Proximity check only, no sentence thresholds",
        content: include_str!("templates/minimal.yaml"),
    },
    Template {
        name: "fiction",
        description: "Fiction drafts: echoes plus word and character budgets",
        content: include_str!("templates/fiction.yaml"),
    },
    Template {
        name: "technical",
        description: "Technical writing with readability indices",
        content: include_str!("templates/technical.yaml"),
    },
];

/// Discover a config file in the current directory.
fn discover_config() -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

/// Collect files to scan under a directory.
fn collect_files(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let extensions = config.scan_extensions();
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).into_iter().filter_entry(|e| {
        let name = e.file_name().to_string_lossy();
        // Skip hidden directories, but never the scan root itself
        e.depth() == 0 || !(e.file_type().is_dir() && name.starts_with('.'))
    }) {
        let entry = entry?;
        if entry.file_type().is_file() {
            let path = entry.path();
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if extensions.iter().any(|e| e == ext) && !config.is_path_excluded(path) {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Build the analysis options: file config first, CLI flags on top.
fn build_analysis_config(args: &CheckArgs, config: &Config) -> AnalysisConfig {
    let mut analysis = config.to_analysis_config();
    if let Some(proximity) = args.proximity {
        analysis.proximity_window = proximity;
    }
    if let Some(words) = args.word_count {
        analysis.word_threshold = words;
    }
    if let Some(chars) = args.char_count {
        analysis.char_threshold = chars;
    }
    if args.track_all_words {
        analysis.track_all_words = true;
    }
    if args.extended_list {
        analysis.extended_common_words = true;
    }
    if args.indices {
        analysis.readability_indices = true;
    }
    if args.no_stats {
        analysis.statistics = false;
    }
    analysis
}

/// Parse a syllable dictionary file: one `word<TAB>count` per line,
/// blank lines and `#` comments ignored. Keys may be multi-word phrases.
pub fn parse_syllable_dict(content: &str) -> anyhow::Result<HashMap<String, usize>> {
    let mut dict = HashMap::new();
    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (word, count) = line
            .rsplit_once(|c: char| c.is_whitespace())
            .ok_or_else(|| anyhow::anyhow!("line {}: expected `word<TAB>count`", idx + 1))?;
        let count: usize = count
            .parse()
            .map_err(|_| anyhow::anyhow!("line {}: invalid count {:?}", idx + 1, count))?;
        dict.insert(word.trim().to_string(), count);
    }
    Ok(dict)
}

/// Run the check command.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!("Error: invalid format {:?}, must be 'pretty' or 'json'", args.format);
        return Ok(EXIT_ERROR);
    }

    // Discover config if not specified; missing config means defaults
    let config_path = args.config.clone().or_else(discover_config);
    let config = match &config_path {
        Some(p) => match Config::parse_file(p) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error parsing config: {}", e);
                return Ok(EXIT_ERROR);
            }
        },
        None => Config::default(),
    };

    // Validate config
    if let Err(e) = config::validate(&config) {
        eprintln!("Error: invalid config: {}", e);
        return Ok(EXIT_ERROR);
    }

    let analysis_config = build_analysis_config(args, &config);
    if let Err(e) = analysis_config.validate() {
        eprintln!("Error: {}", e);
        return Ok(EXIT_ERROR);
    }

    // Check path exists
    let metadata = match std::fs::metadata(&args.path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    // Collect files to scan
    let files = if metadata.is_dir() {
        collect_files(&args.path, &config)?
    } else {
        vec![args.path.clone()]
    };

    if files.is_empty() {
        eprintln!("Warning: no files to scan");
        return Ok(EXIT_SUCCESS);
    }

    // Load the user syllable dictionary, if any
    let dict_path = args
        .syllable_dict
        .clone()
        .or_else(|| config.syllable_dict.as_ref().map(PathBuf::from));
    let dict: Arc<HashMap<String, usize>> = match &dict_path {
        Some(p) => {
            let content = std::fs::read_to_string(p)
                .map_err(|e| anyhow::anyhow!("cannot read syllable dictionary {:?}: {}", p, e))?;
            Arc::new(parse_syllable_dict(&content)?)
        }
        None => Arc::new(HashMap::new()),
    };

    // Analyze files in parallel, one independent runner per file
    let reports: Vec<Option<FileReport>> = files
        .par_iter()
        .map(|path| analyze_file(path, &analysis_config, &dict))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let reports: Vec<FileReport> = reports.into_iter().flatten().collect();

    // Evaluate the flag budget
    let total = report::total_flags(&reports);
    let max_flags = args.max_flags.or(config.max_flags);
    let passed = max_flags.map_or(true, |max| total <= max);

    // Output results
    let path_str = args.path.to_string_lossy().to_string();
    let config_desc = config_path
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());

    if args.output.is_some() {
        colored::control::set_override(false);
    }
    let rendered = match args.format.as_str() {
        "json" => report::render_json(&path_str, &config_desc, &reports, passed, max_flags)?,
        _ => report::render_pretty(&path_str, &config_desc, &reports, passed, max_flags),
    };

    match &args.output {
        Some(out_path) => std::fs::write(out_path, rendered)
            .map_err(|e| anyhow::anyhow!("cannot write report to {:?}: {}", out_path, e))?,
        None => println!("{}", rendered),
    }

    if passed {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Analyze one file. Files with no words are skipped with a warning
/// rather than failing the whole run.
fn analyze_file(
    path: &Path,
    analysis_config: &AnalysisConfig,
    dict: &Arc<HashMap<String, usize>>,
) -> anyhow::Result<Option<FileReport>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read {:?}: {}", path, e))?;

    let mut runner =
        Runner::new(analysis_config.clone())?.with_syllable_dict(Arc::clone(dict));

    match runner.run(&text) {
        Ok(report) => Ok(Some(FileReport::new(
            path.to_string_lossy().to_string(),
            report,
        ))),
        Err(AnalysisError::EmptyInput) => {
            eprintln!("Warning: skipping {:?}: no words", path);
            Ok(None)
        }
        Err(e) => Err(anyhow::anyhow!("{}: {}", path.display(), e)),
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    // List mode
    if args.list {
        return list_templates();
    }

    // Find template
    let template = match TEMPLATES.iter().find(|t| t.name == args.template) {
        Some(t) => t,
        None => {
            eprintln!("Error: unknown template {:?}", args.template);
            eprintln!("Run 'prosecheck init --list' to see available templates");
            return Ok(EXIT_ERROR);
        }
    };

    // Check if output already exists
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    // Write config file
    if let Err(e) = std::fs::write(&args.output, template.content) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!(
        "Created {} from template '{}'",
        args.output.display(),
        template.name
    );
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to tune the thresholds", args.output.display());
    println!("  2. Run: prosecheck check draft.txt --config {}", args.output.display());

    Ok(EXIT_SUCCESS)
}

/// List available templates.
fn list_templates() -> anyhow::Result<i32> {
    println!("Available templates:");
    println!();

    for template in TEMPLATES {
        let name = if template.name == "minimal" {
            format!("{} (default)", template.name)
        } else {
            template.name.to_string()
        };
        println!("  {:<20} {}", name, template.description);
    }

    println!();
    println!("Usage:");
    println!("  prosecheck init --template <name>");

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_syllable_dict() {
        let content = "# comment\n\nwhale\t1\na cappella\t4\nhounded 2\n";
        let dict = parse_syllable_dict(content).unwrap();
        assert_eq!(dict.get("whale"), Some(&1));
        assert_eq!(dict.get("a cappella"), Some(&4));
        assert_eq!(dict.get("hounded"), Some(&2));
    }

    #[test]
    fn test_parse_syllable_dict_rejects_garbage() {
        assert!(parse_syllable_dict("justoneword\n").is_err());
        assert!(parse_syllable_dict("word count\n").is_err());
    }

    #[test]
    fn test_cli_overrides_win() {
        let args = CheckArgs {
            path: PathBuf::from("x"),
            config: None,
            format: "pretty".to_string(),
            proximity: Some(7),
            word_count: None,
            char_count: Some(0),
            track_all_words: false,
            extended_list: true,
            indices: false,
            no_stats: true,
            syllable_dict: None,
            output: None,
            max_flags: None,
        };
        let config: Config =
            serde_yaml::from_str("proximity_window: 15\nword_threshold: 17\nchar_threshold: 95\n")
                .unwrap();
        let analysis = build_analysis_config(&args, &config);
        assert_eq!(analysis.proximity_window, 7);
        assert_eq!(analysis.word_threshold, 17);
        assert_eq!(analysis.char_threshold, 0);
        assert!(analysis.extended_common_words);
        assert!(!analysis.statistics);
    }

    #[test]
    fn test_templates_parse() {
        for template in TEMPLATES {
            let config: Config = serde_yaml::from_str(template.content).unwrap();
            assert!(config::validate(&config).is_ok(), "template {}", template.name);
        }
    }
}
