//! Command-line interface for structscan.
//!
//! This is the request boundary around the analyzer core: it reads untrusted
//! input (a file or stdin plus a language tag), rejects empty snippets and
//! unrecognized tags before calling in, and serializes the result back out.

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::analysis::{self, Language};
use crate::report;
use crate::snippets;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Extract structural facts from source snippets.
///
/// Structscan analyzes a snippet in Python, Java, or C++ and reports
/// functions, classes, variables, loops, conditionals, calls, imports, and a
/// raw code-structure tree in one normalized schema, regardless of how much
/// parsing machinery the language has behind it.
#[derive(Parser)]
#[command(name = "structscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a snippet from a file or stdin
    Analyze(AnalyzeArgs),
    /// Print a bundled example snippet
    Snippet(SnippetArgs),
    /// List supported language tags
    Languages,
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Source file to analyze (stdin when omitted)
    pub path: Option<PathBuf>,

    /// Language tag: python, java, or cpp
    #[arg(short, long)]
    pub language: String,

    /// Output format: json or pretty
    #[arg(short, long, default_value = "json")]
    pub format: String,
}

/// Arguments for the snippet command.
#[derive(Parser)]
pub struct SnippetArgs {
    /// Language tag: python, java, or cpp
    #[arg(short, long)]
    pub language: String,

    /// Snippet name (omit to list available names)
    pub name: Option<String>,
}

/// Run the analyze command. Exit code 0 for a successful analysis, 1 when
/// the snippet could not be parsed, 2 for usage or I/O errors.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    let language: Language = args.language.parse()?;
    let source = read_source(args.path.as_deref())?;
    if source.trim().is_empty() {
        anyhow::bail!("empty source snippet (nothing to analyze)");
    }

    let analysis = analysis::analyze(&source, language);

    match args.format.as_str() {
        "json" => println!("{}", report::render_json(&analysis)?),
        "pretty" => print!("{}", report::render_text(&analysis)),
        other => anyhow::bail!("unknown format: {:?} (expected json or pretty)", other),
    }

    Ok(if analysis.is_failure() {
        EXIT_FAILED
    } else {
        EXIT_SUCCESS
    })
}

/// Run the snippet command.
pub fn run_snippet(args: &SnippetArgs) -> anyhow::Result<i32> {
    let language: Language = args.language.parse()?;
    match &args.name {
        Some(name) => match snippets::find(language, name) {
            Some(snippet) => {
                print!("{}", snippet.source);
                Ok(EXIT_SUCCESS)
            }
            None => anyhow::bail!(
                "no {} snippet named {:?} (try `structscan snippet -l {}` to list)",
                language,
                name,
                language
            ),
        },
        None => {
            let names: Vec<&str> = snippets::for_language(language).map(|s| s.name).collect();
            if names.is_empty() {
                println!("no bundled snippets for {}", language);
            } else {
                for name in names {
                    println!("{}", name);
                }
            }
            Ok(EXIT_SUCCESS)
        }
    }
}

/// Run the languages command.
pub fn run_languages() -> i32 {
    for language in Language::ALL {
        println!("{}", language);
    }
    EXIT_SUCCESS
}

fn read_source(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e)),
        None => Ok(io::read_to_string(io::stdin())?),
    }
}
