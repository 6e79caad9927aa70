//! Multi-language structural analysis of source snippets.
//!
//! One entry point, three strategies:
//!
//! ```text
//! ┌──────────────────┐     ┌────────────────────┐     ┌────────────────────┐
//! │ (source, tag)    │────▶│ analyze() dispatch │────▶│ StructuralAnalysis │
//! └──────────────────┘     └────────────────────┘     │ Success | Failure  │
//!                             │        │        │     └────────────────────┘
//!                    ┌────────┘        │        └─────────┐
//!              ┌─────▼─────┐    ┌──────▼─────┐    ┌───────▼──────┐
//!              │ Python    │    │ Java       │    │ C++          │
//!              │ (precise) │    │ (grammar)  │    │ (heuristic)  │
//!              └───────────┘    └────────────┘    └──────────────┘
//! ```
//!
//! Each call builds one extractor, uses it once, and discards it. The whole
//! pipeline is pure in-memory text processing: no I/O, no shared state, no
//! error escaping the result value.

mod extract;
mod languages;
mod schema;
pub(crate) mod syntax;

use std::fmt;
use std::str::FromStr;

pub use extract::SnippetExtractor;
pub use languages::{CppExtractor, JavaExtractor, PythonExtractor};
pub use schema::{
    AnalysisFailure, CallInfo, ClassInfo, ConditionalInfo, FunctionInfo, ImportInfo, LoopInfo,
    LoopKind, ParameterInfo, StructuralAnalysis, StructuralFacts, StructureNode, VariableInfo,
};

/// Supported language tags. A closed set: callers resolve untrusted tag
/// strings through `FromStr` at the boundary, so an unsupported language
/// never reaches `analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Java,
    Cpp,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Python, Language::Java, Language::Cpp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Boundary-level rejection of an unrecognized language tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {tag:?} (expected one of: python, java, cpp)")]
pub struct UnsupportedLanguage {
    pub tag: String,
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "cpp" | "c++" => Ok(Language::Cpp),
            _ => Err(UnsupportedLanguage { tag: s.to_string() }),
        }
    }
}

/// Analyze one snippet with the extractor matching the language tag.
///
/// Empty or whitespace-only input short-circuits to an empty `Success`:
/// absence of constructs is not an error, and every list field (including
/// `code_structure`) stays empty. For non-empty input a fresh extractor is
/// built for this call alone; the result is a pure value either way.
pub fn analyze(source: &str, language: Language) -> StructuralAnalysis {
    if source.trim().is_empty() {
        tracing::debug!(language = %language, "empty snippet, returning empty analysis");
        return StructuralAnalysis::empty();
    }

    tracing::debug!(language = %language, bytes = source.len(), "analyzing snippet");
    let analysis = match language {
        Language::Python => PythonExtractor::new().extract(source),
        Language::Java => JavaExtractor::new().extract(source),
        Language::Cpp => CppExtractor::new().extract(source),
    };
    if let Some(error) = analysis.error_message() {
        tracing::debug!(language = %language, error, "analysis failed");
    }
    analysis
}
