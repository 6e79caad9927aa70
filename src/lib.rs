//! Structscan - structural analysis of source snippets.
//!
//! Structscan extracts structural facts (functions, classes, variables,
//! loops, conditionals, calls, imports, and a raw code-structure tree) from
//! a single source snippet and normalizes them into one schema, whatever the
//! language's parsing story looks like:
//!
//! - **Python**: precise tree-sitter AST walk, full fact coverage including
//!   the structure tree.
//! - **Java**: tree-sitter walk over an embedded third-party grammar with
//!   its own conventions (literal "void" return types, no structure tree).
//! - **C++**: line/regex heuristic, best effort, total over every input.
//!
//! The one entry point is [`analysis::analyze`]; everything else is
//! boundary glue (CLI, rendering, bundled example snippets).
//!
//! # Architecture
//!
//! - `analysis`: the core - schema, extractor contract, per-language modules,
//!   and the language-tag dispatcher
//! - `cli`: clap-based request boundary
//! - `report`: JSON and text rendering of a result
//! - `snippets`: static per-language example snippets

pub mod analysis;
pub mod cli;
pub mod report;
pub mod snippets;

pub use analysis::{
    analyze, Language, SnippetExtractor, StructuralAnalysis, StructuralFacts, UnsupportedLanguage,
};
