//! The extraction contract shared by every language.

use super::StructuralAnalysis;

/// One extraction strategy for one language.
///
/// Implementations are stateless and cheap to construct: the dispatcher
/// builds a fresh extractor per call and discards it afterwards, so nothing
/// is shared or mutated across analyses.
///
/// `extract` never panics and never returns a Rust error. A grammar-backed
/// extractor reports unparseable input as `StructuralAnalysis::Failure`; the
/// heuristic extractor has no failure channel at all.
pub trait SnippetExtractor {
    /// Language identifier (e.g. "python").
    fn language_id(&self) -> &'static str;

    /// Analyze one snippet into the normalized schema.
    fn extract(&self, source: &str) -> StructuralAnalysis;
}
