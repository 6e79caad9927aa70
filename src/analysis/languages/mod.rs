//! Per-language extraction strategies.
//!
//! Two grammar-backed extractors (Python, Java) and one line-oriented
//! heuristic (C++), all implementing the same `SnippetExtractor` contract.

mod cpp;
mod java;
mod python;

pub use cpp::CppExtractor;
pub use java::JavaExtractor;
pub use python::PythonExtractor;
