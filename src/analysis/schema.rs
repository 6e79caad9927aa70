//! The normalized structural schema every extractor populates.
//!
//! Downstream consumers (rendering, serialization) read exactly these types
//! and never branch on the source language: a `Success` result always carries
//! the same field set, possibly empty.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of analyzing one snippet: either fully populated facts or a
/// structured parse failure. Failures are values, never panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StructuralAnalysis {
    Success(StructuralFacts),
    Failure(AnalysisFailure),
}

impl StructuralAnalysis {
    /// Wrap facts as a success result.
    pub fn success(facts: StructuralFacts) -> Self {
        StructuralAnalysis::Success(facts)
    }

    /// Build a failure result from a diagnostic message.
    pub fn failure(message: impl Into<String>) -> Self {
        StructuralAnalysis::Failure(AnalysisFailure {
            error: message.into(),
        })
    }

    /// An empty but successful analysis (no constructs found).
    pub fn empty() -> Self {
        StructuralAnalysis::Success(StructuralFacts::default())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StructuralAnalysis::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, StructuralAnalysis::Failure(_))
    }

    /// The populated facts, if this is a success result.
    pub fn facts(&self) -> Option<&StructuralFacts> {
        match self {
            StructuralAnalysis::Success(facts) => Some(facts),
            StructuralAnalysis::Failure(_) => None,
        }
    }

    /// The diagnostic message, if this is a failure result.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            StructuralAnalysis::Success(_) => None,
            StructuralAnalysis::Failure(f) => Some(&f.error),
        }
    }
}

/// Parse failure carried inside the result value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    /// Human-readable diagnostic from the underlying grammar.
    pub error: String,
}

/// Structural facts for one snippet, independent of source language.
///
/// List fields are always serialized, even when empty, so consumers iterate
/// the same keys for every language. Collection order follows traversal
/// order, which is not guaranteed to be source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralFacts {
    pub functions: Vec<FunctionInfo>,
    pub classes: Vec<ClassInfo>,
    pub variables: Vec<VariableInfo>,
    pub loops: Vec<LoopInfo>,
    pub conditionals: Vec<ConditionalInfo>,
    pub calls: Vec<CallInfo>,
    pub imports: Vec<ImportInfo>,
    pub code_structure: Vec<StructureNode>,
}

/// A function or method definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    /// 1-indexed line of the definition.
    pub line: usize,
    /// Parameters in declaration order.
    pub parameters: Vec<ParameterInfo>,
    /// Declared return type. Absent when the language leaves it implicit,
    /// except for Java where an omitted type is recorded as "void".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// Raw source slice of the whole definition, first line to last line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
}

impl ParameterInfo {
    /// An untyped parameter.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }
}

/// A class or type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    pub line: usize,
    /// Names of direct method children only, not inherited or nested ones.
    pub methods: Vec<String>,
}

/// A variable binding with a simple-name target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableInfo {
    pub name: String,
    pub line: usize,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Source text of the assigned expression, best effort.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Loop flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopKind {
    For,
    While,
}

impl LoopKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoopKind::For => "for",
            LoopKind::While => "while",
        }
    }
}

impl fmt::Display for LoopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A for or while construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopInfo {
    pub kind: LoopKind,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// An if construct (including elif clauses for Python).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalInfo {
    pub line: usize,
    /// Source text of the test expression, where the grammar exposes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// A call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallInfo {
    pub name: String,
    pub line: usize,
}

/// An import, include, or from-import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportInfo {
    /// Module or header being imported from. Absent for plain imports that
    /// name the module itself in `names`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    pub names: Vec<String>,
    pub line: usize,
}

/// One entry in the raw structural tree walk. Wider coverage than the typed
/// lists above: every named syntax node appears here, expressions included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureNode {
    /// Grammar-level node category (e.g. "function_definition").
    pub kind: String,
    /// Preorder depth, root at 0.
    pub depth: usize,
    /// 1-indexed line, 0 when the tree attributed no position.
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
