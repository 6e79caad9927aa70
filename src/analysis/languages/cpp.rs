//! C++ extractor: a line-oriented heuristic, not a parser.
//!
//! No syntax tree is built. Each line is tested against independent patterns,
//! so the result is best-effort by design: false positives on
//! function-shaped lines are accepted, and bodies, conditions, variables,
//! calls, and `code_structure` are never populated. In exchange the
//! extractor is total - any input at all, including binary garbage, yields a
//! `Success` with possibly empty lists.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::{
    ClassInfo, ConditionalInfo, FunctionInfo, ImportInfo, LoopInfo, LoopKind, ParameterInfo,
    SnippetExtractor, StructuralAnalysis, StructuralFacts,
};

static INCLUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^#include\s*[<"]([^>"]+)[>"]"#).expect("include pattern"));

/// Two identifiers, a parameter list, and an opening brace. Intentionally
/// permissive; anything sharing the shape matches.
static FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s+(\w+)\s*\(([^)]*)\)\s*\{").expect("function pattern"));

static CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bclass\s+(\w+)").expect("class pattern"));

static LOOP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:for|while)\s*\(").expect("loop pattern"));

static CONDITIONAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bif\s*\(").expect("if pattern"));

pub struct CppExtractor;

impl CppExtractor {
    pub fn new() -> Self {
        Self
    }

    fn scan_line(&self, line: &str, lineno: usize, facts: &mut StructuralFacts) {
        if let Some(m) = INCLUDE.captures(line.trim()) {
            facts.imports.push(ImportInfo {
                module: Some(m[1].to_string()),
                names: Vec::new(),
                line: lineno,
            });
        }

        if let Some(m) = FUNCTION.captures(line) {
            facts.functions.push(FunctionInfo {
                name: m[2].to_string(),
                line: lineno,
                parameters: raw_parameters(&m[3]),
                return_type: Some(m[1].to_string()),
                body: None,
            });
        }

        if let Some(m) = CLASS.captures(line) {
            facts.classes.push(ClassInfo {
                name: m[1].to_string(),
                line: lineno,
                methods: Vec::new(),
            });
        }

        if LOOP.is_match(line) {
            // Tie-break: the "for" substring test runs first, so a line
            // containing both classifies as a for loop.
            let kind = if line.contains("for") {
                LoopKind::For
            } else {
                LoopKind::While
            };
            facts.loops.push(LoopInfo {
                kind,
                line: lineno,
                body: None,
            });
        }

        if CONDITIONAL.is_match(line) {
            facts.conditionals.push(ConditionalInfo {
                line: lineno,
                condition: None,
                body: None,
            });
        }
    }
}

/// Comma-separated fragments of the raw parameter text, left unparsed.
fn raw_parameters(text: &str) -> Vec<ParameterInfo> {
    text.split(',')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(ParameterInfo::untyped)
        .collect()
}

impl Default for CppExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SnippetExtractor for CppExtractor {
    fn language_id(&self) -> &'static str {
        "cpp"
    }

    fn extract(&self, source: &str) -> StructuralAnalysis {
        let mut facts = StructuralFacts::default();
        for (i, line) in source.lines().enumerate() {
            self.scan_line(line, i + 1, &mut facts);
        }
        StructuralAnalysis::Success(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> StructuralFacts {
        let analysis = CppExtractor::new().extract(source);
        analysis.facts().expect("heuristic never fails").clone()
    }

    #[test]
    fn includes_with_both_delimiters() {
        let facts = extract("#include <iostream>\n#include \"util.h\"\nint x;\n");
        assert_eq!(facts.imports.len(), 2);
        assert_eq!(facts.imports[0].module.as_deref(), Some("iostream"));
        assert_eq!(facts.imports[0].line, 1);
        assert_eq!(facts.imports[1].module.as_deref(), Some("util.h"));
    }

    #[test]
    fn brace_function_shape() {
        let facts = extract("int add(int a, int b) {\n    return a + b;\n}\n");
        assert_eq!(facts.functions.len(), 1);
        let f = &facts.functions[0];
        assert_eq!(f.name, "add");
        assert_eq!(f.return_type.as_deref(), Some("int"));
        assert_eq!(f.line, 1);
        assert_eq!(f.parameters.len(), 2);
        assert_eq!(f.parameters[0].name, "int a");
        assert!(f.parameters[0].ty.is_none());
        assert!(f.body.is_none());
    }

    #[test]
    fn empty_parameter_list() {
        let facts = extract("void run() {\n}\n");
        assert!(facts.functions[0].parameters.is_empty());
    }

    #[test]
    fn loop_line_only() {
        let facts = extract("for (int i=0;i<5;i++) { }\n");
        assert_eq!(facts.loops.len(), 1);
        assert_eq!(facts.loops[0].kind, LoopKind::For);
        assert_eq!(facts.loops[0].line, 1);
        assert!(facts.loops[0].body.is_none());
        // The for header is not mistaken for a function.
        assert!(facts.functions.is_empty());
    }

    #[test]
    fn for_wins_the_substring_tie_break() {
        let facts = extract("while (going) { // reformat\n");
        assert_eq!(facts.loops.len(), 1);
        // "reformat" contains "for", and the for test runs first.
        assert_eq!(facts.loops[0].kind, LoopKind::For);

        let facts = extract("while (going) {\n");
        assert_eq!(facts.loops[0].kind, LoopKind::While);
    }

    #[test]
    fn class_line_also_matches_function_shape() {
        let facts = extract("class X { void m() { } }\n");
        assert_eq!(facts.classes.len(), 1);
        assert_eq!(facts.classes[0].name, "X");
        assert!(facts.classes[0].methods.is_empty());
        // `void m() {` shares the function shape - a known heuristic effect.
        assert_eq!(facts.functions.len(), 1);
        assert_eq!(facts.functions[0].name, "m");
    }

    #[test]
    fn conditionals_record_lines_only() {
        let facts = extract("if (x > 0) {\n} else if(y) {\n}\n");
        assert_eq!(facts.conditionals.len(), 2);
        assert!(facts.conditionals.iter().all(|c| c.condition.is_none()));
    }

    #[test]
    fn never_fails_on_any_input() {
        for source in [
            "",
            "   \n\t\n",
            "this is not source code at all",
            "\u{0}\u{1}\u{2} binary-ish \u{fffd}",
            "}{)(",
        ] {
            let analysis = CppExtractor::new().extract(source);
            assert!(analysis.is_success(), "failed on {:?}", source);
        }
    }

    #[test]
    fn degraded_fields_stay_empty() {
        let facts = extract("int main() {\n  int x = compute();\n  if (x) { x = 0; }\n}\n");
        assert!(facts.variables.is_empty());
        assert!(facts.calls.is_empty());
        assert!(facts.code_structure.is_empty());
    }
}
