//! Python extractor backed by tree-sitter-python.
//!
//! The precise end of the spectrum: a full syntax tree, one typed-fact walk
//! over every named node, and a second raw preorder walk for the
//! `code_structure` map.

use tree_sitter::{Language, Node, Parser, Tree};

use crate::analysis::syntax::{
    first_error_diagnostic, line_of, line_slice, node_text, preorder_named,
};
use crate::analysis::{
    CallInfo, ClassInfo, ConditionalInfo, FunctionInfo, ImportInfo, LoopInfo, LoopKind,
    ParameterInfo, SnippetExtractor, StructuralAnalysis, StructuralFacts, StructureNode,
    VariableInfo,
};

pub struct PythonExtractor {
    language: Language,
}

impl PythonExtractor {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    fn parse(&self, source: &str) -> anyhow::Result<Tree> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("parser produced no tree"))
    }

    /// Route one node into the typed fact lists.
    fn collect(&self, node: Node, source: &str, facts: &mut StructuralFacts) {
        match node.kind() {
            "function_definition" => {
                let name = node
                    .child_by_field_name("name")
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_default();
                facts.functions.push(FunctionInfo {
                    name,
                    line: line_of(node),
                    parameters: self.parameters(node, source),
                    return_type: node
                        .child_by_field_name("return_type")
                        .map(|n| node_text(n, source).to_string()),
                    body: Some(line_slice(node, source)),
                });
            }
            "class_definition" => {
                let name = node
                    .child_by_field_name("name")
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_default();
                facts.classes.push(ClassInfo {
                    name,
                    line: line_of(node),
                    methods: self.direct_methods(node, source),
                });
            }
            "assignment" => {
                // Only simple-name targets with an actual value; subscript and
                // attribute targets, and bare annotations, are skipped.
                let left = node.child_by_field_name("left");
                let right = node.child_by_field_name("right");
                if let (Some(left), Some(mut right)) = (left, right) {
                    if left.kind() == "identifier" {
                        // Chained `x = y = 1` nests assignments on the right;
                        // every target records the innermost value.
                        while right.kind() == "assignment" {
                            match right.child_by_field_name("right") {
                                Some(inner) => right = inner,
                                None => break,
                            }
                        }
                        facts.variables.push(VariableInfo {
                            name: node_text(left, source).to_string(),
                            line: line_of(node),
                            ty: node
                                .child_by_field_name("type")
                                .map(|n| node_text(n, source).to_string()),
                            value: Some(node_text(right, source).to_string()),
                        });
                    }
                }
            }
            "for_statement" | "while_statement" => {
                facts.loops.push(LoopInfo {
                    kind: if node.kind() == "for_statement" {
                        LoopKind::For
                    } else {
                        LoopKind::While
                    },
                    line: line_of(node),
                    body: Some(line_slice(node, source)),
                });
            }
            // elif clauses count as conditionals of their own, matching the
            // nested-if shape of Python's own AST.
            "if_statement" | "elif_clause" => {
                facts.conditionals.push(ConditionalInfo {
                    line: line_of(node),
                    condition: node
                        .child_by_field_name("condition")
                        .map(|n| node_text(n, source).to_string()),
                    body: Some(line_slice(node, source)),
                });
            }
            "call" => {
                // Bare-name calls only; `obj.method()` goes through an
                // attribute node and is not tracked.
                if let Some(callee) = node.child_by_field_name("function") {
                    if callee.kind() == "identifier" {
                        facts.calls.push(CallInfo {
                            name: node_text(callee, source).to_string(),
                            line: line_of(node),
                        });
                    }
                }
            }
            "import_statement" => {
                let mut cursor = node.walk();
                let names = node
                    .named_children(&mut cursor)
                    .filter_map(|child| self.imported_name(child, source))
                    .collect();
                facts.imports.push(ImportInfo {
                    module: None,
                    names,
                    line: line_of(node),
                });
            }
            "import_from_statement" => {
                let module_node = node.child_by_field_name("module_name");
                let module = module_node.map(|n| node_text(n, source).to_string());
                let mut cursor = node.walk();
                let names = node
                    .named_children(&mut cursor)
                    .filter(|child| module_node.map(|m| m.id() != child.id()).unwrap_or(true))
                    .filter_map(|child| self.imported_name(child, source))
                    .collect();
                facts.imports.push(ImportInfo {
                    module,
                    names,
                    line: line_of(node),
                });
            }
            _ => {}
        }
    }

    /// Resolve one import clause child to the imported name.
    fn imported_name(&self, node: Node, source: &str) -> Option<String> {
        match node.kind() {
            "dotted_name" | "identifier" => Some(node_text(node, source).to_string()),
            // `import x as y` records the original name, not the alias.
            "aliased_import" => node
                .child_by_field_name("name")
                .map(|n| node_text(n, source).to_string()),
            "wildcard_import" => Some("*".to_string()),
            _ => None,
        }
    }

    /// Parameter list in declaration order, annotations included when present.
    fn parameters(&self, func: Node, source: &str) -> Vec<ParameterInfo> {
        let params = match func.child_by_field_name("parameters") {
            Some(p) => p,
            None => return Vec::new(),
        };
        let mut cursor = params.walk();
        let mut out = Vec::new();
        for child in params.named_children(&mut cursor) {
            match child.kind() {
                "identifier" => out.push(ParameterInfo::untyped(node_text(child, source))),
                "typed_parameter" => {
                    let name = child
                        .named_child(0)
                        .map(|n| node_text(n, source))
                        .unwrap_or("");
                    out.push(ParameterInfo {
                        name: name.to_string(),
                        ty: child
                            .child_by_field_name("type")
                            .map(|n| node_text(n, source).to_string()),
                    });
                }
                "default_parameter" | "typed_default_parameter" => {
                    let name = child
                        .child_by_field_name("name")
                        .map(|n| node_text(n, source))
                        .unwrap_or("");
                    out.push(ParameterInfo {
                        name: name.to_string(),
                        ty: child
                            .child_by_field_name("type")
                            .map(|n| node_text(n, source).to_string()),
                    });
                }
                "list_splat_pattern" | "dictionary_splat_pattern" => {
                    out.push(ParameterInfo::untyped(node_text(child, source)));
                }
                _ => {}
            }
        }
        out
    }

    /// Direct method names of a class body, one level deep.
    fn direct_methods(&self, class_node: Node, source: &str) -> Vec<String> {
        let body = match class_node.child_by_field_name("body") {
            Some(b) => b,
            None => return Vec::new(),
        };
        let mut cursor = body.walk();
        let mut methods = Vec::new();
        for child in body.named_children(&mut cursor) {
            let func = match child.kind() {
                "function_definition" => Some(child),
                "decorated_definition" => {
                    let mut inner = child.walk();
                    let wrapped = child
                        .named_children(&mut inner)
                        .find(|n| n.kind() == "function_definition");
                    wrapped
                }
                _ => None,
            };
            if let Some(func) = func {
                if let Some(name) = func.child_by_field_name("name") {
                    methods.push(node_text(name, source).to_string());
                }
            }
        }
        methods
    }

    /// Raw structural map: every named node, preorder, with its line slice.
    fn structure(&self, root: Node, source: &str) -> Vec<StructureNode> {
        preorder_named(root)
            .into_iter()
            .map(|(node, depth)| StructureNode {
                kind: node.kind().to_string(),
                depth,
                line: line_of(node),
                text: Some(line_slice(node, source)),
            })
            .collect()
    }
}

impl Default for PythonExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SnippetExtractor for PythonExtractor {
    fn language_id(&self) -> &'static str {
        "python"
    }

    fn extract(&self, source: &str) -> StructuralAnalysis {
        let tree = match self.parse(source) {
            Ok(tree) => tree,
            Err(e) => return StructuralAnalysis::failure(format!("Syntax error: {}", e)),
        };
        let root = tree.root_node();
        if root.has_error() {
            return StructuralAnalysis::failure(format!(
                "Syntax error: {}",
                first_error_diagnostic(root)
            ));
        }

        let mut facts = StructuralFacts::default();
        for (node, _) in preorder_named(root) {
            self.collect(node, source, &mut facts);
        }
        facts.code_structure = self.structure(root, source);
        StructuralAnalysis::Success(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> StructuralFacts {
        let analysis = PythonExtractor::new().extract(source);
        analysis.facts().expect("expected success").clone()
    }

    #[test]
    fn function_with_parameters() {
        let facts = extract("def f(a, b):\n    return a + b\n");
        assert_eq!(facts.functions.len(), 1);
        let f = &facts.functions[0];
        assert_eq!(f.name, "f");
        assert_eq!(f.line, 1);
        assert_eq!(f.parameters.len(), 2);
        assert_eq!(f.parameters[0].name, "a");
        assert_eq!(f.parameters[1].name, "b");
        assert!(f.return_type.is_none());
        assert_eq!(f.body.as_deref(), Some("def f(a, b):\n    return a + b"));
    }

    #[test]
    fn annotations_are_captured_when_present() {
        let facts = extract("def f(x: int, y=2) -> str:\n    return str(x)\n");
        let f = &facts.functions[0];
        assert_eq!(f.parameters[0].name, "x");
        assert_eq!(f.parameters[0].ty.as_deref(), Some("int"));
        assert_eq!(f.parameters[1].name, "y");
        assert!(f.parameters[1].ty.is_none());
        assert_eq!(f.return_type.as_deref(), Some("str"));
    }

    #[test]
    fn class_lists_direct_methods_only() {
        let source = r#"
class Outer:
    def a(self):
        pass

    @staticmethod
    def b():
        pass

    class Inner:
        def hidden(self):
            pass
"#;
        let facts = extract(source);
        let outer = facts.classes.iter().find(|c| c.name == "Outer").unwrap();
        assert_eq!(outer.methods, vec!["a", "b"]);
        let inner = facts.classes.iter().find(|c| c.name == "Inner").unwrap();
        assert_eq!(inner.methods, vec!["hidden"]);
    }

    #[test]
    fn simple_name_assignments_only() {
        let source = "x = 1\nobj.attr = 2\nitems[0] = 3\ny = x + 1\n";
        let facts = extract(source);
        let names: Vec<&str> = facts.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(facts.variables[0].value.as_deref(), Some("1"));
        assert_eq!(facts.variables[1].value.as_deref(), Some("x + 1"));
    }

    #[test]
    fn chained_assignment_records_innermost_value() {
        let facts = extract("x = y = 1\n");
        let names: Vec<&str> = facts.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(facts.variables[0].value.as_deref(), Some("1"));
        assert_eq!(facts.variables[1].value.as_deref(), Some("1"));
    }

    #[test]
    fn decorated_method_is_listed_under_its_class() {
        let source = "class C:\n    @property\n    def value(self):\n        return 1\n";
        let facts = extract(source);
        assert_eq!(facts.classes[0].methods, vec!["value"]);
    }

    #[test]
    fn loops_record_kind_and_body() {
        let source = "for i in range(3):\n    print(i)\nwhile True:\n    break\n";
        let facts = extract(source);
        assert_eq!(facts.loops.len(), 2);
        assert!(facts
            .loops
            .iter()
            .any(|l| l.kind == LoopKind::For && l.line == 1));
        assert!(facts
            .loops
            .iter()
            .any(|l| l.kind == LoopKind::While && l.line == 3));
        let for_loop = facts.loops.iter().find(|l| l.kind == LoopKind::For).unwrap();
        assert_eq!(
            for_loop.body.as_deref(),
            Some("for i in range(3):\n    print(i)")
        );
    }

    #[test]
    fn conditionals_include_condition_text_and_elif() {
        let source = "if x > 0:\n    a()\nelif x < 0:\n    b()\n";
        let facts = extract(source);
        assert_eq!(facts.conditionals.len(), 2);
        assert_eq!(facts.conditionals[0].condition.as_deref(), Some("x > 0"));
        assert_eq!(facts.conditionals[1].condition.as_deref(), Some("x < 0"));
    }

    #[test]
    fn only_bare_name_calls_are_tracked() {
        let source = "foo()\nobj.method()\nbar(1, 2)\n";
        let facts = extract(source);
        let names: Vec<&str> = facts.calls.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["foo", "bar"]);
    }

    #[test]
    fn imports_plain_from_and_aliased() {
        let source = "import os\nimport numpy as np\nfrom collections import OrderedDict, deque\nfrom os import *\n";
        let facts = extract(source);
        assert_eq!(facts.imports.len(), 4);

        assert!(facts.imports[0].module.is_none());
        assert_eq!(facts.imports[0].names, vec!["os"]);

        // Aliased import records the original module name.
        assert_eq!(facts.imports[1].names, vec!["numpy"]);

        assert_eq!(facts.imports[2].module.as_deref(), Some("collections"));
        assert_eq!(facts.imports[2].names, vec!["OrderedDict", "deque"]);

        assert_eq!(facts.imports[3].module.as_deref(), Some("os"));
        assert_eq!(facts.imports[3].names, vec!["*"]);
    }

    #[test]
    fn code_structure_is_a_preorder_map() {
        let facts = extract("def f():\n    return 1\n");
        assert!(!facts.code_structure.is_empty());
        assert_eq!(facts.code_structure[0].kind, "module");
        assert_eq!(facts.code_structure[0].depth, 0);
        // Expression nodes appear, not just statements.
        assert!(facts
            .code_structure
            .iter()
            .any(|n| n.kind == "integer" || n.kind == "return_statement"));
        // Preorder: depth never jumps by more than one going down.
        for pair in facts.code_structure.windows(2) {
            assert!(pair[1].depth <= pair[0].depth + 1);
        }
    }

    #[test]
    fn malformed_source_is_a_contained_failure() {
        let analysis = PythonExtractor::new().extract("def f(:\n");
        let message = analysis.error_message().expect("expected failure");
        assert!(message.starts_with("Syntax error: "));
        assert!(message.len() > "Syntax error: ".len());
    }
}
