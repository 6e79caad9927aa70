//! Java extractor backed by the embedded tree-sitter-java grammar.
//!
//! Same contract as the Python extractor with the grammar's own quirks kept
//! visible: an omitted return type is recorded as the literal "void", no
//! body or condition text is extracted, and `code_structure` stays empty
//! rather than being fabricated from a taxonomy this grammar does not expose
//! uniformly.

use tree_sitter::{Language, Node, Parser, Tree};

use crate::analysis::syntax::{first_error_diagnostic, line_of, node_text, preorder_named};
use crate::analysis::{
    CallInfo, ClassInfo, ConditionalInfo, FunctionInfo, ImportInfo, LoopInfo, LoopKind,
    ParameterInfo, SnippetExtractor, StructuralAnalysis, StructuralFacts, VariableInfo,
};

pub struct JavaExtractor {
    language: Language,
}

impl JavaExtractor {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }

    fn parse(&self, source: &str) -> anyhow::Result<Tree> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("parser produced no tree"))
    }

    fn collect(&self, node: Node, source: &str, facts: &mut StructuralFacts) {
        match node.kind() {
            "class_declaration" => {
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
            "method_declaration" => {
                let name = node
                    .child_by_field_name("name")
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_default();
                // The grammar models `void` as a type node, so this fallback
                // only fires when the declaration truly carries no type.
                let return_type = node
                    .child_by_field_name("type")
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_else(|| "void".to_string());
                facts.functions.push(FunctionInfo {
                    name,
                    line: line_of(node),
                    parameters: self.parameters(node, source),
                    return_type: Some(return_type),
                    body: None,
                });
            }
            "local_variable_declaration" => {
                let ty = node
                    .child_by_field_name("type")
                    .map(|n| node_text(n, source).to_string());
                let mut cursor = node.walk();
                for declarator in node
                    .named_children(&mut cursor)
                    .filter(|n| n.kind() == "variable_declarator")
                {
                    if let Some(name) = declarator.child_by_field_name("name") {
                        facts.variables.push(VariableInfo {
                            name: node_text(name, source).to_string(),
                            line: line_of(node),
                            ty: ty.clone(),
                            value: None,
                        });
                    }
                }
            }
            "for_statement" | "enhanced_for_statement" => {
                facts.loops.push(LoopInfo {
                    kind: LoopKind::For,
                    line: line_of(node),
                    body: None,
                });
            }
            "while_statement" => {
                facts.loops.push(LoopInfo {
                    kind: LoopKind::While,
                    line: line_of(node),
                    body: None,
                });
            }
            "if_statement" => {
                facts.conditionals.push(ConditionalInfo {
                    line: line_of(node),
                    condition: None,
                    body: None,
                });
            }
            "method_invocation" => {
                // Unlike the Python extractor, the invoked member name is
                // recorded whether or not the call goes through a receiver.
                if let Some(name) = node.child_by_field_name("name") {
                    facts.calls.push(CallInfo {
                        name: node_text(name, source).to_string(),
                        line: line_of(node),
                    });
                }
            }
            "import_declaration" => {
                if let Some(import) = self.import_info(node, source) {
                    facts.imports.push(import);
                }
            }
            _ => {}
        }
    }

    /// Split an import path into package prefix and imported name.
    fn import_info(&self, node: Node, source: &str) -> Option<ImportInfo> {
        let mut cursor = node.walk();
        let path = node
            .named_children(&mut cursor)
            .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
            .map(|c| node_text(c, source).to_string())?;
        let on_demand = node_text(node, source).contains('*');
        let (module, names) = if on_demand {
            (Some(path), vec!["*".to_string()])
        } else {
            match path.rsplit_once('.') {
                Some((prefix, last)) => (Some(prefix.to_string()), vec![last.to_string()]),
                None => (None, vec![path]),
            }
        };
        Some(ImportInfo {
            module,
            names,
            line: line_of(node),
        })
    }

    fn parameters(&self, method: Node, source: &str) -> Vec<ParameterInfo> {
        let params = match method.child_by_field_name("parameters") {
            Some(p) => p,
            None => return Vec::new(),
        };
        let mut cursor = params.walk();
        let mut out = Vec::new();
        for child in params.named_children(&mut cursor) {
            match child.kind() {
                "formal_parameter" => {
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
                "spread_parameter" => {
                    out.push(ParameterInfo::untyped(node_text(child, source)));
                }
                _ => {}
            }
        }
        out
    }

    /// Direct method names of a class body, nested classes excluded.
    fn direct_methods(&self, class_node: Node, source: &str) -> Vec<String> {
        let body = match class_node.child_by_field_name("body") {
            Some(b) => b,
            None => return Vec::new(),
        };
        let mut cursor = body.walk();
        body.named_children(&mut cursor)
            .filter(|child| child.kind() == "method_declaration")
            .filter_map(|method| method.child_by_field_name("name"))
            .map(|name| node_text(name, source).to_string())
            .collect()
    }
}

impl Default for JavaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SnippetExtractor for JavaExtractor {
    fn language_id(&self) -> &'static str {
        "java"
    }

    fn extract(&self, source: &str) -> StructuralAnalysis {
        let tree = match self.parse(source) {
            Ok(tree) => tree,
            Err(e) => return StructuralAnalysis::failure(format!("Parse error: {}", e)),
        };
        let root = tree.root_node();
        if root.has_error() {
            return StructuralAnalysis::failure(format!(
                "Parse error: {}",
                first_error_diagnostic(root)
            ));
        }

        let mut facts = StructuralFacts::default();
        for (node, _) in preorder_named(root) {
            self.collect(node, source, &mut facts);
        }
        // code_structure deliberately left empty for this grammar.
        StructuralAnalysis::Success(facts)
    }
}
