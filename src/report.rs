//! Rendering of an analysis result.
//!
//! Two formats: JSON for programmatic consumers and a colored text summary
//! for terminals. Both tolerate every field being empty - the Java extractor
//! never populates `code_structure`, the C++ heuristic leaves most lists
//! bare, and neither is an error.

use colored::*;

use crate::analysis::{StructuralAnalysis, StructuralFacts};

/// Serialize a result as pretty-printed JSON.
pub fn render_json(analysis: &StructuralAnalysis) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

/// Render a human-readable summary.
pub fn render_text(analysis: &StructuralAnalysis) -> String {
    match analysis {
        StructuralAnalysis::Failure(f) => {
            format!("{} {}", "analysis failed:".red().bold(), f.error)
        }
        StructuralAnalysis::Success(facts) => render_facts(facts),
    }
}

fn render_facts(facts: &StructuralFacts) -> String {
    let mut out = String::new();

    if !facts.functions.is_empty() {
        section(&mut out, "Functions", facts.functions.len());
        for f in &facts.functions {
            let params: Vec<&str> = f.parameters.iter().map(|p| p.name.as_str()).collect();
            line(
                &mut out,
                f.line,
                &format!(
                    "{}({}){}",
                    f.name.cyan(),
                    params.join(", "),
                    f.return_type
                        .as_deref()
                        .map(|t| format!(" -> {}", t))
                        .unwrap_or_default()
                ),
            );
        }
    }

    if !facts.classes.is_empty() {
        section(&mut out, "Classes", facts.classes.len());
        for c in &facts.classes {
            let detail = if c.methods.is_empty() {
                c.name.cyan().to_string()
            } else {
                format!("{} [{}]", c.name.cyan(), c.methods.join(", "))
            };
            line(&mut out, c.line, &detail);
        }
    }

    if !facts.variables.is_empty() {
        section(&mut out, "Variables", facts.variables.len());
        for v in &facts.variables {
            let mut detail = v.name.clone();
            if let Some(ty) = &v.ty {
                detail.push_str(&format!(": {}", ty));
            }
            if let Some(value) = &v.value {
                detail.push_str(&format!(" = {}", value));
            }
            line(&mut out, v.line, &detail);
        }
    }

    if !facts.loops.is_empty() {
        section(&mut out, "Loops", facts.loops.len());
        for l in &facts.loops {
            line(&mut out, l.line, l.kind.as_str());
        }
    }

    if !facts.conditionals.is_empty() {
        section(&mut out, "Conditionals", facts.conditionals.len());
        for c in &facts.conditionals {
            line(&mut out, c.line, c.condition.as_deref().unwrap_or("if"));
        }
    }

    if !facts.calls.is_empty() {
        section(&mut out, "Calls", facts.calls.len());
        for c in &facts.calls {
            line(&mut out, c.line, &format!("{}()", c.name));
        }
    }

    if !facts.imports.is_empty() {
        section(&mut out, "Imports", facts.imports.len());
        for i in &facts.imports {
            let detail = match (&i.module, i.names.is_empty()) {
                (Some(module), true) => module.clone(),
                (Some(module), false) => format!("{}: {}", module, i.names.join(", ")),
                (None, _) => i.names.join(", "),
            };
            line(&mut out, i.line, &detail);
        }
    }

    if !facts.code_structure.is_empty() {
        section(&mut out, "Structure nodes", facts.code_structure.len());
    }

    if out.is_empty() {
        out.push_str(&format!("{}\n", "no structural facts found".dimmed()));
    }
    out
}

fn section(out: &mut String, title: &str, count: usize) {
    out.push_str(&format!("{} ({})\n", title.bold(), count));
}

fn line(out: &mut String, lineno: usize, detail: &str) {
    out.push_str(&format!("  {} {}\n", format!("L{}", lineno).dimmed(), detail));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{self, Language};

    #[test]
    fn text_summary_mentions_extracted_names() {
        let analysis = analysis::analyze("def f(a):\n    return a\n", Language::Python);
        let text = render_text(&analysis);
        assert!(text.contains("Functions"));
        assert!(text.contains("f(a)"));
    }

    #[test]
    fn failure_renders_the_diagnostic() {
        let analysis = analysis::analyze("def f(:\n", Language::Python);
        let text = render_text(&analysis);
        assert!(text.contains("Syntax error"));
    }

    #[test]
    fn empty_facts_render_a_placeholder() {
        let analysis = analysis::analyze("", Language::Cpp);
        let text = render_text(&analysis);
        assert!(text.contains("no structural facts"));
    }

    #[test]
    fn json_rendering_is_valid_json() {
        let analysis = analysis::analyze("class A { }", Language::Java);
        let json = render_json(&analysis).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["classes"].is_array());
    }
}
