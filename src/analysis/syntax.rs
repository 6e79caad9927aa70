//! Shared tree-sitter helpers for the grammar-backed extractors.

use tree_sitter::Node;

/// 1-indexed line of a node's start position.
pub fn line_of(node: Node) -> usize {
    node.start_position().row + 1
}

/// Node source text, empty on invalid UTF-8 ranges.
pub fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Exact source slice from the node's first line to its last line inclusive.
///
/// This is the "body text" convention of the schema: whole lines, not byte
/// ranges, so a construct's surrounding indentation is preserved.
pub fn line_slice(node: Node, source: &str) -> String {
    let start = node.start_position().row;
    let end = node.end_position().row;
    source
        .lines()
        .skip(start)
        .take(end - start + 1)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Depth-first preorder walk over named nodes, root at depth 0.
///
/// Children are visited in the order the grammar exposes them, so same-type
/// entries land in encounter order.
pub fn preorder_named(root: Node) -> Vec<(Node, usize)> {
    let mut out = Vec::new();
    let mut stack = vec![(root, 0usize)];
    while let Some((node, depth)) = stack.pop() {
        out.push((node, depth));
        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push((child, depth + 1));
        }
    }
    out
}

/// Locate the first ERROR or missing node and describe it.
///
/// Tree-sitter reports syntax problems as in-tree nodes rather than thrown
/// errors; this renders the first one as a human-readable diagnostic.
pub fn first_error_diagnostic(root: Node) -> String {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() {
            let pos = node.start_position();
            return format!(
                "invalid syntax at line {}, column {}",
                pos.row + 1,
                pos.column + 1
            );
        }
        if node.is_missing() {
            let pos = node.start_position();
            return format!(
                "missing {} at line {}, column {}",
                node.kind(),
                pos.row + 1,
                pos.column + 1
            );
        }
        // Unnamed children included: missing tokens are often anonymous.
        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            if child.has_error() || child.is_missing() {
                stack.push(child);
            }
        }
    }
    "invalid syntax".to_string()
}
