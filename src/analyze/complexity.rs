//! Cyclomatic complexity over a Python syntax tree.

use tree_sitter::Node;

/// Node kinds that open an additional execution path.
///
/// `elif` arms are separate clause nodes in the grammar and count
/// individually, matching the one-per-branch rule. `with` counts because a
/// context manager's exit path is a decision point in this model.
const BRANCH_KINDS: &[&str] = &[
    "if_statement",
    "elif_clause",
    "while_statement",
    "for_statement",
    "try_statement",
    "except_clause",
    "with_statement",
];

/// Compute the cyclomatic complexity of a function node.
///
/// Starts a fresh accumulator at 1 (the base path) and adds one per
/// branching construct in the function's subtree. Boolean operators nest
/// left-associatively, so an `and`/`or` chain of k operands contains k-1
/// `boolean_operator` nodes. Nested functions are traversed too: their
/// constructs count toward the enclosing function, and the caller scores
/// each nested function independently as well.
pub fn function_complexity(node: Node) -> usize {
    let mut complexity = 1;
    visit(node, &mut complexity);
    complexity
}

fn visit(node: Node, complexity: &mut usize) {
    let kind = node.kind();
    if kind == "boolean_operator" || BRANCH_KINDS.contains(&kind) {
        *complexity += 1;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, complexity);
    }
}

#[cfg(test)]
#[path = "complexity_test.rs"]
mod tests;
