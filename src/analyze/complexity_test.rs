use tree_sitter::{Node, Parser, Tree};

use super::function_complexity;

fn parse(source: &str) -> Tree {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .unwrap();
    parser.parse(source, None).unwrap()
}

fn find_function<'t>(node: Node<'t>) -> Option<Node<'t>> {
    if node.kind() == "function_definition" {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_function(child) {
            return Some(found);
        }
    }
    None
}

fn complexity_of(source: &str) -> usize {
    let tree = parse(source);
    let func = find_function(tree.root_node()).expect("fixture has no function");
    function_complexity(func)
}

#[test]
fn branchless_function_is_one() {
    assert_eq!(complexity_of("def f():\n    return 1\n"), 1);
}

#[test]
fn if_adds_one() {
    assert_eq!(complexity_of("def f(a):\n    if a:\n        return 1\n"), 2);
}

#[test]
fn if_with_two_operand_and_is_three() {
    let src = "def f(a, b):\n    if a and b:\n        return 1\n";
    assert_eq!(complexity_of(src), 3);
}

#[test]
fn elif_chain_counts_each_arm() {
    let src = "\
def f(a):
    if a == 1:
        return 1
    elif a == 2:
        return 2
    else:
        return 3
";
    // base + if + elif; else is not a decision point
    assert_eq!(complexity_of(src), 3);
}

#[test]
fn loops_add_one_each() {
    assert_eq!(
        complexity_of("def f(xs):\n    for x in xs:\n        pass\n"),
        2
    );
    assert_eq!(
        complexity_of("def f(a):\n    while a:\n        a -= 1\n"),
        2
    );
}

#[test]
fn try_and_each_handler_count() {
    let src = "\
def f():
    try:
        g()
    except ValueError:
        pass
    except KeyError:
        pass
";
    // base + try + two except clauses
    assert_eq!(complexity_of(src), 4);
}

#[test]
fn with_adds_one() {
    let src = "def f(p):\n    with open(p) as fh:\n        return fh.read()\n";
    assert_eq!(complexity_of(src), 2);
}

#[test]
fn boolean_chain_counts_extra_operands() {
    // a and b and c: two boolean_operator nodes, k-1 for k = 3
    let src = "def f(a, b, c):\n    return a and b and c\n";
    assert_eq!(complexity_of(src), 3);
}

#[test]
fn mixed_and_or_chain() {
    let src = "def f(a, b, c, d):\n    return a or b and c or d\n";
    assert_eq!(complexity_of(src), 4);
}

#[test]
fn conditional_expression_is_not_a_branch() {
    assert_eq!(complexity_of("def f(a):\n    return 1 if a else 2\n"), 1);
}

#[test]
fn comprehension_guard_is_not_a_branch() {
    let src = "def f(xs):\n    return [x for x in xs if x > 0]\n";
    assert_eq!(complexity_of(src), 1);
}

#[test]
fn nested_function_counts_toward_enclosing_scope() {
    let src = "\
def outer(a, b):
    def inner():
        if a and b:
            return 1
    return inner
";
    // outer's accumulator sees inner's if and boolean operator
    assert_eq!(complexity_of(src), 3);
}
