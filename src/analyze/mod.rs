//! Per-file analysis: line classification, syntax-tree parse, structure
//! counts, and threshold checks.

mod classify;
mod complexity;

use std::error::Error;
use std::fs;
use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use crate::issue::Issue;
use crate::metrics::{FileMetrics, round2};
use classify::count_lines;
use complexity::function_complexity;

/// A function is flagged long when it spans more than this many lines.
const LONG_FUNCTION_LINES: usize = 50;
/// A function is flagged when its complexity exceeds this.
const COMPLEXITY_THRESHOLD: usize = 10;
/// A file is flagged long when its total line count exceeds this.
const LONG_FILE_LINES: usize = 500;

/// Per-run analyzer.
///
/// Owns the Python parser and the list of issues found across all analyzed
/// files. One instance per run; the issue list is taken with
/// [`Analyzer::into_issues`] once every file has been analyzed.
pub struct Analyzer {
    parser: Parser,
    issues: Vec<Issue>,
}

/// Structure counts accumulated while walking one file's tree.
#[derive(Default)]
struct WalkCounts {
    functions: usize,
    classes: usize,
    imports: usize,
    complexities: Vec<usize>,
    long_functions: Vec<String>,
}

impl Analyzer {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_python::LANGUAGE.into())?;
        Ok(Self {
            parser,
            issues: Vec::new(),
        })
    }

    /// Read and analyze one source file.
    ///
    /// I/O failures are logged and skip the file without recording an issue;
    /// syntax errors record a high-severity issue. Either way `None` drops
    /// the file from aggregation and the run continues.
    pub fn analyze_file(&mut self, path: &Path) -> Option<FileMetrics> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::error!("failed to read {}: {err}", path.display());
                return None;
            }
        };
        // Undecodable bytes are substituted rather than failing the file.
        let content = String::from_utf8_lossy(&bytes);
        self.analyze_source(&path.display().to_string(), &content)
    }

    /// Analyze already-read content under the given path label.
    pub fn analyze_source(&mut self, file: &str, content: &str) -> Option<FileMetrics> {
        let counts = count_lines(content);
        let total_lines = counts.total();

        let tree = match self.parse(content) {
            Ok(tree) => tree,
            Err(message) => {
                log::warn!("syntax error in {file}: {message}");
                self.issues.push(Issue::syntax_error(file, message));
                return None;
            }
        };

        let mut walk = WalkCounts::default();
        self.visit(tree.root_node(), content, file, &mut walk);

        if total_lines > LONG_FILE_LINES {
            self.issues.push(Issue::long_file(file, total_lines));
        }

        let max_complexity = walk.complexities.iter().copied().max().unwrap_or(0);
        let avg_complexity = if walk.complexities.is_empty() {
            0.0
        } else {
            let sum: usize = walk.complexities.iter().sum();
            round2(sum as f64 / walk.complexities.len() as f64)
        };

        Some(FileMetrics {
            path: file.to_string(),
            code_lines: counts.code,
            blank_lines: counts.blank,
            comment_lines: counts.comment,
            function_count: walk.functions,
            class_count: walk.classes,
            import_count: walk.imports,
            max_complexity,
            avg_complexity,
            long_functions: walk.long_functions,
        })
    }

    /// Consume the analyzer and return every issue recorded during the run.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// Parse content, surfacing any error or missing node as a message.
    fn parse(&mut self, content: &str) -> Result<Tree, String> {
        let tree = self
            .parser
            .parse(content, None)
            .ok_or_else(|| "parser returned no tree".to_string())?;
        if tree.root_node().has_error() {
            return Err(describe_error(tree.root_node()));
        }
        Ok(tree)
    }

    /// Visit every node in the tree, like a full AST walk: nested
    /// definitions are counted the same as top-level ones.
    fn visit(&mut self, node: Node, source: &str, file: &str, walk: &mut WalkCounts) {
        match node.kind() {
            "function_definition" => self.record_function(node, source, file, walk),
            "class_definition" => walk.classes += 1,
            "import_statement" | "import_from_statement" | "future_import_statement" => {
                walk.imports += 1;
            }
            _ => {}
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child, source, file, walk);
        }
    }

    fn record_function(&mut self, node: Node, source: &str, file: &str, walk: &mut WalkCounts) {
        walk.functions += 1;

        let name = node
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(source.as_bytes()).ok())
            .unwrap_or("<anonymous>")
            .to_string();

        let complexity = function_complexity(node);
        walk.complexities.push(complexity);

        let span = node.end_position().row - node.start_position().row;
        if span > LONG_FUNCTION_LINES {
            walk.long_functions.push(name.clone());
            self.issues.push(Issue::long_function(file, &name, span));
        }

        if complexity > COMPLEXITY_THRESHOLD {
            self.issues.push(Issue::high_complexity(file, &name, complexity));
        }
    }
}

/// Locate the first error or missing node and describe its position.
fn describe_error(root: Node) -> String {
    fn find(node: Node) -> Option<(usize, usize)> {
        if node.is_error() || node.is_missing() {
            let point = node.start_position();
            return Some((point.row + 1, point.column + 1));
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if let Some(position) = find(child) {
                return Some(position);
            }
        }
        None
    }
    match find(root) {
        Some((line, column)) => format!("invalid syntax at line {line}, column {column}"),
        None => "invalid syntax".to_string(),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
