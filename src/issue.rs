use serde::{Deserialize, Serialize};

/// Categories of findings flagged during analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    SyntaxError,
    LongFunction,
    HighComplexity,
    LongFile,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SyntaxError => "syntax_error",
            Self::LongFunction => "long_function",
            Self::HighComplexity => "high_complexity",
            Self::LongFile => "long_file",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A single finding recorded during analysis.
///
/// Contextual fields depend on the kind; absent ones are omitted from the
/// JSON export. Issues are immutable once created and are only ever
/// appended to the analyzer's run-scoped list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<usize>,
    pub severity: Severity,
}

impl Issue {
    fn new(kind: IssueKind, file: &str, severity: Severity) -> Self {
        Self {
            kind,
            file: file.to_string(),
            function: None,
            message: None,
            lines: None,
            complexity: None,
            severity,
        }
    }

    pub fn syntax_error(file: &str, message: String) -> Self {
        Self {
            message: Some(message),
            ..Self::new(IssueKind::SyntaxError, file, Severity::High)
        }
    }

    pub fn long_function(file: &str, function: &str, lines: usize) -> Self {
        Self {
            function: Some(function.to_string()),
            lines: Some(lines),
            ..Self::new(IssueKind::LongFunction, file, Severity::Medium)
        }
    }

    /// Complexity above 20 is high severity, above the threshold but at
    /// most 20 is medium.
    pub fn high_complexity(file: &str, function: &str, complexity: usize) -> Self {
        let severity = if complexity <= 20 {
            Severity::Medium
        } else {
            Severity::High
        };
        Self {
            function: Some(function.to_string()),
            complexity: Some(complexity),
            ..Self::new(IssueKind::HighComplexity, file, severity)
        }
    }

    pub fn long_file(file: &str, lines: usize) -> Self {
        Self {
            lines: Some(lines),
            ..Self::new(IssueKind::LongFile, file, Severity::Low)
        }
    }
}
