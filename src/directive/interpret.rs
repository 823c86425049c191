//! Turns directive text into binding requests plus per-line diagnostics

use std::fmt;

use serde::Serialize;

use super::parser::{parse_line, Line};
use super::table::CommandTable;
use super::types::{BindingRequest, Directive, Operation};

/// Outcome of one line that was not blank or a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The line produced a binding request
    Mapped,
    /// First token is not in the command table
    UnrecognizedDirective { keyword: String },
    /// Fewer operands than the directive takes
    MissingOperand { expected: usize, found: usize },
    /// More operands than the directive takes
    UnexpectedOperand { expected: usize, found: usize },
}

/// A message about one line, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line_number: usize,
    pub line: String,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// True when the line was skipped
    pub fn is_problem(&self) -> bool {
        !matches!(self.kind, DiagnosticKind::Mapped)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line_number)?;
        match &self.kind {
            DiagnosticKind::Mapped => write!(f, "mapped `{}`", self.line),
            DiagnosticKind::UnrecognizedDirective { keyword } => write!(
                f,
                "unrecognized directive `{}` in `{}`",
                keyword, self.line
            ),
            DiagnosticKind::MissingOperand { expected, found } => write!(
                f,
                "missing operand in `{}` (expected {}, found {})",
                self.line, expected, found
            ),
            DiagnosticKind::UnexpectedOperand { expected, found } => write!(
                f,
                "unexpected operand in `{}` (expected {}, found {})",
                self.line, expected, found
            ),
        }
    }
}

/// Result of interpreting a whole directive file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    /// Requests in file order
    pub requests: Vec<BindingRequest>,
    /// One entry per directive line, in file order
    pub diagnostics: Vec<Diagnostic>,
    /// Raw lines seen, including blanks and comments
    pub line_count: usize,
}

impl Interpretation {
    /// Diagnostics for lines that were skipped
    pub fn problems(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_problem())
    }

    pub fn problem_count(&self) -> usize {
        self.problems().count()
    }
}

/// Interpret directive text
///
/// Never fails: malformed lines are skipped and reported as diagnostics, and
/// processing always continues to the end of the text.
pub fn interpret(source: &str) -> Interpretation {
    let table = CommandTable::global();
    let mut result = Interpretation::default();

    for (idx, raw) in source.lines().enumerate() {
        result.line_count += 1;

        let Line::Directive(directive) = parse_line(raw) else {
            continue;
        };

        let (request, kind) = match resolve(table, &directive) {
            Ok(request) => (Some(request), DiagnosticKind::Mapped),
            Err(kind) => (None, kind),
        };

        result.diagnostics.push(Diagnostic {
            line_number: idx + 1,
            line: raw.trim().to_string(),
            kind,
        });
        result.requests.extend(request);
    }

    result
}

/// Validate a directive against the table
fn resolve(
    table: &CommandTable,
    directive: &Directive<'_>,
) -> Result<BindingRequest, DiagnosticKind> {
    let spec = table
        .lookup(directive.keyword)
        .ok_or_else(|| DiagnosticKind::UnrecognizedDirective {
            keyword: directive.keyword.to_string(),
        })?;

    let expected = spec.operation.arity();
    let found = directive.operands.len();
    if found < expected {
        return Err(DiagnosticKind::MissingOperand { expected, found });
    }
    if found > expected {
        return Err(DiagnosticKind::UnexpectedOperand { expected, found });
    }

    let lhs = directive.operands[0];
    Ok(match spec.operation {
        Operation::Bind => BindingRequest::bind(spec.scope, lhs, directive.operands[1]),
        Operation::Unbind => BindingRequest::unbind(spec.scope, lhs),
    })
}
