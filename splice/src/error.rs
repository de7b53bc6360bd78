use std::fmt;
use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};

/// Fatal failures of a rewrite run.
///
/// Every variant is a precondition violation: the input file does not carry
/// the sentinel grammar the pass requires. Nothing is caught or retried; the
/// caller aborts before the affected file is written.
#[derive(Debug)]
pub enum SpliceError {
    /// Neither marker of a required `#NAME_S` / `#NAME_E` pair was found.
    MarkerNotFound { name: String },
    /// An opening `#NAME_S` marker exists but its closing marker does not.
    /// Carries the byte span of the opening marker for diagnostics.
    UnterminatedBlock { name: String, open_span: Range<usize> },
    /// A required single-quoted `NAME='...'` assignment was not found.
    AssignmentNotFound { name: String },
    /// A file expected to contain help-text echo fences had none.
    HelpBlocksNotFound,
}

impl fmt::Display for SpliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpliceError::MarkerNotFound { name } => {
                write!(f, "content block markers #{}_S/#{}_E not found", name, name)
            }
            SpliceError::UnterminatedBlock { name, .. } => {
                write!(f, "content block #{}_S is never closed", name)
            }
            SpliceError::AssignmentNotFound { name } => {
                write!(f, "single-quoted assignment {}='...' not found", name)
            }
            SpliceError::HelpBlocksNotFound => {
                write!(f, "no help-text echo blocks found")
            }
        }
    }
}

impl std::error::Error for SpliceError {}

impl SpliceError {
    /// Convert to a codespan-reporting Diagnostic for display.
    /// Only unterminated blocks have a source location to label; the other
    /// variants describe something absent from the file entirely.
    pub fn to_diagnostic(&self, file_id: usize) -> Diagnostic<usize> {
        let diagnostic = Diagnostic::new(Severity::Error).with_message(self.to_string());
        match self {
            SpliceError::UnterminatedBlock { name, open_span } => diagnostic
                .with_labels(vec![Label::primary(file_id, open_span.clone())])
                .with_notes(vec![format!("expected a closing #{}_E marker", name)]),
            SpliceError::MarkerNotFound { name } => diagnostic.with_notes(vec![format!(
                "the file must contain a #{}_S ... #{}_E span",
                name, name
            )]),
            SpliceError::AssignmentNotFound { .. } => diagnostic.with_notes(vec![
                "the assignment value must be single-quoted and non-empty".to_string(),
            ]),
            SpliceError::HelpBlocksNotFound => diagnostic.with_notes(vec![
                "a help block opens with a line `echo \"` and closes with a line `\"`".to_string(),
            ]),
        }
    }
}
