use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::PathBuf;

use annotate_snippets::display_list::{DisplayList, FormatOptions};
use annotate_snippets::snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation};
use thiserror::Error;

use crate::lexer::Span;

/// Why a line could not be split into the fields the normalizer needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MalformedReason {
    MissingOrgValue,
    MissingOperand,
}

impl Display for MalformedReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use MalformedReason::*;
        match self {
            MissingOrgValue => { write!(f, "ORG directive without a value") }
            MissingOperand => { write!(f, "instruction needs an opcode and at least one operand") }
        }
    }
}

impl MalformedReason {
    fn annotation(&self) -> &'static str {
        use MalformedReason::*;
        match self {
            MissingOrgValue => "expected a value after this",
            MissingOperand => "expected an operand after this",
        }
    }
}

/// The offending line of a load file.
#[derive(Debug, Clone, PartialEq)]
pub struct LineContext {
    /// 1-based line number in the input.
    pub number: usize,
    pub source: String,
    pub span: Span,
}

impl LineContext {
    pub(crate) fn new(index: usize, source: &str, span: Span) -> Self {
        LineContext { number: index + 1, source: source.to_string(), span }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("line {number}: {reason}", number = .line.number)]
    Malformed {
        line: LineContext,
        reason: MalformedReason,
    },
    #[error("line {number}: invalid operand `{operand}`", number = .line.number)]
    InvalidOperand {
        line: LineContext,
        operand: String,
    },
    #[error("core size must be positive (was: {0})")]
    InvalidCoreSize(i64),
    #[error("Error, file does not exist: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// True for errors that only concern a single file and shouldn't stop a batch.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::MissingFile(_) => true,
            Error::InFile { source, .. } => source.is_recoverable(),
            _ => false,
        }
    }

    fn message(&self) -> String {
        match self {
            Error::Malformed { reason, .. } => reason.to_string(),
            Error::InvalidOperand { operand, .. } => {
                format!("operand `{}` is not a mode character followed by an integer", operand)
            }
            Error::InFile { source, .. } => source.message(),
            other => other.to_string(),
        }
    }

    fn annotated(&self) -> Option<(&LineContext, &'static str)> {
        match self {
            Error::Malformed { line, reason } => Some((line, reason.annotation())),
            Error::InvalidOperand { line, .. } => Some((line, "invalid operand here")),
            Error::InFile { source, .. } => source.annotated(),
            _ => None,
        }
    }

    fn origin(&self) -> Option<String> {
        match self {
            Error::InFile { path, .. } => Some(path.display().to_string()),
            _ => None,
        }
    }

    /// Renders the error as an annotated excerpt of the offending line.
    ///
    /// Errors that aren't tied to a line render as just the title.
    pub fn render(&self, color: bool) -> String {
        let title = self.message();
        let origin = self.origin();
        let slices = match self.annotated() {
            Some((line, label)) => vec![
                Slice {
                    source: &line.source,
                    line_start: line.number,
                    origin: origin.as_deref(),
                    fold: false,
                    annotations: vec![
                        SourceAnnotation {
                            range: line.span,
                            label,
                            annotation_type: AnnotationType::Error,
                        }
                    ],
                }
            ],
            None => vec![],
        };

        let snippet = Snippet {
            title: Some(Annotation {
                id: None,
                label: Some(title.as_str()),
                annotation_type: AnnotationType::Error,
            }),
            footer: vec![],
            slices,
            opt: FormatOptions { color, ..Default::default() },
        };
        DisplayList::from(snippet).to_string()
    }
}
