use crate::atomic::Atomic;
use crate::error::Exception;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A parse failure packaged for miette report handlers
///
/// Carries the whole input as named source text and labels the failing
/// element, so graphical handlers can draw their own snippet.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(packrat::parse))]
pub struct ParseDiagnostic {
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
}

impl ParseDiagnostic {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }
}

impl<'code, T: Atomic> Exception<'code, T> {
    /// Convert into a miette diagnostic over the input, named `name`
    ///
    /// Element indices are translated into byte offsets of the rendered text.
    pub fn to_diagnostic(&self, name: impl AsRef<str>) -> ParseDiagnostic {
        let position = self.position();
        let input = position.input();
        let (start, end) = T::rendered_span(input, position.index());

        ParseDiagnostic {
            message: self.message().to_string(),
            source_code: NamedSource::new(name, T::format_slice(input)),
            span: (start, end - start).into(),
        }
    }
}
