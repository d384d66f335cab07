use crate::atomic::Atomic;
use crate::position::Position;
use std::borrow::Cow;
use thiserror::Error;

/// Outcome of a single parser step
///
/// `Ok` carries the matched value, `Err` the failure with its position.
/// Transform the success arm with `map`, bind the next step with `and_then`.
pub type ParseResult<'code, T, A> = Result<A, Exception<'code, T>>;

/// A parse failure: a human readable reason paired with where it happened
///
/// There is a single failure kind. Callers building richer languages encode
/// their own categories in the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parser Exception: {message}\n{position}")]
pub struct Exception<'code, T: Atomic = char> {
    message: Cow<'static, str>,
    position: Position<'code, T>,
}

impl<'code, T: Atomic> Exception<'code, T> {
    pub fn new(message: impl Into<Cow<'static, str>>, position: Position<'code, T>) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> Position<'code, T> {
        self.position
    }

    pub fn line(&self) -> usize {
        self.position.line()
    }

    pub fn column(&self) -> usize {
        self.position.column()
    }

    /// Same as `Display` but with `depth` lines of context around the error line
    pub fn render(&self, depth: usize) -> String {
        format!(
            "Parser Exception: {}\n{}",
            self.message,
            self.position.render(depth)
        )
    }
}
