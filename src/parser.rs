use crate::atomic::Atomic;
use crate::error::{Exception, ParseResult};
use crate::predicate::Predicate;
use crate::state::State;
use std::borrow::Cow;

/// A cursor paired with the outcome of the last step taken from it
///
/// Every combinator reads the held state and returns a new parser; the
/// receiver is never modified. An error parser keeps the cursor at the failure
/// point so callers can report or recover without losing their place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parser<'code, T: Atomic, A> {
    state: State<'code, T>,
    result: ParseResult<'code, T, A>,
}

impl<'code, T: Atomic> Parser<'code, T, ()> {
    /// Seed a parser at the start of `input`
    ///
    /// No step has run yet, so the outcome is the unit success.
    pub fn new(input: &'code [T]) -> Self {
        Self::from_parts(State::new(input), Ok(()))
    }
}

impl<'code, T: Atomic, A> Parser<'code, T, A> {
    pub fn from_parts(state: State<'code, T>, result: ParseResult<'code, T, A>) -> Self {
        Parser { state, result }
    }

    pub fn state(&self) -> State<'code, T> {
        self.state
    }

    pub fn result(&self) -> &ParseResult<'code, T, A> {
        &self.result
    }

    pub fn into_result(self) -> ParseResult<'code, T, A> {
        self.result
    }

    pub fn into_parts(self) -> (State<'code, T>, ParseResult<'code, T, A>) {
        (self.state, self.result)
    }

    pub fn is_error(&self) -> bool {
        self.result.is_err()
    }

    pub fn value(&self) -> Option<&A> {
        self.result.as_ref().ok()
    }

    pub fn exception(&self) -> Option<&Exception<'code, T>> {
        self.result.as_ref().err()
    }

    /// Fail at the current position, keeping the current state
    pub fn fail<B>(&self, message: impl Into<Cow<'static, str>>) -> Parser<'code, T, B> {
        Parser::from_parts(
            self.state,
            Err(Exception::new(message, self.state.position())),
        )
    }

    /// Record a successful step: `value` was matched and parsing resumes at `state`
    pub fn matched<B>(&self, value: B, state: State<'code, T>) -> Parser<'code, T, B> {
        Parser::from_parts(state, Ok(value))
    }

    /// Branch on the outcome, handing the whole parser to the chosen arm
    pub fn either<R, O, E>(self, on_ok: O, on_error: E) -> R
    where
        O: FnOnce(Self) -> R,
        E: FnOnce(Self) -> R,
    {
        if self.is_error() {
            on_error(self)
        } else {
            on_ok(self)
        }
    }

    /// Replace the held outcome with `f(outcome)`, keeping the state
    pub fn map<B, F>(self, f: F) -> Parser<'code, T, B>
    where
        F: FnOnce(ParseResult<'code, T, A>) -> ParseResult<'code, T, B>,
    {
        Parser::from_parts(self.state, f(self.result))
    }

    /// Consume one element if `predicate` accepts it
    ///
    /// On failure the returned parser keeps the original state, so a failed
    /// `satisfy` never advances the cursor. Running out of input is an
    /// ordinary failure.
    pub fn satisfy<P>(&self, predicate: P) -> Parser<'code, T, T>
    where
        P: Predicate<T>,
    {
        self.state.chain(|element, next| match element {
            Some(element) if predicate.test(&element) => self.matched(element, next),
            _ => self.fail(format!("Failed to satisfy {}", predicate)),
        })
    }

    /// Replace the failure message of an error parser
    ///
    /// The new exception points at this parser's own state, not at the
    /// position stored in the exception it replaces. Ok parsers pass through.
    pub fn relabel(self, message: impl Into<Cow<'static, str>>) -> Self {
        self.either(
            |parser| parser,
            |parser| {
                let position = parser.state.position();
                parser.map(|_| Err(Exception::new(message, position)))
            },
        )
    }
}
