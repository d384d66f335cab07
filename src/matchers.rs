//! Primitive element matchers built on `satisfy`, plus `string`

use crate::atomic::{Atomic, Symbols};
use crate::parser::Parser;
use crate::predicate::{Equals, NoneOf, OneOf};

impl<'code, T: Atomic, A> Parser<'code, T, A> {
    /// Match a single element equal to `expected`
    pub fn char(&self, expected: T) -> Parser<'code, T, T> {
        let message = format!(
            "Expected \"{}\"",
            T::format_slice(std::slice::from_ref(&expected))
        );
        self.satisfy(Equals(expected)).relabel(message)
    }

    /// Match a single element that is a member of `set`
    pub fn one_of(&self, set: impl Symbols<T>) -> Parser<'code, T, T> {
        let predicate = OneOf::new(set);
        let message = format!("Expected one of \"{}\"", T::format_slice(predicate.set()));
        self.satisfy(predicate).relabel(message)
    }

    /// Match a single element that is not a member of `set`
    pub fn none_of(&self, set: impl Symbols<T>) -> Parser<'code, T, T> {
        let predicate = NoneOf::new(set);
        let message = format!("Expected none of \"{}\"", T::format_slice(predicate.set()));
        self.satisfy(predicate).relabel(message)
    }

    /// Match `text` exactly, returning the matched slice of the input
    ///
    /// An empty `text` always succeeds without consuming anything.
    pub fn string(&self, text: impl Symbols<T>) -> Parser<'code, T, &'code [T]> {
        let expected = text.into_symbols();
        match self.state().consume(expected.len()) {
            Some(actual) if actual == expected.as_slice() => {
                self.matched(actual, self.state().skip(expected.len()))
            }
            _ => self.fail(format!("Expected \"{}\"", T::format_slice(&expected))),
        }
    }
}
