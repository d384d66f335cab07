use crate::atomic::{Atomic, Symbols};
use std::borrow::Cow;
use std::fmt;

/// A test over a single input element that can describe itself
///
/// `satisfy` uses the description to build its failure message, so every
/// predicate renders something readable after "Failed to satisfy".
pub trait Predicate<T>: fmt::Display {
    fn test(&self, element: &T) -> bool;
}

/// Accepts exactly one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equals<T>(pub T);

impl<T: Atomic> Predicate<T> for Equals<T> {
    fn test(&self, element: &T) -> bool {
        *element == self.0
    }
}

impl<T: Atomic> fmt::Display for Equals<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "equal to \"{}\"", T::format_slice(std::slice::from_ref(&self.0)))
    }
}

/// Accepts any element of the set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf<T> {
    set: Vec<T>,
}

impl<T: Atomic> OneOf<T> {
    pub fn new(set: impl Symbols<T>) -> Self {
        Self {
            set: set.into_symbols(),
        }
    }

    pub fn set(&self) -> &[T] {
        &self.set
    }
}

impl<T: Atomic> Predicate<T> for OneOf<T> {
    fn test(&self, element: &T) -> bool {
        self.set.contains(element)
    }
}

impl<T: Atomic> fmt::Display for OneOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "one of \"{}\"", T::format_slice(&self.set))
    }
}

/// Accepts any element outside the set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoneOf<T> {
    set: Vec<T>,
}

impl<T: Atomic> NoneOf<T> {
    pub fn new(set: impl Symbols<T>) -> Self {
        Self {
            set: set.into_symbols(),
        }
    }

    pub fn set(&self) -> &[T] {
        &self.set
    }
}

impl<T: Atomic> Predicate<T> for NoneOf<T> {
    fn test(&self, element: &T) -> bool {
        !self.set.contains(element)
    }
}

impl<T: Atomic> fmt::Display for NoneOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "none of \"{}\"", T::format_slice(&self.set))
    }
}

/// An arbitrary test function paired with a caller supplied description
pub struct Described<F> {
    description: Cow<'static, str>,
    test: F,
}

impl<F> Described<F> {
    pub fn new(description: impl Into<Cow<'static, str>>, test: F) -> Self {
        Self {
            description: description.into(),
            test,
        }
    }
}

impl<F> fmt::Debug for Described<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Described")
            .field("description", &self.description)
            .field("test", &"<function>")
            .finish()
    }
}

impl<F> fmt::Display for Described<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl<T, F> Predicate<T> for Described<F>
where
    F: Fn(&T) -> bool,
{
    fn test(&self, element: &T) -> bool {
        (self.test)(element)
    }
}

/// Convenience function to create a described predicate
pub fn predicate<T, F>(description: impl Into<Cow<'static, str>>, test: F) -> Described<F>
where
    F: Fn(&T) -> bool,
{
    Described::new(description, test)
}
