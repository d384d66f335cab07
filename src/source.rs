use crate::parser::Parser;
use std::ops::Deref;

/// Owned text decoded into characters, ready to be parsed element by element
///
/// Decoding happens once up front; parsers only ever borrow slices of it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Source {
    chars: Box<[char]>,
}

impl Source {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Seed a parser at the start of the text
    pub fn parser(&self) -> Parser<'_, char, ()> {
        Parser::new(&self.chars)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Deref for Source {
    type Target = [char];

    fn deref(&self) -> &Self::Target {
        &self.chars
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}
