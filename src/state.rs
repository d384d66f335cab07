use crate::atomic::Atomic;
use crate::position::Position;

/// Immutable cursor over the parser input
///
/// A state is a plain `Copy` value: every transition returns a new state and
/// leaves the receiver untouched, so a saved state can always be resumed from.
/// The index never exceeds the input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State<'code, T: Atomic = char> {
    input: &'code [T],
    index: usize,
}

impl<'code, T: Atomic> State<'code, T> {
    /// Create a cursor at the start of `input`
    pub fn new(input: &'code [T]) -> Self {
        Self::with(input, 0)
    }

    /// Create a cursor at `index`, clamped to the end of `input`
    pub fn with(input: &'code [T], index: usize) -> Self {
        Self {
            input,
            index: index.min(input.len()),
        }
    }

    pub fn input(&self) -> &'code [T] {
        self.input
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of elements left after the cursor
    pub fn length(&self) -> usize {
        self.input.len() - self.index
    }

    pub fn is_at_end(&self) -> bool {
        self.length() == 0
    }

    pub fn remaining(&self) -> &'code [T] {
        &self.input[self.index..]
    }

    /// Elements in `[index + from, index + to)`, or to the end when `to` is `None`
    ///
    /// Bounds are relative to the cursor and clamped to the input.
    pub fn slice(&self, from: usize, to: Option<usize>) -> &'code [T] {
        let len = self.input.len();
        let end = match to {
            Some(to) => self.index.saturating_add(to).min(len),
            None => len,
        };
        let start = self.index.saturating_add(from).min(end);
        &self.input[start..end]
    }

    /// The next `size` elements, or `None` if fewer than `size` remain
    ///
    /// This is the only bounds check; callers treat `None` as a parse failure.
    pub fn consume(&self, size: usize) -> Option<&'code [T]> {
        if size <= self.length() {
            Some(self.slice(0, Some(size)))
        } else {
            None
        }
    }

    /// A new state advanced by `count` elements
    ///
    /// Callers only skip what `consume` accepted. The index stops at the end of
    /// input regardless.
    pub fn skip(&self, count: usize) -> Self {
        Self::with(self.input, self.index.saturating_add(count))
    }

    /// Take one element and hand it to `f` together with the advanced state
    ///
    /// At end of input `f` receives `None` and an unadvanced state.
    pub fn chain<R, F>(self, f: F) -> R
    where
        F: FnOnce(Option<T>, State<'code, T>) -> R,
    {
        let element = self.consume(1).and_then(|slice| slice.first().copied());
        f(element, self.skip(1))
    }

    pub fn position(&self) -> Position<'code, T> {
        Position::new(self.input, self.index)
    }
}
