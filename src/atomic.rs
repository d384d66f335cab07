/// Trait for atomic elements that can be used as parser input
///
/// This enables generic line counting, error formatting and source offsets
/// for any symbol type the parser runs over.
pub trait Atomic: Copy + Clone + PartialEq + std::fmt::Debug {
    /// The line feed element for this atomic type
    const NEWLINE: Self;

    /// The carriage return element, folded into a following `NEWLINE`
    const CARRIAGE_RETURN: Self;

    /// Convert a slice of elements to a displayable string for error reporting
    fn format_slice(slice: &[Self]) -> String;

    /// Byte range covered by `slice[index]` in the string `format_slice(slice)` returns
    ///
    /// An index at or past the end yields an empty range at the end of the text.
    fn rendered_span(slice: &[Self], index: usize) -> (usize, usize);

    fn is_newline(&self) -> bool {
        *self == Self::NEWLINE
    }

    fn is_carriage_return(&self) -> bool {
        *self == Self::CARRIAGE_RETURN
    }
}

impl Atomic for u8 {
    const NEWLINE: Self = b'\n';
    const CARRIAGE_RETURN: Self = b'\r';

    fn format_slice(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).to_string()
    }

    fn rendered_span(slice: &[Self], index: usize) -> (usize, usize) {
        // Mirrors `from_utf8_lossy`: valid runs are copied, each invalid run
        // becomes one U+FFFD
        let replacement = char::REPLACEMENT_CHARACTER.len_utf8();
        let mut position = 0;
        let mut offset = 0;

        for chunk in slice.utf8_chunks() {
            let valid = chunk.valid();
            if index < position + valid.len() {
                let local = index - position;
                let start = (0..=local)
                    .rev()
                    .find(|&i| valid.is_char_boundary(i))
                    .unwrap_or(0);
                let end = (local + 1..=valid.len())
                    .find(|&i| valid.is_char_boundary(i))
                    .unwrap_or(valid.len());
                return (offset + start, offset + end);
            }
            position += valid.len();
            offset += valid.len();

            let invalid = chunk.invalid();
            if index < position + invalid.len() {
                return (offset, offset + replacement);
            }
            if !invalid.is_empty() {
                position += invalid.len();
                offset += replacement;
            }
        }

        (offset, offset)
    }
}

impl Atomic for char {
    const NEWLINE: Self = '\n';
    const CARRIAGE_RETURN: Self = '\r';

    fn format_slice(slice: &[Self]) -> String {
        slice.iter().collect()
    }

    fn rendered_span(slice: &[Self], index: usize) -> (usize, usize) {
        let index = index.min(slice.len());
        let start: usize = slice[..index].iter().map(|c| c.len_utf8()).sum();
        let len = slice.get(index).map_or(0, |c| c.len_utf8());
        (start, start + len)
    }
}

/// Conversion into an owned run of symbols
///
/// Lets matchers accept `"abc"` for both character and byte input, as well as
/// plain slices, arrays and vectors of elements.
pub trait Symbols<T: Atomic> {
    fn into_symbols(self) -> Vec<T>;
}

impl Symbols<char> for &str {
    fn into_symbols(self) -> Vec<char> {
        self.chars().collect()
    }
}

impl Symbols<char> for String {
    fn into_symbols(self) -> Vec<char> {
        self.chars().collect()
    }
}

impl Symbols<u8> for &str {
    fn into_symbols(self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl<T: Atomic> Symbols<T> for &[T] {
    fn into_symbols(self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Atomic, const N: usize> Symbols<T> for [T; N] {
    fn into_symbols(self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Atomic, const N: usize> Symbols<T> for &[T; N] {
    fn into_symbols(self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Atomic> Symbols<T> for Vec<T> {
    fn into_symbols(self) -> Vec<T> {
        self
    }
}
