use crate::atomic::Atomic;
use std::fmt;

/// Number of lines shown on each side of the error line by `Display`
pub const DEFAULT_CONTEXT_DEPTH: usize = 2;

/// A line and column view over an absolute index into the input
///
/// Positions are derived on demand from a `State` and never re-scan anything
/// but the borrowed input, so they are cheap to copy into an `Exception`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position<'code, T: Atomic = char> {
    input: &'code [T],
    /// Absolute index into `input`, at most `input.len()`
    index: usize,
}

impl<'code, T: Atomic> Position<'code, T> {
    pub fn new(input: &'code [T], index: usize) -> Self {
        Self {
            input,
            index: index.min(input.len()),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn input(&self) -> &'code [T] {
        self.input
    }

    /// Split `input[start..end]` into lines
    ///
    /// A `\r\n` pair counts as a single break and its `\r` is dropped from the
    /// line content. The range is clamped to the input and always yields at
    /// least one (possibly empty) line.
    pub fn as_lines(&self, start: usize, end: usize) -> Vec<&'code [T]> {
        let end = end.min(self.input.len());
        let start = start.min(end);
        let range = &self.input[start..end];

        let mut lines = Vec::new();
        let mut line_start = 0;
        for (i, element) in range.iter().enumerate() {
            if element.is_newline() {
                let mut line = &range[line_start..i];
                if let Some((last, rest)) = line.split_last()
                    && last.is_carriage_return()
                {
                    line = rest;
                }
                lines.push(line);
                line_start = i + 1;
            }
        }
        lines.push(&range[line_start..]);
        lines
    }

    /// Line number and start index of the line holding `index`
    fn locate(&self) -> (usize, usize) {
        let mut line = 1;
        let mut line_start = 0;
        for (i, element) in self.input[..self.index].iter().enumerate() {
            if element.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }
        (line, line_start)
    }

    /// 1-based line number of the index
    pub fn line(&self) -> usize {
        self.locate().0
    }

    /// 1-based column of the index, counted in elements
    ///
    /// For byte input holding multibyte UTF-8 this is a byte column.
    pub fn column(&self) -> usize {
        let (_, line_start) = self.locate();
        self.index - line_start + 1
    }

    pub fn total_lines(&self) -> usize {
        self.as_lines(0, self.input.len()).len()
    }

    /// The numbered lines within `depth` lines of the error line
    pub fn context(&self, depth: usize) -> Vec<(usize, &'code [T])> {
        let lines = self.as_lines(0, self.input.len());
        Self::window(lines, self.line(), depth)
    }

    fn window(lines: Vec<&'code [T]>, line: usize, depth: usize) -> Vec<(usize, &'code [T])> {
        let first = line.saturating_sub(depth).max(1);
        let last = line.saturating_add(depth);

        lines
            .into_iter()
            .enumerate()
            .map(|(i, content)| (i + 1, content))
            .filter(|(number, _)| *number >= first && *number <= last)
            .collect()
    }

    /// Render the diagnostic block with `depth` lines of context on each side
    ///
    /// The caret line sits directly below the error line, padded to the
    /// rendered width of the line up to the index. Empty input renders as an
    /// empty string.
    pub fn render(&self, depth: usize) -> String {
        if self.input.is_empty() {
            return String::new();
        }

        let (line, line_start) = self.locate();
        let column = self.index - line_start + 1;
        let padding = T::format_slice(&self.input[line_start..self.index])
            .chars()
            .count();
        let mut out = vec![format!("Line {}, column {}:", line, column)];

        let context = Self::window(self.as_lines(0, self.input.len()), line, depth);
        let (before, after): (Vec<_>, Vec<_>) =
            context.into_iter().partition(|(number, _)| *number <= line);

        out.extend(before.into_iter().map(|(_, content)| T::format_slice(content)));
        out.push(format!("{}^", " ".repeat(padding)));
        out.extend(after.into_iter().map(|(_, content)| T::format_slice(content)));

        out.join("\n")
    }
}

impl<'code, T: Atomic> fmt::Display for Position<'code, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(DEFAULT_CONTEXT_DEPTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_first_element() {
        let data = chars("abc");
        let pos = Position::new(&data, 0);
        assert_eq!(pos.line(), 1);
        assert_eq!(pos.column(), 1);
    }

    #[test]
    fn test_second_line_first_column() {
        let data = chars("a\nb\nc");
        let pos = Position::new(&data, 2);
        assert_eq!(pos.line(), 2);
        assert_eq!(pos.column(), 1);
    }

    #[test]
    fn test_column_within_line() {
        let data = chars("hello\nworld");
        let pos = Position::new(&data, 9);
        assert_eq!(pos.line(), 2);
        assert_eq!(pos.column(), 4);
    }

    #[test]
    fn test_end_of_input() {
        let data = b"line1\nline2";
        let pos = Position::new(data, 11);
        assert_eq!(pos.line(), 2);
        assert_eq!(pos.column(), 6);
    }

    #[test]
    fn test_end_of_input_after_newline() {
        let data = b"hello\n";
        let pos = Position::new(data, 6);
        assert_eq!(pos.line(), 2);
        assert_eq!(pos.column(), 1);
    }

    #[test]
    fn test_index_clamped_to_input() {
        let data = b"ab";
        let pos = Position::new(data, 10);
        assert_eq!(pos.index(), 2);
    }

    #[test]
    fn test_crlf_counts_as_one_break() {
        let data = b"one\r\ntwo\r\nthree";
        let pos = Position::new(data, 10);
        assert_eq!(pos.line(), 3);
        assert_eq!(pos.column(), 1);

        let lines = pos.as_lines(0, data.len());
        assert_eq!(lines, vec![&b"one"[..], &b"two"[..], &b"three"[..]]);
    }

    #[test]
    fn test_lone_carriage_return_is_not_a_break() {
        let data = b"a\rb";
        let pos = Position::new(data, 2);
        assert_eq!(pos.line(), 1);
        assert_eq!(pos.column(), 3);
    }

    #[test]
    fn test_as_lines_sub_range() {
        let data = b"aa\nbb\ncc";
        let pos = Position::new(data, 0);
        assert_eq!(pos.as_lines(3, 8), vec![&b"bb"[..], &b"cc"[..]]);
        assert_eq!(pos.as_lines(5, 100), vec![&b""[..], &b"cc"[..]]);
        assert_eq!(pos.as_lines(4, 2), vec![&b""[..]]);
    }

    #[test]
    fn test_total_lines() {
        let data = b"1\n2\n3\n4";
        assert_eq!(Position::new(data, 0).total_lines(), 4);
        assert_eq!(Position::new(b"", 0).total_lines(), 1);
    }

    #[test]
    fn test_context_window() {
        let data = b"1\n2\n3\n4\n5\n6\n7";
        // Index 6 is the '4' on line 4
        let pos = Position::new(data, 6);
        let numbers: Vec<usize> = pos.context(2).into_iter().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_context_clamped_at_edges() {
        let data = b"1\n2\n3";
        let pos = Position::new(data, 0);
        let context = pos.context(5);
        assert_eq!(context.len(), 3);
        assert_eq!(context[0], (1, &b"1"[..]));
        assert_eq!(context[2], (3, &b"3"[..]));
    }

    #[test]
    fn test_render_points_at_column() {
        let data = chars("let x = 1\nlet y = ?\nlet z = 3");
        let pos = Position::new(&data, 18);
        let rendered = pos.to_string();

        assert_eq!(
            rendered,
            "Line 2, column 9:\nlet x = 1\nlet y = ?\n        ^\nlet z = 3"
        );
    }

    #[test]
    fn test_render_respects_depth() {
        let data = b"1\n2\n3\n4\n5";
        let pos = Position::new(data, 4);
        assert_eq!(pos.render(0), "Line 3, column 1:\n3\n^");
        assert_eq!(pos.render(1), "Line 3, column 1:\n2\n3\n^\n4");
    }

    #[test]
    fn test_render_empty_input() {
        let data: &[u8] = b"";
        let pos = Position::new(data, 0);
        assert_eq!(pos.to_string(), "");
    }

    #[test]
    fn test_render_at_end_of_input() {
        let data = b"hello";
        let pos = Position::new(data, 5);
        assert_eq!(pos.to_string(), "Line 1, column 6:\nhello\n     ^");
    }

    #[test]
    fn test_caret_under_element_after_multibyte_bytes() {
        let data = "éx".as_bytes();
        let pos = Position::new(data, 2);

        // Columns count bytes, the caret follows the decoded text
        assert_eq!(pos.column(), 3);
        assert_eq!(pos.to_string(), "Line 1, column 3:\néx\n ^");
    }

    #[test]
    fn test_caret_under_element_after_multibyte_chars() {
        let data = chars("äöx");
        let pos = Position::new(&data, 2);
        assert_eq!(pos.column(), 3);
        assert_eq!(pos.to_string(), "Line 1, column 3:\näöx\n  ^");
    }

    #[test]
    fn test_line_and_column_agree_with_as_lines() {
        let data = b"ab\r\ncd\n\nefg\rh";
        for index in 0..=data.len() {
            let pos = Position::new(data, index);
            let lines = pos.as_lines(0, index);
            let last = lines.last().map_or(0, |line| line.len());

            assert_eq!(pos.line(), lines.len(), "line at {}", index);
            assert_eq!(pos.column(), last + 1, "column at {}", index);
        }
    }
}
