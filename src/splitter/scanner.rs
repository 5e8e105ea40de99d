//! Separator scan over SQL text.
//!
//! The statement being accumulated is always a contiguous slice of the
//! source: `start..position`. Every scanned character belongs to it, so the
//! scanner tracks offsets instead of copying into a buffer.

const SEPARATOR: char = ';';
const ESCAPE: char = '\\';
const COMMENT_OPENER: &str = "--";

/// Result of a separator scan.
pub(super) struct Scan<'a> {
    /// Completed statements, trimmed, in source order
    pub statements: Vec<String>,
    /// Untrimmed text after the last separator
    pub remainder:  &'a str
}

/// Single-use scanner state for one split call.
pub(super) struct Scanner<'a> {
    source:            &'a str,
    position:          usize,
    start:             usize,
    in_string_literal: bool,
    string_delimiter:  char,
    previous:          Option<char>,
    statements:        Vec<String>
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            start: 0,
            in_string_literal: false,
            string_delimiter: '\'',
            previous: None,
            statements: Vec::new()
        }
    }

    pub fn scan(mut self) -> Scan<'a> {
        while let Some(c) = self.rest().chars().next() {
            if is_quote(c) && self.previous != Some(ESCAPE) {
                self.track_quote(c);
            }

            if !self.in_string_literal && self.rest().starts_with(COMMENT_OPENER) {
                self.skip_line_comment();
                continue;
            }

            self.advance(c);

            if c == SEPARATOR && !self.in_string_literal {
                self.finish_statement();
            }
        }

        let remainder = self.buffer();
        let tail = remainder.trim();
        if !tail.is_empty() {
            self.statements.push(tail.to_string());
        }

        Scan {
            statements: self.statements,
            remainder
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    fn buffer(&self) -> &'a str {
        &self.source[self.start..self.position]
    }

    fn advance(&mut self, c: char) {
        self.position += c.len_utf8();
        self.previous = Some(c);
    }

    fn track_quote(&mut self, quote: char) {
        if !self.in_string_literal {
            self.in_string_literal = true;
            self.string_delimiter = quote;
        } else if quote == self.string_delimiter {
            self.in_string_literal = false;
        }
    }

    /// Consume a `--` comment up to, but not including, the next newline.
    fn skip_line_comment(&mut self) {
        let rest = self.rest();
        let len = rest.find('\n').unwrap_or(rest.len());
        let comment = &rest[..len];
        self.previous = comment.chars().next_back();
        self.position += len;
    }

    fn finish_statement(&mut self) {
        let buffer = self.buffer();
        let body = &buffer[..buffer.len() - SEPARATOR.len_utf8()];
        if !body.trim().is_empty() {
            self.statements.push(buffer.trim().to_string());
        }
        self.start = self.position;
    }
}

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}
