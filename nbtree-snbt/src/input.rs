use nbtree::error::{Error, Result};

/// A cursor over SNBT text.
///
/// Positions are byte offsets into the original string, and always sit on a
/// char boundary.
pub(crate) struct Input<'a> {
    data: &'a str,
    index: usize,
}

impl<'a> Input<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, index: 0 }
    }

    pub fn pos(&self) -> usize {
        self.index
    }

    /// Everything not yet consumed.
    pub fn rest(&self) -> &'a str {
        &self.data[self.index..]
    }

    pub fn is_empty(&self) -> bool {
        self.index >= self.data.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    /// Look `n` chars ahead without consuming anything. `peek_nth(0)` is
    /// `peek()`.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    pub fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += c.len_utf8();
        Some(c)
    }

    /// Like [`next`](Self::next), but running out of input is an error.
    pub fn next_or_eof(&mut self) -> Result<char> {
        self.next().ok_or_else(Error::unexpected_eof)
    }

    /// Consume `expected` or fail, naming `what` was being parsed.
    pub fn expect(&mut self, expected: char, what: &str) -> Result<()> {
        match self.next_or_eof()? {
            c if c == expected => Ok(()),
            c => Err(self.error(format!(
                "expected '{}' in {}, found '{}'",
                expected, what, c
            ))),
        }
    }

    /// Move past `len` bytes that the caller has already examined through
    /// [`rest`](Self::rest).
    pub fn advance(&mut self, len: usize) {
        self.index = (self.index + len).min(self.data.len());
    }

    pub fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.index = self.data.len() - trimmed.len();
    }

    /// A parse error annotated with the current position.
    pub fn error(&self, msg: impl AsRef<str>) -> Error {
        Error::parse(format!("{} at position {}", msg.as_ref(), self.index))
    }
}
