/// Position in a followed file, carried from one poll to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadCursor {
    /// Byte offset of the first unread byte.
    pub offset: u64,
    /// Number of lines delivered so far.
    pub line_no: usize,
}

impl ReadCursor {
    /// Accounts for one consumed line and returns its 1-based number.
    pub(crate) fn advance(&mut self, bytes: usize) -> usize {
        self.offset += bytes as u64;
        self.line_no += 1;
        self.line_no
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
