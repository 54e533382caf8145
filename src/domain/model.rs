/// What a single run of the service was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No user argument was supplied.
    Idle,
    /// Raw bytes of the first user argument.
    Process(Vec<u8>),
}

/// Result of one bounded copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    pub input_len: usize,
    pub copied: usize,
}

impl CopyReport {
    pub fn is_truncated(&self) -> bool {
        self.copied < self.input_len
    }
}
