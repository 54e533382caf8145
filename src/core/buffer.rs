use crate::domain::model::CopyReport;
use crate::utils::error::{Result, ServiceError};

/// Fixed-capacity byte buffer for displaying untrusted input.
///
/// The last slot of the capacity is reserved, the way a C string keeps room
/// for its terminator, so at most `capacity - 1` content bytes are ever held.
/// Storage is allocated once and never grows.
#[derive(Debug)]
pub struct DisplayBuffer {
    data: Vec<u8>,
    capacity: usize,
}

impl DisplayBuffer {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ServiceError::InvalidConfigValueError {
                field: "buffer_capacity".to_string(),
                value: capacity.to_string(),
                reason: "Capacity must leave room for the terminator".to_string(),
            });
        }

        Ok(Self {
            data: Vec::with_capacity(capacity),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_content_len(&self) -> usize {
        self.capacity - 1
    }

    /// Replaces the buffer contents with as much of `input` as fits.
    pub fn copy_from(&mut self, input: &[u8]) -> CopyReport {
        let cut = truncation_point(input, self.max_content_len());

        self.data.clear();
        self.data.extend_from_slice(&input[..cut]);
        debug_assert!(self.data.len() < self.capacity);

        CopyReport {
            input_len: input.len(),
            copied: cut,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Largest prefix length `<= limit` that does not end inside a UTF-8 sequence.
///
/// Only an incomplete sequence at the very end of the prefix is dropped; bytes
/// that are invalid UTF-8 earlier on are passed through untouched.
fn truncation_point(input: &[u8], limit: usize) -> usize {
    if input.len() <= limit {
        return input.len();
    }

    match std::str::from_utf8(&input[..limit]) {
        Err(e) if e.error_len().is_none() => e.valid_up_to(),
        _ => limit,
    }
}
