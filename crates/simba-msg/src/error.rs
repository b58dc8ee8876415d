use thiserror::Error;

/// A recoverable per-packet decode failure. The caller logs it and moves on
/// to the next packet; it never aborts the whole capture.
#[derive(Debug, Error)]
pub enum SimbaDecodeError {
    #[error("truncated SIMBA packet at offset {offset}: expected {expected} more bytes")]
    TruncatedPacket { offset: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, SimbaDecodeError>;
