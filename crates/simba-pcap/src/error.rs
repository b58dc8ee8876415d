use thiserror::Error;

#[derive(Debug, Error)]
pub enum PcapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("packet buffer too small: need {needed} bytes, scratch capacity is {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },

    #[error("end of stream")]
    EndOfStream,

    #[error("truncated frame at offset {offset}: expected {expected} bytes, {available} available")]
    TruncatedFrame {
        offset: usize,
        expected: usize,
        available: usize,
    },

    #[error("invalid IPv4 header length: {ihl_bytes} bytes")]
    InvalidIpHeader { ihl_bytes: usize },

    #[error("invalid TCP header length: {header_len} bytes")]
    InvalidTcpHeader { header_len: usize },
}

pub type Result<T> = std::result::Result<T, PcapError>;
