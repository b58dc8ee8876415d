use thiserror::Error;

/// Errors that abort a whole decode run. Per-packet and per-frame issues are
/// recoverable and are logged by [`crate::decoder::Decoder`] instead of
/// surfacing here.
#[derive(Debug, Error)]
pub enum SimbaError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Pcap(#[from] simba_pcap::PcapError),
}

pub type Result<T> = std::result::Result<T, SimbaError>;
