use std::io::Cursor;

use binrw::{BinRead, BinReaderExt, BinWrite};

use crate::byte_source::ChunkedByteSource;
use crate::error::{PcapError, Result};

pub const LINKTYPE_ETHERNET: u32 = 1;
pub const LINKTYPE_RAW_IP: u32 = 101;
pub const LINKTYPE_IEEE802_11: u32 = 105;

#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcapGlobalHeader {
    pub magic_number: u32,
    pub version_major: u16,
    pub version_minor: u16,
    pub thiszone: i32,
    pub sigfigs: u32,
    pub snaplen: u32,
    pub network: u32,
}

impl PcapGlobalHeader {
    pub const WIRE_SIZE: usize = 24;
}

#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcapPacketHeader {
    pub ts_sec: u32,
    pub ts_usec: u32,
    pub incl_len: u32,
    pub orig_len: u32,
}

impl PcapPacketHeader {
    pub const WIRE_SIZE: usize = 16;
}

/// Frames a capture file into PCAP records, refilling its scratch buffer from
/// a [`ChunkedByteSource`] whenever a record spans a chunk boundary.
pub struct PcapFramer {
    source: ChunkedByteSource,
    scratch: Vec<u8>,
    cursor: usize,
    filled: usize,
}

impl PcapFramer {
    pub fn new(source: ChunkedByteSource, chunk_size: usize) -> Self {
        let scratch_capacity = chunk_size + chunk_size / 5;
        Self {
            source,
            scratch: vec![0u8; scratch_capacity],
            cursor: 0,
            filled: 0,
        }
    }

    pub fn source_file_size(&self) -> u64 {
        self.source.file_size()
    }

    pub fn bytes_consumed(&self) -> u64 {
        self.source.bytes_consumed()
    }

    fn ensure_available(&mut self, needed: usize) -> Result<()> {
        if self.filled - self.cursor >= needed {
            return Ok(());
        }

        let remaining = self.filled - self.cursor;
        self.scratch.copy_within(self.cursor..self.filled, 0);
        self.cursor = 0;
        self.filled = remaining;

        loop {
            if self.filled >= needed {
                return Ok(());
            }
            match self.source.fetch_next_chunk()? {
                None => return Err(PcapError::EndOfStream),
                Some(chunk) => {
                    let new_filled = self.filled + chunk.len();
                    if new_filled > self.scratch.len() {
                        return Err(PcapError::BufferTooSmall {
                            needed: new_filled,
                            capacity: self.scratch.len(),
                        });
                    }
                    self.scratch[self.filled..new_filled].copy_from_slice(chunk);
                    self.filled = new_filled;
                }
            }
        }
    }

    /// Reads the 24-byte global header that must lead the capture.
    pub fn parse_global_header(&mut self) -> Result<PcapGlobalHeader> {
        self.ensure_available(PcapGlobalHeader::WIRE_SIZE)?;
        let slice = &self.scratch[self.cursor..self.cursor + PcapGlobalHeader::WIRE_SIZE];
        let header: PcapGlobalHeader = Cursor::new(slice).read_le().map_err(|_| {
            PcapError::TruncatedFrame {
                offset: self.cursor,
                expected: PcapGlobalHeader::WIRE_SIZE,
                available: self.filled - self.cursor,
            }
        })?;
        self.cursor += PcapGlobalHeader::WIRE_SIZE;
        Ok(header)
    }

    /// Reads the next per-packet record, or `None` at a clean end of stream.
    pub fn next_frame(&mut self) -> Result<Option<(PcapPacketHeader, &[u8])>> {
        match self.ensure_available(PcapPacketHeader::WIRE_SIZE) {
            Ok(()) => {}
            Err(PcapError::EndOfStream) => return Ok(None),
            Err(e) => return Err(e),
        }

        let slice = &self.scratch[self.cursor..self.cursor + PcapPacketHeader::WIRE_SIZE];
        let header: PcapPacketHeader = Cursor::new(slice).read_le().map_err(|_| {
            PcapError::TruncatedFrame {
                offset: self.cursor,
                expected: PcapPacketHeader::WIRE_SIZE,
                available: self.filled - self.cursor,
            }
        })?;
        self.cursor += PcapPacketHeader::WIRE_SIZE;

        let incl_len = header.incl_len as usize;
        self.ensure_available(incl_len)?;
        let frame = &self.scratch[self.cursor..self.cursor + incl_len];
        self.cursor += incl_len;
        Ok(Some((header, frame)))
    }
}
