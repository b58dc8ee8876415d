use std::fs::File;
use std::path::Path;

use memmap2::{Mmap, MmapOptions};

use crate::error::Result;

/// Rolls a capture file through memory in fixed-size windows instead of
/// mapping it whole, so decoding a multi-gigabyte capture costs bounded
/// address space.
pub struct ChunkedByteSource {
    file: File,
    file_size: u64,
    current_offset: u64,
    chunk_size: usize,
    current_chunk: Option<Mmap>,
}

impl ChunkedByteSource {
    pub fn open(path: impl AsRef<Path>, chunk_size: usize) -> Result<Self> {
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();
        Ok(Self {
            file,
            file_size,
            current_offset: 0,
            chunk_size,
            current_chunk: None,
        })
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn bytes_consumed(&self) -> u64 {
        self.current_offset
    }

    /// Maps and returns the next chunk, or `None` once the file is exhausted.
    /// Unmaps any previously returned chunk first.
    #[allow(unsafe_code)]
    pub fn fetch_next_chunk(&mut self) -> Result<Option<&[u8]>> {
        self.current_chunk = None;
        if self.current_offset >= self.file_size {
            return Ok(None);
        }

        let remaining = self.file_size - self.current_offset;
        let len = remaining.min(self.chunk_size as u64) as usize;

        // The file is a closed, read-only capture for the lifetime of this
        // process, so external mutation (mmap's usual safety caveat) cannot
        // happen here.
        let mmap = unsafe {
            MmapOptions::new()
                .offset(self.current_offset)
                .len(len)
                .map(&self.file)?
        };
        self.current_offset += len as u64;
        self.current_chunk = Some(mmap);
        Ok(self.current_chunk.as_deref())
    }
}
