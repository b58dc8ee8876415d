use std::path::Path;

use simba_msg::SimbaPacket;
use simba_pcap::{demux, ChunkedByteSource, PcapFramer};

use crate::config::DecoderConfig;
use crate::error::Result;

const PROGRESS_LOG_INTERVAL: u64 = 50_000;

/// Pulls decoded [`SimbaPacket`]s out of a capture file one at a time.
///
/// Frames that aren't SIMBA traffic, and packets that fail to decode, are
/// logged and skipped rather than aborting the run.
pub struct Decoder {
    framer: PcapFramer,
    link_type: u32,
    frames_seen: u64,
}

impl Decoder {
    pub fn open(path: impl AsRef<Path>, config: DecoderConfig) -> Result<Self> {
        let source = ChunkedByteSource::open(path, config.chunk_size)?;
        let mut framer = PcapFramer::new(source, config.chunk_size);
        let header = framer.parse_global_header()?;
        log::info!(
            "opened capture: link_type={} snaplen={} version={}.{}",
            header.network,
            header.snaplen,
            header.version_major,
            header.version_minor
        );
        Ok(Self {
            framer,
            link_type: header.network,
            frames_seen: 0,
        })
    }

    /// Bytes consumed from, and total size of, the underlying capture file.
    pub fn progress(&self) -> (u64, u64) {
        (self.framer.bytes_consumed(), self.framer.source_file_size())
    }

    /// Pulls the next decoded packet. Returns `Ok(None)` at end of stream.
    pub fn next_packet(&mut self) -> Result<Option<SimbaPacket>> {
        loop {
            let frame = match self.framer.next_frame()? {
                None => return Ok(None),
                Some((_, frame)) => frame,
            };

            self.frames_seen += 1;
            if self.frames_seen % PROGRESS_LOG_INTERVAL == 0 {
                log::info!("{} frames processed", self.frames_seen);
            }

            let payload = match demux(frame, self.link_type) {
                Ok(Some(payload)) => payload,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("skipping frame: {e}");
                    continue;
                }
            };

            match simba_msg::decode_packet(payload) {
                Ok(packet) => return Ok(Some(packet)),
                Err(e) => {
                    log::warn!("skipping SIMBA packet: {e}");
                    continue;
                }
            }
        }
    }
}

/// Decodes a whole capture file, invoking `on_packet` for every decoded
/// packet in order.
pub fn decode_file(
    path: impl AsRef<Path>,
    config: DecoderConfig,
    mut on_packet: impl FnMut(&SimbaPacket),
) -> Result<()> {
    let mut decoder = Decoder::open(path, config)?;
    while let Some(packet) = decoder.next_packet()? {
        on_packet(&packet);
    }
    Ok(())
}
