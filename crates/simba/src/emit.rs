//! Renders decoded packets as a single top-level JSON array, one element per
//! packet, streamed so the whole capture never needs to live in memory.

use std::io::{self, Write};

use simba_msg::SimbaPacket;

pub fn write_array_start(writer: &mut impl Write) -> io::Result<()> {
    writer.write_all(b"[")
}

pub fn write_array_end(writer: &mut impl Write) -> io::Result<()> {
    writer.write_all(b"]")
}

/// Writes one packet as an array element. `first` must be `true` only for
/// the very first call, so the separating comma is placed correctly.
pub fn write_packet(writer: &mut impl Write, packet: &SimbaPacket, first: bool) -> io::Result<()> {
    if !first {
        writer.write_all(b",")?;
    }
    serde_json::to_writer(&mut *writer, packet).map_err(io::Error::other)
}
