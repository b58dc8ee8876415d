use std::io::Cursor;

use binrw::{BinRead, BinReaderExt};

use crate::error::{PcapError, Result};
use crate::pcap::LINKTYPE_ETHERNET;

pub const ETHERTYPE_IPV4: u16 = 0x0800;
pub const IP_PROTO_TCP: u8 = 6;
pub const IP_PROTO_UDP: u8 = 17;

#[derive(BinRead, Debug, Clone, Copy)]
pub struct EthernetHeader {
    pub destination: [u8; 6],
    pub source: [u8; 6],
    pub ether_type: u16,
}

impl EthernetHeader {
    pub const WIRE_SIZE: usize = 14;
}

#[derive(BinRead, Debug, Clone, Copy)]
pub struct Ipv4Header {
    pub version_ihl: u8,
    pub dscp_ecn: u8,
    pub total_length: u16,
    pub identification: u16,
    pub flags_fragment_offset: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub checksum: u16,
    pub source_address: u32,
    pub destination_address: u32,
}

impl Ipv4Header {
    pub const WIRE_SIZE: usize = 20;

    pub fn header_len(&self) -> usize {
        (self.version_ihl & 0x0F) as usize * 4
    }
}

#[derive(BinRead, Debug, Clone, Copy)]
pub struct UdpHeader {
    pub source_port: u16,
    pub destination_port: u16,
    pub length: u16,
    pub checksum: u16,
}

impl UdpHeader {
    pub const WIRE_SIZE: usize = 8;
}

#[derive(BinRead, Debug, Clone, Copy)]
pub struct TcpHeader {
    pub source_port: u16,
    pub destination_port: u16,
    pub sequence_number: u32,
    pub ack_number: u32,
    pub data_offset_reserved: u8,
    pub flags: u8,
    pub window: u16,
    pub checksum: u16,
    pub urgent_pointer: u16,
}

impl TcpHeader {
    pub const WIRE_SIZE: usize = 20;

    pub fn header_len(&self) -> usize {
        ((self.data_offset_reserved >> 4) as usize) * 4
    }
}

pub fn ipv4_to_string(addr: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (addr >> 24) & 0xFF,
        (addr >> 16) & 0xFF,
        (addr >> 8) & 0xFF,
        addr & 0xFF
    )
}

/// Strips Ethernet/IPv4/UDP or TCP framing from one captured frame, returning
/// the SIMBA application payload. `Ok(None)` means the frame was well-formed
/// but not SIMBA traffic (wrong link type, ethertype, or IP protocol) and
/// should be silently skipped.
pub fn demux(frame: &[u8], link_type: u32) -> Result<Option<&[u8]>> {
    if link_type != LINKTYPE_ETHERNET {
        return Ok(None);
    }

    if frame.len() < EthernetHeader::WIRE_SIZE {
        return Err(PcapError::TruncatedFrame {
            offset: 0,
            expected: EthernetHeader::WIRE_SIZE,
            available: frame.len(),
        });
    }
    let eth: EthernetHeader = Cursor::new(&frame[..EthernetHeader::WIRE_SIZE])
        .read_be()
        .map_err(|_| PcapError::TruncatedFrame {
            offset: 0,
            expected: EthernetHeader::WIRE_SIZE,
            available: frame.len(),
        })?;
    if eth.ether_type != ETHERTYPE_IPV4 {
        return Ok(None);
    }

    let ip_offset = EthernetHeader::WIRE_SIZE;
    if frame.len() < ip_offset + Ipv4Header::WIRE_SIZE {
        return Err(PcapError::TruncatedFrame {
            offset: ip_offset,
            expected: Ipv4Header::WIRE_SIZE,
            available: frame.len().saturating_sub(ip_offset),
        });
    }
    let ip: Ipv4Header = Cursor::new(&frame[ip_offset..ip_offset + Ipv4Header::WIRE_SIZE])
        .read_be()
        .map_err(|_| PcapError::TruncatedFrame {
            offset: ip_offset,
            expected: Ipv4Header::WIRE_SIZE,
            available: frame.len() - ip_offset,
        })?;

    let ip_header_len = ip.header_len();
    if !(20..=60).contains(&ip_header_len) {
        return Err(PcapError::InvalidIpHeader {
            ihl_bytes: ip_header_len,
        });
    }

    let transport_offset = ip_offset + ip_header_len;
    match ip.protocol {
        IP_PROTO_UDP => demux_udp(frame, transport_offset),
        IP_PROTO_TCP => demux_tcp(frame, transport_offset),
        _ => Ok(None),
    }
}

fn demux_udp(frame: &[u8], offset: usize) -> Result<Option<&[u8]>> {
    if frame.len() < offset + UdpHeader::WIRE_SIZE {
        return Err(PcapError::TruncatedFrame {
            offset,
            expected: UdpHeader::WIRE_SIZE,
            available: frame.len().saturating_sub(offset),
        });
    }
    let udp: UdpHeader = Cursor::new(&frame[offset..offset + UdpHeader::WIRE_SIZE])
        .read_be()
        .map_err(|_| PcapError::TruncatedFrame {
            offset,
            expected: UdpHeader::WIRE_SIZE,
            available: frame.len() - offset,
        })?;

    let data_start = offset + UdpHeader::WIRE_SIZE;
    let udp_len = udp.length as usize;
    if udp_len < UdpHeader::WIRE_SIZE {
        return Err(PcapError::TruncatedFrame {
            offset,
            expected: UdpHeader::WIRE_SIZE,
            available: udp_len,
        });
    }
    let data_end = offset + udp_len;
    if frame.len() < data_end {
        return Err(PcapError::TruncatedFrame {
            offset: data_start,
            expected: data_end - data_start,
            available: frame.len().saturating_sub(data_start),
        });
    }
    Ok(Some(&frame[data_start..data_end]))
}

fn demux_tcp(frame: &[u8], offset: usize) -> Result<Option<&[u8]>> {
    if frame.len() < offset + TcpHeader::WIRE_SIZE {
        return Err(PcapError::TruncatedFrame {
            offset,
            expected: TcpHeader::WIRE_SIZE,
            available: frame.len().saturating_sub(offset),
        });
    }
    let tcp: TcpHeader = Cursor::new(&frame[offset..offset + TcpHeader::WIRE_SIZE])
        .read_be()
        .map_err(|_| PcapError::TruncatedFrame {
            offset,
            expected: TcpHeader::WIRE_SIZE,
            available: frame.len() - offset,
        })?;

    let tcp_header_len = tcp.header_len();
    if !(20..=60).contains(&tcp_header_len) {
        return Err(PcapError::InvalidTcpHeader {
            header_len: tcp_header_len,
        });
    }

    let data_start = offset + tcp_header_len;
    if frame.len() < data_start {
        return Err(PcapError::TruncatedFrame {
            offset,
            expected: tcp_header_len,
            available: frame.len().saturating_sub(offset),
        });
    }
    Ok(Some(&frame[data_start..]))
}
