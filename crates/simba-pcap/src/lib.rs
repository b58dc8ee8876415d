//! Offline capture framing: a chunked mmap byte source, a PCAP record
//! framer built on it, and an Ethernet/IPv4/UDP/TCP demultiplexer that
//! extracts SIMBA application payloads from captured frames.

#![deny(unsafe_code)]

mod byte_source;
mod demux;
mod error;
mod pcap;

pub use byte_source::ChunkedByteSource;
pub use demux::{
    demux, ipv4_to_string, EthernetHeader, Ipv4Header, TcpHeader, UdpHeader, ETHERTYPE_IPV4,
    IP_PROTO_TCP, IP_PROTO_UDP,
};
pub use error::{PcapError, Result};
pub use pcap::{
    PcapFramer, PcapGlobalHeader, PcapPacketHeader, LINKTYPE_ETHERNET, LINKTYPE_IEEE802_11,
    LINKTYPE_RAW_IP,
};
