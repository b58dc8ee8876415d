use std::io::{Cursor, Write};
use std::path::PathBuf;

use binrw::BinWrite;

use simba::dtyp::{Decimal5, Decimal5NULL, MDEntryType, MDFlags2Set, MDFlagsSet, MDUpdateAction};
use simba::msg::{
    GroupSize, IncrementalPacketHeader, MarketDataPacketHeader, MessageHeader, OrderBookSnapshotEntry,
    OrderBookSnapshotPreamble, OrderExecution, OrderUpdate, SimbaMessage,
};
use simba::pcap::{PcapGlobalHeader, PcapPacketHeader, LINKTYPE_ETHERNET};
use simba::{Decoder, DecoderConfig};

struct TempFile(PathBuf);

impl TempFile {
    fn with_bytes(name: &str, bytes: &[u8]) -> Self {
        let mut path = std::env::temp_dir();
        path.push(format!("simba-scenario-{name}-{}.pcap", std::process::id()));
        std::fs::File::create(&path).unwrap().write_all(bytes).unwrap();
        Self(path)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn le<T: BinWrite<Args<'static> = ()>>(value: &T) -> Vec<u8> {
    let mut buf = Vec::new();
    value
        .write_options(&mut Cursor::new(&mut buf), binrw::Endian::Little, ())
        .unwrap();
    buf
}

fn be<T: BinWrite<Args<'static> = ()>>(value: &T) -> Vec<u8> {
    let mut buf = Vec::new();
    value
        .write_options(&mut Cursor::new(&mut buf), binrw::Endian::Big, ())
        .unwrap();
    buf
}

/// Wraps a SIMBA payload in an Ethernet/IPv4/UDP frame.
fn udp_frame(simba_payload: &[u8], ether_type: u16) -> Vec<u8> {
    let mut frame = Vec::new();
    frame.extend_from_slice(&[0xAAu8; 6]); // destination MAC
    frame.extend_from_slice(&[0xBBu8; 6]); // source MAC
    frame.extend_from_slice(&ether_type.to_be_bytes());

    let udp_len = (8 + simba_payload.len()) as u16;
    let total_length = (20 + udp_len as usize) as u16;

    let mut ip = vec![0u8; 20];
    ip[0] = 0x45; // version 4, IHL 20 bytes
    ip[2..4].copy_from_slice(&total_length.to_be_bytes());
    ip[8] = 64; // TTL
    ip[9] = 17; // UDP
    ip[12..16].copy_from_slice(&0xC0A80101u32.to_be_bytes());
    ip[16..20].copy_from_slice(&0xC0A80102u32.to_be_bytes());
    frame.extend_from_slice(&ip);

    let mut udp = vec![0u8; 8];
    udp[0..2].copy_from_slice(&5000u16.to_be_bytes());
    udp[2..4].copy_from_slice(&5001u16.to_be_bytes());
    udp[4..6].copy_from_slice(&udp_len.to_be_bytes());
    frame.extend_from_slice(&udp);

    frame.extend_from_slice(simba_payload);
    frame
}

/// Wraps a SIMBA payload in an Ethernet/IPv4/TCP frame with a 20-byte TCP
/// header (`data_offset = 0x50`).
fn tcp_frame(simba_payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::new();
    frame.extend_from_slice(&[0xAAu8; 6]);
    frame.extend_from_slice(&[0xBBu8; 6]);
    frame.extend_from_slice(&0x0800u16.to_be_bytes());

    let total_length = (20 + 20 + simba_payload.len()) as u16;
    let mut ip = vec![0u8; 20];
    ip[0] = 0x45;
    ip[2..4].copy_from_slice(&total_length.to_be_bytes());
    ip[8] = 64;
    ip[9] = 6; // TCP
    ip[12..16].copy_from_slice(&0xC0A80101u32.to_be_bytes());
    ip[16..20].copy_from_slice(&0xC0A80102u32.to_be_bytes());
    frame.extend_from_slice(&ip);

    let mut tcp = vec![0u8; 20];
    tcp[0..2].copy_from_slice(&5000u16.to_be_bytes());
    tcp[2..4].copy_from_slice(&5001u16.to_be_bytes());
    tcp[12] = 0x50; // data_offset=5 words => 20-byte header
    frame.extend_from_slice(&tcp);

    frame.extend_from_slice(simba_payload);
    frame
}

fn pcap_capture(frames: &[Vec<u8>]) -> Vec<u8> {
    let mut bytes = le(&PcapGlobalHeader {
        magic_number: 0xA1B2C3D4,
        version_major: 2,
        version_minor: 4,
        thiszone: 0,
        sigfigs: 0,
        snaplen: 65535,
        network: LINKTYPE_ETHERNET,
    });
    for frame in frames {
        bytes.extend(le(&PcapPacketHeader {
            ts_sec: 0,
            ts_usec: 0,
            incl_len: frame.len() as u32,
            orig_len: frame.len() as u32,
        }));
        bytes.extend_from_slice(frame);
    }
    bytes
}

fn open_decoder(file: &TempFile) -> Decoder {
    Decoder::open(&file.0, DecoderConfig::default()).unwrap()
}

#[test]
fn s1_empty_capture_yields_no_records() {
    let capture = pcap_capture(&[]);
    let file = TempFile::with_bytes("s1", &capture);
    let mut decoder = open_decoder(&file);
    assert!(decoder.next_packet().unwrap().is_none());
}

#[test]
fn s2_incremental_order_update() {
    let mut simba_payload = le(&MarketDataPacketHeader {
        msg_seq_num: 1,
        msg_size: 24,
        msg_flags: 0x0008,
        sending_time: 0,
    });
    simba_payload.extend(le(&IncrementalPacketHeader {
        transact_time: 0,
        exchange_trading_session_id: 6952,
    }));
    simba_payload.extend(le(&MessageHeader {
        block_length: OrderUpdate::WIRE_SIZE as u16,
        template_id: 15,
        schema_id: 19780,
        version: 4,
    }));
    simba_payload.extend(le(&OrderUpdate {
        md_entry_id: 42,
        md_entry_px: Decimal5::new(123_456_789),
        md_entry_size: 10,
        md_flags: MDFlagsSet::from_bits(0x0001),
        md_flags2: MDFlags2Set::from_bits(0),
        security_id: 100,
        rpt_seq: 7,
        md_update_action: MDUpdateAction::New,
        md_entry_type: MDEntryType::from_raw(b'0'),
    }));

    let capture = pcap_capture(&[udp_frame(&simba_payload, 0x0800)]);
    let file = TempFile::with_bytes("s2", &capture);
    let mut decoder = open_decoder(&file);

    let packet = decoder.next_packet().unwrap().unwrap();
    assert!(packet.truncated.is_none());
    assert_eq!(packet.market_data_header.msg_seq_num, 1);
    assert!(packet.market_data_header.is_incremental());
    assert_eq!(
        packet.incremental_header.unwrap().exchange_trading_session_id,
        6952
    );
    assert_eq!(packet.messages.len(), 1);
    match &packet.messages[0] {
        SimbaMessage::OrderUpdate(update) => {
            assert_eq!(update.md_entry_id, 42);
            assert_eq!(update.md_entry_px.mantissa, 123_456_789);
            assert_eq!(update.md_entry_type, MDEntryType::Bid);
            assert!(update.md_flags.contains(simba::dtyp::MDFlagsTag::Day));
        }
        other => panic!("unexpected message: {other:?}"),
    }

    assert!(decoder.next_packet().unwrap().is_none());
}

#[test]
fn s3_unknown_template_produces_empty_message_list() {
    let mut simba_payload = le(&MarketDataPacketHeader {
        msg_seq_num: 1,
        msg_size: 50,
        msg_flags: 0,
        sending_time: 0,
    });
    simba_payload.extend(le(&MessageHeader {
        block_length: 50,
        template_id: 99,
        schema_id: 19780,
        version: 4,
    }));
    simba_payload.extend(vec![0u8; 50]);

    let capture = pcap_capture(&[udp_frame(&simba_payload, 0x0800)]);
    let file = TempFile::with_bytes("s3", &capture);
    let mut decoder = open_decoder(&file);

    let packet = decoder.next_packet().unwrap().unwrap();
    assert!(packet.truncated.is_none());
    assert!(packet.messages.is_empty());
}

#[test]
fn s4_non_ipv4_ethertype_frame_is_skipped() {
    let mut simba_payload = le(&MarketDataPacketHeader {
        msg_seq_num: 1,
        msg_size: 0,
        msg_flags: 0,
        sending_time: 0,
    });
    simba_payload.extend(le(&MessageHeader {
        block_length: 4,
        template_id: 2,
        schema_id: 0,
        version: 0,
    }));
    simba_payload.extend(le(&(7u32)));

    let capture = pcap_capture(&[udp_frame(&simba_payload, 0x86DD)]);
    let file = TempFile::with_bytes("s4", &capture);
    let mut decoder = open_decoder(&file);

    assert!(decoder.next_packet().unwrap().is_none());
}

#[test]
fn s5_tcp_order_execution() {
    let mut simba_payload = le(&MarketDataPacketHeader {
        msg_seq_num: 1,
        msg_size: OrderExecution::WIRE_SIZE as u16,
        msg_flags: 0,
        sending_time: 0,
    });
    simba_payload.extend(le(&MessageHeader {
        block_length: OrderExecution::WIRE_SIZE as u16,
        template_id: 16,
        schema_id: 19780,
        version: 4,
    }));
    simba_payload.extend(le(&OrderExecution {
        md_entry_id: 55,
        md_entry_px: Decimal5NULL::new(200_00000),
        md_entry_size: 3,
        last_px: Decimal5::new(201_00000),
        last_qty: 3,
        trade_id: 9001,
        md_flags: MDFlagsSet::from_bits(1 << 19), // Fok
        md_flags2: MDFlags2Set::from_bits(0),
        security_id: 777,
        rpt_seq: 12,
        md_update_action: MDUpdateAction::Delete,
        md_entry_type: MDEntryType::from_raw(b'1'),
    }));

    let capture = pcap_capture(&[tcp_frame(&simba_payload)]);
    let file = TempFile::with_bytes("s5", &capture);
    let mut decoder = open_decoder(&file);

    let packet = decoder.next_packet().unwrap().unwrap();
    assert!(packet.truncated.is_none());
    assert_eq!(packet.messages.len(), 1);
    match &packet.messages[0] {
        SimbaMessage::OrderExecution(exec) => {
            assert_eq!(exec.md_entry_id, 55);
            assert_eq!(exec.md_entry_px.mantissa, 200_00000);
            assert_eq!(exec.md_entry_size, 3);
            assert_eq!(exec.last_px.mantissa, 201_00000);
            assert_eq!(exec.last_qty, 3);
            assert_eq!(exec.trade_id, 9001);
            assert!(exec.md_flags.contains(simba::dtyp::MDFlagsTag::Fok));
            assert_eq!(exec.security_id, 777);
            assert_eq!(exec.rpt_seq, 12);
            assert_eq!(exec.md_update_action, MDUpdateAction::Delete);
            assert_eq!(exec.md_entry_type, MDEntryType::Offer);
        }
        other => panic!("unexpected message: {other:?}"),
    }
}

#[test]
fn s6_empty_order_book_snapshot_group() {
    let preamble = OrderBookSnapshotPreamble {
        security_id: 321,
        last_msg_seq_num_processed: 10,
        rpt_seq: 1,
        exchange_trading_session_id: 6952,
    };

    let mut simba_payload = le(&MarketDataPacketHeader {
        msg_seq_num: 1,
        msg_size: 0,
        msg_flags: 0,
        sending_time: 0,
    });
    simba_payload.extend(le(&MessageHeader {
        block_length: OrderBookSnapshotPreamble::WIRE_SIZE as u16,
        template_id: 17,
        schema_id: 19780,
        version: 4,
    }));
    simba_payload.extend(le(&preamble));
    simba_payload.extend(le(&GroupSize {
        block_length: OrderBookSnapshotEntry::WIRE_SIZE as u16,
        num_in_group: 0,
    }));

    let capture = pcap_capture(&[udp_frame(&simba_payload, 0x0800)]);
    let file = TempFile::with_bytes("s6", &capture);
    let mut decoder = open_decoder(&file);

    let packet = decoder.next_packet().unwrap().unwrap();
    assert!(packet.truncated.is_none());
    assert_eq!(packet.messages.len(), 1);
    match &packet.messages[0] {
        SimbaMessage::OrderBookSnapshot(snapshot) => {
            assert!(snapshot.md_entries.is_empty());
            assert_eq!(snapshot.preamble.security_id, 321);
            assert_eq!(snapshot.preamble.last_msg_seq_num_processed, 10);
            assert_eq!(snapshot.preamble.exchange_trading_session_id, 6952);
        }
        other => panic!("unexpected message: {other:?}"),
    }
}
