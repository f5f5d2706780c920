use aodv_wire::message::{DecodeError, RouteRequestMessage, WireMessage};
use bytes::BytesMut;
use std::net::Ipv4Addr;

fn sample_request() -> RouteRequestMessage {
    let mut rreq = RouteRequestMessage::default();
    rreq.reserved = 0xA5;
    rreq.hop_count = 3;
    rreq.broadcast_id = 0x01020304;
    rreq.destination_address = Ipv4Addr::new(10, 1, 1, 2);
    rreq.destination_sequence_number = 0x0A0B0C0D;
    rreq.origin_address = Ipv4Addr::new(10, 1, 1, 1);
    rreq.origin_sequence_number = 0x11223344;
    rreq.set_gratuitous_reply(true);
    rreq.set_unknown_sequence_number(true);
    rreq
}

fn random_request() -> RouteRequestMessage {
    let mut rreq = RouteRequestMessage::default();
    rreq.reserved = rand::random();
    rreq.hop_count = rand::random();
    rreq.broadcast_id = rand::random();
    rreq.destination_address = Ipv4Addr::from(rand::random::<u32>());
    rreq.destination_sequence_number = rand::random();
    rreq.origin_address = Ipv4Addr::from(rand::random::<u32>());
    rreq.origin_sequence_number = rand::random();
    rreq.set_gratuitous_reply(rand::random());
    rreq.set_destination_only(rand::random());
    rreq.set_unknown_sequence_number(rand::random());
    rreq
}

#[test]
fn default_request_is_all_zero() {
    let rreq = RouteRequestMessage::default();

    assert!(!rreq.gratuitous_reply());
    assert!(!rreq.destination_only());
    assert!(!rreq.unknown_sequence_number());
    assert_eq!(rreq.reserved, 0);
    assert_eq!(rreq.hop_count, 0);
    assert_eq!(rreq.broadcast_id, 0);
    assert_eq!(rreq.destination_address, Ipv4Addr::UNSPECIFIED);
    assert_eq!(rreq.destination_sequence_number, 0);
    assert_eq!(rreq.origin_address, Ipv4Addr::UNSPECIFIED);
    assert_eq!(rreq.origin_sequence_number, 0);

    let mut expected = [0u8; 24];
    expected[0] = 1;
    assert_eq!(&rreq.to_bytes()[..], &expected[..]);
}

#[test]
fn serialized_size_is_fixed() {
    assert_eq!(RouteRequestMessage::default().serialized_size(), 24);
    assert_eq!(sample_request().serialized_size(), 24);

    for _ in 0..100 {
        let rreq = random_request();
        assert_eq!(rreq.serialized_size(), 24);
        assert_eq!(rreq.to_bytes().len(), 24);
    }
}

#[test]
fn request_wire_layout_matches_network_order() {
    let bytes = sample_request().to_bytes();

    let expected: [u8; 24] = [
        1,    // type tag
        0x14, // gratuitous reply (bit 2) + unknown sequence number (bit 4)
        0xA5, // reserved
        3,    // hop count
        0x01, 0x02, 0x03, 0x04, // broadcast id
        10, 1, 1, 2, // destination
        0x0A, 0x0B, 0x0C, 0x0D, // destination sequence number
        10, 1, 1, 1, // origin
        0x11, 0x22, 0x33, 0x44, // origin sequence number
    ];

    assert_eq!(&bytes[..], &expected[..]);
    assert_eq!(&bytes[4..8], &[0x01u8, 0x02, 0x03, 0x04]);
}

#[test]
fn request_roundtrip_preserves_every_field() {
    for _ in 0..256 {
        let rreq = random_request();
        let bytes = rreq.to_bytes();

        let mut cursor = &bytes[..];
        let decoded = RouteRequestMessage::deserialize(&mut cursor).expect("decode failed");

        assert_eq!(decoded.inner, rreq);
        assert_eq!(decoded.consumed, rreq.serialized_size());
        assert!(cursor.is_empty());
    }
}

#[test]
fn serialize_advances_cursor_by_exactly_serialized_size() {
    let rreq = sample_request();

    let mut buf = BytesMut::new();
    buf.extend_from_slice(b"xx");
    rreq.serialize(&mut buf);
    assert_eq!(buf.len(), 2 + 24);

    let mut fixed = [0xEEu8; 30];
    {
        let mut window = &mut fixed[..];
        rreq.serialize(&mut window);
        assert_eq!(window.len(), 6);
    }
    assert_eq!(&fixed[..24], &rreq.to_bytes()[..]);
    assert_eq!(&fixed[24..], &[0xEEu8; 6]);
}

#[test]
fn flag_accessors_touch_exactly_one_bit() {
    let mut rreq = RouteRequestMessage::default();
    rreq.reserved = 0x5A;

    rreq.set_gratuitous_reply(true);
    assert_eq!(rreq.to_bytes()[1], 0b0000_0100);
    assert!(!rreq.destination_only());
    assert!(!rreq.unknown_sequence_number());

    rreq.set_destination_only(true);
    assert_eq!(rreq.to_bytes()[1], 0b0000_1100);
    assert!(rreq.gratuitous_reply());
    assert!(!rreq.unknown_sequence_number());

    rreq.set_unknown_sequence_number(true);
    assert_eq!(rreq.to_bytes()[1], 0b0001_1100);

    rreq.set_destination_only(false);
    assert_eq!(rreq.to_bytes()[1], 0b0001_0100);
    assert!(rreq.gratuitous_reply());
    assert!(!rreq.destination_only());
    assert!(rreq.unknown_sequence_number());

    rreq.set_gratuitous_reply(false);
    rreq.set_unknown_sequence_number(false);
    assert_eq!(rreq.to_bytes()[1], 0);
    assert_eq!(rreq.reserved, 0x5A);
}

#[test]
fn unused_flag_bits_survive_decode_encode_and_accessors() {
    let mut bytes = sample_request().to_bytes().to_vec();
    // Bits 0, 1, 5, 6 and 7 plus the named bit 3
    bytes[1] = 0b1110_1011;

    let mut decoded = RouteRequestMessage::deserialize(&mut &bytes[..])
        .expect("decode failed")
        .inner;

    assert!(!decoded.gratuitous_reply());
    assert!(decoded.destination_only());
    assert!(!decoded.unknown_sequence_number());
    assert_eq!(&decoded.to_bytes()[..], &bytes[..]);

    decoded.set_destination_only(false);
    decoded.set_unknown_sequence_number(true);
    assert_eq!(decoded.to_bytes()[1], 0b1111_0011);
}

#[test]
fn equality_covers_reserved_byte_and_unused_flag_bits() {
    let rreq = sample_request();

    let mut other = rreq;
    other.reserved ^= 0x01;
    assert_ne!(rreq, other);

    let mut bytes = rreq.to_bytes().to_vec();
    bytes[1] |= 0b1000_0000;
    let decoded = RouteRequestMessage::deserialize(&mut &bytes[..])
        .expect("decode failed")
        .inner;

    assert_ne!(decoded, rreq);
    assert_eq!(decoded.gratuitous_reply(), rreq.gratuitous_reply());
    assert_eq!(decoded.destination_only(), rreq.destination_only());
    assert_eq!(decoded.unknown_sequence_number(), rreq.unknown_sequence_number());
}

#[test]
fn truncated_request_is_a_decode_error() {
    let bytes = sample_request().to_bytes();

    for len in 0..24 {
        let mut cursor = &bytes[..len];
        let result = RouteRequestMessage::deserialize(&mut cursor);

        assert_eq!(
            result,
            Err(DecodeError::Truncated {
                needed: 24,
                available: len,
            })
        );
        // Nothing is consumed from a short buffer
        assert_eq!(cursor.len(), len);
    }
}

#[test]
fn decoder_leaves_following_bytes_in_place() {
    let mut bytes = sample_request().to_bytes().to_vec();
    bytes.extend_from_slice(&[0xDE, 0xAD]);

    let mut cursor = &bytes[..];
    let decoded = RouteRequestMessage::deserialize(&mut cursor).expect("decode failed");

    assert_eq!(decoded.consumed, 24);
    assert_eq!(cursor, &[0xDEu8, 0xAD]);
}

#[test]
#[should_panic(expected = "RREQ decoder was handed a buffer tagged 2")]
fn foreign_type_tag_is_a_contract_violation() {
    let mut bytes = sample_request().to_bytes().to_vec();
    bytes[0] = 2;

    let _ = RouteRequestMessage::deserialize(&mut &bytes[..]);
}

#[test]
fn display_summarises_request() {
    let text = sample_request().to_string();

    assert!(text.starts_with("RREQ id=16909060"));
    assert!(text.contains("dst=10.1.1.2"));
    assert!(text.contains("origin=10.1.1.1"));
    assert!(text.ends_with("flags=[GU]"));
}
