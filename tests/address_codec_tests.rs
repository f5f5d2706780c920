use aodv_wire::{
    message::DecodeError,
    utils::{WireAddress, read_address, write_address},
};
use bytes::BytesMut;
use std::net::{Ipv4Addr, Ipv6Addr};

#[test]
fn ipv4_address_is_written_in_octet_order() {
    let mut buf = BytesMut::new();
    write_address(&mut buf, Ipv4Addr::new(192, 168, 1, 20));

    assert_eq!(Ipv4Addr::WIDTH, 4);
    assert_eq!(&buf[..], &[192u8, 168, 1, 20]);

    let mut cursor = &buf[..];
    let address: Ipv4Addr = read_address(&mut cursor).expect("read failed");
    assert_eq!(address, Ipv4Addr::new(192, 168, 1, 20));
    assert!(cursor.is_empty());
}

#[test]
fn ipv6_address_roundtrips() {
    let address = Ipv6Addr::new(0xfe80, 0, 0, 0, 0x0202, 0xb3ff, 0xfe1e, 0x8329);

    let mut buf = BytesMut::new();
    address.write_to(&mut buf);

    assert_eq!(Ipv6Addr::WIDTH, 16);
    assert_eq!(buf.len(), 16);
    assert_eq!(&buf[..2], &[0xfeu8, 0x80]);

    let decoded = Ipv6Addr::read_from(&mut &buf[..]).expect("read failed");
    assert_eq!(decoded, address);
}

#[test]
fn consecutive_reads_advance_by_address_width() {
    let bytes = [10u8, 0, 0, 1, 10, 0, 0, 2, 0xFF];
    let mut cursor = &bytes[..];

    let first: Ipv4Addr = read_address(&mut cursor).expect("first read failed");
    let second: Ipv4Addr = read_address(&mut cursor).expect("second read failed");

    assert_eq!(first, Ipv4Addr::new(10, 0, 0, 1));
    assert_eq!(second, Ipv4Addr::new(10, 0, 0, 2));
    assert_eq!(cursor, &[0xFFu8]);
}

#[test]
fn short_read_fails_without_consuming() {
    let bytes = [10u8, 0, 0];
    let mut cursor = &bytes[..];

    assert_eq!(
        read_address::<Ipv4Addr, _>(&mut cursor),
        Err(DecodeError::Truncated {
            needed: 4,
            available: 3,
        })
    );
    assert_eq!(cursor.len(), 3);

    assert_eq!(
        Ipv6Addr::read_from(&mut &bytes[..]),
        Err(DecodeError::Truncated {
            needed: 16,
            available: 3,
        })
    );
}
