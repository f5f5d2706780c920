//! Wire codec for the control messages of an ad-hoc on-demand distance-vector
//! (AODV) routing protocol.
//!
//! Every control message starts with a one-byte type tag followed by a
//! fixed-layout, big-endian payload. Outbound messages write themselves into a
//! caller-provided [`bytes::BufMut`]; inbound datagrams go through the
//! [`message::MessageDispatcher`], which peeks the tag and hands the buffer to
//! the matching decoder.
//!
//! ```rust
//! use aodv_wire::message::{ControlMessage, RouteRequestMessage, WireMessage};
//! use std::net::Ipv4Addr;
//!
//! let mut rreq = RouteRequestMessage::default();
//! rreq.broadcast_id = 7;
//! rreq.destination_address = Ipv4Addr::new(10, 0, 0, 9);
//! rreq.set_destination_only(true);
//!
//! let bytes = rreq.to_bytes();
//! assert_eq!(bytes.len(), 24);
//!
//! let decoded = ControlMessage::decode_datagram(&bytes).unwrap();
//! assert_eq!(decoded, ControlMessage::RouteRequest(rreq));
//! ```

pub mod constants;
pub mod message;
pub mod utils;
