use crate::{
    constants::{
        RREQ_DESTINATION_ONLY_BIT, RREQ_GRATUITOUS_REPLY_BIT, RREQ_NAMED_FLAGS_MASK,
        RREQ_SERIALIZED_SIZE, RREQ_UNKNOWN_SEQUENCE_NUMBER_BIT,
    },
    message::{
        DecodeError, DecodedMessage, MessageType, WireMessage, wire_message::read_type_tag,
    },
    utils::{read_address, write_address},
};
use bytes::{Buf, BufMut};
use std::{fmt, net::Ipv4Addr};

/// Route-Request (RREQ).
///
/// Broadcast by a node that needs a route to `destination_address`. The three
/// named flags are kept as booleans; any other bits found in the flag byte are
/// carried along untouched so the message re-encodes to the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteRequestMessage {
    gratuitous_reply: bool,
    destination_only: bool,
    unknown_sequence_number: bool,

    /// Flag bits without a named meaning, preserved verbatim.
    unused_flags: u8,

    /// Opaque byte, preserved verbatim.
    pub reserved: u8,

    /// Number of hops from the originator. Forwarders increment it.
    pub hop_count: u8,

    /// Identifies one discovery attempt of the originator.
    pub broadcast_id: u32,

    pub destination_address: Ipv4Addr,

    /// Latest sequence number the originator knows for the destination.
    pub destination_sequence_number: u32,

    pub origin_address: Ipv4Addr,
    pub origin_sequence_number: u32,
}

impl Default for RouteRequestMessage {
    fn default() -> Self {
        Self {
            gratuitous_reply: false,
            destination_only: false,
            unknown_sequence_number: false,
            unused_flags: 0,
            reserved: 0,
            hop_count: 0,
            broadcast_id: 0,
            destination_address: Ipv4Addr::UNSPECIFIED,
            destination_sequence_number: 0,
            origin_address: Ipv4Addr::UNSPECIFIED,
            origin_sequence_number: 0,
        }
    }
}

impl RouteRequestMessage {
    pub const SERIALIZED_SIZE: usize = RREQ_SERIALIZED_SIZE;

    /// Asks the intermediate node that answers to also unicast a reply to the
    /// destination.
    pub fn set_gratuitous_reply(&mut self, enabled: bool) {
        self.gratuitous_reply = enabled;
    }

    pub fn gratuitous_reply(&self) -> bool {
        self.gratuitous_reply
    }

    /// Only the destination itself may respond.
    pub fn set_destination_only(&mut self, enabled: bool) {
        self.destination_only = enabled;
    }

    pub fn destination_only(&self) -> bool {
        self.destination_only
    }

    /// The destination sequence number is unknown and must be ignored.
    pub fn set_unknown_sequence_number(&mut self, enabled: bool) {
        self.unknown_sequence_number = enabled;
    }

    pub fn unknown_sequence_number(&self) -> bool {
        self.unknown_sequence_number
    }

    fn flags_byte(&self) -> u8 {
        let mut flags = self.unused_flags;

        if self.gratuitous_reply {
            flags |= RREQ_GRATUITOUS_REPLY_BIT;
        }
        if self.destination_only {
            flags |= RREQ_DESTINATION_ONLY_BIT;
        }
        if self.unknown_sequence_number {
            flags |= RREQ_UNKNOWN_SEQUENCE_NUMBER_BIT;
        }

        flags
    }

    fn apply_flags_byte(&mut self, flags: u8) {
        self.gratuitous_reply = flags & RREQ_GRATUITOUS_REPLY_BIT != 0;
        self.destination_only = flags & RREQ_DESTINATION_ONLY_BIT != 0;
        self.unknown_sequence_number = flags & RREQ_UNKNOWN_SEQUENCE_NUMBER_BIT != 0;
        self.unused_flags = flags & !RREQ_NAMED_FLAGS_MASK;
    }
}

impl WireMessage for RouteRequestMessage {
    const MESSAGE_TYPE: MessageType = MessageType::RouteRequest;

    fn serialized_size(&self) -> usize {
        Self::SERIALIZED_SIZE
    }

    fn serialize<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(Self::MESSAGE_TYPE.tag());
        buf.put_u8(self.flags_byte());
        buf.put_u8(self.reserved);
        buf.put_u8(self.hop_count);
        buf.put_u32(self.broadcast_id);
        write_address(buf, self.destination_address);
        buf.put_u32(self.destination_sequence_number);
        write_address(buf, self.origin_address);
        buf.put_u32(self.origin_sequence_number);
    }

    fn deserialize<B: Buf>(buf: &mut B) -> Result<DecodedMessage<Self>, DecodeError> {
        let start = buf.remaining();

        // Never hand back a partially filled request
        DecodeError::ensure_remaining(buf, Self::SERIALIZED_SIZE)?;

        read_type_tag(buf, Self::MESSAGE_TYPE);

        let mut message = Self::default();
        message.apply_flags_byte(buf.get_u8());
        message.reserved = buf.get_u8();
        message.hop_count = buf.get_u8();
        message.broadcast_id = buf.get_u32();
        message.destination_address = read_address(buf)?;
        message.destination_sequence_number = buf.get_u32();
        message.origin_address = read_address(buf)?;
        message.origin_sequence_number = buf.get_u32();

        let consumed = start - buf.remaining();
        DecodeError::ensure_consumed(consumed, message.serialized_size())?;

        Ok(DecodedMessage {
            inner: message,
            consumed,
        })
    }
}

impl fmt::Display for RouteRequestMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RREQ id={} dst={} dst_seq={} origin={} origin_seq={} hops={} flags=[",
            self.broadcast_id,
            self.destination_address,
            self.destination_sequence_number,
            self.origin_address,
            self.origin_sequence_number,
            self.hop_count,
        )?;

        if self.gratuitous_reply {
            f.write_str("G")?;
        }
        if self.destination_only {
            f.write_str("D")?;
        }
        if self.unknown_sequence_number {
            f.write_str("U")?;
        }

        f.write_str("]")
    }
}
