use crate::{
    constants::{
        RREP_ACK_REQUIRED_BIT, RREP_NAMED_FLAGS_MASK, RREP_REPAIR_BIT, RREP_SERIALIZED_SIZE,
    },
    message::{
        DecodeError, DecodedMessage, MessageType, WireMessage, wire_message::read_type_tag,
    },
    utils::{read_address, write_address},
};
use bytes::{Buf, BufMut};
use std::{fmt, net::Ipv4Addr, time::Duration};

/// Route-Reply (RREP).
///
/// Unicast back toward the originator of a request once a route to the
/// destination is known. A reply whose destination is its own origin and whose
/// hop count is zero doubles as a Hello beacon; see [`RouteReplyMessage::hello`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteReplyMessage {
    repair: bool,
    ack_required: bool,

    /// Flag bits without a named meaning, preserved verbatim.
    unused_flags: u8,

    /// Prefix length for subnet routes in the low five bits. The whole byte is
    /// preserved verbatim.
    pub prefix_size: u8,

    pub hop_count: u8,
    pub destination_address: Ipv4Addr,
    pub destination_sequence_number: u32,
    pub origin_address: Ipv4Addr,

    /// How long receivers may consider the route valid, in milliseconds.
    pub lifetime_ms: u32,
}

impl Default for RouteReplyMessage {
    fn default() -> Self {
        Self {
            repair: false,
            ack_required: false,
            unused_flags: 0,
            prefix_size: 0,
            hop_count: 0,
            destination_address: Ipv4Addr::UNSPECIFIED,
            destination_sequence_number: 0,
            origin_address: Ipv4Addr::UNSPECIFIED,
            lifetime_ms: 0,
        }
    }
}

impl RouteReplyMessage {
    pub const SERIALIZED_SIZE: usize = RREP_SERIALIZED_SIZE;

    /// Builds a Hello beacon advertising `address` as reachable in one hop.
    pub fn hello(address: Ipv4Addr, sequence_number: u32, lifetime: Duration) -> Self {
        let mut message = Self {
            destination_address: address,
            destination_sequence_number: sequence_number,
            origin_address: address,
            ..Self::default()
        };
        message.set_lifetime(lifetime);
        message
    }

    /// Whether this reply has the shape of a Hello beacon.
    pub fn is_hello(&self) -> bool {
        self.hop_count == 0 && self.destination_address == self.origin_address
    }

    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(u64::from(self.lifetime_ms))
    }

    /// Stores `lifetime` at millisecond resolution, saturating at `u32::MAX`.
    pub fn set_lifetime(&mut self, lifetime: Duration) {
        self.lifetime_ms = u32::try_from(lifetime.as_millis()).unwrap_or(u32::MAX);
    }

    /// Used for repairing a broken link to a multicast tree.
    pub fn set_repair(&mut self, enabled: bool) {
        self.repair = enabled;
    }

    pub fn repair(&self) -> bool {
        self.repair
    }

    /// The receiver must answer with a Route-Reply acknowledgement.
    pub fn set_ack_required(&mut self, enabled: bool) {
        self.ack_required = enabled;
    }

    pub fn ack_required(&self) -> bool {
        self.ack_required
    }

    fn flags_byte(&self) -> u8 {
        let mut flags = self.unused_flags;

        if self.repair {
            flags |= RREP_REPAIR_BIT;
        }
        if self.ack_required {
            flags |= RREP_ACK_REQUIRED_BIT;
        }

        flags
    }

    fn apply_flags_byte(&mut self, flags: u8) {
        self.repair = flags & RREP_REPAIR_BIT != 0;
        self.ack_required = flags & RREP_ACK_REQUIRED_BIT != 0;
        self.unused_flags = flags & !RREP_NAMED_FLAGS_MASK;
    }
}

impl WireMessage for RouteReplyMessage {
    const MESSAGE_TYPE: MessageType = MessageType::RouteReply;

    fn serialized_size(&self) -> usize {
        Self::SERIALIZED_SIZE
    }

    fn serialize<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(Self::MESSAGE_TYPE.tag());
        buf.put_u8(self.flags_byte());
        buf.put_u8(self.prefix_size);
        buf.put_u8(self.hop_count);
        write_address(buf, self.destination_address);
        buf.put_u32(self.destination_sequence_number);
        write_address(buf, self.origin_address);
        buf.put_u32(self.lifetime_ms);
    }

    fn deserialize<B: Buf>(buf: &mut B) -> Result<DecodedMessage<Self>, DecodeError> {
        let start = buf.remaining();

        DecodeError::ensure_remaining(buf, Self::SERIALIZED_SIZE)?;

        read_type_tag(buf, Self::MESSAGE_TYPE);

        let mut message = Self::default();
        message.apply_flags_byte(buf.get_u8());
        message.prefix_size = buf.get_u8();
        message.hop_count = buf.get_u8();
        message.destination_address = read_address(buf)?;
        message.destination_sequence_number = buf.get_u32();
        message.origin_address = read_address(buf)?;
        message.lifetime_ms = buf.get_u32();

        let consumed = start - buf.remaining();
        DecodeError::ensure_consumed(consumed, message.serialized_size())?;

        Ok(DecodedMessage {
            inner: message,
            consumed,
        })
    }
}

impl fmt::Display for RouteReplyMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_hello() { "HELLO" } else { "RREP" };

        write!(
            f,
            "{kind} dst={} dst_seq={} origin={} hops={} lifetime={}ms prefix={}",
            self.destination_address,
            self.destination_sequence_number,
            self.origin_address,
            self.hop_count,
            self.lifetime_ms,
            self.prefix_size,
        )?;

        if self.repair {
            f.write_str(" repair")?;
        }
        if self.ack_required {
            f.write_str(" ack_required")?;
        }

        Ok(())
    }
}
