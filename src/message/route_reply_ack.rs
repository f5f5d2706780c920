use crate::{
    constants::RREP_ACK_SERIALIZED_SIZE,
    message::{
        DecodeError, DecodedMessage, MessageType, WireMessage, wire_message::read_type_tag,
    },
};
use bytes::{Buf, BufMut};
use std::fmt;

/// Route-Reply acknowledgement (RREP-ACK), sent in answer to a reply that had
/// its ack-required flag set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RouteReplyAckMessage {
    /// Opaque byte, preserved verbatim.
    pub reserved: u8,
}

impl RouteReplyAckMessage {
    pub const SERIALIZED_SIZE: usize = RREP_ACK_SERIALIZED_SIZE;
}

impl WireMessage for RouteReplyAckMessage {
    const MESSAGE_TYPE: MessageType = MessageType::RouteReplyAck;

    fn serialized_size(&self) -> usize {
        Self::SERIALIZED_SIZE
    }

    fn serialize<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(Self::MESSAGE_TYPE.tag());
        buf.put_u8(self.reserved);
    }

    fn deserialize<B: Buf>(buf: &mut B) -> Result<DecodedMessage<Self>, DecodeError> {
        let start = buf.remaining();

        DecodeError::ensure_remaining(buf, Self::SERIALIZED_SIZE)?;

        read_type_tag(buf, Self::MESSAGE_TYPE);

        let message = Self {
            reserved: buf.get_u8(),
        };

        let consumed = start - buf.remaining();
        DecodeError::ensure_consumed(consumed, message.serialized_size())?;

        Ok(DecodedMessage {
            inner: message,
            consumed,
        })
    }
}

impl fmt::Display for RouteReplyAckMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RREP_ACK")
    }
}
