use crate::message::{
    DecodeError, DecodedMessage, MessageDispatcher, MessageType, RouteErrorMessage,
    RouteReplyAckMessage, RouteReplyMessage, RouteRequestMessage, WireMessage,
};
use bytes::{BufMut, Bytes, BytesMut};
use std::fmt;

/// Any control message of the protocol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlMessage {
    RouteRequest(RouteRequestMessage),
    RouteReply(RouteReplyMessage),
    RouteError(RouteErrorMessage),
    RouteReplyAck(RouteReplyAckMessage),
}

impl ControlMessage {
    pub fn message_type(&self) -> MessageType {
        match self {
            ControlMessage::RouteRequest(_) => MessageType::RouteRequest,
            ControlMessage::RouteReply(_) => MessageType::RouteReply,
            ControlMessage::RouteError(_) => MessageType::RouteError,
            ControlMessage::RouteReplyAck(_) => MessageType::RouteReplyAck,
        }
    }

    pub fn serialized_size(&self) -> usize {
        match self {
            ControlMessage::RouteRequest(m) => m.serialized_size(),
            ControlMessage::RouteReply(m) => m.serialized_size(),
            ControlMessage::RouteError(m) => m.serialized_size(),
            ControlMessage::RouteReplyAck(m) => m.serialized_size(),
        }
    }

    /// Writes the wrapped message, type tag first.
    pub fn serialize<B: BufMut>(&self, buf: &mut B) {
        match self {
            ControlMessage::RouteRequest(m) => m.serialize(buf),
            ControlMessage::RouteReply(m) => m.serialize(buf),
            ControlMessage::RouteError(m) => m.serialize(buf),
            ControlMessage::RouteReplyAck(m) => m.serialize(buf),
        }
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.serialized_size());
        self.serialize(&mut buf);
        buf.freeze()
    }

    /// A Route-Reply shaped as a Hello beacon.
    pub fn is_hello(&self) -> bool {
        matches!(self, ControlMessage::RouteReply(m) if m.is_hello())
    }

    /// Decodes one message from the front of `buf` through the global
    /// dispatcher, advancing the slice past it.
    pub fn decode(buf: &mut &[u8]) -> Result<DecodedMessage<Self>, DecodeError> {
        MessageDispatcher::global().decode(buf)
    }

    /// Decodes a datagram that must hold exactly one message.
    pub fn decode_datagram(datagram: &[u8]) -> Result<Self, DecodeError> {
        MessageDispatcher::global().decode_datagram(datagram)
    }
}

impl From<RouteRequestMessage> for ControlMessage {
    fn from(message: RouteRequestMessage) -> Self {
        ControlMessage::RouteRequest(message)
    }
}

impl From<RouteReplyMessage> for ControlMessage {
    fn from(message: RouteReplyMessage) -> Self {
        ControlMessage::RouteReply(message)
    }
}

impl From<RouteErrorMessage> for ControlMessage {
    fn from(message: RouteErrorMessage) -> Self {
        ControlMessage::RouteError(message)
    }
}

impl From<RouteReplyAckMessage> for ControlMessage {
    fn from(message: RouteReplyAckMessage) -> Self {
        ControlMessage::RouteReplyAck(message)
    }
}

impl fmt::Display for ControlMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlMessage::RouteRequest(m) => fmt::Display::fmt(m, f),
            ControlMessage::RouteReply(m) => fmt::Display::fmt(m, f),
            ControlMessage::RouteError(m) => fmt::Display::fmt(m, f),
            ControlMessage::RouteReplyAck(m) => fmt::Display::fmt(m, f),
        }
    }
}
