use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;

/// The leading type tag of every control message.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum MessageType {
    RouteRequest = 1,
    RouteReply = 2,
    RouteError = 3,
    RouteReplyAck = 4,
}

impl MessageType {
    pub const ALL: [MessageType; 4] = [
        MessageType::RouteRequest,
        MessageType::RouteReply,
        MessageType::RouteError,
        MessageType::RouteReplyAck,
    ];

    /// The tag as written on the wire.
    #[inline]
    pub fn tag(self) -> u8 {
        self.into()
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageType::RouteRequest => "RREQ",
            MessageType::RouteReply => "RREP",
            MessageType::RouteError => "RERR",
            MessageType::RouteReplyAck => "RREP_ACK",
        };
        f.write_str(name)
    }
}
