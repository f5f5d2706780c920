use crate::{
    constants::TYPE_TAG_SIZE,
    message::{
        ControlMessage, DecodeError, DecodedMessage, MessageType, RouteErrorMessage,
        RouteReplyAckMessage, RouteReplyMessage, RouteRequestMessage, WireMessage,
    },
};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Decodes one message whose leading tag has already been matched.
pub type MessageDecodeFn =
    fn(&mut &[u8]) -> Result<DecodedMessage<ControlMessage>, DecodeError>;

/// The process-wide dispatch table, populated on first use.
static GLOBAL_DISPATCHER: Lazy<MessageDispatcher> = Lazy::new(MessageDispatcher::new);

/// Routes inbound bytes to the decoder registered for their type tag.
///
/// The tag-to-decoder table is filled once when the dispatcher is built and is
/// read-only afterwards, so a single instance can serve any number of threads.
/// Encoding never goes through the dispatcher; every message writes its own tag.
pub struct MessageDispatcher {
    decoders: HashMap<u8, MessageDecodeFn>,
}

impl MessageDispatcher {
    fn new() -> Self {
        let mut dispatcher = Self {
            decoders: HashMap::with_capacity(MessageType::ALL.len()),
        };

        dispatcher.register::<RouteRequestMessage>();
        dispatcher.register::<RouteReplyMessage>();
        dispatcher.register::<RouteErrorMessage>();
        dispatcher.register::<RouteReplyAckMessage>();

        dispatcher
    }

    fn register<T>(&mut self)
    where
        T: WireMessage + Into<ControlMessage>,
    {
        self.decoders
            .insert(T::MESSAGE_TYPE.tag(), decode_as::<T> as MessageDecodeFn);
    }

    /// The shared dispatcher with every known message type registered.
    pub fn global() -> &'static MessageDispatcher {
        &GLOBAL_DISPATCHER
    }

    pub fn is_registered(&self, tag: u8) -> bool {
        self.decoders.contains_key(&tag)
    }

    /// Looks up the decoder for a raw type tag.
    pub fn get(&self, tag: u8) -> Option<MessageDecodeFn> {
        self.decoders.get(&tag).copied()
    }

    /// Decodes one message from the front of `buf` and advances the slice past
    /// it. Bytes after the message are left in place.
    ///
    /// The tag is only peeked here; the selected decoder reads it again.
    pub fn decode(&self, buf: &mut &[u8]) -> Result<DecodedMessage<ControlMessage>, DecodeError> {
        let Some(&tag) = buf.first() else {
            tracing::debug!("Dropping empty control message buffer");
            return Err(DecodeError::Truncated {
                needed: TYPE_TAG_SIZE,
                available: 0,
            });
        };

        let Some(decoder) = self.get(tag) else {
            tracing::debug!(tag, "No decoder registered for control message tag");
            return Err(DecodeError::UnknownType(tag));
        };

        match decoder(buf) {
            Ok(decoded) => {
                tracing::trace!(
                    consumed = decoded.consumed,
                    "Decoded control message: {}",
                    decoded.inner
                );
                Ok(decoded)
            }
            Err(err) => {
                tracing::debug!(tag, "Failed to decode control message: {}", err);
                Err(err)
            }
        }
    }

    /// Decodes a datagram that must contain exactly one message.
    pub fn decode_datagram(&self, datagram: &[u8]) -> Result<ControlMessage, DecodeError> {
        let mut buf = datagram;
        let decoded = self.decode(&mut buf)?;

        if !buf.is_empty() {
            tracing::warn!(
                consumed = decoded.consumed,
                remaining = buf.len(),
                "Control message datagram has trailing bytes"
            );
            return Err(DecodeError::TrailingBytes {
                consumed: decoded.consumed,
                remaining: buf.len(),
            });
        }

        Ok(decoded.inner)
    }
}

fn decode_as<T>(buf: &mut &[u8]) -> Result<DecodedMessage<ControlMessage>, DecodeError>
where
    T: WireMessage + Into<ControlMessage>,
{
    T::deserialize(buf).map(|decoded| decoded.map(Into::into))
}
