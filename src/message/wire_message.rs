use crate::message::{DecodeError, MessageType};
use bytes::{Buf, BufMut, Bytes, BytesMut};

/// A message decoded from the wire, along with the number of bytes it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage<T> {
    pub inner: T,
    pub consumed: usize,
}

impl<T> DecodedMessage<T> {
    /// Converts the decoded message while keeping the consumed length.
    pub fn map<U, F>(self, f: F) -> DecodedMessage<U>
    where
        F: FnOnce(T) -> U,
    {
        DecodedMessage {
            inner: f(self.inner),
            consumed: self.consumed,
        }
    }
}

/// Encoding and decoding of a single control message type.
///
/// `serialize` writes the type tag itself, so the encoded bytes are a complete
/// message ready to be placed in a datagram. Buffers handed to `serialize` must
/// have at least `serialized_size()` bytes of spare capacity; growable buffers
/// such as [`BytesMut`] take care of that on their own.
pub trait WireMessage: Sized {
    const MESSAGE_TYPE: MessageType;

    /// Number of bytes `serialize` will write, including the type tag.
    fn serialized_size(&self) -> usize;

    /// Writes the message at the cursor of `buf`, advancing it by exactly
    /// `serialized_size()` bytes.
    fn serialize<B: BufMut>(&self, buf: &mut B);

    /// Reads one message from the cursor of `buf`.
    ///
    /// # Panics
    ///
    /// If the leading byte is not `Self::MESSAGE_TYPE`. Tag selection is the
    /// dispatcher's job; a foreign tag here means the caller routed wrongly.
    fn deserialize<B: Buf>(buf: &mut B) -> Result<DecodedMessage<Self>, DecodeError>;

    /// Encodes the message into a freshly allocated buffer of exactly
    /// `serialized_size()` bytes.
    fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.serialized_size());
        self.serialize(&mut buf);
        buf.freeze()
    }
}

/// Consumes the leading type tag and asserts it belongs to `expected`.
///
/// The caller must already have checked that at least one byte remains.
#[inline]
pub(crate) fn read_type_tag<B: Buf>(buf: &mut B, expected: MessageType) {
    let tag = buf.get_u8();

    assert_eq!(
        tag,
        expected.tag(),
        "{expected} decoder was handed a buffer tagged {tag}"
    );
}
