use bytes::Buf;
use thiserror::Error;

/// Recoverable failures while decoding a control message.
///
/// The caller is expected to drop the offending packet. A decoder that is handed
/// a buffer tagged for a different message type does not report an error; it
/// panics, since only a dispatch bug can cause that.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer ended before the message did.
    #[error("truncated message: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    /// The number of bytes read differs from the size the message declares.
    ///
    /// Only reachable through a decoder whose field reads disagree with its
    /// own `serialized_size`; well-formed and truncated input never yield it.
    #[error("consumed {consumed} bytes but message declares {declared}")]
    SizeMismatch { declared: usize, consumed: usize },

    /// No decoder is registered for this leading type tag.
    #[error("unrecognized message type tag: {0}")]
    UnknownType(u8),

    /// A datagram carried more bytes than its single message.
    #[error("{remaining} trailing bytes after {consumed}-byte message")]
    TrailingBytes { consumed: usize, remaining: usize },
}

impl DecodeError {
    /// Fails with [`DecodeError::Truncated`] unless `needed` bytes remain.
    #[inline]
    pub(crate) fn ensure_remaining<B: Buf>(buf: &B, needed: usize) -> Result<(), DecodeError> {
        let available = buf.remaining();

        if available < needed {
            return Err(DecodeError::Truncated { needed, available });
        }

        Ok(())
    }

    /// Compares the cursor distance travelled by a decoder against the size
    /// the decoded message reports for itself.
    ///
    /// Decoders check the full size up front and read a fixed field sequence,
    /// so this only trips if a decoder's reads and its `serialized_size`
    /// drift apart.
    #[inline]
    pub(crate) fn ensure_consumed(consumed: usize, declared: usize) -> Result<(), DecodeError> {
        if consumed != declared {
            tracing::warn!(consumed, declared, "Decoded length disagrees with message size");
            return Err(DecodeError::SizeMismatch { declared, consumed });
        }

        Ok(())
    }
}
