use crate::{
    constants::{
        RERR_ENTRY_SIZE, RERR_HEADER_SIZE, RERR_MAX_DESTINATIONS, RERR_NAMED_FLAGS_MASK,
        RERR_NO_DELETE_BIT,
    },
    message::{
        DecodeError, DecodedMessage, MessageType, WireMessage, wire_message::read_type_tag,
    },
    utils::{read_address, write_address},
};
use bytes::{Buf, BufMut};
use std::{fmt, net::Ipv4Addr};

/// A destination that became unreachable, with the sequence number it was last
/// known under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnreachableDestination {
    pub address: Ipv4Addr,
    pub sequence_number: u32,
}

/// Route-Error (RERR).
///
/// Lists destinations that are no longer reachable through the sender. Entries
/// keep the order in which they were added or decoded. Adding never lists an
/// address twice, while decoding keeps the list exactly as it was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RouteErrorMessage {
    no_delete: bool,

    /// Flag bits without a named meaning, preserved verbatim.
    unused_flags: u8,

    /// Opaque byte, preserved verbatim.
    pub reserved: u8,

    destinations: Vec<UnreachableDestination>,
}

impl RouteErrorMessage {
    /// A node repaired the link locally; upstream nodes should keep the route.
    pub fn set_no_delete(&mut self, enabled: bool) {
        self.no_delete = enabled;
    }

    pub fn no_delete(&self) -> bool {
        self.no_delete
    }

    /// Adds an unreachable destination.
    ///
    /// Returns `true` if the address is listed afterwards. An address that is
    /// already listed keeps its original sequence number. Returns `false` once
    /// the list holds as many entries as the one-byte count can express.
    pub fn add_unreachable_destination(&mut self, address: Ipv4Addr, sequence_number: u32) -> bool {
        if self.destinations.iter().any(|d| d.address == address) {
            return true;
        }

        if self.destinations.len() >= RERR_MAX_DESTINATIONS {
            return false;
        }

        self.destinations.push(UnreachableDestination {
            address,
            sequence_number,
        });

        true
    }

    /// Removes and returns the first listed destination.
    pub fn remove_unreachable_destination(&mut self) -> Option<UnreachableDestination> {
        if self.destinations.is_empty() {
            return None;
        }

        Some(self.destinations.remove(0))
    }

    pub fn unreachable_destinations(&self) -> &[UnreachableDestination] {
        &self.destinations
    }

    pub fn destination_count(&self) -> u8 {
        debug_assert!(self.destinations.len() <= RERR_MAX_DESTINATIONS);

        // Bounded by `add_unreachable_destination` and the decoder
        u8::try_from(self.destinations.len()).unwrap_or(u8::MAX)
    }

    /// Drops every listed destination and resets the flags.
    pub fn clear(&mut self) {
        self.no_delete = false;
        self.unused_flags = 0;
        self.reserved = 0;
        self.destinations.clear();
    }

    fn flags_byte(&self) -> u8 {
        let mut flags = self.unused_flags;

        if self.no_delete {
            flags |= RERR_NO_DELETE_BIT;
        }

        flags
    }

    fn apply_flags_byte(&mut self, flags: u8) {
        self.no_delete = flags & RERR_NO_DELETE_BIT != 0;
        self.unused_flags = flags & !RERR_NAMED_FLAGS_MASK;
    }
}

impl WireMessage for RouteErrorMessage {
    const MESSAGE_TYPE: MessageType = MessageType::RouteError;

    fn serialized_size(&self) -> usize {
        RERR_HEADER_SIZE + self.destinations.len() * RERR_ENTRY_SIZE
    }

    fn serialize<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(Self::MESSAGE_TYPE.tag());
        buf.put_u8(self.flags_byte());
        buf.put_u8(self.reserved);
        buf.put_u8(self.destination_count());

        for destination in &self.destinations {
            write_address(buf, destination.address);
            buf.put_u32(destination.sequence_number);
        }
    }

    fn deserialize<B: Buf>(buf: &mut B) -> Result<DecodedMessage<Self>, DecodeError> {
        let start = buf.remaining();

        DecodeError::ensure_remaining(buf, RERR_HEADER_SIZE)?;

        read_type_tag(buf, Self::MESSAGE_TYPE);

        let mut message = Self::default();
        message.apply_flags_byte(buf.get_u8());
        message.reserved = buf.get_u8();

        // An empty list is what `default()` and `clear()` encode to
        let count = usize::from(buf.get_u8());

        let list_size = count * RERR_ENTRY_SIZE;
        if buf.remaining() < list_size {
            return Err(DecodeError::Truncated {
                needed: RERR_HEADER_SIZE + list_size,
                available: start,
            });
        }

        message.destinations.reserve_exact(count);
        for _ in 0..count {
            let address = read_address(buf)?;
            let sequence_number = buf.get_u32();

            // Entries are kept as sent, even if an address repeats
            message.destinations.push(UnreachableDestination {
                address,
                sequence_number,
            });
        }

        let consumed = start - buf.remaining();
        DecodeError::ensure_consumed(consumed, message.serialized_size())?;

        Ok(DecodedMessage {
            inner: message,
            consumed,
        })
    }
}

impl fmt::Display for RouteErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RERR count={}", self.destinations.len())?;

        if self.no_delete {
            f.write_str(" no_delete")?;
        }

        for destination in &self.destinations {
            write!(
                f,
                " {}(seq {})",
                destination.address, destination.sequence_number
            )?;
        }

        Ok(())
    }
}
