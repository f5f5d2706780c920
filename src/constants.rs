/// Size in bytes of the leading type tag shared by every control message.
pub const TYPE_TAG_SIZE: usize = 1;

/// Width in bytes of an IPv4 address on the wire.
pub const IPV4_ADDRESS_SIZE: usize = 4;

/// Width in bytes of an IPv6 address on the wire.
pub const IPV6_ADDRESS_SIZE: usize = 16;

/// Total encoded size of a Route-Request, including its type tag.
///
/// tag + flags + reserved + hop count + broadcast id
/// + destination + destination seq + origin + origin seq
pub const RREQ_SERIALIZED_SIZE: usize = 4 + 4 + IPV4_ADDRESS_SIZE + 4 + IPV4_ADDRESS_SIZE + 4; // 24

/// Total encoded size of a Route-Reply, including its type tag.
///
/// tag + flags + prefix size + hop count
/// + destination + destination seq + origin + lifetime
pub const RREP_SERIALIZED_SIZE: usize = 4 + IPV4_ADDRESS_SIZE + 4 + IPV4_ADDRESS_SIZE + 4; // 20

/// Fixed prefix of a Route-Error before its destination list.
pub const RERR_HEADER_SIZE: usize = 4;

/// Size of a single (address, sequence number) pair in a Route-Error.
pub const RERR_ENTRY_SIZE: usize = IPV4_ADDRESS_SIZE + 4;

/// A Route-Error counts its destinations in a single byte.
pub const RERR_MAX_DESTINATIONS: usize = u8::MAX as usize;

/// Total encoded size of a Route-Reply acknowledgement.
pub const RREP_ACK_SERIALIZED_SIZE: usize = 2;

// RREQ flag bit positions
pub const RREQ_GRATUITOUS_REPLY_BIT: u8 = 1 << 2;
pub const RREQ_DESTINATION_ONLY_BIT: u8 = 1 << 3;
pub const RREQ_UNKNOWN_SEQUENCE_NUMBER_BIT: u8 = 1 << 4;

/// Every RREQ flag bit that carries a named meaning.
pub const RREQ_NAMED_FLAGS_MASK: u8 =
    RREQ_GRATUITOUS_REPLY_BIT | RREQ_DESTINATION_ONLY_BIT | RREQ_UNKNOWN_SEQUENCE_NUMBER_BIT;

// RREP flag bit positions
pub const RREP_REPAIR_BIT: u8 = 1 << 7;
pub const RREP_ACK_REQUIRED_BIT: u8 = 1 << 6;
pub const RREP_NAMED_FLAGS_MASK: u8 = RREP_REPAIR_BIT | RREP_ACK_REQUIRED_BIT;

// RERR flag bit positions
pub const RERR_NO_DELETE_BIT: u8 = 1 << 7;
pub const RERR_NAMED_FLAGS_MASK: u8 = RERR_NO_DELETE_BIT;
