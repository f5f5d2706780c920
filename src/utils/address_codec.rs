use crate::{
    constants::{IPV4_ADDRESS_SIZE, IPV6_ADDRESS_SIZE},
    message::DecodeError,
};
use bytes::{Buf, BufMut};
use std::net::{Ipv4Addr, Ipv6Addr};

/// A network address with a fixed-width binary representation.
///
/// Addresses are always written in the network's canonical byte order, which
/// for IP addresses is the order of their octets. Implementations know nothing
/// about the messages that carry them.
pub trait WireAddress: Sized + Copy {
    /// Number of bytes the address occupies on the wire.
    const WIDTH: usize;

    /// Appends the address at the write cursor.
    fn write_to<B: BufMut>(&self, buf: &mut B);

    /// Consumes exactly [`Self::WIDTH`] bytes and rebuilds the address.
    ///
    /// Fails with [`DecodeError::Truncated`] if fewer bytes remain, in which
    /// case nothing is consumed.
    fn read_from<B: Buf>(buf: &mut B) -> Result<Self, DecodeError>;
}

impl WireAddress for Ipv4Addr {
    const WIDTH: usize = IPV4_ADDRESS_SIZE;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.octets());
    }

    fn read_from<B: Buf>(buf: &mut B) -> Result<Self, DecodeError> {
        DecodeError::ensure_remaining(buf, Self::WIDTH)?;

        let mut octets = [0u8; IPV4_ADDRESS_SIZE];
        buf.copy_to_slice(&mut octets);

        Ok(Ipv4Addr::from(octets))
    }
}

impl WireAddress for Ipv6Addr {
    const WIDTH: usize = IPV6_ADDRESS_SIZE;

    fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.octets());
    }

    fn read_from<B: Buf>(buf: &mut B) -> Result<Self, DecodeError> {
        DecodeError::ensure_remaining(buf, Self::WIDTH)?;

        let mut octets = [0u8; IPV6_ADDRESS_SIZE];
        buf.copy_to_slice(&mut octets);

        Ok(Ipv6Addr::from(octets))
    }
}

/// Writes `address` at the cursor of `buf`.
#[inline]
pub fn write_address<A: WireAddress, B: BufMut>(buf: &mut B, address: A) {
    address.write_to(buf);
}

/// Reads one address of type `A` from the cursor of `buf`.
#[inline]
pub fn read_address<A: WireAddress, B: Buf>(buf: &mut B) -> Result<A, DecodeError> {
    A::read_from(buf)
}
