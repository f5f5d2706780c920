mod address_codec;

pub use address_codec::{WireAddress, read_address, write_address};
