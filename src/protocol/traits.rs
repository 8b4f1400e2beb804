//! Capability pair untuk value yang bisa ditulis/dibaca lewat message stream

use super::error::WireError;
use super::stream::{MessageReader, MessageWriter};

/// Menulis `T` ke writer
pub trait Encode<T> {
    fn encode_to(&self, value: &T, writer: &mut MessageWriter<'_>) -> Result<(), WireError>;
}

/// Membaca `T` dari reader
pub trait Decode<T> {
    fn decode_from_reader(&self, reader: &mut MessageReader<'_>) -> Result<T, WireError>;
}
