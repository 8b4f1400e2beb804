//! Coordwire - Bounded-Range 2D Coordinate Codec
//!
//! Arsitektur:
//! - Lossy: posisi `f32` di-quantize ke `u16` per axis
//! - Fixed-width: 4 bytes per pasangan koordinat
//! - No-Allocation: Encode/decode langsung ke/dari caller buffer
//! - Stateless: aman dipanggil dari thread manapun tanpa sinkronisasi

pub mod codec;
pub mod logging;
pub mod protocol;

pub use codec::{decode, encode, CoordinateCodec, Domain, Position, PositionIter, WIRE_SIZE};
pub use protocol::{Decode, Encode, MessageReader, MessageWriter, WireError};
