//! Codec module: bounded-range 2D coordinate quantization
//!
//! Prinsip desain:
//! - Domain terikat ke codec saat konstruksi, bukan konstanta implisit
//! - Pure function: tidak ada state, tidak ada lock, tidak ada alokasi
//! - Total: setiap `f32` dan setiap `u16` punya hasil yang terdefinisi

mod coordinate;
mod domain;
mod quantize;

pub use coordinate::{CoordinateCodec, Position, PositionIter, WIRE_SIZE};
pub use domain::{Domain, QUANT_MAX};
pub use quantize::{decode_axis, dequantize, encode_axis, lerp, quantize, reverse_lerp};

const PLAY_AREA_CODEC: CoordinateCodec = CoordinateCodec::new(Domain::PLAY_AREA);

/// Encode dengan domain play area `[-50, 50]`
#[inline(always)]
pub fn encode(x: f32, y: f32) -> (u16, u16) {
    PLAY_AREA_CODEC.encode(x, y)
}

/// Decode dengan domain play area `[-50, 50]`
#[inline(always)]
pub fn decode(qx: u16, qy: u16) -> (f32, f32) {
    PLAY_AREA_CODEC.decode(qx, qy)
}
