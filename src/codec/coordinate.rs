//! Coordinate Codec: `(f32, f32)` <-> `(u16, u16)`
//!
//! Layout per pasangan koordinat (4 bytes, little-endian):
//! ┌──────────────┬──────────────┐
//! │ qx (u16)     │ qy (u16)     │
//! └──────────────┴──────────────┘
//!
//! Lossy: hasil decode berada dalam satu quantization step dari input.
//! Input di luar domain di-clamp ke edge, tidak pernah ditolak.

use super::domain::Domain;
use super::quantize::{decode_axis, encode_axis};
use crate::protocol::{Decode, Encode, MessageReader, MessageWriter, WireError};

/// Ukuran wire satu pasangan koordinat
pub const WIRE_SIZE: usize = 4;

/// Ukuran count field di depan batch
const BATCH_COUNT_SIZE: usize = 2;

/// Posisi 2D
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (f32, f32) {
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

/// Stateless codec yang terikat ke satu `Domain`
///
/// `Copy` dan tidak punya mutable state, jadi bisa dibagi ke
/// banyak thread tanpa sinkronisasi.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinateCodec {
    domain: Domain,
}

impl CoordinateCodec {
    /// Membuat codec untuk domain tertentu
    #[inline(always)]
    pub const fn new(domain: Domain) -> Self {
        Self { domain }
    }

    #[inline(always)]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Encode posisi ke pasangan quantized `(qx, qy)`
    #[inline(always)]
    pub fn encode(&self, x: f32, y: f32) -> (u16, u16) {
        (encode_axis(&self.domain, x), encode_axis(&self.domain, y))
    }

    /// Decode pasangan quantized ke posisi. Total untuk semua input.
    #[inline(always)]
    pub fn decode(&self, qx: u16, qy: u16) -> (f32, f32) {
        (decode_axis(&self.domain, qx), decode_axis(&self.domain, qy))
    }

    #[inline(always)]
    pub fn to_bytes(&self, pos: Position) -> [u8; WIRE_SIZE] {
        let (qx, qy) = self.encode(pos.x, pos.y);
        let [x0, x1] = qx.to_le_bytes();
        let [y0, y1] = qy.to_le_bytes();
        [x0, x1, y0, y1]
    }

    #[inline(always)]
    pub fn from_bytes(&self, bytes: &[u8; WIRE_SIZE]) -> Position {
        let qx = u16::from_le_bytes([bytes[0], bytes[1]]);
        let qy = u16::from_le_bytes([bytes[2], bytes[3]]);
        self.decode(qx, qy).into()
    }

    /// Tulis 4 bytes ke awal `dst`. Bytes setelahnya tidak disentuh.
    #[inline(always)]
    pub fn encode_into(&self, pos: Position, dst: &mut [u8]) -> Result<(), WireError> {
        if dst.len() < WIRE_SIZE {
            return Err(WireError::BufferTooSmall {
                needed: WIRE_SIZE,
                available: dst.len(),
            });
        }
        dst[..WIRE_SIZE].copy_from_slice(&self.to_bytes(pos));
        Ok(())
    }

    /// Baca posisi dari 4 bytes pertama `src`
    #[inline(always)]
    pub fn decode_from(&self, src: &[u8]) -> Result<Position, WireError> {
        match src.get(..WIRE_SIZE) {
            Some(&[a, b, c, d]) => Ok(self.from_bytes(&[a, b, c, d])),
            _ => Err(WireError::Truncated {
                needed: WIRE_SIZE,
                available: src.len(),
            }),
        }
    }

    /// Encode batch posisi
    ///
    /// Format batch:
    /// `[count: u16][Pos1][Pos2]...[PosN]`
    ///
    /// Tidak ada yang ditulis jika batch tidak muat.
    pub fn write_batch(
        &self,
        positions: &[Position],
        writer: &mut MessageWriter<'_>,
    ) -> Result<(), WireError> {
        let count = u16::try_from(positions.len()).map_err(|_| {
            log::debug!("rejecting batch of {} positions", positions.len());
            WireError::BatchTooLarge {
                len: positions.len(),
            }
        })?;

        writer.reserve(BATCH_COUNT_SIZE + positions.len() * WIRE_SIZE)?;

        writer.write_u16(count)?;
        for pos in positions {
            self.encode_to(pos, writer)?;
        }
        Ok(())
    }

    /// Decode batch posisi (lazy)
    ///
    /// Seluruh batch harus tersedia di reader. Jika terpotong, posisi
    /// reader tidak berubah (all-or-nothing, sama seperti `write_batch`).
    pub fn read_batch<'a>(
        &self,
        reader: &mut MessageReader<'a>,
    ) -> Result<PositionIter<'a>, WireError> {
        let count = reader.peek_u16()? as usize;
        reader.require(BATCH_COUNT_SIZE + count * WIRE_SIZE)?;

        reader.read_u16()?;
        let payload = reader.read_bytes(count * WIRE_SIZE)?;
        Ok(PositionIter {
            codec: *self,
            chunks: payload.chunks_exact(WIRE_SIZE),
        })
    }
}

impl Encode<Position> for CoordinateCodec {
    #[inline(always)]
    fn encode_to(&self, value: &Position, writer: &mut MessageWriter<'_>) -> Result<(), WireError> {
        writer.reserve(WIRE_SIZE)?;
        let (qx, qy) = self.encode(value.x, value.y);
        writer.write_u16(qx)?;
        writer.write_u16(qy)
    }
}

impl Decode<Position> for CoordinateCodec {
    #[inline(always)]
    fn decode_from_reader(&self, reader: &mut MessageReader<'_>) -> Result<Position, WireError> {
        reader.require(WIRE_SIZE)?;
        let qx = reader.read_u16()?;
        let qy = reader.read_u16()?;
        Ok(self.decode(qx, qy).into())
    }
}

/// Iterator untuk batch positions
pub struct PositionIter<'a> {
    codec: CoordinateCodec,
    chunks: std::slice::ChunksExact<'a, u8>,
}

impl<'a> Iterator for PositionIter<'a> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes: &[u8; WIRE_SIZE] = self.chunks.next()?.try_into().ok()?;
        Some(self.codec.from_bytes(bytes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<'a> ExactSizeIterator for PositionIter<'a> {}
