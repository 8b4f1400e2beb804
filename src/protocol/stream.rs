//! Zero-Allocation Message Writer/Reader
//!
//! Primitive integer write/read langsung ke/dari caller buffer.
//! Byte order: little-endian. Framing, retry, dan ordering adalah
//! tanggung jawab messaging layer di luar crate ini.

use super::error::WireError;

/// Writer di atas buffer milik caller
///
/// Setiap write bersifat all-or-nothing: jika value tidak muat,
/// buffer dan posisi tulis tidak berubah.
pub struct MessageWriter<'a> {
    buffer: &'a mut [u8],
    write_pos: usize,
}

impl<'a> MessageWriter<'a> {
    /// Membuat writer dari buffer
    #[inline(always)]
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            buffer,
            write_pos: 0,
        }
    }

    /// Reset writer untuk reuse
    #[inline(always)]
    pub fn reset(&mut self) {
        self.write_pos = 0;
    }

    /// Pastikan `needed` bytes masih tersedia
    #[inline(always)]
    pub fn reserve(&self, needed: usize) -> Result<(), WireError> {
        let available = self.remaining();
        if needed > available {
            log::trace!(
                "message writer full: need {} bytes, {} available",
                needed,
                available
            );
            return Err(WireError::BufferTooSmall { needed, available });
        }
        Ok(())
    }

    #[inline(always)]
    fn put<const N: usize>(&mut self, bytes: [u8; N]) -> Result<(), WireError> {
        self.reserve(N)?;
        self.buffer[self.write_pos..self.write_pos + N].copy_from_slice(&bytes);
        self.write_pos += N;
        Ok(())
    }

    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) -> Result<(), WireError> {
        self.put([value])
    }

    #[inline(always)]
    pub fn write_u16(&mut self, value: u16) -> Result<(), WireError> {
        self.put(value.to_le_bytes())
    }

    #[inline(always)]
    pub fn write_u32(&mut self, value: u32) -> Result<(), WireError> {
        self.put(value.to_le_bytes())
    }

    #[inline(always)]
    pub fn write_f32(&mut self, value: f32) -> Result<(), WireError> {
        self.put(value.to_le_bytes())
    }

    /// Bytes yang sudah ditulis
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.write_pos]
    }

    /// Posisi tulis saat ini
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.write_pos
    }

    /// Available space in buffer
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.write_pos
    }
}

/// Zero-copy reader
pub struct MessageReader<'a> {
    buffer: &'a [u8],
    read_pos: usize,
}

impl<'a> MessageReader<'a> {
    /// Membuat reader dari buffer
    #[inline(always)]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            read_pos: 0,
        }
    }

    /// Pastikan `needed` bytes masih bisa dibaca
    #[inline(always)]
    pub fn require(&self, needed: usize) -> Result<(), WireError> {
        let available = self.remaining();
        if needed > available {
            log::trace!(
                "message reader truncated: need {} bytes, {} remaining",
                needed,
                available
            );
            return Err(WireError::Truncated { needed, available });
        }
        Ok(())
    }

    #[inline(always)]
    fn take<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        self.require(N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.buffer[self.read_pos..self.read_pos + N]);
        self.read_pos += N;
        Ok(bytes)
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let [b] = self.take::<1>()?;
        Ok(b)
    }

    #[inline(always)]
    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        self.take().map(u16::from_le_bytes)
    }

    /// Baca `u16` berikutnya tanpa memajukan posisi
    #[inline(always)]
    pub fn peek_u16(&self) -> Result<u16, WireError> {
        self.require(2)?;
        let pos = self.read_pos;
        Ok(u16::from_le_bytes([self.buffer[pos], self.buffer[pos + 1]]))
    }

    #[inline(always)]
    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        self.take().map(u32::from_le_bytes)
    }

    #[inline(always)]
    pub fn read_f32(&mut self) -> Result<f32, WireError> {
        self.take().map(f32::from_le_bytes)
    }

    /// Ambil `len` bytes berikutnya tanpa copy (zero-copy)
    #[inline(always)]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        self.require(len)?;
        let bytes = &self.buffer[self.read_pos..self.read_pos + len];
        self.read_pos += len;
        Ok(bytes)
    }

    /// Posisi baca saat ini
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.read_pos
    }

    /// Remaining bytes
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.read_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_primitives() {
        let mut buf = [0u8; 16];
        let mut writer = MessageWriter::new(&mut buf);

        writer.write_u8(7).unwrap();
        writer.write_u16(0xBEEF).unwrap();
        writer.write_u32(0xDEAD_BEEF).unwrap();
        writer.write_f32(-1.5).unwrap();
        assert_eq!(writer.position(), 11);

        let mut reader = MessageReader::new(writer.as_bytes());
        assert_eq!(reader.read_u8().unwrap(), 7);
        assert_eq!(reader.read_u16().unwrap(), 0xBEEF);
        assert_eq!(reader.read_u32().unwrap(), 0xDEAD_BEEF);
        assert_eq!(reader.read_f32().unwrap(), -1.5);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_little_endian_layout() {
        let mut buf = [0u8; 2];
        let mut writer = MessageWriter::new(&mut buf);
        writer.write_u16(0x1234).unwrap();
        assert_eq!(buf, [0x34, 0x12]);
    }

    #[test]
    fn test_write_is_all_or_nothing() {
        let mut buf = [0u8; 3];
        let mut writer = MessageWriter::new(&mut buf);

        writer.write_u16(1).unwrap();
        let err = writer.write_u16(2).unwrap_err();
        assert_eq!(
            err,
            WireError::BufferTooSmall {
                needed: 2,
                available: 1
            }
        );
        assert_eq!(writer.position(), 2);

        writer.write_u8(9).unwrap();
        assert_eq!(writer.as_bytes(), &[1, 0, 9]);
    }

    #[test]
    fn test_read_truncated() {
        let data = [0xAB];
        let mut reader = MessageReader::new(&data);

        let err = reader.read_u16().unwrap_err();
        assert_eq!(
            err,
            WireError::Truncated {
                needed: 2,
                available: 1
            }
        );
        // Posisi tidak bergeser setelah read gagal
        assert_eq!(reader.read_u8().unwrap(), 0xAB);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let data = [0x34, 0x12, 0xFF];
        let mut reader = MessageReader::new(&data);

        assert_eq!(reader.peek_u16().unwrap(), 0x1234);
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);

        let err = reader.peek_u16().unwrap_err();
        assert_eq!(
            err,
            WireError::Truncated {
                needed: 2,
                available: 1
            }
        );
        assert_eq!(reader.position(), 2);
    }

    #[test]
    fn test_writer_reuse() {
        let mut buf = [0u8; 4];
        let mut writer = MessageWriter::new(&mut buf);

        writer.write_u32(1).unwrap();
        assert_eq!(writer.remaining(), 0);
        writer.reset();
        writer.write_u16(2).unwrap();

        assert_eq!(writer.as_bytes(), &[2, 0]);
        assert_eq!(writer.remaining(), 2);
    }
}
