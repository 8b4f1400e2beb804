//! Error type untuk byte-slice surface
//!
//! Codec numerik sendiri tidak pernah gagal. Error hanya muncul dari
//! bentuk buffer (terlalu pendek / terpotong) dan konfigurasi domain.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WireError {
    /// Domain bounds tidak finite atau `min >= max`
    InvalidDomain { min: f32, max: f32 },
    /// Destination buffer tidak cukup untuk menulis
    BufferTooSmall { needed: usize, available: usize },
    /// Source buffer berakhir sebelum value lengkap terbaca
    Truncated { needed: usize, available: usize },
    /// Jumlah posisi melebihi kapasitas count field (`u16`)
    BatchTooLarge { len: usize },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { min, max } => {
                write!(f, "invalid domain [{}, {}]: bounds must be finite with min < max", min, max)
            }
            Self::BufferTooSmall { needed, available } => {
                write!(f, "buffer too small: need {} bytes, {} available", needed, available)
            }
            Self::Truncated { needed, available } => {
                write!(f, "truncated input: need {} bytes, {} remaining", needed, available)
            }
            Self::BatchTooLarge { len } => {
                write!(f, "batch of {} positions exceeds {}", len, u16::MAX)
            }
        }
    }
}

impl std::error::Error for WireError {}
