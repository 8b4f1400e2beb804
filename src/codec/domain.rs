//! Domain: interval tertutup `[min, max]` untuk kedua axis
//!
//! Domain adalah bagian dari wire contract. Dua peer harus memakai
//! domain yang identik, jika tidak posisi hasil decode akan bergeser.

use crate::protocol::WireError;

/// Nilai quantized maksimum per axis
pub const QUANT_MAX: u16 = u16::MAX;

/// Interval `[min, max]` yang dipakai bersama oleh axis x dan y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    min: f32,
    max: f32,
}

impl Domain {
    /// Batas play area: `[-50.0, 50.0]`
    pub const PLAY_AREA: Domain = Domain {
        min: -50.0,
        max: 50.0,
    };

    /// Membuat domain baru
    ///
    /// Kedua bound harus finite dan `min < max`. Span `max - min` juga
    /// harus finite, dan step quantization harus normal (bukan nol atau
    /// subnormal), supaya decode tetap finite untuk semua nilai `u16`.
    pub fn new(min: f32, max: f32) -> Result<Self, WireError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(WireError::InvalidDomain { min, max });
        }
        let domain = Self { min, max };
        if !domain.span().is_finite() || !domain.step().is_normal() {
            return Err(WireError::InvalidDomain { min, max });
        }
        Ok(domain)
    }

    #[inline(always)]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[inline(always)]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Lebar interval (`max - min`)
    #[inline(always)]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Jarak antara dua nilai quantized berurutan
    #[inline(always)]
    pub fn step(&self) -> f32 {
        self.span() / QUANT_MAX as f32
    }

    #[inline(always)]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    /// Saturate `v` ke bound terdekat. `NaN` menjadi `min`.
    #[inline(always)]
    pub fn clamp(&self, v: f32) -> f32 {
        if v.is_nan() {
            return self.min;
        }
        v.clamp(self.min, self.max)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::PLAY_AREA
    }
}
