//! Per-axis transforms: reverse-lerp, quantize, dequantize, lerp
//!
//! Rounding mode: round-half-up. `t * 65535` tidak pernah negatif,
//! jadi `f32::round` (half-away-from-zero) identik dengan half-up.

use super::domain::{Domain, QUANT_MAX};

/// Posisi fraksional `v` di dalam domain, di-clamp ke `[0, 1]`
///
/// `NaN` menghasilkan `0.0` (bound minimum), `±inf` saturate ke edge.
#[inline(always)]
pub fn reverse_lerp(domain: &Domain, v: f32) -> f32 {
    let t = (v - domain.min()) / domain.span();
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}

/// Inverse dari `reverse_lerp` untuk `t` di `[0, 1]`
#[inline(always)]
pub fn lerp(domain: &Domain, t: f32) -> f32 {
    domain.min() + t * domain.span()
}

/// `t` di `[0, 1]` ke `[0, 65535]`
#[inline(always)]
pub fn quantize(t: f32) -> u16 {
    (t * QUANT_MAX as f32).round() as u16
}

#[inline(always)]
pub fn dequantize(q: u16) -> f32 {
    q as f32 / QUANT_MAX as f32
}

/// Satu axis: value ke quantized
#[inline(always)]
pub fn encode_axis(domain: &Domain, v: f32) -> u16 {
    quantize(reverse_lerp(domain, v))
}

/// Satu axis: quantized ke value
#[inline(always)]
pub fn decode_axis(domain: &Domain, q: u16) -> f32 {
    lerp(domain, dequantize(q))
}
