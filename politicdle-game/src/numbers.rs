//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Convert usize to f64 while allowing precision loss in a single location.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Floor a f64 into an index bounded by `len`, returning 0 for non-finite
/// or non-positive values.
#[must_use]
pub fn floor_index(value: f64, len: usize) -> usize {
    if len == 0 || !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let floored = cast::<f64, usize>(value.floor()).unwrap_or(0);
    floored.min(len - 1)
}

/// Round a f64 and clamp it to the u32 range, returning 0 for non-finite values.
#[must_use]
pub fn round_f64_to_u32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let max = cast::<u32, f64>(u32::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(0.0, max).round();
    cast::<f64, u32>(clamped).unwrap_or(0)
}

/// Floor a f64 and clamp it to the u8 range, returning 0 for non-finite values.
#[must_use]
pub fn floor_f64_to_u8(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    let max = cast::<u8, f64>(u8::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(0.0, max).floor();
    cast::<f64, u8>(clamped).unwrap_or(0)
}

/// Round a f64 and clamp it to the u8 range, returning 0 for non-finite values.
#[must_use]
pub fn round_f64_to_u8(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    let max = cast::<u8, f64>(u8::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(0.0, max).round();
    cast::<f64, u8>(clamped).unwrap_or(0)
}
