//! Numeric conversion helpers centralizing safe display casts.

use num_traits::cast::cast;

/// Floor a f64 and clamp it to the i32 range, returning 0 for NaN values.
#[must_use]
pub fn floor_f64_to_i32(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    let min = cast::<i32, f64>(i32::MIN).unwrap_or(f64::MIN);
    let max = cast::<i32, f64>(i32::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).floor();
    cast::<f64, i32>(clamped).unwrap_or(0)
}

/// Floor a f32 and clamp it to the i32 range, returning 0 for NaN values.
#[must_use]
pub fn floor_f32_to_i32(value: f32) -> i32 {
    floor_f64_to_i32(f64::from(value))
}

/// Floor a percentage for display, clamped to 0..=100.
#[must_use]
pub fn percent_display(value: f32) -> i32 {
    floor_f32_to_i32(value).clamp(0, 100)
}
