// src/utils.rs

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;
const SIZE_DECIMAL_PLACES: i32 = 10;

/// Converts a byte count to megabytes, rounded to 10 decimal places.
#[must_use]
pub fn bytes_to_megabytes(bytes: u64) -> f64 {
    round_to_places(bytes as f64 / BYTES_PER_MEGABYTE, SIZE_DECIMAL_PLACES)
}

#[must_use]
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
