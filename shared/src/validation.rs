//! Validation utilities for Krishi Smart Advisory

use crate::models::{crop_from_str, Crop};

/// Maximum accepted length for a user-supplied location string
pub const MAX_LOCATION_LEN: usize = 100;

/// Validate a user-supplied location string (length only; locations are
/// passed to the weather provider verbatim, never geocoded)
pub fn validate_location(location: &str) -> Result<(), &'static str> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err("Location is required");
    }
    if trimmed.len() > MAX_LOCATION_LEN {
        return Err("Location must be at most 100 characters");
    }
    Ok(())
}

/// Validate a manually entered percentage reading
pub fn validate_percent(value: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Whether the selection is one of the catalogued crops
pub fn is_catalogued_crop(input: &str) -> bool {
    crop_from_str(input) != Crop::Other
}
