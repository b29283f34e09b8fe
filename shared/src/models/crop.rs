//! Crop catalogue

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Crops offered by the advisory form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crop {
    Wheat,
    Rice,
    Maize,
    Sugarcane,
    Potato,
    /// Any selection outside the catalogue; still receives generic advisories
    Other,
}

/// Catalogued crops in form display order
pub const CROP_CATALOGUE: &[Crop] = &[
    Crop::Wheat,
    Crop::Rice,
    Crop::Maize,
    Crop::Sugarcane,
    Crop::Potato,
];

impl Crop {
    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Rice => "Rice",
            Crop::Maize => "Maize",
            Crop::Sugarcane => "Sugarcane",
            Crop::Potato => "Potato",
            Crop::Other => "Other",
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a crop selection; unrecognized input falls back to `Other`
pub fn crop_from_str(s: &str) -> Crop {
    match s.trim().to_lowercase().as_str() {
        "wheat" => Crop::Wheat,
        "rice" => Crop::Rice,
        "maize" => Crop::Maize,
        "sugarcane" => Crop::Sugarcane,
        "potato" => Crop::Potato,
        _ => Crop::Other,
    }
}

// Manual serde impls: unknown crop strings must fall back to `Other` rather
// than fail deserialization.
impl Serialize for Crop {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Crop {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(crop_from_str(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_from_str_catalogue() {
        assert_eq!(crop_from_str("Wheat"), Crop::Wheat);
        assert_eq!(crop_from_str("rice"), Crop::Rice);
        assert_eq!(crop_from_str("  MAIZE "), Crop::Maize);
        assert_eq!(crop_from_str("Sugarcane"), Crop::Sugarcane);
        assert_eq!(crop_from_str("potato"), Crop::Potato);
    }

    #[test]
    fn test_crop_from_str_fallback() {
        assert_eq!(crop_from_str("Barley"), Crop::Other);
        assert_eq!(crop_from_str(""), Crop::Other);
    }

    #[test]
    fn test_crop_serde_round_trip() {
        let json = serde_json::to_string(&Crop::Sugarcane).unwrap();
        assert_eq!(json, "\"Sugarcane\"");

        let crop: Crop = serde_json::from_str("\"wheat\"").unwrap();
        assert_eq!(crop, Crop::Wheat);

        let unknown: Crop = serde_json::from_str("\"cassava\"").unwrap();
        assert_eq!(unknown, Crop::Other);
    }

    #[test]
    fn test_catalogue_excludes_other() {
        assert_eq!(CROP_CATALOGUE.len(), 5);
        assert!(!CROP_CATALOGUE.contains(&Crop::Other));
    }
}
