//! Destination Records
//!
//! One `Destination` per dataset row, immutable after load and owned by the
//! store. Optional fields resolve to documented defaults through accessors
//! rather than ad hoc lookups at call sites.

use serde::{Deserialize, Serialize};

/// Fallback description when a row carries none
pub const MISSING_DESCRIPTION: &str = "No description available for this location.";

/// A nested point of interest belonging to a destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// POI name
    pub name: String,
    /// POI type (museum, viewpoint, ...)
    #[serde(rename = "type")]
    pub poi_type: String,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Optional description; empty string when the source had none
    #[serde(default)]
    pub description: Option<String>,
}

impl PointOfInterest {
    /// Description text, defaulting to empty for missing values
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// One row of the destination dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    /// Stable row identifier
    pub id: u32,
    /// Destination name
    pub name: String,
    /// Country
    pub country: String,
    /// Canonical destination type (pre-normalized at load time)
    pub dest_type: String,
    /// Canonical budget tier (pre-normalized at load time)
    pub budget: String,
    /// Free-text travel style tags
    pub travel_style: String,
    /// Free-text suitable-for tags
    pub suitable_for: String,
    /// Best time to visit, free text
    #[serde(default)]
    pub best_time: Option<String>,
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
    /// Human description
    #[serde(default)]
    pub description: Option<String>,
    /// Nested points of interest
    #[serde(default)]
    pub pois: Vec<PointOfInterest>,
}

impl Destination {
    /// Description text, falling back to a generated line when the row has
    /// none (mirrors what a user should see instead of an empty answer)
    pub fn description(&self) -> String {
        match self.description.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => format!(
                "Information for {} in {} ({}) is available, but a detailed description is missing.",
                self.name, self.country, self.dest_type
            ),
        }
    }

    /// Build the summary record handed to the composer
    pub fn summary(&self) -> DestinationSummary {
        DestinationSummary {
            id: self.id,
            name: self.name.clone(),
            country: self.country.clone(),
            dest_type: self.dest_type.clone(),
            budget: self.budget.clone(),
            best_time: self.best_time.clone(),
            travel_style: self.travel_style.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Structured recommendation record returned by the filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationSummary {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub dest_type: String,
    pub budget: String,
    pub best_time: Option<String>,
    pub travel_style: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Destination {
        Destination {
            id: 7,
            name: "Lisbon".into(),
            country: "Portugal".into(),
            dest_type: "City".into(),
            budget: "Moderate".into(),
            travel_style: "food, historical".into(),
            suitable_for: "couples, city explorer".into(),
            best_time: Some("Spring".into()),
            latitude: 38.72,
            longitude: -9.14,
            description: None,
            pois: Vec::new(),
        }
    }

    #[test]
    fn test_missing_description_degrades() {
        let dest = row();
        let text = dest.description();
        assert!(text.contains("Lisbon"));
        assert!(text.contains("detailed description is missing"));
    }

    #[test]
    fn test_whitespace_description_degrades() {
        let mut dest = row();
        dest.description = Some("   ".into());
        assert!(dest.description().contains("missing"));
    }

    #[test]
    fn test_summary_carries_coordinates() {
        let summary = row().summary();
        assert_eq!(summary.id, 7);
        assert!((summary.latitude - 38.72).abs() < f64::EPSILON);
    }
}
