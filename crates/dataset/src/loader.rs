//! Dataset Loading
//!
//! Reads the destinations and points-of-interest CSV files, validates the
//! required headers, normalizes raw type/budget labels through the config
//! alias maps, and joins POI rows onto their parent destinations. Everything
//! downstream of here assumes validated, normalized rows.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use travel_agent_config::SynonymConfig;
use travel_agent_core::{Destination, PointOfInterest};

use crate::store::DestinationStore;

/// Dataset load errors
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("locations file not found: {0}")]
    LocationsFileNotFound(String),
    #[error("POIs file not found: {0}")]
    PoisFileNotFound(String),
    #[error("missing required columns in locations CSV: {0:?}")]
    MissingColumns(Vec<String>),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

const REQUIRED_LOCATION_COLUMNS: &[&str] = &[
    "LocationID",
    "LocationName",
    "Type",
    "Budget",
    "Travel Style",
    "Suitable For",
    "Country",
    "Best Time to Visit",
    "Latitude",
    "Longitude",
    "Description",
];

const REQUIRED_POI_COLUMNS: &[&str] = &["ParentLocationID", "POIName", "POIType", "POILat", "POILng"];

#[derive(Debug, Deserialize)]
struct LocationRow {
    #[serde(rename = "LocationID")]
    id: u32,
    #[serde(rename = "LocationName")]
    name: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Type")]
    dest_type: String,
    #[serde(rename = "Budget")]
    budget: String,
    #[serde(rename = "Travel Style")]
    travel_style: String,
    #[serde(rename = "Suitable For")]
    suitable_for: String,
    #[serde(rename = "Best Time to Visit")]
    best_time: String,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Debug, Deserialize)]
struct PoiRow {
    #[serde(rename = "ParentLocationID")]
    parent_id: u32,
    #[serde(rename = "POIName")]
    name: String,
    #[serde(rename = "POIType")]
    poi_type: String,
    #[serde(rename = "POILat")]
    lat: f64,
    #[serde(rename = "POILng")]
    lng: f64,
    #[serde(rename = "POIDescription", default)]
    description: Option<String>,
}

/// Load the store from the two CSV files
///
/// The POI file is optional: an absent or malformed file degrades to empty
/// POI lists with a warning, never a failed load.
pub fn load_store<P: AsRef<Path>>(
    locations_path: P,
    pois_path: P,
    synonyms: &SynonymConfig,
) -> Result<DestinationStore, DatasetError> {
    let locations_path = locations_path.as_ref();
    if !locations_path.exists() {
        return Err(DatasetError::LocationsFileNotFound(
            locations_path.display().to_string(),
        ));
    }

    let mut reader = csv::Reader::from_path(locations_path)?;
    validate_headers(reader.headers()?, REQUIRED_LOCATION_COLUMNS)?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<LocationRow>() {
        let row = record?;
        rows.push(Destination {
            id: row.id,
            name: row.name,
            country: row.country,
            dest_type: synonyms.normalize_type(&row.dest_type),
            budget: synonyms.normalize_budget(&row.budget),
            travel_style: row.travel_style,
            suitable_for: row.suitable_for,
            best_time: non_empty(row.best_time),
            latitude: row.latitude,
            longitude: row.longitude,
            description: non_empty(row.description),
            pois: Vec::new(),
        });
    }
    tracing::info!(rows = rows.len(), path = %locations_path.display(), "loaded destinations");

    match load_pois(pois_path.as_ref()) {
        Ok(mut by_parent) => {
            for row in &mut rows {
                if let Some(pois) = by_parent.remove(&row.id) {
                    row.pois = pois;
                }
            }
        }
        Err(e) => {
            tracing::warn!("POI file unusable ({e}); destinations carry empty POI lists");
        }
    }

    Ok(DestinationStore::from_rows(rows))
}

fn load_pois(path: &Path) -> Result<HashMap<u32, Vec<PointOfInterest>>, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::PoisFileNotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    validate_headers(reader.headers()?, REQUIRED_POI_COLUMNS)?;

    let mut by_parent: HashMap<u32, Vec<PointOfInterest>> = HashMap::new();
    let mut count = 0usize;
    for record in reader.deserialize::<PoiRow>() {
        let row = record?;
        by_parent.entry(row.parent_id).or_default().push(PointOfInterest {
            name: row.name,
            poi_type: row.poi_type,
            lat: row.lat,
            lng: row.lng,
            description: row.description.and_then(non_empty),
        });
        count += 1;
    }
    tracing::info!(rows = count, path = %path.display(), "loaded points of interest");

    Ok(by_parent)
}

fn validate_headers(headers: &csv::StringRecord, required: &[&str]) -> Result<(), DatasetError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DatasetError::MissingColumns(missing))
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LOCATIONS_HEADER: &str = "LocationID,LocationName,Country,Type,Budget,Travel Style,Suitable For,Best Time to Visit,Latitude,Longitude,Description";

    fn write_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_load_normalizes_labels() {
        let locations = write_file(&format!(
            "{LOCATIONS_HEADER}\n1,Santorini,Greece,island_group,Mid-range to Luxury,\"beach, romantic\",couples,Summer,36.39,25.46,Volcanic island\n"
        ));

        let store = load_store(
            locations.path(),
            Path::new("/nonexistent/pois.csv"),
            &SynonymConfig::default(),
        )
        .unwrap();

        let row = store.find_by_name("Santorini").unwrap();
        assert_eq!(row.dest_type, "Island");
        assert_eq!(row.budget, "Moderate");
        assert!(row.pois.is_empty());
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let locations = write_file("LocationID,LocationName,Country\n1,Rome,Italy\n");
        let err = load_store(
            locations.path(),
            Path::new("/nonexistent/pois.csv"),
            &SynonymConfig::default(),
        )
        .unwrap_err();

        match err {
            DatasetError::MissingColumns(cols) => {
                assert!(cols.contains(&"Budget".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_locations_file() {
        let err = load_store(
            Path::new("/nonexistent/destinations.csv"),
            Path::new("/nonexistent/pois.csv"),
            &SynonymConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::LocationsFileNotFound(_)));
    }

    #[test]
    fn test_pois_join_and_optional_description() {
        let locations = write_file(&format!(
            "{LOCATIONS_HEADER}\n1,Rome,Italy,city,Mid-range,historical,couples,Spring,41.9,12.5,The eternal city\n"
        ));
        let pois = write_file(
            "ParentLocationID,POIName,POIType,POILat,POILng,POIDescription\n1,Colosseum,landmark,41.89,12.49,Ancient arena\n1,Trevi Fountain,landmark,41.90,12.48,\n2,Orphan POI,landmark,0.0,0.0,\n",
        );

        let store = load_store(locations.path(), pois.path(), &SynonymConfig::default()).unwrap();
        let rome = store.find_by_name("Rome").unwrap();
        assert_eq!(rome.pois.len(), 2);
        assert_eq!(rome.pois[0].description(), "Ancient arena");
        assert_eq!(rome.pois[1].description(), "");
    }

    #[test]
    fn test_empty_description_becomes_default_at_read() {
        let locations = write_file(&format!(
            "{LOCATIONS_HEADER}\n1,Rome,Italy,city,Mid-range,historical,couples,Spring,41.9,12.5,\n"
        ));

        let store = load_store(
            locations.path(),
            Path::new("/nonexistent/pois.csv"),
            &SynonymConfig::default(),
        )
        .unwrap();
        let rome = store.find_by_name("Rome").unwrap();
        assert!(rome.description().contains("detailed description is missing"));
    }
}
