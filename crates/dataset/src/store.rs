//! Destination Store
//!
//! Read-only container for the loaded dataset. Safe to share across
//! concurrent sessions without locking; rows never change after load.

use travel_agent_core::Destination;

/// The loaded destination dataset
#[derive(Debug, Default)]
pub struct DestinationStore {
    rows: Vec<Destination>,
}

impl DestinationStore {
    /// Build a store from already-normalized rows (used by the loader and
    /// by tests)
    pub fn from_rows(rows: Vec<Destination>) -> Self {
        Self { rows }
    }

    /// All rows in load order
    pub fn rows(&self) -> &[Destination] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are loaded
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row by identifier
    pub fn get(&self, id: u32) -> Option<&Destination> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Row by name, case-insensitive
    pub fn find_by_name(&self, name: &str) -> Option<&Destination> {
        let lower = name.to_lowercase();
        self.rows.iter().find(|row| row.name.to_lowercase() == lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use travel_agent_core::Destination;

    fn row(id: u32, name: &str) -> Destination {
        Destination {
            id,
            name: name.into(),
            country: "Italy".into(),
            dest_type: "City".into(),
            budget: "Moderate".into(),
            travel_style: "food".into(),
            suitable_for: "couples".into(),
            best_time: None,
            latitude: 0.0,
            longitude: 0.0,
            description: None,
            pois: Vec::new(),
        }
    }

    #[test]
    fn test_lookup_by_name_is_case_insensitive() {
        let store = DestinationStore::from_rows(vec![row(1, "Rome"), row(2, "Milan")]);
        assert_eq!(store.find_by_name("rome").map(|d| d.id), Some(1));
        assert_eq!(store.find_by_name("MILAN").map(|d| d.id), Some(2));
        assert!(store.find_by_name("Turin").is_none());
    }

    #[test]
    fn test_lookup_by_id() {
        let store = DestinationStore::from_rows(vec![row(5, "Rome")]);
        assert!(store.get(5).is_some());
        assert!(store.get(6).is_none());
    }
}
