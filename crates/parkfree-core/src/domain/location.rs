//! Location Entity
//!
//! A free-parking point of interest. Immutable once created.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Opaque location identifier (assigned at creation, never reused)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub i64);

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored free-parking location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier
    pub id: LocationId,
    /// Display name
    pub name: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
    /// Free-form availability text (e.g. "Sundays only")
    pub hours: String,
}

impl Location {
    /// Attach an identity to a validated candidate
    pub fn from_new(id: LocationId, candidate: NewLocation) -> Self {
        Self {
            id,
            name: candidate.name,
            lat: candidate.lat,
            lng: candidate.lng,
            hours: candidate.hours,
        }
    }

    /// Map position as (lat, lng)
    pub fn position(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl Entity for Location {
    type Id = LocationId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A validated location that has not been given an id yet.
///
/// Also the JSON body of a remote insert, so the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub hours: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewLocation {
        NewLocation {
            name: "Free Parking - Leeds Dock".to_string(),
            lat: 53.79,
            lng: -1.53,
            hours: "Weekends".to_string(),
        }
    }

    #[test]
    fn test_location_from_new() {
        let loc = Location::from_new(LocationId(7), sample());
        assert_eq!(loc.id(), LocationId(7));
        assert_eq!(loc.name, "Free Parking - Leeds Dock");
        assert_eq!(loc.position(), (53.79, -1.53));
    }

    #[test]
    fn test_id_serializes_as_plain_integer() {
        let loc = Location::from_new(LocationId(42), sample());
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(json["id"], 42);
    }

    #[test]
    fn test_new_location_has_no_id_field() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["hours"], "Weekends");
    }
}
