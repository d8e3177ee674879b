//! Draft Form State
//!
//! Raw text for the location currently being entered. Lat/lng stay as
//! strings so half-typed numbers ("53.", "-") survive until submit.

use serde::{Deserialize, Serialize};

/// One of the four editable draft fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Name,
    Lat,
    Lng,
    Hours,
}

impl DraftField {
    /// All fields, in form order
    pub const ALL: [DraftField; 4] = [DraftField::Name, DraftField::Lat, DraftField::Lng, DraftField::Hours];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Lat => "lat",
            DraftField::Lng => "lng",
            DraftField::Hours => "hours",
        }
    }

    /// Human label for form inputs and messages
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Lat => "Latitude",
            DraftField::Lng => "Longitude",
            DraftField::Hours => "Hours",
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// In-progress location submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub lat: String,
    pub lng: String,
    pub hours: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field's raw text; the other three are left alone.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Lat => &self.lat,
            DraftField::Lng => &self.lng,
            DraftField::Hours => &self.hours,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Lat => &mut self.lat,
            DraftField::Lng => &mut self.lng,
            DraftField::Hours => &mut self.hours,
        }
    }

    /// Clear all four fields
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.field(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_leaves_others() {
        let mut draft = Draft::new();
        draft.set_field(DraftField::Name, "Harbourside");
        draft.set_field(DraftField::Hours, "Evenings");
        draft.set_field(DraftField::Lat, "51.4");

        assert_eq!(draft.name, "Harbourside");
        assert_eq!(draft.lat, "51.4");
        assert_eq!(draft.lng, "");
        assert_eq!(draft.hours, "Evenings");
    }

    #[test]
    fn test_partial_numeric_input_is_kept() {
        let mut draft = Draft::new();
        draft.set_field(DraftField::Lat, "-");
        draft.set_field(DraftField::Lng, "2.");
        assert_eq!(draft.field(DraftField::Lat), "-");
        assert_eq!(draft.field(DraftField::Lng), "2.");
    }

    #[test]
    fn test_reset() {
        let mut draft = Draft::new();
        for field in DraftField::ALL {
            draft.set_field(field, "x");
        }
        assert!(!draft.is_empty());
        draft.reset();
        assert!(draft.is_empty());
        assert_eq!(draft, Draft::default());
    }
}
