//! Draft Validation
//!
//! The only place a draft is judged. Runs before any store or network call.

use crate::domain::{Draft, DraftField, NewLocation, ValidationError};

const LAT_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
const LNG_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Turn a draft into a candidate, or say which field is wrong.
///
/// Blank fields are reported first (in form order), then numbers.
pub fn validate(draft: &Draft) -> Result<NewLocation, ValidationError> {
    if let Some(field) = DraftField::ALL.into_iter().find(|f| draft.field(*f).trim().is_empty()) {
        return Err(ValidationError::MissingField(field));
    }

    let lat = parse_degrees(&draft.lat, DraftField::Lat, LAT_RANGE)?;
    let lng = parse_degrees(&draft.lng, DraftField::Lng, LNG_RANGE)?;

    Ok(NewLocation {
        name: draft.name.clone(),
        lat,
        lng,
        hours: draft.hours.clone(),
    })
}

fn parse_degrees(
    raw: &str,
    field: DraftField,
    range: std::ops::RangeInclusive<f64>,
) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(field))?;

    // "inf" and "NaN" parse fine but are not coordinates
    if !value.is_finite() {
        return Err(ValidationError::InvalidNumber(field));
    }
    if !range.contains(&value) {
        return Err(ValidationError::OutOfRange(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, lat: &str, lng: &str, hours: &str) -> Draft {
        Draft {
            name: name.to_string(),
            lat: lat.to_string(),
            lng: lng.to_string(),
            hours: hours.to_string(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let candidate = validate(&draft("Clifton Down", "51.4642", "-2.6107", "Sundays")).unwrap();
        assert_eq!(candidate.name, "Clifton Down");
        assert_eq!(candidate.lat, 51.4642);
        assert_eq!(candidate.lng, -2.6107);
        assert_eq!(candidate.hours, "Sundays");
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        for field in DraftField::ALL {
            let mut d = draft("Clifton Down", "51.4642", "-2.6107", "Sundays");
            d.set_field(field, "");
            assert_eq!(validate(&d), Err(ValidationError::MissingField(field)));
        }
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let d = draft("   ", "51.0", "-2.0", "Sundays");
        assert_eq!(validate(&d), Err(ValidationError::MissingField(DraftField::Name)));
    }

    #[test]
    fn test_unparseable_numbers() {
        let d = draft("A", "north", "-2.0", "B");
        assert_eq!(validate(&d), Err(ValidationError::InvalidNumber(DraftField::Lat)));

        let d = draft("A", "51.0", "2.0.1", "B");
        assert_eq!(validate(&d), Err(ValidationError::InvalidNumber(DraftField::Lng)));

        let d = draft("A", "NaN", "-2.0", "B");
        assert_eq!(validate(&d), Err(ValidationError::InvalidNumber(DraftField::Lat)));

        let d = draft("A", "51.0", "inf", "B");
        assert_eq!(validate(&d), Err(ValidationError::InvalidNumber(DraftField::Lng)));
    }

    #[test]
    fn test_out_of_range() {
        let d = draft("A", "90.5", "0", "B");
        assert_eq!(validate(&d), Err(ValidationError::OutOfRange(DraftField::Lat)));

        let d = draft("A", "-90", "180.01", "B");
        assert_eq!(validate(&d), Err(ValidationError::OutOfRange(DraftField::Lng)));
    }

    #[test]
    fn test_text_fields_kept_as_typed() {
        let candidate = validate(&draft(" Quay ", " 51.45 ", "-2.59 ", "Evenings ")).unwrap();
        assert_eq!(candidate.name, " Quay ");
        assert_eq!(candidate.lat, 51.45);
        assert_eq!(candidate.lng, -2.59);
        assert_eq!(candidate.hours, "Evenings ");
    }
}
