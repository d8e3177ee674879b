//! Coordinate Capture Bridge
//!
//! Map clicks become draft lat/lng text. Name and hours are never touched.

use crate::domain::{Draft, DraftField};

/// Decimal places written into the draft (about 1 m of precision)
pub const COORDINATE_PRECISION: usize = 5;

/// Format degrees the way a click writes them into the form
pub fn format_coordinate(degrees: f64) -> String {
    let text = format!("{:.*}", COORDINATE_PRECISION, degrees);
    // "-0.00000" reads oddly in a form field
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

/// Overwrite the draft's coordinates with a clicked position
pub fn capture_click(draft: &mut Draft, latitude: f64, longitude: f64) {
    draft.set_field(DraftField::Lat, format_coordinate(latitude));
    draft.set_field(DraftField::Lng, format_coordinate(longitude));
}
