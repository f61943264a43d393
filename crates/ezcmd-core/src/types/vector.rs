//! Vector string grammar
//!
//! Vectors are written either as `X:Y:Z` or as a GPS waypoint
//! `GPS:<name>:X:Y:Z:<color>:`. Only the coordinates are kept; the name,
//! color and trailing colon are informational.

use glam::DVec3;

const GPS_TAG: &str = "GPS";

/// Parse a vector from its string form, returning `None` if the text does
/// not follow either grammar.
pub fn parse_vector(text: &str) -> Option<DVec3> {
    let fields: Vec<&str> = text.trim().split(':').collect();

    // Coordinates are positional: 3rd-5th field when GPS tagged, else 1st-3rd
    let offset = if fields.first().map(|f| f.trim()) == Some(GPS_TAG) {
        2
    } else {
        0
    };

    let coordinates = fields.get(offset..offset + 3)?;
    let x = coordinates[0].trim().parse::<f64>().ok()?;
    let y = coordinates[1].trim().parse::<f64>().ok()?;
    let z = coordinates[2].trim().parse::<f64>().ok()?;

    Some(DVec3::new(x, y, z))
}

/// Render a vector in the `X:Y:Z` form accepted by [`parse_vector`]
pub fn format_vector(vector: DVec3) -> String {
    format!("{}:{}:{}", vector.x, vector.y, vector.z)
}
