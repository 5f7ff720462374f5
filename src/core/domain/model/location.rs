//! Domain model for locations (UpCloud zones).

use serde::{Deserialize, Serialize};

/// Provider tag attached to every domain object produced by this crate.
pub const PROVIDER_NAME: &str = "upcloud";

/// A data-center location nodes can be placed in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Location {
    /// Zone code (e.g., "fi-hel1").
    pub id: String,
    /// Human-readable zone description (e.g., "Helsinki #1").
    pub name: String,
    /// ISO country code derived from the zone code (e.g., "FI").
    pub country: String,
    /// Provider tag, always [`PROVIDER_NAME`].
    pub provider: String,
}

impl Location {
    /// Creates a location from a zone code and its description.
    ///
    /// The country is derived from the zone code.
    pub fn from_zone(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        let country = country_from_zone(&id);
        Self {
            id,
            name: name.into(),
            country,
            provider: PROVIDER_NAME.to_string(),
        }
    }
}

/// Zone codes look like `<country>-<city><n>`; the country is everything
/// before the first hyphen, upper-cased.
pub(crate) fn country_from_zone(zone_id: &str) -> String {
    zone_id
        .split('-')
        .next()
        .unwrap_or_default()
        .to_uppercase()
}
