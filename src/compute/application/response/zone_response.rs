use crate::core::domain::model::location::Location;
use serde::Deserialize;

/// Answer of `GET /zone`.
#[derive(Debug, Clone, Deserialize)]
pub struct ZonesResponse {
    pub zones: ZoneList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneList {
    pub zone: Vec<Zone>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Zone {
    pub id: String,
    pub description: String,
}

impl From<Zone> for Location {
    fn from(zone: Zone) -> Self {
        Location::from_zone(zone.id, zone.description)
    }
}

impl ZonesResponse {
    pub fn into_locations(self) -> Vec<Location> {
        self.zones.zone.into_iter().map(Location::from).collect()
    }
}
