use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Great-circle distance using the haversine formula
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

/// Where every trip starts from
#[derive(Debug, Clone, PartialEq)]
pub struct HomeBase {
    pub name: String,
    pub coordinates: Coordinates,
}

impl Default for HomeBase {
    fn default() -> Self {
        Self {
            name: "Dublin".to_string(),
            coordinates: Coordinates {
                latitude: 53.3498,
                longitude: -6.2603,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub origin_name: String,
    pub origin: Coordinates,
    pub destination_name: String,
    pub destination: Coordinates,
    pub distance_km: f64,
}
