use anyhow::Result;
use tracing::info;

use crate::backend::domain::destination_service::DestinationService;
use crate::backend::domain::destination_store::DestinationError;
use crate::backend::domain::models::destination::Destination;
use crate::backend::domain::models::route::{HomeBase, Route};

/// Straight-line route from the home base to a destination
#[derive(Clone)]
pub struct RouteService {
    home_base: HomeBase,
    destination_service: DestinationService,
}

impl RouteService {
    pub fn new(home_base: HomeBase, destination_service: DestinationService) -> Self {
        Self {
            home_base,
            destination_service,
        }
    }

    pub fn route_for(&self, destination: &Destination) -> Route {
        let destination_coordinates = destination.coordinates();
        Route {
            origin_name: self.home_base.name.clone(),
            origin: self.home_base.coordinates,
            destination_name: destination.name.clone(),
            destination: destination_coordinates,
            distance_km: self.home_base.coordinates.distance_km(&destination_coordinates),
        }
    }

    pub async fn route_to(&self, destination_id: &str) -> Result<Route> {
        let destination = self
            .destination_service
            .get_destination(destination_id)
            .await
            .ok_or_else(|| DestinationError::NotFound(destination_id.to_string()))?;

        let route = self.route_for(&destination);
        info!(
            "Route {} -> {}: {:.0} km",
            route.origin_name, route.destination_name, route.distance_km
        );
        Ok(route)
    }
}
