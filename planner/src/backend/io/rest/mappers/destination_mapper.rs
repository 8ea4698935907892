use shared::{
    Accommodation, AccommodationRequest, CreateDestinationRequest, Destination, DestinationListResponse,
    DestinationResponse, Flight, FlightRequest, RemoveDestinationResponse, UpdateDestinationRequest,
};

use crate::backend::domain::commands::destination::{
    CreateDestinationCommand, DestinationListResult, DestinationResult, RemoveDestinationResult,
    UpdateDestinationCommand,
};
use crate::backend::domain::commands::options::{AccommodationCommand, FlightCommand};
use crate::backend::domain::models::dates::format_optional_date;
use crate::backend::domain::models::destination::{
    Accommodation as DomainAccommodation, Destination as DomainDestination, Flight as DomainFlight,
};

pub struct DestinationMapper;

impl DestinationMapper {
    /// Convert domain Flight to shared Flight DTO
    pub fn flight_to_dto(domain: DomainFlight) -> Flight {
        Flight {
            id: domain.id,
            link: domain.link,
            description: domain.description,
            start_date: format_optional_date(domain.start_date),
            end_date: format_optional_date(domain.end_date),
            price_per_person: domain.price_per_person,
        }
    }

    /// Convert domain Accommodation to shared Accommodation DTO
    pub fn accommodation_to_dto(domain: DomainAccommodation) -> Accommodation {
        Accommodation {
            id: domain.id,
            link: domain.link,
            description: domain.description,
            total_price: domain.total_price,
            start_date: format_optional_date(domain.start_date),
            end_date: format_optional_date(domain.end_date),
        }
    }

    /// Convert domain Destination to shared Destination DTO
    pub fn to_dto(domain: DomainDestination) -> Destination {
        Destination {
            id: domain.id,
            name: domain.name,
            latitude: domain.latitude,
            longitude: domain.longitude,
            flights: domain.flights.into_iter().map(Self::flight_to_dto).collect(),
            accommodations: domain
                .accommodations
                .into_iter()
                .map(Self::accommodation_to_dto)
                .collect(),
        }
    }

    pub fn to_list_response(result: DestinationListResult) -> DestinationListResponse {
        DestinationListResponse {
            destinations: result.destinations.into_iter().map(Self::to_dto).collect(),
            active_destination_id: result.active_destination_id,
        }
    }

    pub fn to_create_command(request: CreateDestinationRequest) -> CreateDestinationCommand {
        CreateDestinationCommand {
            name: request.name,
            latitude: request.latitude,
            longitude: request.longitude,
        }
    }

    pub fn to_update_command(destination_id: String, request: UpdateDestinationRequest) -> UpdateDestinationCommand {
        UpdateDestinationCommand {
            destination_id,
            name: request.name,
            latitude: request.latitude,
            longitude: request.longitude,
        }
    }

    pub fn to_flight_command(destination_id: String, request: FlightRequest) -> FlightCommand {
        FlightCommand {
            destination_id,
            link: request.link,
            description: request.description,
            start_date: request.start_date,
            end_date: request.end_date,
            price_per_person: request.price_per_person,
        }
    }

    pub fn to_accommodation_command(destination_id: String, request: AccommodationRequest) -> AccommodationCommand {
        AccommodationCommand {
            destination_id,
            link: request.link,
            description: request.description,
            total_price: request.total_price,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }

    pub fn to_destination_response(result: DestinationResult, success_message: &str) -> DestinationResponse {
        DestinationResponse {
            destination: Self::to_dto(result.destination),
            active_destination_id: result.active_destination_id,
            persisted: result.persisted,
            success_message: success_message.to_string(),
        }
    }

    pub fn to_remove_response(result: RemoveDestinationResult) -> RemoveDestinationResponse {
        RemoveDestinationResponse {
            removed_id: result.removed_id,
            active_destination_id: result.active_destination_id,
            persisted: result.persisted,
        }
    }
}
