pub mod services;
pub mod types;

pub use services::places_client::{
    places_service::{PlacesService, PlacesServiceConfig},
    types::{
        place_params::{ExtraParams, PlaceParams},
        place_summary::PlaceSummary,
        places_search_input::{NearbySearchInput, PlaceDetailsInput, TextSearchInput},
        places_service_error::PlacesServiceError,
    },
};
pub use types::lat_long_location::LatLongLocation;
