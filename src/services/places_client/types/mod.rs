pub mod place_params;
pub mod place_summary;
pub mod places_search_input;
pub mod places_service_error;
