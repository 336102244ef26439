use std::process::ExitCode;

use places_client::{
    NearbySearchInput, PlaceDetailsInput, PlaceSummary, PlacesService, PlacesServiceConfig,
    PlacesServiceError,
};
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = PlacesServiceConfig::from_env();
    if config.api_key.is_none() {
        eprintln!("Please set GOOGLE_MAPS_API_KEY in your environment and re-run.");
        return ExitCode::FAILURE;
    }

    match run_demo(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_demo(config: PlacesServiceConfig) -> Result<(), PlacesServiceError> {
    let service = PlacesService::new(config)?;
    info!("Using Places host {}", service.config().host);

    println!("Nearby search for \"coffee\" near Seattle (lat=47.6062, lng=-122.3321) ...");
    let mut nearby = NearbySearchInput::new((47.6062, -122.3321), 20000);
    nearby.keyword = Some("coffee".to_string());

    let response = service.nearby_search(nearby).await?;
    let summaries = PlaceSummary::from_response(&response);

    for (i, place) in summaries.iter().take(20).enumerate() {
        println!(
            "{}. {} - {} - {}",
            i + 1,
            place.name.as_deref().unwrap_or("?"),
            place
                .rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| "no rating".to_string()),
            place.address.as_deref().unwrap_or("")
        );
    }

    let Some(place_id) = summaries.first().and_then(|p| p.place_id.clone()) else {
        return Ok(());
    };

    println!("\nFetching details for first result (name,formatted_address,formatted_phone_number)...");
    let mut details = PlaceDetailsInput::new(place_id);
    details.fields = ["name", "formatted_address", "formatted_phone_number", "geometry"]
        .iter()
        .map(|f| f.to_string())
        .collect();

    let response = service.place_details(details).await?;
    match response.get("result") {
        Some(result) => println!("{:#}", result),
        None => println!("No result returned"),
    }

    Ok(())
}
