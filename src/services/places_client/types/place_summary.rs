use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceSummaryLocation {
    pub lat: f64,
    pub lng: f64,
}

/// Compact view of a single Places result item.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSummary {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub types: Option<Vec<String>>,
    pub location: Option<PlaceSummaryLocation>,
    pub address: Option<String>,
}

impl PlaceSummary {
    pub fn from_result(place: &Value) -> Self {
        let text = |field: &str| place.get(field).and_then(Value::as_str).map(str::to_string);

        Self {
            place_id: text("place_id"),
            name: text("name"),
            rating: place.get("rating").and_then(Value::as_f64),
            types: place
                .get("types")
                .and_then(|t| serde_json::from_value(t.clone()).ok()),
            location: place
                .get("geometry")
                .and_then(|g| g.get("location"))
                .and_then(|l| serde_json::from_value(l.clone()).ok()),
            address: text("formatted_address").or_else(|| text("vicinity")),
        }
    }

    /// Summaries for every item in the response's `results` array.
    pub fn from_response(response: &Value) -> Vec<Self> {
        response
            .get("results")
            .and_then(Value::as_array)
            .map(|results| results.iter().map(Self::from_result).collect())
            .unwrap_or_default()
    }
}
