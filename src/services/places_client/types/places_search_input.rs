use crate::types::lat_long_location::LatLongLocation;

use super::place_params::{ExtraParams, PlaceParams, KEY_PARAM};

pub struct TextSearchInput {
    pub query: String,
    pub api_key: Option<String>,
    pub extra_params: ExtraParams,
}

pub struct NearbySearchInput {
    pub location: LatLongLocation,
    /// Meters.
    pub radius: u32,
    pub keyword: Option<String>,
    pub api_key: Option<String>,
    pub extra_params: ExtraParams,
}

pub struct PlaceDetailsInput {
    pub place_id: String,
    /// Joined with `,` into the `fields` parameter when non-empty.
    pub fields: Vec<String>,
    pub api_key: Option<String>,
    pub extra_params: ExtraParams,
}

impl TextSearchInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            api_key: None,
            extra_params: ExtraParams::new(),
        }
    }

    pub fn to_params(&self, key: &str) -> PlaceParams {
        let mut params = PlaceParams::new();
        params.insert("query", self.query.as_str());
        params.insert(KEY_PARAM, key);
        params.merge_extra(&self.extra_params, &["query"]);
        params
    }
}

impl NearbySearchInput {
    pub fn new(location: impl Into<LatLongLocation>, radius: u32) -> Self {
        Self {
            location: location.into(),
            radius,
            keyword: None,
            api_key: None,
            extra_params: ExtraParams::new(),
        }
    }

    pub fn to_params(&self, key: &str) -> PlaceParams {
        let mut params = PlaceParams::new();
        params.insert("location", self.location.to_string());
        params.insert("radius", self.radius.to_string());
        params.insert(KEY_PARAM, key);
        if let Some(keyword) = &self.keyword {
            params.insert("keyword", keyword.as_str());
        }
        params.merge_extra(&self.extra_params, &["location", "radius"]);
        params
    }
}

impl PlaceDetailsInput {
    pub fn new(place_id: impl Into<String>) -> Self {
        Self {
            place_id: place_id.into(),
            fields: Vec::new(),
            api_key: None,
            extra_params: ExtraParams::new(),
        }
    }

    pub fn to_params(&self, key: &str) -> PlaceParams {
        let mut params = PlaceParams::new();
        params.insert("place_id", self.place_id.as_str());
        params.insert(KEY_PARAM, key);
        if !self.fields.is_empty() {
            params.insert("fields", self.fields.join(","));
        }
        params.merge_extra(&self.extra_params, &["place_id"]);
        params
    }
}
