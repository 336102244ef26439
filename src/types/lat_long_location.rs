use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLongLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLongLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for LatLongLocation {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Renders as `lat,lng`, the form the Places `location` parameter expects.
impl fmt::Display for LatLongLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
