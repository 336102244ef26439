use serde_json::Value;

#[derive(Debug)]
pub enum PlacesServiceError {
    /// No API key could be resolved. Raised before any request is sent.
    Configuration(String),
    /// The request never produced a response (connect, DNS, timeout, body read).
    Transport(String),
    /// The service answered but reported a failure.
    Upstream { status: u16, body: Value },
}

impl std::fmt::Display for PlacesServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PlacesServiceError::Configuration(e) => write!(f, "Configuration error: {}", e),
            PlacesServiceError::Transport(e) => write!(f, "Transport error: {}", e),
            PlacesServiceError::Upstream { status, body } => {
                write!(f, "Upstream error: status {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for PlacesServiceError {}
