use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing catalog {location}: {reason}")]
    MissingCatalog { location: String, reason: String },

    #[error("malformed catalog {location}")]
    MalformedCatalog {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn location(&self) -> &str {
        match self {
            LoadError::MissingCatalog { location, .. } => location,
            LoadError::MalformedCatalog { location, .. } => location,
        }
    }
}
