use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourierError {
    #[error("Invalid tracking ID '{value}': must look like PKG12345")]
    InvalidTrackingId { value: String },

    #[error("Invalid destination '{value}': must be a street number followed by a street name")]
    InvalidDestination { value: String },

    #[error("Invalid weight {value}: must be a positive number")]
    InvalidWeight { value: f64 },

    #[error("Unknown service tier '{value}': expected Standard or Express")]
    UnknownTier { value: String },

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CourierError>;
