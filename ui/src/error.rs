use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed.
    #[error("{0}")]
    Network(String),

    /// Non-2xx response. `message` is what the user gets to see.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_only_the_message() {
        let err = ApiError::Status {
            status: 400,
            message: "Duplicate URL".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate URL");
    }

    #[test]
    fn network_error_displays_cause() {
        assert_eq!(
            ApiError::Network("Failed to fetch".to_string()).to_string(),
            "Failed to fetch"
        );
    }
}
