pub type Reason = String;

/// The display string of every variant is what the user ends up seeing,
/// so server-provided messages are carried verbatim.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// rejected client-side, before any network call
    #[error("{0}")]
    Validation(Reason),
    /// no valid session
    #[error("you are not signed in")]
    Unauthorized,
    /// relationship does not exist or is not visible to the caller
    #[error("{0}")]
    NotFound(Reason),
    /// a relationship between the two users already exists
    #[error("{0}")]
    Duplicate(Reason),
    /// server rejected the request
    #[error("{0}")]
    Server(Reason),
    /// transport or connectivity failure
    #[error("network error: {0}")]
    Network(Reason),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Error::Network(err.to_string())
    }
}
