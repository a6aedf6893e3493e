//! JSON-over-HTTP boundary.
//!
//! A thread-per-connection server over `std::net`. Each connection carries
//! one request; the handler logic lives in [`routes::route`], which is pure
//! and tested without sockets.

use thiserror::Error;

/// Request parsing.
pub mod request;

/// Response encoding.
pub mod response;

/// Endpoint handlers.
pub mod routes;

/// Listener and connection handling.
pub mod server;

pub use request::Request;
pub use response::Response;
pub use routes::route;
pub use server::Server;

/// Failure to read a request off the wire.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Socket failure or premature end of stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Not a well-formed HTTP/1.x request.
    #[error("malformed request: {0}")]
    Malformed(String),

    /// Request line plus headers exceed the limit.
    #[error("request headers too large")]
    HeadersTooLarge,

    /// Declared body length exceeds the limit.
    #[error("request body of {0} bytes exceeds the limit")]
    BodyTooLarge(usize),

    /// A framing feature this server does not implement.
    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

impl HttpError {
    /// The status to answer with, if the connection can still be answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Io(_) => None,
            HttpError::Malformed(_) | HttpError::HeadersTooLarge => Some(400),
            HttpError::BodyTooLarge(_) => Some(413),
            HttpError::Unsupported(_) => Some(501),
        }
    }
}
