//! Error classification shared by the domain modules.

use std::fmt;

/// Broad category of a failure, used for log fields and error events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A payload could not be decoded as JSON.
    MalformedPayload,
    /// A payload referenced something that does not exist (camera, actuator, button).
    InvalidReference,
    /// A backing resource (image file, encoder) could not be used.
    ResourceUnavailable,
    /// The operation is disabled in the current configuration.
    Unsupported,
    /// A background task failed in an unexpected way.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::MalformedPayload => "MALFORMED_PAYLOAD",
            ErrorKind::InvalidReference => "INVALID_REFERENCE",
            ErrorKind::ResourceUnavailable => "RESOURCE_UNAVAILABLE",
            ErrorKind::Unsupported => "UNSUPPORTED",
            ErrorKind::Internal => "INTERNAL",
        };
        write!(f, "{}", s)
    }
}
