use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure outcomes of a single [`HostBridge`](super::HostBridge) request.
pub enum HostBridgeError {
    /// The host bridge primitive is not present (for example, running outside the host).
    #[error("host bridge is not available")]
    Unavailable,
    /// The host received the request and reported a failure.
    #[error("host query failed [{code}]: {message}")]
    Failed {
        /// Host-defined numeric error code.
        code: i32,
        /// Human-readable failure message from the host.
        message: String,
    },
    /// The host answered, but the payload could not be decoded for the issued command.
    #[error("invalid host response for `{command}`: {reason}")]
    InvalidResponse {
        /// Request string the response belongs to.
        command: &'static str,
        /// Decoder error text.
        reason: String,
    },
}

impl HostBridgeError {
    /// Returns the host error code for [`HostBridgeError::Failed`] outcomes.
    pub const fn code(&self) -> Option<i32> {
        match self {
            Self::Failed { code, .. } => Some(*code),
            Self::Unavailable | Self::InvalidResponse { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_error_display_carries_code_and_message() {
        let err = HostBridgeError::Failed {
            code: -3,
            message: "window handle lost".to_string(),
        };
        assert_eq!(err.to_string(), "host query failed [-3]: window handle lost");
        assert_eq!(err.code(), Some(-3));
        assert_eq!(HostBridgeError::Unavailable.code(), None);
    }
}
