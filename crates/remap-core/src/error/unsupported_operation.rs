use super::Error;

/// Error when an accessor is requested from a member that cannot provide it:
/// a getter from a write-only member, or a setter from a read-only one.
#[derive(Debug)]
pub(super) struct UnsupportedOperationError {
    message: Box<str>,
}

impl std::error::Error for UnsupportedOperationError {}

impl core::fmt::Display for UnsupportedOperationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported operation: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported operation error.
    pub fn unsupported_operation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperation(
            UnsupportedOperationError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if any error in the chain is an unsupported operation
    /// error.
    pub fn is_unsupported_operation(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::UnsupportedOperation(_)))
    }
}
