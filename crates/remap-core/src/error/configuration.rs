use super::Error;

/// Error when a mapping is configured in a way that cannot compile.
///
/// This occurs when:
/// - An explicit override names a source member that does not exist
/// - An override targets a member that is not writable
/// - Two member types have no applicable conversion
/// - The nullable policy forbids a nullable/non-nullable pairing
///
/// These errors are raised while compiling a mapping, before any value is
/// copied. A failed compilation caches nothing, so retrying the same
/// configuration fails the same way.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid mapping configuration: {}", self.message)
    }
}

impl Error {
    /// Creates a mapping configuration error.
    pub fn configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if any error in the chain is a configuration error.
    pub fn is_configuration(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::Configuration(_)))
    }
}
