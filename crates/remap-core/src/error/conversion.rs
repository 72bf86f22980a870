use super::Error;
use crate::value::Value;

/// Error when a runtime value cannot be converted to the expected type.
///
/// Conversion rules are built for a member's declared type, not its runtime
/// value, so a rule that compiled successfully can still fail here on a
/// specific value (an enum name that does not parse, a numeric cast that
/// overflows).
#[derive(Debug)]
pub(super) struct ConversionError {
    value: Value,
    to_type: Box<str>,
}

impl std::error::Error for ConversionError {}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {:?} to {}", self.value, self.to_type)
    }
}

impl Error {
    /// Creates a conversion error for a value that could not be converted.
    pub fn conversion(value: Value, to_type: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Conversion(ConversionError {
            value,
            to_type: to_type.into().into(),
        }))
    }

    /// Returns `true` if any error in the chain is a conversion error.
    pub fn is_conversion(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::Conversion(_)))
    }
}
