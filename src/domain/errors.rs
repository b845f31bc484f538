//! Error taxonomy for Car construction and rule configuration

use crate::domain::car::CarField;

/// Which rule a rejected field violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Required text was empty
    EmptyField,
    /// Text length fell outside the allowed bounds
    LengthOutOfRange,
    /// Value could not be read in the expected shape
    InvalidFormat,
    /// Value was well-formed but outside the allowed range
    OutOfRange,
}

impl ViolationKind {
    /// Convert to string for display
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyField => "empty_field",
            Self::LengthOutOfRange => "length_out_of_range",
            Self::InvalidFormat => "invalid_format",
            Self::OutOfRange => "out_of_range",
        }
    }
}

/// Error types that can occur while building a Car or its rules
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarError {
    /// A required field was empty
    #[error("{field} cannot be empty")]
    EmptyField { field: CarField },

    /// A text field was shorter or longer than its rule allows
    #[error("{message}")]
    LengthOutOfRange {
        field: CarField,
        min: usize,
        max: usize,
        actual: usize,
        message: String,
    },

    /// The year was not a fixed-width integer
    #[error("invalid year")]
    InvalidFormat { field: CarField, value: String },

    /// The year parsed but lies outside the permitted range
    #[error("year if out of the valid range")]
    OutOfRange {
        field: CarField,
        value: i32,
        min: Option<i32>,
        max: i32,
    },

    /// Validation rules could not be parsed or are inconsistent
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Fuel name or ordinal does not match a known variant
    #[error("unknown fuel type: {value}")]
    UnknownFuel { value: String },
}

impl CarError {
    /// Create an empty-field error
    pub fn empty(field: CarField) -> Self {
        Self::EmptyField { field }
    }

    /// Create a length error; `advertised_max` is the bound quoted in the message
    pub fn length(
        field: CarField,
        min: usize,
        max: usize,
        actual: usize,
        advertised_max: usize,
    ) -> Self {
        let verb = match field {
            CarField::Name => "should",
            _ => "must",
        };

        Self::LengthOutOfRange {
            field,
            min,
            max,
            actual,
            message: format!("{field} {verb} be between {min} and {advertised_max} characters"),
        }
    }

    /// Create an invalid-format error
    pub fn format(field: CarField, value: impl Into<String>) -> Self {
        Self::InvalidFormat { field, value: value.into() }
    }

    /// Create an out-of-range error for a value outside `min..=max`
    pub fn out_of_range(field: CarField, value: i32, min: Option<i32>, max: i32) -> Self {
        Self::OutOfRange { field, value, min, max }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create an unknown-fuel error
    pub fn unknown_fuel(value: impl Into<String>) -> Self {
        Self::UnknownFuel { value: value.into() }
    }

    /// Field that was rejected, for validation failures
    pub fn field(&self) -> Option<CarField> {
        match self {
            Self::EmptyField { field }
            | Self::LengthOutOfRange { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::OutOfRange { field, .. } => Some(*field),
            Self::Configuration { .. } | Self::UnknownFuel { .. } => None,
        }
    }

    /// Rule that was violated, for validation failures
    pub fn kind(&self) -> Option<ViolationKind> {
        match self {
            Self::EmptyField { .. } => Some(ViolationKind::EmptyField),
            Self::LengthOutOfRange { .. } => Some(ViolationKind::LengthOutOfRange),
            Self::InvalidFormat { .. } => Some(ViolationKind::InvalidFormat),
            Self::OutOfRange { .. } => Some(ViolationKind::OutOfRange),
            Self::Configuration { .. } | Self::UnknownFuel { .. } => None,
        }
    }

    /// Whether this error came from rejecting a field value
    pub fn is_validation(&self) -> bool {
        self.kind().is_some()
    }
}

/// Result type for Car operations
pub type CarResult<T> = Result<T, CarError>;
