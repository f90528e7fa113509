// src/error.rs
use std::fmt;

/// Message shown to the user when a price field does not hold a number.
pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input. Please enter numbers for prices.";

/// What is wrong with a single strategy parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterIssue {
    /// Text that does not parse as a finite number
    NotANumber,
    /// Must be strictly greater than zero
    NotPositive,
    /// Must be zero or greater
    Negative,
    /// Required text field left blank
    Empty,
    /// Not one of the accepted names
    Unrecognized,
}

impl ParameterIssue {
    fn describe(&self) -> &'static str {
        match self {
            ParameterIssue::NotANumber => "must be a finite number",
            ParameterIssue::NotPositive => "must be positive (> 0)",
            ParameterIssue::Negative => "must be non-negative (≥ 0)",
            ParameterIssue::Empty => "must not be empty",
            ParameterIssue::Unrecognized => "is not recognized",
        }
    }
}

/// Custom error types for the payoff-chart library
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A strategy parameter failed validation
    InvalidParameter {
        parameter: String,
        value: String,
        issue: ParameterIssue,
    },

    /// The price axis cannot be built: it spans `[0, 2 * strike]`
    DegenerateDomain { strike: f64 },

    /// The payoff axis `[-M, +M]` does not fit in an `f64`
    UnboundedPayoffAxis { total_premium: f64 },

    /// Invalid chart configuration
    InvalidConfiguration { field: String, reason: String },

    /// The drawing surface rejected a primitive
    Render { reason: String },

    /// Reading or writing an export failed
    Io { reason: String },
}

impl ChartError {
    pub fn invalid_parameter(
        parameter: impl Into<String>,
        value: impl ToString,
        issue: ParameterIssue,
    ) -> Self {
        ChartError::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
            issue,
        }
    }

    pub fn render(reason: impl ToString) -> Self {
        ChartError::Render {
            reason: reason.to_string(),
        }
    }

    /// Text suitable for an input-error dialog.
    pub fn user_message(&self) -> String {
        match self {
            ChartError::InvalidParameter {
                issue: ParameterIssue::NotANumber,
                ..
            } => INVALID_NUMBER_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// True for errors caused by what the user typed, as opposed to programmer
    /// or environment errors.
    pub fn is_input_error(&self) -> bool {
        matches!(self, ChartError::InvalidParameter { .. })
    }
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::InvalidParameter {
                parameter,
                value,
                issue,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = '{}': {}",
                    parameter,
                    value,
                    issue.describe()
                )
            }
            ChartError::DegenerateDomain { strike } => {
                write!(
                    f,
                    "Degenerate price domain: strike {} gives an empty axis [0, {}]",
                    strike,
                    2.0 * strike
                )
            }
            ChartError::UnboundedPayoffAxis { total_premium } => {
                write!(
                    f,
                    "Payoff axis overflows: total premium {} has no finite range",
                    total_premium
                )
            }
            ChartError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            ChartError::Render { reason } => write!(f, "Render error: {}", reason),
            ChartError::Io { reason } => write!(f, "I/O error: {}", reason),
        }
    }
}

impl std::error::Error for ChartError {}

impl From<std::io::Error> for ChartError {
    fn from(e: std::io::Error) -> Self {
        ChartError::Io {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        ChartError::Io {
            reason: e.to_string(),
        }
    }
}

/// Result type alias for payoff-chart operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Validation utilities
pub mod validation {
    use super::{ChartError, ChartResult, ParameterIssue};

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> ChartResult<()> {
        if !value.is_finite() {
            Err(ChartError::invalid_parameter(
                name,
                value,
                ParameterIssue::NotANumber,
            ))
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> ChartResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(ChartError::invalid_parameter(
                name,
                value,
                ParameterIssue::NotPositive,
            ))
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> ChartResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(ChartError::invalid_parameter(
                name,
                value,
                ParameterIssue::Negative,
            ))
        } else {
            Ok(())
        }
    }

    /// Validate that a text field holds something other than whitespace
    pub fn validate_non_empty(name: &str, text: &str) -> ChartResult<()> {
        if text.trim().is_empty() {
            Err(ChartError::invalid_parameter(name, text, ParameterIssue::Empty))
        } else {
            Ok(())
        }
    }

    /// Parse a price typed into a form field.
    ///
    /// Surrounding whitespace is ignored. `"NaN"` and `"inf"` parse as floats
    /// but are rejected like any other non-numeric text.
    pub fn parse_price(name: &str, text: &str) -> ChartResult<f64> {
        let value = text.trim().parse::<f64>().map_err(|_| {
            ChartError::invalid_parameter(name, text, ParameterIssue::NotANumber)
        })?;
        if !value.is_finite() {
            return Err(ChartError::invalid_parameter(
                name,
                text,
                ParameterIssue::NotANumber,
            ));
        }
        Ok(value)
    }
}
