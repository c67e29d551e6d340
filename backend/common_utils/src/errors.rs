//! Errors shared by the utility types.

/// Result whose error side is an `error_stack::Report`.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    #[error("Failed to parse email")]
    EmailParsingError,
    #[error("Amount {0} is negative")]
    NegativeAmount(i64),
}

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: String },
    #[error("{message}")]
    InvalidValue { message: String },
}
