use thiserror::Error;

/// Errors raised while building an investment entry.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvestmentError {
    #[error("Please complete all fields")]
    IncompleteFields,

    #[error("Please enter valid numeric values")]
    InvalidNumber,

    #[error("Values must be greater than zero")]
    NonPositive,

    #[error("Please enter a valid date")]
    InvalidDate,

    /// The price service failed; the payload keeps the underlying cause for logs.
    #[error("Error getting ETH price. Enter it manually.")]
    PriceFetch(String),
}
