/// Aggregator errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("aggregator.transport")]
    Transport(String),
    #[error("aggregator.invalid_response")]
    InvalidResponse(String),
    #[error("aggregator.unavailable")]
    Unavailable,
}
