use thiserror::Error;

/// Errors raised at the host boundary.
///
/// The pricing pipeline itself never fails: missing or malformed data inside
/// a well-formed payload degrades to an empty result. These variants only
/// cover getting the payload in and the result out.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PricingError {
    /// The input payload is not valid JSON or does not match the input shape.
    #[error("invalid input payload: {0}")]
    Payload(#[source] serde_json::Error),

    /// The result could not be serialized.
    #[error("output serialization failed: {0}")]
    Output(#[source] serde_json::Error),

    /// Reading the payload or writing the result failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
