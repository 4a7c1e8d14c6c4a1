use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Failures a provider operation can surface to the host.
///
/// Everything else — empty input, selectors matching nothing, malformed
/// date segments — degrades into empty or default result fields instead
/// of erroring, so the host's orchestration loop only ever has to handle
/// transport problems and cancellation.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("operation cancelled")]
    Cancelled,
}

impl ProviderError {
    /// True when the failure came from the cancellation token rather
    /// than the network.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ProviderError::Cancelled)
    }
}
