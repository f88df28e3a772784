use thiserror::Error;

/// Errors surfaced by the configurable normalization entry point.
///
/// The default-config path never fails; this only exists for callers that
/// supply their own [`NormalizeConfig`](crate::NormalizeConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Configuration failed validation (version 0 is reserved).
    #[error("invalid normalize config: {0}")]
    InvalidConfig(String),
}
