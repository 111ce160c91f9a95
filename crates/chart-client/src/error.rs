use thiserror::Error;

/// Why album-detail enrichment was skipped for a chart row. These never
/// propagate past the row: the caller logs them and the row keeps its base
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailError {
    #[error("album detail reference is missing or empty")]
    MissingReference,
    #[error("no digits in album detail reference `{0}`")]
    MissingIdentifier(String),
    #[error("album detail page fetch failed for album id `{0}`")]
    DetailFetchFailed(String),
}
