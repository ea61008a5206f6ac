//! Error taxonomy shared by every layer.
//!
//! Errors surface to the request boundary unchanged; nothing in between
//! catches or retries them.

use crate::types::ResourceId;

/// Errors raised by targeting, scheduling and attack execution.
#[derive(Debug, thiserror::Error)]
pub enum IonError {
    /// Raw scan input is missing a required field or holds a bad value.
    #[error("invalid scan data: {0}")]
    InvalidScanData(String),

    /// No scan point survived the protocol filters.
    #[error("no target available for the requested protocols")]
    NoTargetAvailable,

    /// Every cannon is cooling down.
    #[error("no ion cannons available")]
    NoResourceAvailable,

    /// The cannon id is not in the catalog.
    #[error("cannon not found: {0}")]
    ResourceNotFound(ResourceId),

    /// A specific cannon was requested but is cooling down.
    #[error("cannon {0} is cooling down")]
    ResourceUnavailable(ResourceId),

    /// The fire action collaborator failed. The cannon stays reserved.
    #[error("firing cannon {cannon_id} failed: {source}")]
    FireActionFailed {
        cannon_id: ResourceId,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The cannon catalog failed validation.
    #[error("invalid cannon catalog: {0}")]
    InvalidCatalog(String),
}

impl IonError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, IonError::ResourceNotFound(_))
    }
}
