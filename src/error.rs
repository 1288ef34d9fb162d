use thiserror::Error;

/// Failure produced when resolving the connector attachment point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConnectorError {
    /// The balloon is not attached to any display surface, so screen
    /// coordinates cannot be resolved. Hosts keep the last known
    /// connector state and retry on a later tick.
    #[error("balloon is not positioned on a display surface")]
    NotPositioned,
}
