use modgraph_core::ErrorCode;

/// Errors raised by the metrics layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// A ranking was requested for a metric name that is not recognized.
    #[error("unknown metric: '{0}'")]
    UnknownMetric(String),

    /// A community detection method name that is not recognized.
    #[error("unknown community detection method: '{0}'")]
    UnknownMethod(String),
}

impl MetricsError {
    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownMetric(_) | Self::UnknownMethod(_) => ErrorCode::UnknownMetric,
        }
    }
}
