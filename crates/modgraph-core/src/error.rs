use std::fmt;

/// Errors raised by graph model operations.
///
/// All variants are caller errors: they are reported synchronously at the
/// offending call and never retried. Idempotent operations (adding an edge
/// that already exists, removing one that does not) never produce them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex index outside `0..vertex_count`.
    #[error("vertex {vertex} is invalid: must be in 0..{vertex_count}")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    /// An edge from a vertex to itself.
    #[error("self-loops are not allowed: edge ({vertex},{vertex})")]
    InvalidEdge { vertex: usize },

    /// A weight query or update on an edge that is not present.
    #[error("edge ({from},{to}) does not exist")]
    EdgeNotFound { from: usize, to: usize },
}

impl GraphError {
    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidVertex { .. } => ErrorCode::InvalidVertex,
            Self::InvalidEdge { .. } => ErrorCode::InvalidEdge,
            Self::EdgeNotFound { .. } => ErrorCode::EdgeNotFound,
        }
    }
}

/// Stable error codes shared by every modgraph crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidVertex,
    InvalidEdge,
    EdgeNotFound,
    UnknownMetric,
}

impl ErrorCode {
    /// Stable code identifier (`G####` / `M####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidVertex => "G1001",
            Self::InvalidEdge => "G1002",
            Self::EdgeNotFound => "G1003",
            Self::UnknownMetric => "M2001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidVertex => "Vertex index out of range",
            Self::InvalidEdge => "Self-loop not allowed",
            Self::EdgeNotFound => "Edge not found",
            Self::UnknownMetric => "Unknown metric name",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::InvalidVertex => Some("Vertex indices are 0-based and below the vertex count."),
            Self::InvalidEdge => None,
            Self::EdgeNotFound => Some("Add the edge before reading or setting its weight."),
            Self::UnknownMetric => Some(
                "Use one of: degree_in, degree_out, degree_total, betweenness, closeness, pagerank, eigenvector, bridging.",
            ),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
