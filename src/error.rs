use thiserror::Error;

/// Top-level error type for the plover overlay engine.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors raised by malformed coordinate data.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("coordinate sequence must contain at least {min} points, got {got}")]
    TooFewCoordinates { min: usize, got: usize },

    #[error("segment index {index} is out of range for a string with {num_segments} segments")]
    SegmentIndexOutOfRange { index: usize, num_segments: usize },

    #[error("cannot compute the octant of a zero-length vector")]
    ZeroLengthVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Topology and robustness failures.
///
/// These are fatal to the current overlay call and are not retried
/// internally. Callers may re-attempt with snapped or precision-reduced
/// coordinates as a separate, higher-level strategy.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("noded edges cross without a shared node at ({x}, {y})")]
    NonNodedIntersection { x: f64, y: f64 },

    #[error("unable to assign hole to a shell at ({x}, {y})")]
    UnassignedHole { x: f64, y: f64 },

    #[error("side location conflict at ({x}, {y})")]
    SideLocationConflict { x: f64, y: f64 },

    #[error("no outgoing directed edge found at ({x}, {y})")]
    NoOutgoingEdge { x: f64, y: f64 },

    #[error("directed edge visited twice during ring building at ({x}, {y})")]
    RingVisitedTwice { x: f64, y: f64 },

    #[error("invalid topology: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`OverlayError`].
pub type Result<T> = std::result::Result<T, OverlayError>;
