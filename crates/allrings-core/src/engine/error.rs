use crate::core::models::graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PerceptionError {
    #[error("Invalid input graph: {source}")]
    InvalidGraph {
        #[from]
        source: GraphError,
    },

    /// The live path count exceeded the configured ceiling. The run is
    /// aborted with no partial ring set; relaxing the ceiling and rerunning
    /// is a caller decision, never an internal retry.
    #[error("Ring system too complex: {live_paths} live paths exceeded the ceiling of {ceiling}")]
    RingSystemTooComplex { live_paths: usize, ceiling: usize },
}
